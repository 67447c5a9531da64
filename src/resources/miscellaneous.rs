//! Aircraft, disruption and schedule endpoints.

use serde_json::Value;

use crate::client::AeroApiClient;
use crate::pagination::PageParams;
use crate::query::{Query, ToQuery};

/// Default period for disruption statistics.
pub const DEFAULT_TIME_PERIOD: &str = "today";

/// Wrapper for endpoints outside the other resource groups.
#[derive(Debug, Clone, Copy)]
pub struct Miscellaneous<'a> {
    client: &'a AeroApiClient,
}

/// Filters for scheduled flights.
#[derive(Debug, Clone)]
pub struct ScheduleQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub airline: Option<String>,
    pub flight_number: Option<String>,
    pub include_codeshares: bool,
    pub include_regional: bool,
    pub page: PageParams,
}

impl Default for ScheduleQuery {
    fn default() -> Self {
        Self {
            origin: None,
            destination: None,
            airline: None,
            flight_number: None,
            include_codeshares: true,
            include_regional: true,
            page: PageParams::default(),
        }
    }
}

impl ToQuery for ScheduleQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .set_opt("origin", self.origin.as_deref())
            .set_opt("destination", self.destination.as_deref())
            .set_opt("airline", self.airline.as_deref())
            .set_opt("flight_number", self.flight_number.as_deref())
            .set("include_codeshares", self.include_codeshares)
            .set("include_regional", self.include_regional)
            .extend(self.page.to_query())
    }
}

impl<'a> Miscellaneous<'a> {
    pub fn new(client: &'a AeroApiClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, endpoint: &str, sub_path: &str, query: Option<&Query>) -> Option<Value> {
        let path = self.client.build_path(endpoint, Some(sub_path), query);
        self.client.get(&path).await
    }

    /// Registered owner of an aircraft.
    pub async fn aircraft_owner(&self, ident: &str) -> Option<Value> {
        self.fetch("aircraft", &format!("{ident}/owner"), None).await
    }

    /// Information about an aircraft type (ICAO type code).
    pub async fn aircraft_type(&self, aircraft_type: &str) -> Option<Value> {
        self.fetch("aircraft", &format!("types/{aircraft_type}"), None)
            .await
    }

    /// Cancellation and delay counts across every entity of a kind.
    ///
    /// `entity_type` is `airline` or `origin`; `time_period` is one of
    /// `yesterday`, `today` or `tomorrow`.
    pub async fn global_disruption_counts(
        &self,
        entity_type: &str,
        time_period: &str,
        page: &PageParams,
    ) -> Option<Value> {
        let query = Query::new()
            .set("time_period", time_period)
            .extend(page.to_query());
        self.fetch("disruption_counts", entity_type, Some(&query))
            .await
    }

    /// Cancellation and delay counts for a single airline or airport.
    pub async fn disruption_counts(
        &self,
        entity_type: &str,
        entity_id: &str,
        time_period: &str,
    ) -> Option<Value> {
        let query = Query::new().set("time_period", time_period);
        self.fetch(
            "disruption_counts",
            &format!("{entity_type}/{entity_id}"),
            Some(&query),
        )
        .await
    }

    /// Scheduled flights between two dates (`YYYY-MM-DD` or ISO 8601).
    pub async fn scheduled_flights(
        &self,
        date_start: &str,
        date_end: &str,
        query: &ScheduleQuery,
    ) -> Option<Value> {
        self.fetch(
            "schedules",
            &format!("{date_start}/{date_end}"),
            Some(&query.to_query()),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_defaults_include_codeshares_and_regional() {
        assert_eq!(
            ScheduleQuery::default().to_query().encode().as_deref(),
            Some("include_codeshares=true&include_regional=true&max_pages=1")
        );
    }
}
