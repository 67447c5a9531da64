//! Airport endpoints.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::client::AeroApiClient;
use crate::pagination::PageParams;
use crate::query::{Query, ToQuery};

const ENDPOINT: &str = "airports";

/// Wrapper for `/airports`.
#[derive(Debug, Clone, Copy)]
pub struct Airports<'a> {
    client: &'a AeroApiClient,
}

/// Filters for the airport flight boards (all, arrivals, departures,
/// scheduled arrivals and scheduled departures).
#[derive(Debug, Clone, Default)]
pub struct AirportFlightsQuery {
    /// Operator ICAO/IATA code.
    pub airline: Option<String>,
    /// `General_Aviation` or `Airline`.
    pub flight_type: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub page: PageParams,
}

impl ToQuery for AirportFlightsQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .set_opt("airline", self.airline.as_deref())
            .set_opt("type", self.flight_type.as_deref())
            .set_time("start", self.start.as_ref())
            .set_time("end", self.end.as_ref())
            .extend(self.page.to_query())
    }
}

/// Options for nearby airport lookups.
#[derive(Debug, Clone)]
pub struct NearbyQuery {
    /// Search radius in statute miles.
    pub radius: u32,
    /// Only return airports with instrument approaches.
    pub only_iap: bool,
    pub page: PageParams,
}

impl NearbyQuery {
    pub fn new(radius: u32) -> Self {
        Self {
            radius,
            only_iap: false,
            page: PageParams::default(),
        }
    }
}

impl ToQuery for NearbyQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .set("radius", self.radius)
            .set("only_iap", self.only_iap)
            .extend(self.page.to_query())
    }
}

/// Options for flights between two airports.
#[derive(Debug, Clone, Default)]
pub struct RouteQuery {
    pub flight_type: Option<String>,
    /// `nonstop` or `onestop`.
    pub connection: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub page: PageParams,
}

impl ToQuery for RouteQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .set_opt("type", self.flight_type.as_deref())
            .set_opt("connection", self.connection.as_deref())
            .set_time("start", self.start.as_ref())
            .set_time("end", self.end.as_ref())
            .extend(self.page.to_query())
    }
}

/// Options for the weather forecast.
#[derive(Debug, Clone, Default)]
pub struct ForecastQuery {
    pub timestamp: Option<DateTime<Utc>>,
    pub return_nearby_weather: bool,
}

impl ToQuery for ForecastQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .set_time("timestamp", self.timestamp.as_ref())
            .set("return_nearby_weather", self.return_nearby_weather)
    }
}

/// Options for weather observations.
#[derive(Debug, Clone)]
pub struct ObservationsQuery {
    /// `Celsius` or `Fahrenheit`.
    pub temperature_units: String,
    pub return_nearby_weather: bool,
    pub timestamp: Option<DateTime<Utc>>,
    pub page: PageParams,
}

impl Default for ObservationsQuery {
    fn default() -> Self {
        Self {
            temperature_units: "Celsius".to_string(),
            return_nearby_weather: false,
            timestamp: None,
            page: PageParams::default(),
        }
    }
}

impl ToQuery for ObservationsQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .set("temperature_units", &self.temperature_units)
            .set("return_nearby_weather", self.return_nearby_weather)
            .set_time("timestamp", self.timestamp.as_ref())
            .extend(self.page.to_query())
    }
}

impl<'a> Airports<'a> {
    pub fn new(client: &'a AeroApiClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, sub_path: Option<&str>, query: Option<&Query>) -> Option<Value> {
        let path = self.client.build_path(ENDPOINT, sub_path, query);
        self.client.get(&path).await
    }

    /// List all airports.
    pub async fn list(&self, page: &PageParams) -> Option<Value> {
        self.fetch(None, Some(&page.to_query())).await
    }

    /// Static information about one airport.
    pub async fn get(&self, airport_id: &str) -> Option<Value> {
        self.fetch(Some(airport_id), None).await
    }

    /// Resolve an airport code to its canonical form.
    ///
    /// `id_type` is `ICAO`, `IATA` or `LID`.
    pub async fn canonical(&self, airport_id: &str, id_type: Option<&str>) -> Option<Value> {
        let query = Query::new().set_opt("id_type", id_type);
        self.fetch(Some(&format!("{airport_id}/canonical")), Some(&query))
            .await
    }

    /// Airports currently reporting delays.
    pub async fn delays(&self, page: &PageParams) -> Option<Value> {
        self.fetch(Some("delays"), Some(&page.to_query())).await
    }

    /// All recent and upcoming flights at an airport.
    pub async fn flights(&self, airport_id: &str, query: &AirportFlightsQuery) -> Option<Value> {
        self.board(airport_id, "flights", query).await
    }

    /// Flight counts for an airport.
    pub async fn flight_counts(&self, airport_id: &str) -> Option<Value> {
        self.fetch(Some(&format!("{airport_id}/flights/counts")), None)
            .await
    }

    pub async fn arrivals(&self, airport_id: &str, query: &AirportFlightsQuery) -> Option<Value> {
        self.board(airport_id, "flights/arrivals", query).await
    }

    pub async fn departures(&self, airport_id: &str, query: &AirportFlightsQuery) -> Option<Value> {
        self.board(airport_id, "flights/departures", query).await
    }

    pub async fn scheduled_arrivals(
        &self,
        airport_id: &str,
        query: &AirportFlightsQuery,
    ) -> Option<Value> {
        self.board(airport_id, "flights/scheduled_arrivals", query)
            .await
    }

    pub async fn scheduled_departures(
        &self,
        airport_id: &str,
        query: &AirportFlightsQuery,
    ) -> Option<Value> {
        self.board(airport_id, "flights/scheduled_departures", query)
            .await
    }

    async fn board(&self, airport_id: &str, board: &str, query: &AirportFlightsQuery) -> Option<Value> {
        self.fetch(Some(&format!("{airport_id}/{board}")), Some(&query.to_query()))
            .await
    }

    /// Airports within a radius of the given airport.
    pub async fn nearby(&self, airport_id: &str, query: &NearbyQuery) -> Option<Value> {
        self.fetch(Some(&format!("{airport_id}/nearby")), Some(&query.to_query()))
            .await
    }

    /// Flights from `origin_id` to `dest_id`.
    pub async fn flights_between(
        &self,
        origin_id: &str,
        dest_id: &str,
        query: &RouteQuery,
    ) -> Option<Value> {
        self.fetch(
            Some(&format!("{origin_id}/flights/to/{dest_id}")),
            Some(&query.to_query()),
        )
        .await
    }

    /// Weather forecast (TAF) for an airport.
    pub async fn weather_forecast(&self, airport_id: &str, query: &ForecastQuery) -> Option<Value> {
        self.fetch(
            Some(&format!("{airport_id}/weather/forecast")),
            Some(&query.to_query()),
        )
        .await
    }

    /// Weather observations (METAR) for an airport.
    pub async fn weather_observations(
        &self,
        airport_id: &str,
        query: &ObservationsQuery,
    ) -> Option<Value> {
        self.fetch(
            Some(&format!("{airport_id}/weather/observations")),
            Some(&query.to_query()),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_board_query_order_and_omission() {
        let query = AirportFlightsQuery {
            airline: Some("UAL".to_string()),
            start: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        };
        assert_eq!(
            query.to_query().encode().as_deref(),
            Some("airline=UAL&start=2024-01-01T00%3A00%3A00Z&max_pages=1")
        );
    }

    #[test]
    fn test_nearby_defaults() {
        assert_eq!(
            NearbyQuery::new(25).to_query().encode().as_deref(),
            Some("radius=25&only_iap=false&max_pages=1")
        );
    }

    #[test]
    fn test_observations_defaults() {
        assert_eq!(
            ObservationsQuery::default().to_query().encode().as_deref(),
            Some("temperature_units=Celsius&return_nearby_weather=false&max_pages=1")
        );
    }
}
