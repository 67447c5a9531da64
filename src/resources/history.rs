//! Historical flight endpoints.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::client::AeroApiClient;
use crate::pagination::PageParams;
use crate::query::{Query, ToQuery};

const ENDPOINT: &str = "history";

/// Wrapper for `/history`.
#[derive(Debug, Clone, Copy)]
pub struct History<'a> {
    client: &'a AeroApiClient,
}

/// Rendering options for a flight track map.
#[derive(Debug, Clone)]
pub struct MapQuery {
    pub height: u32,
    pub width: u32,
    pub layer_on: Option<String>,
    pub layer_off: Option<String>,
    pub show_data_block: Option<bool>,
    pub airports_expand_view: Option<bool>,
    pub show_airports: Option<bool>,
    /// `"N E S W"` bounds in degrees.
    pub bounding_box: Option<String>,
}

impl Default for MapQuery {
    fn default() -> Self {
        Self {
            height: 480,
            width: 640,
            layer_on: None,
            layer_off: None,
            show_data_block: None,
            airports_expand_view: None,
            show_airports: None,
            bounding_box: None,
        }
    }
}

impl ToQuery for MapQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .set("height", self.height)
            .set("width", self.width)
            .set_opt("layer_on", self.layer_on.as_deref())
            .set_opt("layer_off", self.layer_off.as_deref())
            .set_opt("show_data_block", self.show_data_block)
            .set_opt("airports_expand_view", self.airports_expand_view)
            .set_opt("show_airports", self.show_airports)
            .set_opt("bounding_box", self.bounding_box.as_deref())
    }
}

/// Filters for historical flight lookups by ident.
#[derive(Debug, Clone, Default)]
pub struct FlightInfoQuery {
    /// `designator`, `registration` or `fa_flight_id`.
    pub ident_type: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub page: PageParams,
}

impl ToQuery for FlightInfoQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .set_opt("ident_type", self.ident_type.as_deref())
            .set_time("start", self.start.as_ref())
            .set_time("end", self.end.as_ref())
            .extend(self.page.to_query())
    }
}

impl<'a> History<'a> {
    pub fn new(client: &'a AeroApiClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, sub_path: &str, query: Option<&Query>) -> Option<Value> {
        let path = self.client.build_path(ENDPOINT, Some(sub_path), query);
        self.client.get(&path).await
    }

    /// Map image of a past flight.
    pub async fn flight_map(&self, flight_id: &str, query: &MapQuery) -> Option<Value> {
        self.fetch(&format!("flights/{flight_id}/map"), Some(&query.to_query()))
            .await
    }

    /// Filed route of a past flight.
    pub async fn flight_route(&self, flight_id: &str) -> Option<Value> {
        self.fetch(&format!("flights/{flight_id}/route"), None).await
    }

    /// Track positions of a past flight.
    pub async fn flight_track(
        &self,
        flight_id: &str,
        include_estimated_positions: Option<bool>,
    ) -> Option<Value> {
        let query =
            Query::new().set_opt("include_estimated_positions", include_estimated_positions);
        self.fetch(&format!("flights/{flight_id}/track"), Some(&query))
            .await
    }

    /// Last known flight of an aircraft.
    pub async fn last_flight(&self, registration: &str) -> Option<Value> {
        self.fetch(&format!("aircraft/{registration}/last_flight"), None)
            .await
    }

    /// Past flights for an ident.
    pub async fn flight_info(&self, ident: &str, query: &FlightInfoQuery) -> Option<Value> {
        self.fetch(&format!("flights/{ident}"), Some(&query.to_query()))
            .await
    }
}
