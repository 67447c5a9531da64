//! Flight endpoints.

use serde_json::Value;

use crate::client::AeroApiClient;
use crate::query::Query;
use crate::search::SearchQuery;

const ENDPOINT: &str = "flights";

/// Wrapper for `/flights`.
#[derive(Debug, Clone, Copy)]
pub struct Flights<'a> {
    client: &'a AeroApiClient,
}

impl<'a> Flights<'a> {
    pub fn new(client: &'a AeroApiClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, sub_path: &str, query: Option<&Query>) -> Option<Value> {
        let path = self.client.build_path(ENDPOINT, Some(sub_path), query);
        self.client.get(&path).await
    }

    /// Flights matching an ident or `fa_flight_id`.
    pub async fn get(&self, flight_id: &str) -> Option<Value> {
        self.fetch(flight_id, None).await
    }

    /// State vectors for all tracked aircraft, optionally at `time` (Unix
    /// seconds) or for a single ICAO 24-bit address.
    pub async fn all_states(&self, time: Option<i64>, icao24: Option<&str>) -> Option<Value> {
        let query = Query::new().set_opt("time", time).set_opt("icao24", icao24);
        self.fetch("all", Some(&query)).await
    }

    /// State vectors for a set of ICAO 24-bit addresses.
    pub async fn states(&self, time: Option<i64>, icao24s: Option<&[String]>) -> Option<Value> {
        let query = Query::new()
            .set_opt("time", time)
            .set_opt("icao24", icao24s.map(|ids| ids.join(",")));
        self.fetch("states", Some(&query)).await
    }

    /// Airborne flights matching the search terms.
    pub async fn search(&self, query: &SearchQuery) -> Option<Value> {
        self.search_at("search", query).await
    }

    /// Number of airborne flights matching the search terms.
    pub async fn search_count(&self, query: &SearchQuery) -> Option<Value> {
        self.search_at("search/count", query).await
    }

    /// Positions of flights matching the search terms.
    pub async fn search_positions(&self, query: &SearchQuery) -> Option<Value> {
        self.search_at("search/positions", query).await
    }

    async fn search_at(&self, sub_path: &str, search: &SearchQuery) -> Option<Value> {
        let query = Query::new().set("query", search);
        self.fetch(sub_path, Some(&query)).await
    }
}
