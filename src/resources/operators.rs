//! Operator (airline) endpoints.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::client::AeroApiClient;
use crate::pagination::PageParams;
use crate::query::{Query, ToQuery};

const ENDPOINT: &str = "operators";

/// Wrapper for `/operators`.
#[derive(Debug, Clone, Copy)]
pub struct Operators<'a> {
    client: &'a AeroApiClient,
}

/// Filters for an operator's flights.
#[derive(Debug, Clone, Default)]
pub struct OperatorFlightsQuery {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub page: PageParams,
}

impl ToQuery for OperatorFlightsQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .set_time("start", self.start.as_ref())
            .set_time("end", self.end.as_ref())
            .extend(self.page.to_query())
    }
}

impl<'a> Operators<'a> {
    pub fn new(client: &'a AeroApiClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, sub_path: Option<&str>, query: Option<&Query>) -> Option<Value> {
        let path = self.client.build_path(ENDPOINT, sub_path, query);
        self.client.get(&path).await
    }

    /// List all operators.
    pub async fn list(&self, page: &PageParams) -> Option<Value> {
        self.fetch(None, Some(&page.to_query())).await
    }

    /// Information about one operator.
    pub async fn get(&self, operator_id: &str) -> Option<Value> {
        self.fetch(Some(operator_id), None).await
    }

    /// Resolve an operator code to its canonical form, optionally scoped to
    /// an ISO country code.
    pub async fn canonical(&self, operator_id: &str, country_code: Option<&str>) -> Option<Value> {
        let query = Query::new().set_opt("country_code", country_code);
        self.fetch(Some(&format!("{operator_id}/canonical")), Some(&query))
            .await
    }

    /// Recent and upcoming flights for an operator.
    pub async fn flights(&self, operator_id: &str, query: &OperatorFlightsQuery) -> Option<Value> {
        self.fetch(
            Some(&format!("{operator_id}/flights")),
            Some(&query.to_query()),
        )
        .await
    }
}
