//! Pagination parameters and cursor helpers.
//!
//! AeroAPI list endpoints accept `max_pages` and `cursor` and answer with a
//! `links.next` URL when more data exists. This crate never follows that
//! link on its own; [`next_cursor`] hands the cursor back to the caller.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::query::{Query, ToQuery};

/// Pagination options for list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    /// Maximum number of pages the API should fold into one response.
    pub max_pages: u32,
    /// Opaque cursor from a previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            max_pages: 1,
            cursor: None,
        }
    }
}

impl PageParams {
    /// Continue from a cursor returned by an earlier call.
    #[must_use]
    pub fn from_cursor(cursor: impl Into<String>) -> Self {
        Self {
            cursor: Some(cursor.into()),
            ..Self::default()
        }
    }
}

impl ToQuery for PageParams {
    fn to_query(&self) -> Query {
        Query::new()
            .set("max_pages", self.max_pages)
            .set_opt("cursor", self.cursor.as_deref())
    }
}

/// Extract the cursor for the next page from an AeroAPI response.
///
/// Reads `links.next` (a path such as `/airports?cursor=abc`) and returns
/// its `cursor` parameter, or `None` on the last page.
pub fn next_cursor(response: &Value) -> Option<String> {
    let next = response.get("links")?.get("next")?.as_str()?;
    let base = Url::parse("https://aeroapi.invalid/").ok()?;
    let url = base.join(next).ok()?;
    url.query_pairs()
        .find(|(k, _)| k == "cursor")
        .map(|(_, v)| v.into_owned())
}
