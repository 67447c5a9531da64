//! FlightAware AeroAPI client library.
//!
//! A thin Rust client for the AeroAPI REST service. A single request
//! gateway ([`AeroApiClient`]) owns the API key and base URL, builds request
//! paths and turns every failure into `None`. Resource wrappers map each
//! AeroAPI resource group onto that gateway.
//!
//! # Quick Start
//!
//! ```no_run
//! use aeroapi::{AeroApi, AirportFlightsQuery, PageParams};
//!
//! #[tokio::main]
//! async fn main() -> aeroapi::Result<()> {
//!     // Create client from environment variables
//!     let api = AeroApi::from_env()?;
//!
//!     // Look up an airport
//!     if let Some(airport) = api.airports().get("KSFO").await {
//!         println!("{}", airport["name"]);
//!     }
//!
//!     // Recent arrivals, first page only
//!     let arrivals = api
//!         .airports()
//!         .arrivals("KSFO", &AirportFlightsQuery::default())
//!         .await;
//!
//!     // The next page is reached by passing the cursor back in
//!     if let Some(cursor) = arrivals.as_ref().and_then(aeroapi::next_cursor) {
//!         let query = AirportFlightsQuery {
//!             page: PageParams::from_cursor(cursor),
//!             ..Default::default()
//!         };
//!         let _more = api.airports().arrivals("KSFO", &query).await;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Failure handling
//!
//! Requests never return an error. Transport failures, non-2xx statuses and
//! bodies that are not JSON all yield `None`; the cause is emitted as a
//! `tracing` error event.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `AEROAPI_API_KEY` (required) - Your AeroAPI key
//! - `AEROAPI_URL` (optional) - Base URL (defaults to `https://aeroapi.flightaware.com/aeroapi/`)
//! - `AEROAPI_TIMEOUT_SECS` (optional) - Request timeout; none by default

pub mod cli;
mod client;
mod config;
mod error;
mod pagination;
mod query;
pub mod resources;
mod search;

// Re-export core types
pub use client::{AeroApiClient, API_KEY_HEADER};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{AeroApiError, Result};
pub use pagination::{next_cursor, PageParams};
pub use query::{Query, ToQuery};

// Re-export search helpers
pub use search::{search_keys_help, SearchOperator, SearchQuery, SearchTerm, SEARCH_QUERY_KEYS};

// Re-export resource wrappers
pub use resources::{
    AeroApi, AirportFlightsQuery, Airports, FlightInfoQuery, Flights, ForecastQuery, History,
    MapQuery, Miscellaneous, NearbyQuery, ObservationsQuery, OperatorFlightsQuery, Operators,
    RouteQuery, ScheduleQuery,
};

// Re-export HTTP header types used by the gateway
pub use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
