//! Resource group wrappers.
//!
//! Each wrapper borrows an [`AeroApiClient`] and maps one AeroAPI resource
//! group onto paths and query parameters. [`AeroApi`] owns the client and
//! hands the wrappers out.

pub mod airports;
pub mod flights;
pub mod history;
pub mod miscellaneous;
pub mod operators;

pub use airports::{
    AirportFlightsQuery, Airports, ForecastQuery, NearbyQuery, ObservationsQuery, RouteQuery,
};
pub use flights::Flights;
pub use history::{FlightInfoQuery, History, MapQuery};
pub use miscellaneous::{Miscellaneous, ScheduleQuery};
pub use operators::{OperatorFlightsQuery, Operators};

use crate::client::AeroApiClient;
use crate::config::ClientConfig;
use crate::error::Result;

/// Entry point bundling one client with every resource group.
///
/// # Example
///
/// ```no_run
/// use aeroapi::{AeroApi, PageParams};
///
/// # async fn example() -> aeroapi::Result<()> {
/// let api = AeroApi::new("your-api-key")?;
/// let airport = api.airports().get("KSFO").await;
/// let operators = api.operators().list(&PageParams::default()).await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AeroApi {
    client: AeroApiClient,
}

impl AeroApi {
    /// Create an API handle for the public AeroAPI endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be used as a header value.
    pub fn new(api_key: &str) -> Result<Self> {
        Ok(Self::from_client(AeroApiClient::new(api_key)?))
    }

    /// Create an API handle from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `AEROAPI_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_client(AeroApiClient::from_env()?))
    }

    /// Create an API handle from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::from_client(AeroApiClient::with_config(config)?))
    }

    /// Wrap an existing client.
    pub fn from_client(client: AeroApiClient) -> Self {
        Self { client }
    }

    /// The underlying request gateway.
    pub fn client(&self) -> &AeroApiClient {
        &self.client
    }

    pub fn airports(&self) -> Airports<'_> {
        Airports::new(&self.client)
    }

    pub fn flights(&self) -> Flights<'_> {
        Flights::new(&self.client)
    }

    pub fn history(&self) -> History<'_> {
        History::new(&self.client)
    }

    pub fn miscellaneous(&self) -> Miscellaneous<'_> {
        Miscellaneous::new(&self.client)
    }

    pub fn operators(&self) -> Operators<'_> {
        Operators::new(&self.client)
    }
}
