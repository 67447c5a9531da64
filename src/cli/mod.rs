//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the aeroapi binary.

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

use crate::config::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, TIMEOUT_ENV};
use crate::pagination::PageParams;
use crate::resources::miscellaneous::DEFAULT_TIME_PERIOD;
use crate::resources::{
    AirportFlightsQuery, FlightInfoQuery, MapQuery, OperatorFlightsQuery, RouteQuery,
    ScheduleQuery,
};
use crate::search::{SearchQuery, SearchTerm};

/// FlightAware AeroAPI command-line interface.
#[derive(Parser, Debug)]
#[command(name = "aeroapi", about = "FlightAware AeroAPI CLI", version)]
pub struct Cli {
    /// AeroAPI key.
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the AeroAPI service.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds (no timeout when omitted).
    #[arg(long, env = TIMEOUT_ENV)]
    pub timeout: Option<u64>,

    /// Print JSON on a single line instead of pretty-printed.
    #[arg(long, global = true, default_value = "false")]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Resource groups.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Airport information, flight boards and weather.
    #[command(subcommand)]
    Airports(AirportsCommand),

    /// Live flights and flight search.
    #[command(subcommand)]
    Flights(FlightsCommand),

    /// Historical flight data.
    #[command(subcommand)]
    History(HistoryCommand),

    /// Aircraft, disruption statistics and schedules.
    #[command(subcommand)]
    Misc(MiscCommand),

    /// Operator (airline) information.
    #[command(subcommand)]
    Operators(OperatorsCommand),
}

/// Pagination arguments.
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Maximum number of pages to fold into the response.
    #[arg(long, default_value_t = 1)]
    pub max_pages: u32,

    /// Cursor returned by a previous call.
    #[arg(long)]
    pub cursor: Option<String>,
}

impl From<PageArgs> for PageParams {
    fn from(args: PageArgs) -> Self {
        Self {
            max_pages: args.max_pages,
            cursor: args.cursor,
        }
    }
}

/// Time window arguments (RFC 3339, e.g. `2024-05-01T00:00:00Z`).
#[derive(Args, Debug, Clone)]
pub struct TimeRangeArgs {
    #[arg(long)]
    pub start: Option<DateTime<Utc>>,

    #[arg(long)]
    pub end: Option<DateTime<Utc>>,
}

/// Arguments shared by the airport flight boards.
#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    /// Airport code (ICAO, IATA or LID).
    pub airport: String,

    /// Operator code.
    #[arg(long)]
    pub airline: Option<String>,

    /// `General_Aviation` or `Airline`.
    #[arg(long = "type")]
    pub flight_type: Option<String>,

    #[command(flatten)]
    pub range: TimeRangeArgs,

    #[command(flatten)]
    pub page: PageArgs,
}

impl BoardArgs {
    pub fn query(&self) -> AirportFlightsQuery {
        AirportFlightsQuery {
            airline: self.airline.clone(),
            flight_type: self.flight_type.clone(),
            start: self.range.start,
            end: self.range.end,
            page: self.page.clone().into(),
        }
    }
}

/// Airport commands.
#[derive(Subcommand, Debug)]
pub enum AirportsCommand {
    /// List all airports.
    List(PageArgs),

    /// Get one airport.
    Get { airport: String },

    /// Resolve an airport code to its canonical form.
    Canonical {
        airport: String,

        /// `ICAO`, `IATA` or `LID`.
        #[arg(long)]
        id_type: Option<String>,
    },

    /// Airports reporting delays.
    Delays(PageArgs),

    /// All flights at an airport.
    Flights(BoardArgs),

    /// Flight counts at an airport.
    Counts { airport: String },

    /// Recent arrivals.
    Arrivals(BoardArgs),

    /// Recent departures.
    Departures(BoardArgs),

    /// Scheduled arrivals.
    ScheduledArrivals(BoardArgs),

    /// Scheduled departures.
    ScheduledDepartures(BoardArgs),

    /// Airports near an airport.
    Nearby {
        airport: String,

        /// Radius in statute miles.
        #[arg(long)]
        radius: u32,

        /// Only airports with instrument approaches.
        #[arg(long)]
        only_iap: bool,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Flights between two airports.
    Between {
        origin: String,
        destination: String,

        #[arg(long = "type")]
        flight_type: Option<String>,

        /// `nonstop` or `onestop`.
        #[arg(long)]
        connection: Option<String>,

        #[command(flatten)]
        range: TimeRangeArgs,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Weather forecast.
    Forecast {
        airport: String,

        #[arg(long)]
        timestamp: Option<DateTime<Utc>>,

        /// Fall back to nearby stations.
        #[arg(long)]
        nearby: bool,
    },

    /// Weather observations.
    Observations {
        airport: String,

        /// `Celsius` or `Fahrenheit`.
        #[arg(long, default_value = "Celsius")]
        units: String,

        /// Fall back to nearby stations.
        #[arg(long)]
        nearby: bool,

        #[arg(long)]
        timestamp: Option<DateTime<Utc>>,

        #[command(flatten)]
        page: PageArgs,
    },
}

impl AirportsCommand {
    /// Route filters, when this is a `between` command.
    pub fn route_query(&self) -> Option<RouteQuery> {
        match self {
            Self::Between {
                flight_type,
                connection,
                range,
                page,
                ..
            } => Some(RouteQuery {
                flight_type: flight_type.clone(),
                connection: connection.clone(),
                start: range.start,
                end: range.end,
                page: page.clone().into(),
            }),
            _ => None,
        }
    }
}

/// Search term arguments.
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search term as `"OP ARGS..."`, e.g. `--term "= orig KSFO"`. Repeatable.
    #[arg(long = "term", required = true)]
    pub terms: Vec<SearchTerm>,
}

impl SearchArgs {
    pub fn query(&self) -> SearchQuery {
        self.terms.iter().cloned().collect()
    }
}

/// Flight commands.
#[derive(Subcommand, Debug)]
pub enum FlightsCommand {
    /// Flights for an ident or fa_flight_id.
    Get { flight: String },

    /// State vectors for all aircraft.
    AllStates {
        /// Unix timestamp.
        #[arg(long)]
        time: Option<i64>,

        #[arg(long)]
        icao24: Option<String>,
    },

    /// State vectors for selected aircraft.
    States {
        /// Unix timestamp.
        #[arg(long)]
        time: Option<i64>,

        /// Comma-separated ICAO 24-bit addresses.
        #[arg(long, value_delimiter = ',')]
        icao24: Option<Vec<String>>,
    },

    /// Search airborne flights.
    Search(SearchArgs),

    /// Count airborne flights matching a search.
    SearchCount(SearchArgs),

    /// Positions of flights matching a search.
    SearchPositions(SearchArgs),

    /// Print the simple search keys.
    SearchKeys,
}

/// History commands.
#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// Map image of a past flight.
    Map {
        flight: String,

        #[arg(long, default_value_t = 480)]
        height: u32,

        #[arg(long, default_value_t = 640)]
        width: u32,

        #[arg(long)]
        layer_on: Option<String>,

        #[arg(long)]
        layer_off: Option<String>,

        #[arg(long)]
        show_data_block: Option<bool>,

        #[arg(long)]
        airports_expand_view: Option<bool>,

        #[arg(long)]
        show_airports: Option<bool>,

        /// `"N E S W"` bounds.
        #[arg(long)]
        bounding_box: Option<String>,
    },

    /// Filed route of a past flight.
    Route { flight: String },

    /// Track of a past flight.
    Track {
        flight: String,

        #[arg(long)]
        include_estimated_positions: Option<bool>,
    },

    /// Last flight of an aircraft.
    LastFlight { registration: String },

    /// Past flights for an ident.
    Info {
        ident: String,

        #[arg(long)]
        ident_type: Option<String>,

        #[command(flatten)]
        range: TimeRangeArgs,

        #[command(flatten)]
        page: PageArgs,
    },
}

impl HistoryCommand {
    /// Map options, when this is a `map` command.
    pub fn map_query(&self) -> Option<MapQuery> {
        match self {
            Self::Map {
                height,
                width,
                layer_on,
                layer_off,
                show_data_block,
                airports_expand_view,
                show_airports,
                bounding_box,
                ..
            } => Some(MapQuery {
                height: *height,
                width: *width,
                layer_on: layer_on.clone(),
                layer_off: layer_off.clone(),
                show_data_block: *show_data_block,
                airports_expand_view: *airports_expand_view,
                show_airports: *show_airports,
                bounding_box: bounding_box.clone(),
            }),
            _ => None,
        }
    }

    /// Flight info filters, when this is an `info` command.
    pub fn info_query(&self) -> Option<FlightInfoQuery> {
        match self {
            Self::Info {
                ident_type,
                range,
                page,
                ..
            } => Some(FlightInfoQuery {
                ident_type: ident_type.clone(),
                start: range.start,
                end: range.end,
                page: page.clone().into(),
            }),
            _ => None,
        }
    }
}

/// Miscellaneous commands.
#[derive(Subcommand, Debug)]
pub enum MiscCommand {
    /// Registered owner of an aircraft.
    Owner { ident: String },

    /// Aircraft type information.
    AircraftType { aircraft_type: String },

    /// Disruption counts across all airlines or airports.
    GlobalDisruptions {
        /// `airline` or `origin`.
        entity_type: String,

        #[arg(long, default_value = DEFAULT_TIME_PERIOD)]
        time_period: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Disruption counts for one airline or airport.
    Disruptions {
        entity_type: String,
        entity_id: String,

        #[arg(long, default_value = DEFAULT_TIME_PERIOD)]
        time_period: String,
    },

    /// Scheduled flights between two dates.
    Schedules {
        date_start: String,
        date_end: String,

        #[arg(long)]
        origin: Option<String>,

        #[arg(long)]
        destination: Option<String>,

        #[arg(long)]
        airline: Option<String>,

        #[arg(long)]
        flight_number: Option<String>,

        /// Exclude codeshare flights.
        #[arg(long)]
        no_codeshares: bool,

        /// Exclude regional flights.
        #[arg(long)]
        no_regional: bool,

        #[command(flatten)]
        page: PageArgs,
    },
}

impl MiscCommand {
    /// Schedule filters, when this is a `schedules` command.
    pub fn schedule_query(&self) -> Option<ScheduleQuery> {
        match self {
            Self::Schedules {
                origin,
                destination,
                airline,
                flight_number,
                no_codeshares,
                no_regional,
                page,
                ..
            } => Some(ScheduleQuery {
                origin: origin.clone(),
                destination: destination.clone(),
                airline: airline.clone(),
                flight_number: flight_number.clone(),
                include_codeshares: !no_codeshares,
                include_regional: !no_regional,
                page: page.clone().into(),
            }),
            _ => None,
        }
    }
}

/// Operator commands.
#[derive(Subcommand, Debug)]
pub enum OperatorsCommand {
    /// List all operators.
    List(PageArgs),

    /// Get one operator.
    Get { operator: String },

    /// Resolve an operator code to its canonical form.
    Canonical {
        operator: String,

        #[arg(long)]
        country_code: Option<String>,
    },

    /// Flights for an operator.
    Flights {
        operator: String,

        #[command(flatten)]
        range: TimeRangeArgs,

        #[command(flatten)]
        page: PageArgs,
    },
}

impl OperatorsCommand {
    /// Flight filters, when this is a `flights` command.
    pub fn flights_query(&self) -> Option<OperatorFlightsQuery> {
        match self {
            Self::Flights { range, page, .. } => Some(OperatorFlightsQuery {
                start: range.start,
                end: range.end,
                page: page.clone().into(),
            }),
            _ => None,
        }
    }
}
