//! AeroAPI CLI binary.
//!
//! A command-line interface for the FlightAware AeroAPI.

use std::process::ExitCode;
use std::time::Duration;

use aeroapi::cli::{
    AirportsCommand, Cli, Command, FlightsCommand, HistoryCommand, MiscCommand, OperatorsCommand,
};
use aeroapi::{
    search_keys_help, AeroApi, ClientConfig, ForecastQuery, NearbyQuery, ObservationsQuery,
    PageParams,
};
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    if matches!(cli.command, Command::Flights(FlightsCommand::SearchKeys)) {
        print!("{}", search_keys_help());
        return ExitCode::SUCCESS;
    }

    let Some(api_key) = cli.api_key.clone() else {
        eprintln!("Error: no API key provided");
        eprintln!("Hint: Set AEROAPI_API_KEY environment variable or pass --api-key");
        return ExitCode::FAILURE;
    };

    let mut config = ClientConfig::new(api_key).with_base_url(cli.base_url.clone());
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let api = match AeroApi::with_config(config) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&api, cli.command).await {
        Some(value) => match render(&value, cli.compact) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
        None => {
            eprintln!("Error: request failed (set RUST_LOG=aeroapi=error for details)");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render(value: &Value, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}

async fn run(api: &AeroApi, command: Command) -> Option<Value> {
    match command {
        Command::Airports(cmd) => handle_airports(api, cmd).await,
        Command::Flights(cmd) => handle_flights(api, cmd).await,
        Command::History(cmd) => handle_history(api, cmd).await,
        Command::Misc(cmd) => handle_misc(api, cmd).await,
        Command::Operators(cmd) => handle_operators(api, cmd).await,
    }
}

async fn handle_airports(api: &AeroApi, cmd: AirportsCommand) -> Option<Value> {
    let airports = api.airports();
    let route = cmd.route_query().unwrap_or_default();

    match cmd {
        AirportsCommand::List(page) => airports.list(&PageParams::from(page)).await,
        AirportsCommand::Get { airport } => airports.get(&airport).await,
        AirportsCommand::Canonical { airport, id_type } => {
            airports.canonical(&airport, id_type.as_deref()).await
        }
        AirportsCommand::Delays(page) => airports.delays(&PageParams::from(page)).await,
        AirportsCommand::Flights(board) => airports.flights(&board.airport, &board.query()).await,
        AirportsCommand::Counts { airport } => airports.flight_counts(&airport).await,
        AirportsCommand::Arrivals(board) => airports.arrivals(&board.airport, &board.query()).await,
        AirportsCommand::Departures(board) => {
            airports.departures(&board.airport, &board.query()).await
        }
        AirportsCommand::ScheduledArrivals(board) => {
            airports
                .scheduled_arrivals(&board.airport, &board.query())
                .await
        }
        AirportsCommand::ScheduledDepartures(board) => {
            airports
                .scheduled_departures(&board.airport, &board.query())
                .await
        }
        AirportsCommand::Nearby {
            airport,
            radius,
            only_iap,
            page,
        } => {
            let query = NearbyQuery {
                radius,
                only_iap,
                page: page.into(),
            };
            airports.nearby(&airport, &query).await
        }
        AirportsCommand::Between {
            origin,
            destination,
            ..
        } => airports.flights_between(&origin, &destination, &route).await,
        AirportsCommand::Forecast {
            airport,
            timestamp,
            nearby,
        } => {
            let query = ForecastQuery {
                timestamp,
                return_nearby_weather: nearby,
            };
            airports.weather_forecast(&airport, &query).await
        }
        AirportsCommand::Observations {
            airport,
            units,
            nearby,
            timestamp,
            page,
        } => {
            let query = ObservationsQuery {
                temperature_units: units,
                return_nearby_weather: nearby,
                timestamp,
                page: page.into(),
            };
            airports.weather_observations(&airport, &query).await
        }
    }
}

async fn handle_flights(api: &AeroApi, cmd: FlightsCommand) -> Option<Value> {
    let flights = api.flights();

    match cmd {
        FlightsCommand::Get { flight } => flights.get(&flight).await,
        FlightsCommand::AllStates { time, icao24 } => {
            flights.all_states(time, icao24.as_deref()).await
        }
        FlightsCommand::States { time, icao24 } => flights.states(time, icao24.as_deref()).await,
        FlightsCommand::Search(args) => flights.search(&args.query()).await,
        FlightsCommand::SearchCount(args) => flights.search_count(&args.query()).await,
        FlightsCommand::SearchPositions(args) => flights.search_positions(&args.query()).await,
        // Handled before a client is built
        FlightsCommand::SearchKeys => None,
    }
}

async fn handle_history(api: &AeroApi, cmd: HistoryCommand) -> Option<Value> {
    let history = api.history();
    let map = cmd.map_query().unwrap_or_default();
    let info = cmd.info_query().unwrap_or_default();

    match cmd {
        HistoryCommand::Map { flight, .. } => history.flight_map(&flight, &map).await,
        HistoryCommand::Route { flight } => history.flight_route(&flight).await,
        HistoryCommand::Track {
            flight,
            include_estimated_positions,
        } => {
            history
                .flight_track(&flight, include_estimated_positions)
                .await
        }
        HistoryCommand::LastFlight { registration } => history.last_flight(&registration).await,
        HistoryCommand::Info { ident, .. } => history.flight_info(&ident, &info).await,
    }
}

async fn handle_misc(api: &AeroApi, cmd: MiscCommand) -> Option<Value> {
    let misc = api.miscellaneous();
    let schedule = cmd.schedule_query().unwrap_or_default();

    match cmd {
        MiscCommand::Owner { ident } => misc.aircraft_owner(&ident).await,
        MiscCommand::AircraftType { aircraft_type } => misc.aircraft_type(&aircraft_type).await,
        MiscCommand::GlobalDisruptions {
            entity_type,
            time_period,
            page,
        } => {
            let page: PageParams = page.into();
            misc.global_disruption_counts(&entity_type, &time_period, &page)
                .await
        }
        MiscCommand::Disruptions {
            entity_type,
            entity_id,
            time_period,
        } => {
            misc.disruption_counts(&entity_type, &entity_id, &time_period)
                .await
        }
        MiscCommand::Schedules {
            date_start,
            date_end,
            ..
        } => misc.scheduled_flights(&date_start, &date_end, &schedule).await,
    }
}

async fn handle_operators(api: &AeroApi, cmd: OperatorsCommand) -> Option<Value> {
    let operators = api.operators();
    let flights = cmd.flights_query().unwrap_or_default();

    match cmd {
        OperatorsCommand::List(page) => operators.list(&PageParams::from(page)).await,
        OperatorsCommand::Get { operator } => operators.get(&operator).await,
        OperatorsCommand::Canonical {
            operator,
            country_code,
        } => operators.canonical(&operator, country_code.as_deref()).await,
        OperatorsCommand::Flights { operator, .. } => operators.flights(&operator, &flights).await,
    }
}
