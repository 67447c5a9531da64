//! Basic example demonstrating the AeroAPI client.
//!
//! Run with:
//! ```
//! AEROAPI_API_KEY=your-key cargo run --example basic
//! ```

use aeroapi::{next_cursor, AeroApi, AirportFlightsQuery, PageParams, SearchOperator, SearchQuery};

#[tokio::main]
async fn main() -> aeroapi::Result<()> {
    // Initialize tracing so failed requests are reported
    tracing_subscriber::fmt::init();

    println!("Creating AeroAPI client...");
    let api = AeroApi::from_env()?;
    println!("Connected to: {}", api.client().base_url());

    println!("\n--- Airport ---");
    match api.airports().get("KSFO").await {
        Some(airport) => println!("{} ({})", airport["name"], airport["code_icao"]),
        None => println!("Airport lookup failed"),
    }

    println!("\n--- Recent arrivals (first page) ---");
    let arrivals = api
        .airports()
        .arrivals("KSFO", &AirportFlightsQuery::default())
        .await;
    if let Some(ref page) = arrivals {
        let count = page["arrivals"].as_array().map_or(0, Vec::len);
        println!("Found {count} arrivals");
    }

    if let Some(cursor) = arrivals.as_ref().and_then(next_cursor) {
        println!("\n--- Next page ---");
        let query = AirportFlightsQuery {
            page: PageParams::from_cursor(cursor),
            ..Default::default()
        };
        let more = api.airports().arrivals("KSFO", &query).await;
        println!("Fetched next page: {}", more.is_some());
    }

    println!("\n--- Operator ---");
    if let Some(operator) = api.operators().get("UAL").await {
        println!("{}", operator["name"]);
    }

    println!("\n--- Search: airborne flights into KLAX ---");
    let search = SearchQuery::new().term(SearchOperator::Eq, ["dest", "KLAX"]);
    if let Some(count) = api.flights().search_count(&search).await {
        println!("{}", count["count"]);
    }

    Ok(())
}
