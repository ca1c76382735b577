// Looks up the address nearest to NEARADDR_LATITUDE / NEARADDR_LONGITUDE
// using the address API at NEARADDR_API_URL. Set RUST_LOG=debug to see the
// requests being made.

use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    use nearaddr::{
        ClientSeed, Config, DeniedLocation, FixedLocation, HttpAddressSource,
        NearestAddressLookup, Session,
    };

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let client_seed = ClientSeed::from_config(&config)?;
    let source = HttpAddressSource::new(config.api_url().clone(), client_seed);

    let mut session = Session::new();
    session.login();

    // Without a configured location, behave as if location access was
    // refused.
    let output = match config.location() {
        Some(coord) => {
            NearestAddressLookup::new(FixedLocation::new(coord), source)
                .empty_on_fetch_error(config.empty_on_fetch_error())
                .run(&session)
                .await?
        }
        None => {
            NearestAddressLookup::new(DeniedLocation, source)
                .run(&session)
                .await?
        }
    };

    println!("{}", output.summary());
    if let Some(marker) = output.marker() {
        println!("at {}", marker.coord());
        if let Some(url) = marker.url() {
            println!("link: {}", url);
        }
    }

    Ok(())
}
