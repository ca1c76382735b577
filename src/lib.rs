//! # Overview
//! This crate finds the address nearest to a location. Candidate addresses
//! are fetched from a remote JSON API, the current location comes from a
//! `LocationProvider`, and the nearest candidate is chosen by great-circle
//! (haversine) distance.
//!
//! The distance calculation and the nearest search are plain functions
//! (`Coord::distance_km`, `find_nearest`) and can be used on their own.
//!
//! # Usage
//! 1. Put these dependencies in your Cargo.toml:
//!     ```toml
//!     [dependencies]
//!     nearaddr = "0.1"
//!     tokio = { version = "1", features = ["macros", "rt-multi-thread"] }
//!     url = "2.2"
//!     ```
//! 1. Put this in `main.rs` to look up the nearest address:
//!     ```rust,no_run
//!     use nearaddr::{
//!         ClientSeed, Coord, FixedLocation, HttpAddressSource,
//!         NearestAddressLookup, Session,
//!     };
//!     use url::Url;
//!
//!     #[tokio::main]
//!     async fn main() {
//!         let url = Url::parse("https://api.example.com/v1/address").unwrap();
//!         let source = HttpAddressSource::new(url, ClientSeed::new(30).unwrap());
//!         let location = FixedLocation::new(Coord::new(-19.9167, -43.9345));
//!         let lookup = NearestAddressLookup::new(location, source);
//!
//!         let mut session = Session::new();
//!         session.login();
//!
//!         let output = lookup.run(&session).await.unwrap();
//!         println!("{}", output.summary());
//!     }
//!     ```

mod address;
#[cfg(feature = "blocking")]
pub mod blocking;
pub mod config;
mod coord;
mod err;
mod location;
mod lookup;
mod map;
mod nearest;
mod session;
mod source;

pub use address::Address;
pub use config::{Config, ConfigError};
pub use coord::{Coord, EARTH_RADIUS_KM};
pub use err::Error;
pub use location::{
    DeniedLocation, FixedLocation, LocationError, LocationProvider,
};
pub use lookup::{LookupOutput, NearestAddress, NearestAddressLookup};
pub use map::{Marker, Region};
pub use nearest::{
    find_nearest, find_nearest_with_distance, Candidate, Located, Nearest,
};
pub use session::Session;
#[cfg(feature = "csv_source")]
pub use source::CsvAddressSource;
pub use source::{
    AddressSource, HttpAddressSource, StaticAddressSource,
    DEFAULT_ADDRESS_API_URL,
};

use std::future::Future;
use std::pin::Pin;

/// A boxed future, as returned by the `AddressSource` and
/// `LocationProvider` traits.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Contains resources used by HTTP address sources. Reuse the same
/// `ClientSeed` for every source where possible.
#[derive(Clone, Debug)]
pub struct ClientSeed {
    client: reqwest::Client,
}

impl ClientSeed {
    /// Create a new `ClientSeed`. Requests made with it time out after
    /// `timeout_in_seconds`.
    pub fn new(timeout_in_seconds: u64) -> Result<Self, reqwest::Error> {
        use std::time::Duration;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_in_seconds))
            .build()?;
        Ok(Self::with_client(client))
    }

    /// Create a new `ClientSeed` from an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Create a new `ClientSeed` using the timeout from `config`.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(config.timeout_in_seconds())
    }

    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }
}
