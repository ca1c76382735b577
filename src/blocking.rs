//! Blocking rendition of the HTTP address source and of the lookup, for
//! callers which do not run an async runtime.

use crate::address::Address;
use crate::coord::Coord;
use crate::err::Error;
use crate::lookup::LookupOutput;
use crate::session::Session;
use tracing::debug;
use url::Url;

type Result<T> = std::result::Result<T, Error>;

/// Fetches addresses from a HTTP endpoint which serves a JSON array of
/// address objects.
#[derive(Clone, Debug)]
pub struct HttpAddressSource {
    client: reqwest::blocking::Client,
    url: Url,
}

impl HttpAddressSource {
    /// Create a new `HttpAddressSource` with its own client.
    pub fn new(url: Url, timeout_in_seconds: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_in_seconds))
            .build()?;
        Ok(Self::new_with_client(url, client))
    }

    /// Create a new `HttpAddressSource`, passing in an existing
    /// `reqwest::blocking::Client`.
    pub fn new_with_client(url: Url, client: reqwest::blocking::Client) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Return every address served by the endpoint.
    pub fn fetch_addresses(&self) -> Result<Vec<Address>> {
        debug!(url = %self.url, "fetching addresses");
        let res = self
            .client
            .get(self.url.clone())
            .header("Accept", "application/json")
            .send()?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::Status { status });
        }

        let body = res.text()?;
        Ok(Address::list_from_json(&body)?)
    }
}

/// Fetch the addresses from `source` and return the one nearest to
/// `reference`.
pub fn find_nearest_address(
    session: &Session,
    reference: Coord,
    source: &HttpAddressSource,
) -> Result<LookupOutput> {
    if !session.is_logged_in() {
        return Err(Error::NotLoggedIn);
    }

    let addresses = source.fetch_addresses()?;
    Ok(LookupOutput::new(reference, addresses))
}
