use crate::address::Address;
use crate::err::Error;
use crate::{BoxFuture, ClientSeed};
use tracing::debug;
use url::Url;

type Result<T> = std::result::Result<T, Error>;

/// The address API used when no other URL is configured.
pub const DEFAULT_ADDRESS_API_URL: &str =
    "https://66526a0f813d78e6d6d57914.mockapi.io/api/v1/address";

/// Provides the list of candidate addresses for a lookup.
pub trait AddressSource: Send + Sync {
    /// Return every known address.
    fn fetch_addresses(&self) -> BoxFuture<'_, Result<Vec<Address>>>;
}

/// Fetches addresses from a HTTP endpoint which serves a JSON array of
/// address objects.
#[derive(Clone, Debug)]
pub struct HttpAddressSource {
    client_seed: ClientSeed,
    url: Url,
}

impl HttpAddressSource {
    /// Create a new `HttpAddressSource`.
    ///
    /// # Example
    /// ```rust,no_run
    /// # fn run() {
    /// use nearaddr::{ClientSeed, HttpAddressSource};
    /// use url::Url;
    /// let seed = ClientSeed::new(30).unwrap();
    /// let url = Url::parse("https://api.example.com/v1/address").unwrap();
    /// let source = HttpAddressSource::new(url, seed);
    /// # }
    /// ```
    ///
    /// If creating multiple sources, reuse the same `ClientSeed` for each.
    pub fn new(url: Url, client_seed: ClientSeed) -> Self {
        Self { client_seed, url }
    }

    /// Return the URL addresses are fetched from.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl AddressSource for HttpAddressSource {
    fn fetch_addresses(&self) -> BoxFuture<'_, Result<Vec<Address>>> {
        Box::pin(async move {
            debug!(url = %self.url, "fetching addresses");
            let res = self
                .client_seed
                .client()
                .get(self.url.clone())
                .header("Accept", "application/json")
                .send()
                .await?;
            http_response_to_addresses(res).await
        })
    }
}

async fn http_response_to_addresses(
    res: reqwest::Response,
) -> Result<Vec<Address>> {
    let status = res.status();
    if !status.is_success() {
        return Err(Error::Status { status });
    }

    let body = res.text().await?;
    let addresses = Address::list_from_json(&body)?;
    debug!(count = addresses.len(), "fetched addresses");
    Ok(addresses)
}

/// An `AddressSource` backed by a list held in memory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticAddressSource {
    addresses: Vec<Address>,
}

impl StaticAddressSource {
    pub fn new(addresses: Vec<Address>) -> Self {
        Self { addresses }
    }
}

impl AddressSource for StaticAddressSource {
    fn fetch_addresses(&self) -> BoxFuture<'_, Result<Vec<Address>>> {
        let addresses = self.addresses.clone();
        Box::pin(async move { Ok(addresses) })
    }
}

/// An `AddressSource` which reads a CSV file with the header
/// `latitude,longitude,address,url`. The `url` column may be empty.
#[cfg(feature = "csv_source")]
#[derive(Clone, Debug)]
pub struct CsvAddressSource {
    path: std::path::PathBuf,
}

#[cfg(feature = "csv_source")]
impl CsvAddressSource {
    pub fn new<P: Into<std::path::PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(feature = "csv_source")]
impl AddressSource for CsvAddressSource {
    fn fetch_addresses(&self) -> BoxFuture<'_, Result<Vec<Address>>> {
        Box::pin(async move {
            debug!(path = %self.path.display(), "reading addresses");
            // The file is expected to be small, so read it in place.
            let reader = csv::Reader::from_path(&self.path)
                .map_err(|err| Error::Read(Box::new(err)))?;
            read_csv_addresses(reader)
        })
    }
}

#[cfg(feature = "csv_source")]
fn read_csv_addresses<R: std::io::Read>(
    mut reader: csv::Reader<R>,
) -> Result<Vec<Address>> {
    let addresses = reader
        .deserialize::<Address>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|err| Error::Read(Box::new(err)))?;
    Ok(addresses)
}
