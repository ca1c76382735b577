use crate::address::Address;
use crate::coord::Coord;
use crate::err::Error;
use crate::location::LocationProvider;
use crate::map::{Marker, Region};
use crate::nearest::find_nearest_with_distance;
use crate::session::Session;
use crate::source::AddressSource;
use tracing::{debug, info, warn};

/// Finds the address nearest to the current location.
///
/// A lookup resolves the current location, fetches the candidate addresses
/// and then picks the nearest one by great-circle distance.
///
/// # Example
/// ```rust
/// # async fn run() {
/// use nearaddr::{
///     Address, Coord, FixedLocation, NearestAddressLookup, Session,
///     StaticAddressSource,
/// };
/// let source = StaticAddressSource::new(vec![
///     Address::new(Coord::new(-19.92, -43.94), "Savassi", None),
/// ]);
/// let location = FixedLocation::new(Coord::new(-19.9167, -43.9345));
/// let lookup = NearestAddressLookup::new(location, source);
///
/// let output = lookup.run(&Session::logged_in()).await.unwrap();
/// assert_eq!(output.nearest().unwrap().address().address(), "Savassi");
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct NearestAddressLookup<L, S> {
    location: L,
    source: S,
    empty_on_fetch_error: bool,
}

impl<L, S> NearestAddressLookup<L, S>
where
    L: LocationProvider,
    S: AddressSource,
{
    /// Create a new `NearestAddressLookup`.
    pub fn new(location: L, source: S) -> Self {
        Self {
            location,
            source,
            empty_on_fetch_error: false,
        }
    }

    /// When `true`, a failure to fetch the addresses is logged and treated
    /// as an empty list instead of failing the lookup. Defaults to `false`.
    pub fn empty_on_fetch_error(mut self, enabled: bool) -> Self {
        self.empty_on_fetch_error = enabled;
        self
    }

    /// Run the lookup on behalf of the user in `session`.
    pub async fn run(&self, session: &Session) -> Result<LookupOutput, Error> {
        if !session.is_logged_in() {
            return Err(Error::NotLoggedIn);
        }

        let reference = self.location.current_location().await?;
        debug!(%reference, "resolved current location");

        let addresses = match self.source.fetch_addresses().await {
            Ok(addresses) => addresses,
            Err(err) if self.empty_on_fetch_error && err.is_fetch() => {
                warn!(error = %err, "could not fetch addresses");
                Vec::new()
            }
            Err(err) => return Err(err),
        };

        let output = LookupOutput::new(reference, addresses);
        match output.nearest() {
            Some(nearest) => info!(
                address = nearest.address().address(),
                distance_km = nearest.distance_km(),
                candidates = output.candidate_count(),
                "found nearest address"
            ),
            None => info!("no addresses to choose from"),
        }
        Ok(output)
    }
}

/// The nearest address together with its distance from the reference.
#[derive(Clone, Debug, PartialEq)]
pub struct NearestAddress {
    address: Address,
    distance_km: f64,
}

impl NearestAddress {
    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn into_address(self) -> Address {
        self.address
    }

    /// Return the distance from the reference, in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }
}

/// The outcome of a `NearestAddressLookup`.
#[derive(Clone, Debug, PartialEq)]
pub struct LookupOutput {
    reference: Coord,
    candidate_count: usize,
    nearest: Option<NearestAddress>,
}

impl LookupOutput {
    /// Pick the address in `addresses` nearest to `reference`.
    pub fn new(reference: Coord, mut addresses: Vec<Address>) -> Self {
        let candidate_count = addresses.len();
        let found = find_nearest_with_distance(reference, &addresses)
            .map(|nearest| (nearest.index(), nearest.distance_km()));

        let nearest = found.map(|(index, distance_km)| NearestAddress {
            address: addresses.swap_remove(index),
            distance_km,
        });

        Self {
            reference,
            candidate_count,
            nearest,
        }
    }

    /// Return the position the lookup was made from.
    pub fn reference(&self) -> Coord {
        self.reference
    }

    /// Return the number of addresses that were considered.
    pub fn candidate_count(&self) -> usize {
        self.candidate_count
    }

    /// Return the nearest address, or `None` if there were no addresses.
    pub fn nearest(&self) -> Option<&NearestAddress> {
        self.nearest.as_ref()
    }

    pub fn into_nearest(self) -> Option<NearestAddress> {
        self.nearest
    }

    /// Return the map region to show, centred on the reference.
    pub fn region(&self) -> Region {
        Region::around(self.reference)
    }

    /// Return the map marker for the nearest address.
    pub fn marker(&self) -> Option<Marker> {
        self.nearest
            .as_ref()
            .map(|nearest| Marker::from_address(nearest.address()))
    }

    /// Return a one line description of the outcome.
    pub fn summary(&self) -> String {
        match &self.nearest {
            Some(nearest) => format!(
                "{} ({:.2} km away)",
                nearest.address().address(),
                nearest.distance_km()
            ),
            None => "No address found".to_owned(),
        }
    }
}
