use crate::address::Address;
use crate::coord::Coord;
use crate::nearest::Located;

/// Latitude span shown around the current location, in degrees.
pub const DEFAULT_LATITUDE_DELTA: f64 = 0.0922;
/// Longitude span shown around the current location, in degrees.
pub const DEFAULT_LONGITUDE_DELTA: f64 = 0.0421;

/// A rectangular area of a map, described by its centre and its span in
/// degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    center: Coord,
    latitude_delta: f64,
    longitude_delta: f64,
}

impl Region {
    /// Create a new `Region`. Negative spans are treated as positive.
    pub fn new(center: Coord, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            center,
            latitude_delta: latitude_delta.abs(),
            longitude_delta: longitude_delta.abs(),
        }
    }

    /// Create a `Region` with the default span, centred on `center`.
    pub fn around(center: Coord) -> Self {
        Self::new(center, DEFAULT_LATITUDE_DELTA, DEFAULT_LONGITUDE_DELTA)
    }

    pub fn center(&self) -> Coord {
        self.center
    }

    pub fn latitude_delta(&self) -> f64 {
        self.latitude_delta
    }

    pub fn longitude_delta(&self) -> f64 {
        self.longitude_delta
    }

    /// Return true if `coord` lies within this region. Edges count as
    /// inside. Regions crossing the antimeridian are handled.
    pub fn contains(&self, coord: Coord) -> bool {
        let d_lat = (coord.lat() - self.center.lat()).abs();
        let mut d_lng = (coord.lng() - self.center.lng()).abs() % 360.0;
        if d_lng > 180.0 {
            d_lng = 360.0 - d_lng;
        }
        d_lat <= self.latitude_delta / 2.0 && d_lng <= self.longitude_delta / 2.0
    }
}

/// A pin on the map for an address.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    coord: Coord,
    title: String,
    url: Option<String>,
}

impl Marker {
    pub fn from_address(address: &Address) -> Self {
        Self {
            coord: address.coord(),
            title: address.address().to_owned(),
            url: address.url().map(|url| url.to_owned()),
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Return the link to open when the marker is selected.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
