use crate::coord::Coord;
use crate::BoxFuture;
use thiserror::Error;

/// Resolves the current position of the device, which is used as the
/// reference point of a nearest address lookup.
pub trait LocationProvider: Send + Sync {
    /// Return the current position.
    fn current_location(&self) -> BoxFuture<'_, Result<Coord, LocationError>>;
}

/// A `LocationProvider` which always reports the same position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedLocation(Coord);

impl FixedLocation {
    pub fn new(coord: Coord) -> Self {
        Self(coord)
    }
}

impl LocationProvider for FixedLocation {
    fn current_location(&self) -> BoxFuture<'_, Result<Coord, LocationError>> {
        let coord = self.0;
        Box::pin(async move { Ok(coord) })
    }
}

/// A `LocationProvider` for which the user refused location access.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeniedLocation;

impl LocationProvider for DeniedLocation {
    fn current_location(&self) -> BoxFuture<'_, Result<Coord, LocationError>> {
        Box::pin(async { Err(LocationError::PermissionDenied) })
    }
}

/// Errors that can occur when resolving the current position.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LocationError {
    /// The user did not grant access to the device location.
    #[error("Permission to access the location was denied")]
    PermissionDenied,
    /// The position could not be determined.
    #[error("The current location is unavailable: {msg}")]
    Unavailable { msg: String },
}
