use crate::location::LocationError;
use thiserror::Error;

/// Encapsulates all errors that can occur while looking up the nearest
/// address.
#[derive(Debug, Error)]
pub enum Error {
    /// The lookup was attempted without logging in first.
    #[error("Not logged in")]
    NotLoggedIn,
    /// The reference position could not be resolved.
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
    /// An error which originated from the underlying HTTP library.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The address API answered with a non-success status code.
    #[error("The address API returned HTTP status {status}")]
    Status { status: reqwest::StatusCode },
    /// The address API answered with something other than a list of
    /// addresses.
    #[error("Could not parse the list of addresses: {0}")]
    ParseAddresses(#[from] serde_json::Error),
    /// An error reading addresses from some other kind of source, such as
    /// a file.
    #[error("Could not read the list of addresses: {0}")]
    Read(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    /// Return true if this error was caused by a missing login.
    pub fn is_not_logged_in(&self) -> bool {
        matches!(self, Self::NotLoggedIn)
    }

    /// Return true if this error was caused by the location provider.
    pub fn is_location(&self) -> bool {
        matches!(self, Self::Location(_))
    }

    /// Return true if this error occurred while fetching or decoding the
    /// list of addresses.
    pub fn is_fetch(&self) -> bool {
        match self {
            Self::Http(_)
            | Self::Status { .. }
            | Self::ParseAddresses(_)
            | Self::Read(_) => true,
            Self::NotLoggedIn | Self::Location(_) => false,
        }
    }

    /// Return the location error encapsulated by this error, if any.
    pub fn location_error(&self) -> Option<&LocationError> {
        match self {
            Self::Location(err) => Some(err),
            _ => None,
        }
    }
}
