use crate::coord::Coord;
use crate::nearest::Located;
use serde::{Deserialize, Deserializer, Serialize};

/// An address record, as served by the address API.
///
/// Fields other than `latitude`, `longitude`, `address` and `url` are
/// ignored when decoding.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Address {
    #[serde(deserialize_with = "number_or_numeric_string")]
    latitude: f64,
    #[serde(deserialize_with = "number_or_numeric_string")]
    longitude: f64,
    address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl Address {
    /// Create a new `Address`.
    pub fn new<S: Into<String>>(
        coord: Coord,
        address: S,
        url: Option<String>,
    ) -> Self {
        Self {
            latitude: coord.lat(),
            longitude: coord.lng(),
            address: address.into(),
            url,
        }
    }

    /// Return the human-readable address label.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Return the link associated with this address, if any.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Decode a list of addresses from a JSON array.
    ///
    /// # Example
    /// ```rust
    /// use nearaddr::Address;
    /// let json = r#"[{"latitude": -19.92, "longitude": "-43.94", "address": "Rua A"}]"#;
    /// let addresses = Address::list_from_json(json).unwrap();
    /// assert_eq!(addresses[0].address(), "Rua A");
    /// ```
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Located for Address {
    fn coord(&self) -> Coord {
        Coord::new(self.latitude, self.longitude)
    }
}

/// Mock APIs frequently serve coordinates as strings, so accept both.
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "expected a number or a numeric string, found {:?}",
                s
            ))
        }),
    }
}
