use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use zeroize::Zeroize;

/// An elliptic-curve JSON Web Key, as handed out by a key provider's
/// structured export.
///
/// Only `d` is consumed by this crate. Everything else is carried along.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    /// Key type, "EC" for elliptic-curve keys
    pub kty: String,

    /// Curve name, e.g. "P-256"
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub crv: Option<String>,

    /// Base64url X coordinate
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub x: Option<String>,

    /// Base64url Y coordinate
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub y: Option<String>,

    /// Base64url private scalar (only present on private keys)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub d: Option<String>,

    /// Any other members (alg, key_ops, ext, ...)
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Jwk {
    /// Parse from a JSON string
    pub fn try_from_json(json: &str) -> Result<Jwk, crate::Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether this JWK carries private material
    pub fn is_private(&self) -> bool {
        self.d.is_some()
    }
}

impl fmt::Debug for Jwk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("Jwk")
            .field("kty", &self.kty)
            .field("crv", &self.crv)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("d", &self.d.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Drop for Jwk {
    fn drop(&mut self) {
        if let Some(d) = self.d.as_mut() {
            d.zeroize();
        }
    }
}
