//! The key provider seam: the two operations this crate needs from whatever
//! actually holds the elliptic-curve keys.

use crate::{Error, Jwk};
use async_trait::async_trait;
use derive_more::Display;
use std::fmt;

#[cfg(feature = "software")]
mod software;
#[cfg(feature = "software")]
pub use software::{SoftwareKey, SoftwareProvider};

/// Key generation algorithm
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Elliptic Curve Digital Signature Algorithm
    #[display(fmt = "ECDSA")]
    Ecdsa,

    /// Elliptic Curve Diffie-Hellman
    #[display(fmt = "ECDH")]
    Ecdh,
}

/// A named NIST prime curve
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum NamedCurve {
    /// NIST P-256 (secp256r1)
    #[display(fmt = "P-256")]
    P256,

    /// NIST P-384 (secp384r1)
    #[display(fmt = "P-384")]
    P384,

    /// NIST P-521 (secp521r1)
    #[display(fmt = "P-521")]
    P521,
}

impl NamedCurve {
    /// Byte length of one coordinate (and of a private scalar)
    pub fn coordinate_len(&self) -> usize {
        match self {
            NamedCurve::P256 => 32,
            NamedCurve::P384 => 48,
            NamedCurve::P521 => 66,
        }
    }

    /// Byte length of an uncompressed point on this curve
    pub fn uncompressed_len(&self) -> usize {
        1 + 2 * self.coordinate_len()
    }
}

/// Parameters for a key generation request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeygenParams {
    /// The algorithm the key is meant for
    pub algorithm: Algorithm,

    /// The curve to generate on
    pub named_curve: NamedCurve,
}

impl Default for KeygenParams {
    fn default() -> KeygenParams {
        KeygenParams {
            algorithm: Algorithm::Ecdsa,
            named_curve: NamedCurve::P256,
        }
    }
}

/// What a generated key may be used for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyUsage {
    /// Signing (private key)
    Sign,

    /// Verification (public key)
    Verify,

    /// Key derivation (private key, ECDH)
    DeriveKey,

    /// Bit derivation (private key, ECDH)
    DeriveBits,
}

/// Export formats a provider may offer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Bare bytes; for an EC public key this is the uncompressed point
    Raw,

    /// JSON Web Key
    Jwk,
}

/// The output of a key export
#[derive(Debug)]
pub enum ExportedKey {
    /// Bytes from a `Raw` export
    Raw(Vec<u8>),

    /// Record from a `Jwk` export
    Jwk(Jwk),
}

impl ExportedKey {
    /// Take the bytes of a `Raw` export
    pub fn into_raw(self) -> Result<Vec<u8>, Error> {
        match self {
            ExportedKey::Raw(bytes) => Ok(bytes),
            ExportedKey::Jwk(_) => Err(Error::Export(
                "provider returned a JWK for a raw export".to_owned(),
            )),
        }
    }

    /// Take the record of a `Jwk` export
    pub fn into_jwk(self) -> Result<Jwk, Error> {
        match self {
            ExportedKey::Jwk(jwk) => Ok(jwk),
            ExportedKey::Raw(_) => Err(Error::Export(
                "provider returned raw bytes for a JWK export".to_owned(),
            )),
        }
    }
}

/// A freshly generated public/private key handle pair
#[derive(Debug)]
pub struct Keypair<K> {
    /// Public half
    pub public_key: K,

    /// Private half
    pub private_key: K,
}

/// The operations this crate needs from an elliptic-curve key provider
///
/// Key handles are opaque; the only way to get at key material is `export_key`.
#[async_trait]
pub trait KeyProvider: fmt::Debug + Send + Sync {
    /// Opaque key handle
    type Key: fmt::Debug + Send + Sync;

    /// Generate a new keypair
    async fn generate_key(
        &self,
        params: &KeygenParams,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<Keypair<Self::Key>, Error>;

    /// Export a key in the given format
    async fn export_key(&self, format: ExportFormat, key: &Self::Key)
        -> Result<ExportedKey, Error>;
}
