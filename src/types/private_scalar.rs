use super::base64url::decode_base64url;
use super::hex_codec::encode_hex;
use super::jwk::Jwk;
use crate::Error;
use zeroize::Zeroizing;

/// The raw private key value `d`, big-endian.
///
/// The bytes are zeroed when this is dropped.
pub struct PrivateScalar(Zeroizing<Vec<u8>>);

impl PrivateScalar {
    /// Pull the scalar out of a private JWK by base64url-decoding its `d` member
    pub fn from_jwk(jwk: &Jwk) -> Result<PrivateScalar, Error> {
        let d = jwk.d.as_deref().ok_or(Error::MissingJwkField("d"))?;
        Ok(PrivateScalar(Zeroizing::new(decode_base64url(d)?)))
    }

    /// Wrap raw scalar bytes
    pub fn from_bytes(bytes: &[u8]) -> PrivateScalar {
        PrivateScalar(Zeroizing::new(bytes.to_vec()))
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the scalar has no bytes at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render into a hexadecimal string
    ///
    /// WARNING: the returned string holds the secret and is not zeroized for you.
    pub fn as_hex_string(&self) -> String {
        encode_hex(&self.0)
    }

    /// Export as raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for PrivateScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateScalar(<{} bytes redacted>)", self.0.len())
    }
}
