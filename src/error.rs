use crate::NamedCurve;
use thiserror::Error;

/// Errors that can occur in the p256-keymat crate
#[derive(Error, Debug)]
pub enum Error {
    /// Base64url decoding error
    #[error("Base64url Decoding Error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Curve error from the p256 backend
    #[cfg(feature = "software")]
    #[error("Curve Error: {0}")]
    Crypto(#[from] p256::elliptic_curve::Error),

    /// Export Error
    #[error("Key export failed: {0}")]
    Export(String),

    /// Hex string decoding error
    #[error("Hex Decode Error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// Uncompressed point has a length that cannot hold two coordinates
    #[error("Invalid point length: {0} bytes")]
    InvalidPointLength(usize),

    /// Uncompressed point does not start with 0x04
    #[error("Invalid point prefix: 0x{0:02x}")]
    InvalidPointPrefix(u8),

    /// Key generation error
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// The public and private parts do not belong together
    #[error("Keys are not a valid pair")]
    KeypairMismatch,

    /// Exported JWK lacks a required field
    #[error("JWK is missing field \"{0}\"")]
    MissingJwkField(&'static str),

    /// Key was generated as non-extractable
    #[error("Key is not extractable")]
    NotExtractable,

    /// Serialization error
    #[error("JSON (de)serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Unsupported Algorithm
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Unsupported Curve
    #[error("Unsupported curve: {0}")]
    UnsupportedCurve(NamedCurve),

    /// Requested export format is not available for this key
    #[error("Unsupported export format for this key")]
    UnsupportedExportFormat,
}

/// The broad class an [`Error`] belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed hex or base64url input
    Decode,

    /// Malformed uncompressed point
    InvalidPoint,

    /// Key material that is invalid or does not match its counterpart
    InvalidKey,

    /// The provider could not produce a keypair
    KeyGeneration,

    /// The provider could not export a key in the requested format
    Export,
}

impl Error {
    /// Which kind of failure this is
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Base64(_) | Error::HexDecode(_) => ErrorKind::Decode,
            Error::InvalidPointLength(_) | Error::InvalidPointPrefix(_) => ErrorKind::InvalidPoint,
            #[cfg(feature = "software")]
            Error::Crypto(_) => ErrorKind::InvalidKey,
            Error::KeypairMismatch => ErrorKind::InvalidKey,
            Error::KeyGeneration(_) | Error::UnsupportedAlgorithm(_) | Error::UnsupportedCurve(_) => {
                ErrorKind::KeyGeneration
            }
            Error::Export(_)
            | Error::MissingJwkField(_)
            | Error::NotExtractable
            | Error::SerdeJson(_)
            | Error::UnsupportedExportFormat => ErrorKind::Export,
        }
    }
}
