use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroize;

/// A generated keypair rendered as lowercase hex strings
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypairHex {
    /// SEC1-compressed public point
    pub public: String,

    /// Uncompressed public point (`04 || X || Y`)
    pub public_uncompressed: String,

    /// Private scalar `d`
    pub private: String,
}

impl fmt::Debug for KeypairHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("KeypairHex")
            .field("public", &self.public)
            .field("public_uncompressed", &self.public_uncompressed)
            .field("private", &"<redacted>")
            .finish()
    }
}

impl Drop for KeypairHex {
    fn drop(&mut self) {
        self.private.zeroize();
    }
}
