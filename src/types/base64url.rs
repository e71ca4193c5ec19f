use crate::Error;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

// RFC 4648 section 5 alphabet; trailing '=' padding is optional on input and
// unused low bits of the final symbol are ignored.
const BASE64URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode base64url text (as found in JWK fields) into bytes
///
/// Only the `-`/`_` alphabet is accepted. Input lengths that no encoder can
/// produce (length mod 4 == 1) are rejected.
pub fn decode_base64url(s: &str) -> Result<Vec<u8>, Error> {
    Ok(BASE64URL.decode(s)?)
}

/// Encode bytes as unpadded base64url text
pub fn encode_base64url(bytes: &[u8]) -> String {
    BASE64URL.encode(bytes)
}
