use crate::Error;

/// Render bytes as a lowercase hex string, two characters per byte
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string (either case) back into bytes
pub fn decode_hex(s: &str) -> Result<Vec<u8>, Error> {
    Ok(hex::decode(s)?)
}
