use super::hex_codec::encode_hex;
use crate::Error;
use derive_more::{AsRef, Deref};

/// SEC1 tag for an uncompressed point
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// SEC1 tag for a compressed point with an even Y coordinate
pub const COMPRESSED_EVEN_TAG: u8 = 0x02;

/// SEC1 tag for a compressed point with an odd Y coordinate
pub const COMPRESSED_ODD_TAG: u8 = 0x03;

/// An uncompressed EC public point: `0x04 || X || Y`, both coordinates big-endian
#[derive(AsRef, Clone, Debug, Deref, Eq, Hash, PartialEq)]
pub struct UncompressedPoint(Vec<u8>);

impl UncompressedPoint {
    /// Validate and wrap raw uncompressed point bytes
    ///
    /// The layout is checked (leading tag and odd length of at least 3), not
    /// whether the coordinates lie on any particular curve.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<UncompressedPoint, Error> {
        Self::try_from_vec(bytes.to_vec())
    }

    fn try_from_vec(bytes: Vec<u8>) -> Result<UncompressedPoint, Error> {
        if bytes.len() < 3 || bytes.len() % 2 == 0 {
            return Err(Error::InvalidPointLength(bytes.len()));
        }
        if bytes[0] != UNCOMPRESSED_TAG {
            return Err(Error::InvalidPointPrefix(bytes[0]));
        }
        Ok(UncompressedPoint(bytes))
    }

    /// Length in bytes of one coordinate
    pub fn coordinate_len(&self) -> usize {
        (self.0.len() - 1) / 2
    }

    /// The big-endian X coordinate
    pub fn x(&self) -> &[u8] {
        &self.0[1..1 + self.coordinate_len()]
    }

    /// The big-endian Y coordinate
    pub fn y(&self) -> &[u8] {
        &self.0[1 + self.coordinate_len()..]
    }

    /// Whether the Y coordinate is odd
    pub fn y_is_odd(&self) -> bool {
        self.0[self.0.len() - 1] & 0x01 == 0x01
    }

    /// SEC1-compress this point.
    ///
    /// The result is the tag and X coordinate, with the tag replaced by
    /// `0x02 | (last byte of Y & 1)`. No field arithmetic is needed since the
    /// parity of a big-endian Y lives in its final byte.
    pub fn compress(&self) -> CompressedPoint {
        let len = self.0.len();
        let mut compressed = self.0[..(1 + len) / 2].to_vec();
        compressed[0] = COMPRESSED_EVEN_TAG | (self.0[len - 1] & 0x01);
        CompressedPoint(compressed)
    }

    /// Render into a hexadecimal string
    pub fn as_hex_string(&self) -> String {
        encode_hex(&self.0)
    }

    /// Export as raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<Vec<u8>> for UncompressedPoint {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<UncompressedPoint, Error> {
        UncompressedPoint::try_from_vec(bytes)
    }
}

/// A SEC1-compressed EC public point: `(0x02 | parity(Y)) || X`
#[derive(AsRef, Clone, Debug, Deref, Eq, Hash, PartialEq)]
pub struct CompressedPoint(Vec<u8>);

impl CompressedPoint {
    /// Whether the Y coordinate this point was compressed from is odd
    pub fn y_is_odd(&self) -> bool {
        self.0[0] == COMPRESSED_ODD_TAG
    }

    /// The big-endian X coordinate
    pub fn x(&self) -> &[u8] {
        &self.0[1..]
    }

    /// Render into a hexadecimal string
    pub fn as_hex_string(&self) -> String {
        encode_hex(&self.0)
    }

    /// Export as raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Compress raw uncompressed point bytes into SEC1 compressed form
pub fn compress_point(uncompressed: &[u8]) -> Result<CompressedPoint, Error> {
    Ok(UncompressedPoint::try_from_bytes(uncompressed)?.compress())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ErrorKind;

    fn point(x: u8, y_last: u8) -> Vec<u8> {
        let mut bytes = vec![UNCOMPRESSED_TAG];
        bytes.extend([x; 32]);
        bytes.extend([0x5a; 31]);
        bytes.push(y_last);
        bytes
    }

    #[test]
    fn test_compress_odd_y() {
        let compressed = compress_point(&point(0x00, 0x03)).unwrap();
        let mut expected = vec![COMPRESSED_ODD_TAG];
        expected.extend([0x00; 32]);
        assert_eq!(compressed.as_bytes(), expected.as_slice());
        assert!(compressed.y_is_odd());
    }

    #[test]
    fn test_compress_even_y() {
        let compressed = compress_point(&point(0xff, 0x04)).unwrap();
        let mut expected = vec![COMPRESSED_EVEN_TAG];
        expected.extend([0xff; 32]);
        assert_eq!(compressed.as_bytes(), expected.as_slice());
        assert!(!compressed.y_is_odd());
    }

    #[test]
    fn test_compress_shape_and_determinism() {
        for y_last in 0..=255_u8 {
            let raw = point(y_last, y_last);
            let a = compress_point(&raw).unwrap();
            let b = compress_point(&raw).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.len(), 33);
            assert!(a[0] == COMPRESSED_EVEN_TAG || a[0] == COMPRESSED_ODD_TAG);
            assert_eq!(a.x(), &raw[1..33]);
        }
    }

    #[test]
    fn test_compress_generator_point() {
        let g = hex::decode(concat!(
            "04",
            "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
            "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
        ))
        .unwrap();
        let point = UncompressedPoint::try_from_bytes(&g).unwrap();
        assert_eq!(point.coordinate_len(), 32);
        assert_eq!(point.y()[31], 0xf5);
        assert_eq!(
            point.compress().as_hex_string(),
            "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
        );
    }

    #[test]
    fn test_compress_other_coordinate_sizes() {
        // P-384 sized point
        let mut raw = vec![UNCOMPRESSED_TAG];
        raw.extend([0x11; 48]);
        raw.extend([0x22; 48]);
        let compressed = compress_point(&raw).unwrap();
        assert_eq!(compressed.len(), 49);
        assert_eq!(compressed[0], COMPRESSED_EVEN_TAG);

        let smallest = compress_point(&[UNCOMPRESSED_TAG, 0x07, 0x09]).unwrap();
        assert_eq!(smallest.as_bytes(), &[COMPRESSED_ODD_TAG, 0x07]);
    }

    #[test]
    fn test_compress_rejects_malformed() {
        let mut even = point(0x01, 0x01);
        let _ = even.pop();
        assert_eq!(even.len(), 64);
        assert!(matches!(
            compress_point(&even),
            Err(Error::InvalidPointLength(64))
        ));

        let mut wrong_tag = point(0x01, 0x01);
        wrong_tag[0] = COMPRESSED_ODD_TAG;
        let err = compress_point(&wrong_tag).unwrap_err();
        assert!(matches!(err, Error::InvalidPointPrefix(0x03)));
        assert_eq!(err.kind(), ErrorKind::InvalidPoint);

        assert!(compress_point(&[UNCOMPRESSED_TAG]).is_err());
        assert!(compress_point(&[]).is_err());
    }
}
