mod base64url;
pub use base64url::{decode_base64url, encode_base64url};

mod hex_codec;
pub use hex_codec::{decode_hex, encode_hex};

mod jwk;
pub use jwk::Jwk;

mod keypair_hex;
pub use keypair_hex::KeypairHex;

mod point;
pub use point::{
    compress_point, CompressedPoint, UncompressedPoint, COMPRESSED_EVEN_TAG, COMPRESSED_ODD_TAG,
    UNCOMPRESSED_TAG,
};

mod private_scalar;
pub use private_scalar::PrivateScalar;
