// Copyright 2024 p256-keymat Developers
// Licensed under the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>
// This file may not be copied, modified, or distributed except according to those terms.

//! This crate generates NIST P-256 keypairs and renders their key material
//! as hex: the SEC1-compressed public point, the uncompressed public point,
//! and the raw private scalar.
//!
//! Key generation itself is delegated to a [`KeyProvider`]. The default
//! `software` feature supplies [`SoftwareProvider`], built on the RustCrypto
//! `p256` crate.

#![deny(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    unused_results,
    unused_lifetimes,
    unused_labels,
    unused_extern_crates,
    non_ascii_idents,
    keyword_idents,
    deprecated_in_future,
    unstable_features,
    single_use_lifetimes,
    unsafe_code,
    unreachable_pub,
    missing_docs,
    missing_copy_implementations
)]
#![deny(clippy::string_slice)]

mod error;
pub use error::{Error, ErrorKind};

mod keygen;
pub use keygen::KeypairGenerator;
#[cfg(feature = "software")]
pub use keygen::{generate_keypair, verify_keypair};

pub mod provider;
pub use provider::{
    Algorithm, ExportFormat, ExportedKey, KeyProvider, KeyUsage, KeygenParams, Keypair, NamedCurve,
};
#[cfg(feature = "software")]
pub use provider::{SoftwareKey, SoftwareProvider};

mod types;
pub use types::{
    compress_point, decode_base64url, decode_hex, encode_base64url, encode_hex, CompressedPoint,
    Jwk, KeypairHex, PrivateScalar, UncompressedPoint, COMPRESSED_EVEN_TAG, COMPRESSED_ODD_TAG,
    UNCOMPRESSED_TAG,
};
