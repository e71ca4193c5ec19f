use crate::provider::{ExportFormat, KeyProvider, KeyUsage, KeygenParams};
use crate::{Error, KeypairHex, PrivateScalar, UncompressedPoint};
use tracing::{event, span, Instrument, Level};

#[cfg(feature = "software")]
use crate::provider::SoftwareProvider;

// Requested alongside export so the provider treats the key as a signing key.
const USAGES: [KeyUsage; 2] = [KeyUsage::Sign, KeyUsage::Verify];

/// Generates keypairs through a [`KeyProvider`] and renders them as hex
///
/// Each call to `generate_keypair()` is independent: there is no shared state,
/// so concurrent calls produce unrelated keys. Provider failures are returned
/// as-is and never retried.
#[derive(Debug)]
pub struct KeypairGenerator<P> {
    provider: P,
    params: KeygenParams,
}

impl<P: KeyProvider> KeypairGenerator<P> {
    /// Create a generator for ECDSA P-256 keys
    pub fn new(provider: P) -> KeypairGenerator<P> {
        Self::with_params(provider, KeygenParams::default())
    }

    /// Create a generator with explicit parameters
    pub fn with_params(provider: P, params: KeygenParams) -> KeypairGenerator<P> {
        KeypairGenerator { provider, params }
    }

    /// The underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The parameters passed on every generation request
    pub fn params(&self) -> &KeygenParams {
        &self.params
    }

    /// Generate a fresh keypair, returning the compressed public point,
    /// the uncompressed public point, and the private scalar as hex.
    pub async fn generate_keypair(&self) -> Result<KeypairHex, Error> {
        let span = span!(
            Level::DEBUG,
            "generate_keypair",
            curve = %self.params.named_curve
        );
        self.generate_keypair_inner().instrument(span).await
    }

    async fn generate_keypair_inner(&self) -> Result<KeypairHex, Error> {
        let coordinate_len = self.params.named_curve.coordinate_len();

        event!(Level::DEBUG, "Requesting keypair from provider");
        let keypair = self
            .provider
            .generate_key(&self.params, true, &USAGES)
            .await?;

        let raw_public = self
            .provider
            .export_key(ExportFormat::Raw, &keypair.public_key)
            .await?
            .into_raw()?;
        let uncompressed = UncompressedPoint::try_from(raw_public)?;
        if uncompressed.coordinate_len() != coordinate_len {
            return Err(Error::InvalidPointLength(uncompressed.len()));
        }
        event!(
            Level::TRACE,
            public_uncompressed = %uncompressed.as_hex_string(),
            "Exported public key"
        );

        // EC private keys cannot be exported raw; go through the JWK.
        let jwk = self
            .provider
            .export_key(ExportFormat::Jwk, &keypair.private_key)
            .await?
            .into_jwk()?;
        let scalar = PrivateScalar::from_jwk(&jwk)?;
        if scalar.len() != coordinate_len {
            return Err(Error::Export(format!(
                "private scalar is {} bytes, expected {}",
                scalar.len(),
                coordinate_len
            )));
        }
        event!(Level::DEBUG, "Exported private key");

        let compressed = uncompressed.compress();
        event!(
            Level::TRACE,
            public = %compressed.as_hex_string(),
            "Compressed public key"
        );

        Ok(KeypairHex {
            public: compressed.as_hex_string(),
            public_uncompressed: uncompressed.as_hex_string(),
            private: scalar.as_hex_string(),
        })
    }
}

/// Generate a P-256 keypair with the in-process [`SoftwareProvider`]
#[cfg(feature = "software")]
pub async fn generate_keypair() -> Result<KeypairHex, Error> {
    KeypairGenerator::new(SoftwareProvider::new())
        .generate_keypair()
        .await
}

/// Check that the three hex strings of a P-256 keypair belong together
///
/// The public point is re-derived from the private scalar and compared to
/// both public encodings, and the compressed form must decompress back to
/// the uncompressed one.
#[cfg(feature = "software")]
pub fn verify_keypair(keypair: &KeypairHex) -> Result<(), Error> {
    use crate::decode_hex;
    use p256::elliptic_curve::sec1::ToEncodedPoint;
    use zeroize::Zeroizing;

    let scalar = Zeroizing::new(decode_hex(&keypair.private)?);
    let secret = p256::SecretKey::from_slice(&scalar)?;

    let uncompressed = UncompressedPoint::try_from(decode_hex(&keypair.public_uncompressed)?)?;
    let derived = secret.public_key().to_encoded_point(false);
    if derived.as_bytes() != uncompressed.as_bytes() {
        return Err(Error::KeypairMismatch);
    }

    let compressed = decode_hex(&keypair.public)?;
    if compressed.as_slice() != uncompressed.compress().as_bytes() {
        return Err(Error::KeypairMismatch);
    }
    let decompressed = p256::PublicKey::from_sec1_bytes(&compressed)?;
    if decompressed.to_encoded_point(false).as_bytes() != uncompressed.as_bytes() {
        return Err(Error::KeypairMismatch);
    }

    Ok(())
}
