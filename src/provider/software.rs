use super::{
    Algorithm, ExportFormat, ExportedKey, KeyProvider, KeyUsage, KeygenParams, Keypair, NamedCurve,
};
use crate::{Error, Jwk};
use async_trait::async_trait;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::{PublicKey, SecretKey};
use rand_core::OsRng;
use std::fmt;
use tracing::{event, Level};

/// Key handle issued by [`SoftwareProvider`]
pub enum SoftwareKey {
    /// Public half
    Public(PublicKey),

    /// Private half
    Private {
        /// The secret, zeroized by p256 on drop
        secret: SecretKey,

        /// Whether the secret may leave the provider
        extractable: bool,
    },
}

impl fmt::Debug for SoftwareKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            SoftwareKey::Public(pk) => f.debug_tuple("Public").field(pk).finish(),
            SoftwareKey::Private { extractable, .. } => f
                .debug_struct("Private")
                .field("extractable", extractable)
                .finish_non_exhaustive(),
        }
    }
}

/// In-process P-256 key provider built on the RustCrypto `p256` crate
///
/// Behaves like a platform crypto API: private keys cannot be exported raw,
/// only as JWK, and only when generated as extractable.
#[derive(Clone, Copy, Debug, Default)]
pub struct SoftwareProvider;

impl SoftwareProvider {
    /// Create a new provider
    pub fn new() -> SoftwareProvider {
        SoftwareProvider
    }
}

#[async_trait]
impl KeyProvider for SoftwareProvider {
    type Key = SoftwareKey;

    async fn generate_key(
        &self,
        params: &KeygenParams,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<Keypair<SoftwareKey>, Error> {
        if params.algorithm != Algorithm::Ecdsa {
            return Err(Error::UnsupportedAlgorithm(params.algorithm.to_string()));
        }
        if params.named_curve != NamedCurve::P256 {
            return Err(Error::UnsupportedCurve(params.named_curve));
        }
        if usages.is_empty() {
            return Err(Error::KeyGeneration("no key usages requested".to_owned()));
        }
        if let Some(usage) = usages
            .iter()
            .find(|u| !matches!(u, KeyUsage::Sign | KeyUsage::Verify))
        {
            return Err(Error::KeyGeneration(format!(
                "usage {:?} is not valid for ECDSA",
                usage
            )));
        }

        let secret = SecretKey::random(&mut OsRng);
        let public = secret.public_key();
        event!(Level::TRACE, extractable, "Generated P-256 keypair");

        Ok(Keypair {
            public_key: SoftwareKey::Public(public),
            private_key: SoftwareKey::Private {
                secret,
                extractable,
            },
        })
    }

    async fn export_key(
        &self,
        format: ExportFormat,
        key: &SoftwareKey,
    ) -> Result<ExportedKey, Error> {
        match (format, key) {
            (ExportFormat::Raw, SoftwareKey::Public(pk)) => Ok(ExportedKey::Raw(
                pk.to_encoded_point(false).as_bytes().to_vec(),
            )),
            (ExportFormat::Raw, SoftwareKey::Private { .. }) => Err(Error::UnsupportedExportFormat),
            (ExportFormat::Jwk, SoftwareKey::Public(pk)) => {
                Ok(ExportedKey::Jwk(Jwk::try_from_json(&pk.to_jwk_string())?))
            }
            (
                ExportFormat::Jwk,
                SoftwareKey::Private {
                    extractable: false, ..
                },
            ) => Err(Error::NotExtractable),
            (ExportFormat::Jwk, SoftwareKey::Private { secret, .. }) => {
                let json = secret.to_jwk_string();
                Ok(ExportedKey::Jwk(Jwk::try_from_json(&json)?))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{decode_base64url, ErrorKind, PrivateScalar};

    const USAGES: [KeyUsage; 2] = [KeyUsage::Sign, KeyUsage::Verify];

    #[tokio::test]
    async fn test_raw_public_export_is_uncompressed() {
        let provider = SoftwareProvider::new();
        let keypair = provider
            .generate_key(&KeygenParams::default(), true, &USAGES)
            .await
            .unwrap();
        let raw = provider
            .export_key(ExportFormat::Raw, &keypair.public_key)
            .await
            .unwrap()
            .into_raw()
            .unwrap();
        assert_eq!(raw.len(), 65);
        assert_eq!(raw[0], 0x04);
    }

    #[tokio::test]
    async fn test_private_export_paths() {
        let provider = SoftwareProvider::new();
        let keypair = provider
            .generate_key(&KeygenParams::default(), true, &USAGES)
            .await
            .unwrap();

        let err = provider
            .export_key(ExportFormat::Raw, &keypair.private_key)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedExportFormat));

        let jwk = provider
            .export_key(ExportFormat::Jwk, &keypair.private_key)
            .await
            .unwrap()
            .into_jwk()
            .unwrap();
        assert_eq!(jwk.kty, "EC");
        assert_eq!(jwk.crv.as_deref(), Some("P-256"));
        let scalar = PrivateScalar::from_jwk(&jwk).unwrap();
        assert_eq!(scalar.len(), 32);

        // The JWK's x/y agree with the raw public export
        let raw = provider
            .export_key(ExportFormat::Raw, &keypair.public_key)
            .await
            .unwrap()
            .into_raw()
            .unwrap();
        let x = decode_base64url(jwk.x.as_deref().unwrap()).unwrap();
        let y = decode_base64url(jwk.y.as_deref().unwrap()).unwrap();
        assert_eq!(&raw[1..33], x.as_slice());
        assert_eq!(&raw[33..], y.as_slice());
    }

    #[tokio::test]
    async fn test_public_jwk_has_no_scalar() {
        let provider = SoftwareProvider::new();
        let keypair = provider
            .generate_key(&KeygenParams::default(), true, &USAGES)
            .await
            .unwrap();
        let jwk = provider
            .export_key(ExportFormat::Jwk, &keypair.public_key)
            .await
            .unwrap()
            .into_jwk()
            .unwrap();
        assert!(!jwk.is_private());
    }

    #[tokio::test]
    async fn test_non_extractable_private_key() {
        let provider = SoftwareProvider::new();
        let keypair = provider
            .generate_key(&KeygenParams::default(), false, &USAGES)
            .await
            .unwrap();
        let err = provider
            .export_key(ExportFormat::Jwk, &keypair.private_key)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotExtractable));
        assert_eq!(err.kind(), ErrorKind::Export);
    }

    #[tokio::test]
    async fn test_generate_rejections() {
        let provider = SoftwareProvider::new();

        let p384 = KeygenParams {
            named_curve: NamedCurve::P384,
            ..Default::default()
        };
        let err = provider.generate_key(&p384, true, &USAGES).await.unwrap_err();
        assert!(matches!(err, Error::UnsupportedCurve(NamedCurve::P384)));

        let ecdh = KeygenParams {
            algorithm: Algorithm::Ecdh,
            ..Default::default()
        };
        let err = provider.generate_key(&ecdh, true, &USAGES).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyGeneration);

        let err = provider
            .generate_key(&KeygenParams::default(), true, &[])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyGeneration);

        let err = provider
            .generate_key(&KeygenParams::default(), true, &[KeyUsage::DeriveBits])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyGeneration);
    }
}
