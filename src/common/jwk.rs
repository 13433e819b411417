use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64URL, Engine};
use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;
use serde::{Deserialize, Serialize};

/// A single RSA public key in JSON Web Key format
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Jwk {
    #[serde(rename = "use")]
    pub key_use: String,
    pub kty: String,
    pub n: String,
    pub e: String,
}

/// JSON Web Key Set published for signature verification
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Jwks {
    pub keys: Vec<Jwk>,
}

impl Jwk {
    /// Exports the public key components as a signing JWK.
    ///
    /// Component export only yields `kty`/`n`/`e`; the `use` field is set
    /// here since verifiers expect it on published keys. No key identifier
    /// is assigned.
    pub fn from_public_key(public_key: &RsaPublicKey) -> Self {
        Jwk {
            key_use: "sig".to_string(),
            kty: "RSA".to_string(),
            n: BASE64URL.encode(public_key.n().to_bytes_be()),
            e: BASE64URL.encode(public_key.e().to_bytes_be()),
        }
    }
}

impl Jwks {
    /// Wraps the public key in a single-entry key set
    pub fn from_public_key(public_key: &RsaPublicKey) -> Self {
        Jwks {
            keys: vec![Jwk::from_public_key(public_key)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;
    use rsa::RsaPrivateKey;

    fn test_public_key() -> RsaPublicKey {
        // Small modulus keeps the test fast; the exponent is what matters here
        let private_key = RsaPrivateKey::new(&mut OsRng, 512).unwrap();
        RsaPublicKey::from(&private_key)
    }

    #[test]
    fn test_jwk_export_fields() {
        let jwk = Jwk::from_public_key(&test_public_key());

        assert_eq!(jwk.key_use, "sig");
        assert_eq!(jwk.kty, "RSA");
        assert!(!jwk.n.is_empty());
        // Default public exponent 65537 encodes as AQAB
        assert_eq!(jwk.e, "AQAB");
    }

    #[test]
    fn test_jwk_components_are_unpadded_base64url() {
        let jwk = Jwk::from_public_key(&test_public_key());

        for component in [&jwk.n, &jwk.e] {
            assert!(!component.contains('='));
            assert!(!component.contains('+'));
            assert!(!component.contains('/'));
            assert!(BASE64URL.decode(component).is_ok());
        }
    }

    #[test]
    fn test_jwks_serialized_shape() {
        let jwks = Jwks::from_public_key(&test_public_key());
        let serialized = serde_json::to_string(&jwks).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&serialized).unwrap();
        let keys = parsed["keys"].as_array().unwrap();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0]["use"].as_str().unwrap(), "sig");
        assert_eq!(keys[0]["kty"].as_str().unwrap(), "RSA");
        assert!(keys[0].get("kid").is_none());

        // The serialized field name is "use", not the Rust field name
        assert!(serialized.contains("\"use\":\"sig\""));
    }
}
