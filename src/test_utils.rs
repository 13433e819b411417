use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64URL, Engine};
use rsa::{BigUint, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};

use crate::common::jwk::Jwk;

/// ASN.1 DigestInfo prefix for SHA-256
const SHA256_PREFIX: [u8; 19] = [
    0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01,
    0x05, 0x00, 0x04, 0x20,
];

/// Rebuilds an RSA public key from the base64url components of a JWK
pub fn public_key_from_jwk(jwk: &Jwk) -> Result<RsaPublicKey, Box<dyn std::error::Error>> {
    let n = BASE64URL.decode(&jwk.n)?;
    let e = BASE64URL.decode(&jwk.e)?;
    let public_key = RsaPublicKey::new(BigUint::from_bytes_be(&n), BigUint::from_bytes_be(&e))?;
    Ok(public_key)
}

/// Signs a message the way the token service does (PKCS#1 v1.5, SHA-256)
pub fn sign_message(
    private_key: &RsaPrivateKey,
    message: &str,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    // Hash the message
    let mut hasher = Sha256::new();
    hasher.update(message.as_bytes());
    let hash = hasher.finalize();

    // Sign the hash
    let signature = private_key.sign(
        Pkcs1v15Sign {
            hash_len: Some(32),
            prefix: SHA256_PREFIX.into(),
        },
        &hash,
    )?;
    Ok(signature)
}

/// Verifies a signature against a message using the public key
pub fn verify_signature(public_key: &RsaPublicKey, message: &str, signature: &[u8]) -> bool {
    let mut hasher = Sha256::new();
    hasher.update(message.as_bytes());
    let hash = hasher.finalize();

    public_key
        .verify(
            Pkcs1v15Sign {
                hash_len: Some(32),
                prefix: SHA256_PREFIX.into(),
            },
            &hash,
            signature,
        )
        .is_ok()
}
