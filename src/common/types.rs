use serde::{Deserialize, Serialize};

/// The artifact written to keys.json, consumed as env-style values
/// by the token-issuing service
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(rename = "JWT_PRIVATE_KEY")]
    pub jwt_private_key: String,
    #[serde(rename = "JWKS")]
    pub jwks: String,
}
