//! Signing identity loading.

use crate::errors::{AppError, Result};
use serde::Deserialize;
use solana_sdk::signature::Keypair;

/// JSON byte-array secret format, e.g. `[12,34,...]` (64 entries).
#[derive(Deserialize)]
struct SecretBytes(Vec<u8>);

/// Decode a keypair from secret material in either base58 or JSON
/// byte-array form. Tries base58 first, matching the more common format.
///
/// An undecodable secret is fatal; the process cannot proceed without a
/// signing identity.
pub fn load_keypair(secret: &str) -> Result<Keypair> {
    if let Ok(bytes) = bs58::decode(secret.trim()).into_vec() {
        if let Ok(keypair) = Keypair::try_from(bytes.as_slice()) {
            return Ok(keypair);
        }
    }
    let parsed: SecretBytes = serde_json::from_str(secret)
        .map_err(|_| AppError::Wallet("expected base58 or a JSON byte array".into()))?;
    Keypair::try_from(parsed.0.as_slice())
        .map_err(|_| AppError::Wallet("secret bytes do not form a valid keypair".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signer::Signer;

    #[test]
    fn loads_base58_secret() {
        let keypair = Keypair::new();
        let encoded = bs58::encode(keypair.to_bytes()).into_string();
        let loaded = load_keypair(&encoded).expect("base58 secret should load");
        assert_eq!(loaded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn loads_json_array_secret() {
        let keypair = Keypair::new();
        let encoded = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();
        let loaded = load_keypair(&encoded).expect("json secret should load");
        assert_eq!(loaded.pubkey(), keypair.pubkey());
    }

    #[test]
    fn rejects_garbage_secret() {
        assert!(load_keypair("not-a-key").is_err());
        assert!(load_keypair("[1,2,3]").is_err());
    }
}
