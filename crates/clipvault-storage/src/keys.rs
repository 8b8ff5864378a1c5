//! Storage key derivation.
//!
//! Key format: `{prefix}/{base64url-entropy}.{extension}`. The encoded part
//! carries 256 bits of OS entropy, so keys are unguessable and collisions
//! are not handled anywhere downstream.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::traits::{StorageError, StorageResult};

const KEY_ENTROPY_BYTES: usize = 32;

/// Derive a fresh storage key. Fails loudly if the OS random source errors;
/// there is no weaker fallback.
pub fn derive_object_key(prefix: &str, extension: &str) -> StorageResult<String> {
    let mut entropy = [0u8; KEY_ENTROPY_BYTES];
    OsRng
        .try_fill_bytes(&mut entropy)
        .map_err(|e| StorageError::Entropy(e.to_string()))?;
    Ok(format!(
        "{}/{}.{}",
        prefix,
        URL_SAFE_NO_PAD.encode(entropy),
        extension
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn key_has_prefix_and_extension() {
        let key = derive_object_key("landscape", "mp4").unwrap();
        assert!(key.starts_with("landscape/"));
        assert!(key.ends_with(".mp4"));
        // 32 bytes of base64url without padding is 43 characters.
        let encoded = &key["landscape/".len()..key.len() - ".mp4".len()];
        assert_eq!(encoded.len(), 43);
        assert!(!encoded.contains('='));
        assert!(!encoded.contains('+'));
    }

    #[test]
    fn ten_thousand_keys_are_distinct() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let key = derive_object_key("other", "mp4").unwrap();
            assert!(seen.insert(key), "derived a duplicate key");
        }
    }
}
