//! API key model for write authentication.
//!
//! The configured secret is kept only as a SHA-256 digest. Presented keys are
//! hashed the same way and the digests are compared.

use sha2::{Digest, Sha256};

/// The shared secret that unlocks the write endpoints.
#[derive(Clone)]
pub struct ApiKey {
    /// SHA-256 digest of the configured secret
    key_hash: [u8; 32],
}

impl ApiKey {
    pub fn new(secret: &str) -> Self {
        Self {
            key_hash: hash(secret),
        }
    }

    /// Whether `presented` is the configured secret.
    pub fn matches(&self, presented: &str) -> bool {
        hash(presented) == self.key_hash
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey").finish_non_exhaustive()
    }
}

fn hash(value: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_only_the_configured_secret() {
        let key = ApiKey::new("secret-key");
        assert!(key.matches("secret-key"));
        assert!(!key.matches("secret-key "));
        assert!(!key.matches(""));
    }

    #[test]
    fn test_debug_does_not_leak_digest() {
        let rendered = format!("{:?}", ApiKey::new("secret-key"));
        assert_eq!(rendered, "ApiKey { .. }");
    }
}
