// OpenAI API client module
// Author: kelexine (https://github.com/kelexine)

mod client;

pub use client::OpenAiClient;

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Environment variable holding the server-side OpenAI secret.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Server-held bearer credential for the upstream API.
///
/// Loaded once at startup and never sent to callers. The buffer is wiped on
/// drop and `Debug` never prints it.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the key from `OPENAI_API_KEY`.
    ///
    /// An unset variable yields an empty key; the upstream rejects it with a
    /// 401 that is relayed like any other upstream error.
    pub fn from_env() -> Self {
        Self(std::env::var(API_KEY_ENV).unwrap_or_default())
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_secret() {
        let key = ApiKey::new("sk-proj-abc123");
        let printed = format!("{:?}", key);
        assert!(!printed.contains("sk-proj-abc123"));
        assert!(printed.contains("REDACTED"));
    }

    #[test]
    fn test_blank_key_is_empty() {
        assert!(ApiKey::new("").is_empty());
        assert!(ApiKey::new("  ").is_empty());
        assert!(!ApiKey::new("sk-test").is_empty());
    }
}
