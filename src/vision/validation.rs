// Inbound image validation
// Author: kelexine (https://github.com/kelexine)

use super::models::{validate_image_size, ImageFormat};
use crate::config::VisionConfig;
use crate::error::{ProxyError, Result};
use base64::Engine;
use tracing::debug;

/// Check a base64 payload against the configured guard.
///
/// The size check always runs, using the decoded length implied by the base64
/// length. Decoding and format sniffing only happen in strict mode.
pub fn validate_image(image: &str, config: &VisionConfig) -> Result<()> {
    validate_image_size(estimated_decoded_len(image), config.max_image_bytes)
        .map_err(ProxyError::ImageTooLarge)?;

    if !config.strict_validation {
        return Ok(());
    }

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(image)
        .map_err(|e| ProxyError::InvalidImage(format!("Invalid base64 image data: {}", e)))?;

    let format = ImageFormat::from_magic_bytes(&decoded).ok_or_else(|| {
        ProxyError::InvalidImage("Could not detect image format from data".to_string())
    })?;

    debug!(
        "Image passed strict validation: {} ({} bytes)",
        format.mime_type(),
        decoded.len()
    );
    Ok(())
}

/// Decoded byte count for a padded base64 string.
fn estimated_decoded_len(encoded: &str) -> usize {
    let unpadded = encoded.trim_end_matches('=').len();
    unpadded * 3 / 4
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tiny 1x1 PNG
    const PNG_DATA: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

    fn strict() -> VisionConfig {
        VisionConfig {
            strict_validation: true,
            ..VisionConfig::default()
        }
    }

    #[test]
    fn test_estimated_decoded_len() {
        assert_eq!(estimated_decoded_len("dGVzdA=="), 4);
        assert_eq!(estimated_decoded_len("dGVzdDE="), 5);
        assert_eq!(estimated_decoded_len("dGVzdDEy"), 6);
    }

    #[test]
    fn test_permissive_mode_skips_decoding() {
        assert!(validate_image("not-valid-base64!!!", &VisionConfig::default()).is_ok());
    }

    #[test]
    fn test_oversized_image_rejected_in_any_mode() {
        let config = VisionConfig {
            max_image_bytes: 3,
            strict_validation: false,
        };
        let result = validate_image("dGVzdA==", &config);
        assert!(matches!(result, Err(ProxyError::ImageTooLarge(_))));
    }

    #[test]
    fn test_strict_accepts_known_format() {
        assert!(validate_image(PNG_DATA, &strict()).is_ok());
    }

    #[test]
    fn test_strict_rejects_invalid_base64() {
        let result = validate_image("not-valid-base64!!!", &strict());
        assert!(matches!(result, Err(ProxyError::InvalidImage(_))));
    }

    #[test]
    fn test_strict_rejects_unknown_format() {
        // "hello world!" encoded
        let result = validate_image("aGVsbG8gd29ybGQh", &strict());
        assert!(matches!(result, Err(ProxyError::InvalidImage(_))));
    }
}
