//! Webhook signature verification
//!
//! LINE signs every webhook request body with HMAC-SHA256 keyed by the
//! channel secret and sends the base64 digest in the `X-Line-Signature` header.
//! Verification must run over the raw body bytes exactly as received.

use base64::{engine::general_purpose::STANDARD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{Result, WebhookError};

type HmacSha256 = Hmac<Sha256>;

/// Name of the header carrying the signature.
pub const SIGNATURE_HEADER: &str = "x-line-signature";

/// Compute the base64-encoded HMAC-SHA256 of `body` keyed by `channel_secret`.
pub fn compute_signature(body: &[u8], channel_secret: &str) -> String {
    let mut mac = new_mac(channel_secret);
    mac.update(body);
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Verify a LINE webhook signature.
///
/// Returns `Ok(false)` for any mismatch, including a header that is not valid
/// base64. The digest comparison is constant-time.
///
/// # Errors
///
/// [`WebhookError::InvalidSignature`] if `signature` is empty.
///
/// # Examples
///
/// ```
/// use line_webhook::{compute_signature, verify};
///
/// let body = br#"{"destination":"U123","events":[]}"#;
/// let signature = compute_signature(body, "secret");
///
/// assert!(verify(body, "secret", &signature).unwrap());
/// assert!(!verify(body, "other-secret", &signature).unwrap());
/// assert!(verify(body, "secret", "").is_err());
/// ```
pub fn verify(body: &[u8], channel_secret: &str, signature: &str) -> Result<bool> {
    let signature = signature.trim();
    if signature.is_empty() {
        return Err(WebhookError::InvalidSignature);
    }

    let expected = match STANDARD.decode(signature) {
        Ok(bytes) => bytes,
        Err(_) => return Ok(false),
    };

    let mut mac = new_mac(channel_secret);
    mac.update(body);

    Ok(mac.verify_slice(&expected).is_ok())
}

fn new_mac(channel_secret: &str) -> HmacSha256 {
    HmacSha256::new_from_slice(channel_secret.as_bytes()).expect("HMAC can take key of any size")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret";
    const BODY: &[u8] = br#"{"destination":"U123","events":[]}"#;

    #[test]
    fn test_verify_signature() {
        let mut mac = HmacSha256::new_from_slice(SECRET.as_bytes()).unwrap();
        mac.update(BODY);
        let valid_signature = STANDARD.encode(mac.finalize().into_bytes());

        assert_eq!(compute_signature(BODY, SECRET), valid_signature);
        assert!(verify(BODY, SECRET, &valid_signature).unwrap());
        assert!(!verify(BODY, SECRET, "invalid_signature").unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_secret_and_body() {
        let signature = compute_signature(BODY, SECRET);

        assert!(!verify(BODY, "wrong_secret", &signature).unwrap());
        assert!(!verify(br#"{"destination":"U123","events":[] }"#, SECRET, &signature).unwrap());
    }

    #[test]
    fn test_verify_rejects_truncated_digest() {
        let digest = STANDARD.decode(compute_signature(BODY, SECRET)).unwrap();
        let truncated = STANDARD.encode(&digest[..16]);

        assert!(!verify(BODY, SECRET, &truncated).unwrap());
    }

    #[test]
    fn test_verify_empty_signature_is_error() {
        assert!(matches!(
            verify(BODY, SECRET, ""),
            Err(WebhookError::InvalidSignature)
        ));
        assert!(matches!(
            verify(BODY, SECRET, "   "),
            Err(WebhookError::InvalidSignature)
        ));
    }

    #[test]
    fn test_verify_known_vector() {
        // Produced by `printf 'body' | openssl dgst -sha256 -hmac secret -binary | base64`
        let signature = "3EaYNVf+oSe0OvchRn65s/3iM4/j4U9RlSqoR4wT01U=";
        assert_eq!(compute_signature(b"body", "secret"), signature);
    }
}
