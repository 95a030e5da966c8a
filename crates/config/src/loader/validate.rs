//! Field validation for the toolchain configuration.
//!
//! Responsibilities:
//! - Recognize the usual compiler version shape (advisory only).
//! - Check RPC urls are absolute http(s) urls with a host.
//! - Check account keys, strictly in a live context.
//! - Reject stand-in credentials in a live context.
//!
//! Invariants:
//! - Error messages never contain the url or key being checked.
//! - Values are only inspected, never rewritten; account keys arrive already trimmed.

use secrecy::{ExposeSecret, SecretString};

use super::error::ConfigError;
use crate::constants::{PLACEHOLDER_MARKER, PRIVATE_KEY_BYTES};
use crate::types::DeploymentContext;

/// Whether a version reads as `MAJOR.MINOR.PATCH`, optionally with a `-pre` or `+build` suffix.
pub(crate) fn looks_like_semver(version: &str) -> bool {
    let core = version.split(['-', '+']).next().unwrap_or_default();
    let parts: Vec<&str> = core.split('.').collect();

    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

/// Validate an RPC url.
///
/// Validation rules:
/// - Parse as an absolute URL
/// - Require scheme is http or https
/// - Require host is present
pub(crate) fn validate_url(network: &str, url: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::InvalidUrl {
        network: network.to_string(),
        message,
    };

    let parsed = url::Url::parse(url).map_err(|e| {
        invalid(format!(
            "must be an absolute http(s) URL with a host (e.g. https://rpc.example.org): {e}"
        ))
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(invalid(format!("scheme must be http or https, got: {scheme}")));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("host is required".to_string()));
    }

    Ok(())
}

/// Validate one signing key.
///
/// Every context rejects blank keys. A live context also rejects stand-ins
/// and anything that is not a 32-byte hex key (with or without `0x`).
pub(crate) fn validate_account(
    network: &str,
    index: usize,
    key: &SecretString,
    context: DeploymentContext,
) -> Result<(), ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidAccount {
        network: network.to_string(),
        index,
        message: message.to_string(),
    };

    let raw = key.expose_secret();
    if raw.trim().is_empty() {
        return Err(invalid("key is empty"));
    }

    check_placeholder(network, "account", raw, context)?;

    if context == DeploymentContext::Live {
        let hex_part = raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix("0X"))
            .unwrap_or(raw);
        let bytes = hex::decode(hex_part).map_err(|_| invalid("key is not valid hex"))?;
        if bytes.len() != PRIVATE_KEY_BYTES {
            return Err(invalid("key must be 32 bytes (64 hex characters)"));
        }
    }

    Ok(())
}

/// Whether a value is a stand-in such as `YOUR_PRIVATE_KEY`.
pub(crate) fn is_placeholder(value: &str) -> bool {
    value.contains(PLACEHOLDER_MARKER)
}

/// Fail on stand-in credentials in a live context; warn in development.
pub(crate) fn check_placeholder(
    network: &str,
    field: &str,
    value: &str,
    context: DeploymentContext,
) -> Result<(), ConfigError> {
    if !is_placeholder(value) {
        return Ok(());
    }

    match context {
        DeploymentContext::Live => Err(ConfigError::PlaceholderCredential {
            network: network.to_string(),
            field: field.to_string(),
        }),
        DeploymentContext::Development => {
            tracing::warn!(
                network = %network,
                field = %field,
                "Placeholder credential in use; signing against this network will fail"
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    const LIVE_KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

    #[test]
    fn test_semver_shape() {
        for ok in ["0.8.25", "0.4.11", "10.20.30", "0.8.26-nightly.2024.5.1", "0.8.25+commit.b61c2a91"] {
            assert!(looks_like_semver(ok), "{ok} should look like a version");
        }
        for odd in ["0.8", "v0.8.25", "0.8.x", "0..25", "latest", "0.8.25.1", " 0.8.25"] {
            assert!(!looks_like_semver(odd), "{odd} should not look like a version");
        }
    }

    #[test]
    fn test_urls() {
        assert!(validate_url("rinkeby", "https://rinkeby.infura.io/v3/ABC123").is_ok());
        assert!(validate_url("local", "http://127.0.0.1:8545").is_ok());

        for bad in ["rinkeby.infura.io/v3/ABC123", "ws://node.example", "file:///tmp/x", "https://"] {
            assert!(
                matches!(validate_url("n", bad), Err(ConfigError::InvalidUrl { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_url_error_does_not_echo_url() {
        let err = validate_url("n", "ftp://secret-project-id.example").unwrap_err();
        assert!(!err.to_string().contains("secret-project-id"));
    }

    #[test]
    fn test_development_accepts_any_non_blank_key() {
        let dev = DeploymentContext::Development;
        assert!(validate_account("n", 0, &secret("0xKEY"), dev).is_ok());
        assert!(validate_account("n", 0, &secret("YOUR_PRIVATE_KEY"), dev).is_ok());
        assert!(matches!(
            validate_account("n", 2, &secret("   "), dev),
            Err(ConfigError::InvalidAccount { index: 2, .. })
        ));
    }

    #[test]
    fn test_live_requires_private_key_format() {
        let live = DeploymentContext::Live;
        assert!(validate_account("n", 0, &secret(LIVE_KEY), live).is_ok());
        assert!(validate_account("n", 0, &secret(&LIVE_KEY[2..]), live).is_ok());

        assert!(matches!(
            validate_account("n", 0, &secret("0xKEY"), live),
            Err(ConfigError::InvalidAccount { .. })
        ));
        assert!(matches!(
            validate_account("n", 0, &secret("0xabcdef"), live),
            Err(ConfigError::InvalidAccount { .. })
        ));
    }

    #[test]
    fn test_live_rejects_placeholders() {
        let result = validate_account("rinkeby", 0, &secret("YOUR_PRIVATE_KEY"), DeploymentContext::Live);
        assert!(matches!(
            result,
            Err(ConfigError::PlaceholderCredential { ref network, ref field })
                if network == "rinkeby" && field == "account"
        ));
    }

    #[test]
    fn test_account_errors_do_not_echo_key() {
        let err = validate_account("n", 0, &secret("0xnot-hex-secret"), DeploymentContext::Live)
            .unwrap_err();
        assert!(!err.to_string().contains("not-hex-secret"));
    }
}
