//! `${VAR}` substitution inside configured URLs.
//!
//! Provider project ids are credentials, so URLs in the config file usually
//! reference them (`https://rinkeby.infura.io/v3/${INFURA_PROJECT_ID}`) rather
//! than embedding them.

use super::env::env_var_or_none;
use super::error::ConfigError;

/// Replace every `${NAME}` in `raw` with the value of the environment variable `NAME`.
///
/// Unset or blank variables fail with `ConfigError::MissingEnvVar`. A `$` not
/// followed by `{` is kept as-is.
pub(crate) fn interpolate_env(raw: &str, network: &str) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find('}').ok_or_else(|| ConfigError::InvalidUrl {
            network: network.to_string(),
            message: "unterminated ${...} reference".to_string(),
        })?;

        let name = after[..end].trim();
        if name.is_empty() {
            return Err(ConfigError::InvalidUrl {
                network: network.to_string(),
                message: "empty ${} reference".to_string(),
            });
        }

        let value =
            env_var_or_none(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))?;
        out.push_str(&value);
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_no_references_is_identity() {
        let url = "https://rinkeby.infura.io/v3/ABC123";
        assert_eq!(interpolate_env(url, "rinkeby").unwrap(), url);
    }

    #[test]
    #[serial]
    fn test_reference_is_substituted() {
        temp_env::with_vars([("_TOOLCHAIN_TEST_PROJECT", Some("ABC123"))], || {
            let url = interpolate_env(
                "https://rinkeby.infura.io/v3/${_TOOLCHAIN_TEST_PROJECT}",
                "rinkeby",
            )
            .unwrap();
            assert_eq!(url, "https://rinkeby.infura.io/v3/ABC123");
        });
    }

    #[test]
    #[serial]
    fn test_multiple_references() {
        temp_env::with_vars(
            [
                ("_TOOLCHAIN_TEST_HOST", Some("node.example")),
                ("_TOOLCHAIN_TEST_PORT", Some("8545")),
            ],
            || {
                let url = interpolate_env(
                    "http://${_TOOLCHAIN_TEST_HOST}:${_TOOLCHAIN_TEST_PORT}/$rpc",
                    "local",
                )
                .unwrap();
                assert_eq!(url, "http://node.example:8545/$rpc");
            },
        );
    }

    #[test]
    #[serial]
    fn test_missing_reference_fails() {
        temp_env::with_vars([("_TOOLCHAIN_TEST_UNSET", None::<&str>)], || {
            let result = interpolate_env("https://x.example/${_TOOLCHAIN_TEST_UNSET}", "x");
            assert!(
                matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "_TOOLCHAIN_TEST_UNSET")
            );
        });
    }

    #[test]
    fn test_unterminated_reference_fails() {
        let result = interpolate_env("https://x.example/${OOPS", "x");
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));

        let result = interpolate_env("https://x.example/${}", "x");
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }
}
