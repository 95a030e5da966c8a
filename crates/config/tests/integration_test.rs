//! Integration tests for configuration loading through the public API.
//!
//! These tests verify end-to-end config loading behavior, ensuring that
//! the ConfigLoader builder chain works the same for every entry point.

use secrecy::ExposeSecret;
use serial_test::serial;
use tempfile::TempDir;

use toolchain_config::persistence::{read_config_file, write_config_file};
use toolchain_config::{
    ConfigError, ConfigFile, ConfigLoader, ToolchainConfiguration, env_var_or_none,
};

/// A rinkeby config with inline values comes back unmodified.
#[test]
fn test_rinkeby_scenario_round_trips_through_builder() {
    let config = ConfigLoader::new()
        .with_compiler_version("0.8.25".to_string())
        .with_network_url(
            "rinkeby".to_string(),
            "https://rinkeby.infura.io/v3/ABC123".to_string(),
        )
        .with_network_accounts("rinkeby".to_string(), vec!["0xKEY".to_string()])
        .build()
        .expect("should build");

    let expected = serde_json::json!({
        "solidity": "0.8.25",
        "networks": {
            "rinkeby": {
                "url": "https://rinkeby.infura.io/v3/ABC123",
                "accounts": ["0xKEY"]
            }
        }
    });
    assert_eq!(serde_json::to_value(&config).unwrap(), expected);
}

/// Test that env_var_or_none is exported and works correctly
#[test]
fn test_env_var_or_none_exported() {
    let _result: Option<String> = env_var_or_none("TOOLCHAIN_SOLIDITY");
}

/// The written template loads once its secret references are provided.
#[test]
#[serial]
fn test_template_loads_with_secrets_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("toolchain.json");
    write_config_file(&path, &ConfigFile::template(), false).unwrap();

    temp_env::with_vars(
        [
            ("INFURA_PROJECT_ID", Some("ABC123")),
            ("RINKEBY_PRIVATE_KEY", Some("0xKEY")),
        ],
        || {
            let config = ConfigLoader::new()
                .with_config_path(path.clone())
                .from_file()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(config.compiler_version, "0.8.25");
            let rinkeby = config.network("rinkeby").unwrap();
            assert_eq!(rinkeby.url, "https://rinkeby.infura.io/v3/ABC123");
            assert_eq!(rinkeby.accounts[0].expose_secret(), "0xKEY");
        },
    );
}

/// Without the referenced secrets the template fails before anything is returned.
#[test]
#[serial]
fn test_template_without_secrets_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("toolchain.json");
    write_config_file(&path, &ConfigFile::template(), false).unwrap();

    temp_env::with_vars(
        [
            ("INFURA_PROJECT_ID", None::<&str>),
            ("RINKEBY_PRIVATE_KEY", None::<&str>),
        ],
        || {
            let result = ConfigLoader::new()
                .with_config_path(path.clone())
                .from_file()
                .unwrap()
                .build();
            assert!(matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "INFURA_PROJECT_ID"));
        },
    );
}

/// `ToolchainConfiguration::load()` reads the file named by TOOLCHAIN_CONFIG_PATH.
#[test]
#[serial]
fn test_load_uses_env_config_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.json");
    std::fs::write(
        &path,
        r#"{"solidity": "0.8.25", "networks": {"local": {"url": "http://127.0.0.1:8545", "accounts": ["0xKEY"]}}}"#,
    )
    .unwrap();

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", Some("1")),
            ("TOOLCHAIN_CONFIG_PATH", Some(path.to_str().unwrap())),
            ("TOOLCHAIN_SOLIDITY", None),
            ("TOOLCHAIN_NETWORK", None),
            ("TOOLCHAIN_CONTEXT", None),
        ],
        || {
            let first = ToolchainConfiguration::load().expect("should load");
            let second = ToolchainConfiguration::load().expect("should load");
            assert_eq!(first, second);
            assert_eq!(first.network_names().collect::<Vec<_>>(), vec!["local"]);
        },
    );
}

/// The file on disk keeps secret references; only the loaded value has them resolved.
#[test]
fn test_template_file_contains_no_inline_credentials() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("toolchain.json");
    write_config_file(&path, &ConfigFile::template(), false).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(!raw.contains("YOUR_PRIVATE_KEY"));
    assert!(!raw.contains("YOUR_INFURA_PROJECT_ID"));
    assert!(raw.contains("${INFURA_PROJECT_ID}"));

    let file = read_config_file(&path).unwrap();
    assert_eq!(file.networks.len(), 1);
}
