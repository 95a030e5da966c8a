//! Check command implementation.

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::args::OutputFormat;
use crate::config_context::LoadedConfig;

#[derive(Serialize)]
struct CheckOutput<'a> {
    ok: bool,
    compiler_version: &'a str,
    context: &'a str,
    networks: Vec<&'a str>,
    source: Option<String>,
}

pub fn run(loaded: &LoadedConfig, format: OutputFormat) -> Result<()> {
    info!("Configuration validated");

    let config = &loaded.config;
    let output = CheckOutput {
        ok: true,
        compiler_version: &config.compiler_version,
        context: loaded.context.as_str(),
        networks: config.network_names().collect(),
        source: loaded.source.as_ref().map(|p| p.display().to_string()),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Text => {
            let networks = if output.networks.is_empty() {
                "none".to_string()
            } else {
                output.networks.join(", ")
            };
            println!(
                "Configuration OK: solidity {}, {} network(s) ({}), {} context",
                output.compiler_version,
                output.networks.len(),
                networks,
                output.context
            );
        }
    }

    Ok(())
}
