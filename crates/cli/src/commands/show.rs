//! Show command implementation.
//!
//! Prints the loaded configuration. Account keys are never printed, only
//! counted, and RPC urls are reduced to scheme and host.

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use toolchain_config::NetworkEndpoint;

use crate::args::OutputFormat;
use crate::config_context::LoadedConfig;

#[derive(Serialize)]
struct ShowOutput<'a> {
    solidity: &'a str,
    context: &'a str,
    source: Option<String>,
    networks: BTreeMap<&'a str, NetworkDisplay>,
}

#[derive(Serialize)]
struct NetworkDisplay {
    url: String,
    accounts: usize,
}

impl From<&NetworkEndpoint> for NetworkDisplay {
    fn from(endpoint: &NetworkEndpoint) -> Self {
        Self {
            url: endpoint.redacted_url(),
            accounts: endpoint.accounts.len(),
        }
    }
}

pub fn run(loaded: &LoadedConfig, format: OutputFormat) -> Result<()> {
    let config = &loaded.config;
    let output = ShowOutput {
        solidity: &config.compiler_version,
        context: loaded.context.as_str(),
        source: loaded.source.as_ref().map(|p| p.display().to_string()),
        networks: config
            .networks
            .iter()
            .map(|(name, endpoint)| (name.as_str(), NetworkDisplay::from(endpoint)))
            .collect(),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Text => {
            println!("{:<12} {}", "Solidity:", output.solidity);
            println!("{:<12} {}", "Context:", output.context);
            println!(
                "{:<12} {}",
                "Source:",
                output.source.as_deref().unwrap_or("(environment only)")
            );

            if output.networks.is_empty() {
                println!("No networks configured.");
                return Ok(());
            }

            println!();
            println!("{:<20} {:<45} {:>8}", "Network", "URL", "Accounts");
            println!("{}", "-".repeat(75));
            for (name, network) in &output.networks {
                println!("{:<20} {:<45} {:>8}", name, network.url, network.accounts);
            }
        }
    }

    Ok(())
}
