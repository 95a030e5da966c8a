//! Networks command implementation.

use anyhow::Result;

use crate::args::OutputFormat;
use crate::config_context::LoadedConfig;

pub fn run(loaded: &LoadedConfig, format: OutputFormat) -> Result<()> {
    let names: Vec<&str> = loaded.config.network_names().collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&names)?),
        OutputFormat::Text => {
            for name in names {
                println!("{name}");
            }
        }
    }

    Ok(())
}
