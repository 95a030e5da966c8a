//! Path command implementation.

use anyhow::Result;
use serde::Serialize;
use toolchain_config::ConfigLocation;

use crate::args::OutputFormat;

#[derive(Serialize)]
struct PathOutput {
    path: String,
    source: String,
    exists: bool,
}

pub fn run(location: &ConfigLocation, format: OutputFormat) -> Result<()> {
    let output = PathOutput {
        path: location.path.display().to_string(),
        source: location.source.to_string(),
        exists: location.path.exists(),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Text => {
            let missing = if output.exists { "" } else { ", not found" };
            println!("{} ({}{})", output.path, output.source, missing);
        }
    }

    Ok(())
}
