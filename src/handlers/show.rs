use crate::checker::{found_version, Role};
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct FoundVersion {
    role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

pub fn handle_show(config: &Config, input: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let output = super::read_version_output(input.as_deref(), &config.kubectl.binary)?;

    let found: Vec<FoundVersion> = [Role::Client, Role::Server]
        .into_iter()
        .map(|role| FoundVersion {
            role,
            version: found_version(role, &output).map(|(major, minor)| format!("{}.{}", major, minor)),
        })
        .collect();

    match format {
        OutputFormat::Table => {
            println!("\n🔎 Kubernetes Versions");
            println!("{}", "=".repeat(50));
            for entry in &found {
                match &entry.version {
                    Some(version) => println!("  {} version: {}", entry.role, version),
                    None => println!("  {} version: not found", entry.role),
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&found)?),
    }

    Ok(())
}
