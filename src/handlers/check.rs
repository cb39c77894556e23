use crate::checker::{check_version, found_version, CheckOutcome, Role, VersionReport};
use crate::cli::OutputFormat;
use crate::config::{Config, ExpectedVersion};
use crate::error::Result;
use log::warn;
use std::path::PathBuf;
use std::process;

pub fn handle_check(
    config: &Config,
    client: Option<String>,
    server: Option<String>,
    input: Option<PathBuf>,
    strict: bool,
    format: OutputFormat,
) -> Result<()> {
    let expected_client = resolve_expected(client, config.expected.client.clone())?;
    let expected_server = resolve_expected(server, config.expected.server.clone())?;

    if expected_client.is_none() && expected_server.is_none() {
        warn!("No expected versions configured");
        println!(
            "Nothing to check: pass --client/--server or add an [expected] section to .kubecheck.toml"
        );
        return Ok(());
    }

    let output = super::read_version_output(input.as_deref(), &config.kubectl.binary)?;

    let mut report = VersionReport::default();
    for (role, expected) in [
        (Role::Client, expected_client),
        (Role::Server, expected_server),
    ] {
        let Some(expected) = expected else { continue };

        let message = check_version(role, &output, &expected.major, &expected.minor);
        let found = found_version(role, &output).map(|(major, minor)| format!("{}.{}", major, minor));

        report.push(CheckOutcome {
            role,
            expected: expected.to_string(),
            found,
            message,
        });
    }

    match format {
        OutputFormat::Table => report.print_console_report(),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if strict && report.has_failures() {
        process::exit(1);
    }

    Ok(())
}

/// CLI flag wins over the config file; the flag form is validated here
fn resolve_expected(
    flag: Option<String>,
    configured: Option<ExpectedVersion>,
) -> Result<Option<ExpectedVersion>> {
    match flag {
        Some(s) => Ok(Some(ExpectedVersion::parse(&s)?)),
        None => Ok(configured),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_expected_prefers_flag() {
        let configured = Some(ExpectedVersion {
            major: "1".to_string(),
            minor: "6".to_string(),
        });

        let resolved = resolve_expected(Some("1.7".to_string()), configured.clone()).unwrap();
        assert_eq!(resolved.unwrap().to_string(), "1.7");

        let resolved = resolve_expected(None, configured).unwrap();
        assert_eq!(resolved.unwrap().to_string(), "1.6");

        assert!(resolve_expected(None, None).unwrap().is_none());
    }

    #[test]
    fn test_resolve_expected_rejects_bad_flag() {
        assert!(resolve_expected(Some("nonsense".to_string()), None).is_err());
    }
}
