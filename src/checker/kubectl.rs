use crate::common::command_utils::{execute_command, find_command_path};
use crate::error::Result;
use log::{debug, info};
use std::path::PathBuf;

/// Where and whether the kubectl binary was found
#[derive(Debug, Clone)]
pub struct KubectlStatus {
    pub available: bool,
    pub path: Option<PathBuf>,
}

/// Check whether the configured kubectl binary can be located
pub fn detect_kubectl(binary: &str) -> KubectlStatus {
    let path = find_command_path(binary);
    let available = path.is_some() || execute_command(binary, &["version", "--client"]).is_ok();

    if available {
        info!("Found {} at {:?}", binary, path);
    } else {
        debug!("{} not found in PATH", binary);
    }

    KubectlStatus { available, path }
}

/// Run `<binary> version` and return the captured text.
///
/// kubectl writes the client line to stdout even when the server is
/// unreachable; the connection error goes to stderr. Stdout is preferred and
/// stderr is the fallback, so the checker always sees whatever was printed.
pub fn kubectl_version_output(binary: &str) -> Result<String> {
    debug!("Running `{} version`", binary);
    let output = execute_command(binary, &["version"])?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let text = stdout.trim();
    if !text.is_empty() {
        return Ok(text.to_string());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    Ok(stderr.trim().to_string())
}
