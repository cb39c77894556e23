// Handler modules
pub mod check;
pub mod show;

// Re-export all handler functions
pub use check::handle_check;
pub use show::handle_show;

use crate::checker::{detect_kubectl, kubectl_version_output};
use crate::error::{ExecError, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Obtain the version output text to inspect: a file, stdin ("-"), or a
/// live `kubectl version` invocation when no input override is given.
pub(crate) fn read_version_output(input: Option<&Path>, binary: &str) -> Result<String> {
    match input {
        Some(path) if path == Path::new("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf.trim().to_string())
        }
        Some(path) => Ok(fs::read_to_string(path)?.trim().to_string()),
        None => {
            let status = detect_kubectl(binary);
            if !status.available {
                return Err(ExecError::ToolNotFound(binary.to_string()).into());
            }
            kubectl_version_output(binary)
        }
    }
}
