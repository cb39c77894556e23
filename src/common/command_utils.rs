use crate::error::{ExecError, KubeCheckError, Result};
use std::path::PathBuf;
use std::process::{Command, Output};

/// Execute a command and return the captured output.
///
/// A binary that cannot be spawned because it does not exist is reported as
/// `ExecError::ToolNotFound` rather than a bare I/O error.
pub fn execute_command(cmd: &str, args: &[&str]) -> Result<Output> {
    let output = Command::new(cmd)
        .args(args)
        .output()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                KubeCheckError::Exec(ExecError::ToolNotFound(cmd.to_string()))
            }
            _ => KubeCheckError::Io(e),
        })?;

    Ok(output)
}

/// Find the actual path of a command using system lookup tools
pub fn find_command_path(cmd: &str) -> Option<PathBuf> {
    #[cfg(unix)]
    {
        if let Ok(output) = Command::new("which").arg(cmd).output() {
            if output.status.success() {
                let output_str = String::from_utf8_lossy(&output.stdout);
                let path_str = output_str.trim();
                if !path_str.is_empty() {
                    return Some(PathBuf::from(path_str));
                }
            }
        }
    }

    #[cfg(windows)]
    {
        if let Ok(output) = Command::new("where").arg(cmd).output() {
            if output.status.success() {
                let output_str = String::from_utf8_lossy(&output.stdout);
                if let Some(first_path) = output_str.trim().lines().next() {
                    if !first_path.is_empty() {
                        return Some(PathBuf::from(first_path));
                    }
                }
            }
        }
    }

    None
}
