use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub kubectl: KubectlConfig,
    #[serde(default)]
    pub expected: ExpectedConfig,
}

/// kubectl invocation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubectlConfig {
    /// Binary name or path used to run `kubectl version`
    #[serde(default = "default_binary")]
    pub binary: String,
}

/// Expected versions per role; an absent role is skipped by `check`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ExpectedVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ExpectedVersion>,
}

/// An expected major/minor pair.
///
/// Components are kept as strings and compared textually, never parsed to
/// integers. The version checker compares component-by-component against
/// whatever kubectl reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedVersion {
    pub major: String,
    pub minor: String,
}

impl ExpectedVersion {
    /// Parse the `MAJOR.MINOR` form accepted on the command line
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let mut parts = s.splitn(2, '.');
        let major = parts.next().unwrap_or_default();
        let minor = parts.next().unwrap_or_default();

        let numeric = |p: &str| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit());
        if !numeric(major) || !numeric(minor) {
            return Err(ConfigError::InvalidVersion(s.to_string()));
        }

        Ok(Self {
            major: major.to_string(),
            minor: minor.to_string(),
        })
    }
}

impl fmt::Display for ExpectedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

fn default_binary() -> String {
    "kubectl".to_string()
}

impl Default for KubectlConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kubectl: KubectlConfig::default(),
            expected: ExpectedConfig::default(),
        }
    }
}
