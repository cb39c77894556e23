use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Matches the quoted major component inside a `version.Info{...}` section
static REGEX_VERSION_MAJOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"Major:"(\d+)""#).expect("invalid major version pattern"));

/// Matches the quoted minor component inside a `version.Info{...}` section
static REGEX_VERSION_MINOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"Minor:"(\d+)""#).expect("invalid minor version pattern"));

static CLIENT_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Client Version: version\.Info\{(.*)\}").expect("invalid client section pattern")
});

static SERVER_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Server Version: version\.Info\{(.*)\}").expect("invalid server section pattern")
});

/// The logical origin of a version report within kubectl output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Client,
    Server,
}

impl Role {
    /// Regex selecting this role's `Version: version.Info{...}` section.
    ///
    /// The output may contain both Client and Server lines; each section
    /// regex only matches its own line since `.` stops at line breaks.
    fn section_regex(&self) -> &'static Regex {
        match self {
            Role::Client => &CLIENT_SECTION,
            Role::Server => &SERVER_SECTION,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Client => write!(f, "Client"),
            Role::Server => write!(f, "Server"),
        }
    }
}

/// Return the first captured group, or an empty string when there is no
/// match. Absence of a match is a normal outcome, not an error.
pub fn version_match(re: &Regex, s: &str) -> String {
    re.captures(s)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Compare the version reported for `role` in `output` against the expected
/// major/minor components.
///
/// Returns `None` when the found version matches, otherwise a diagnostic
/// message. Components are compared as strings; there is no numeric
/// interpretation.
pub fn check_version(
    role: Role,
    output: &str,
    expected_major: &str,
    expected_minor: &str,
) -> Option<String> {
    let section = role
        .section_regex()
        .find(output)
        .map(|m| m.as_str())
        .unwrap_or_default();
    debug!("{} version section: '{}'", role, section);

    let major = version_match(&REGEX_VERSION_MAJOR, section);
    let minor = version_match(&REGEX_VERSION_MINOR, section);

    if major.is_empty() || minor.is_empty() {
        return Some(format!(
            "Couldn't find {} version from kubectl output '{}'",
            role, output
        ));
    }

    if major != expected_major || minor != expected_minor {
        return Some(format!("Unexpected {} version {}.{}", role, major, minor));
    }

    None
}

/// Extract the major/minor pair reported for `role`, if present
pub fn found_version(role: Role, output: &str) -> Option<(String, String)> {
    let section = role.section_regex().find(output)?.as_str();

    let major = version_match(&REGEX_VERSION_MAJOR, section);
    let minor = version_match(&REGEX_VERSION_MINOR, section);

    if major.is_empty() || minor.is_empty() {
        return None;
    }

    Some((major, minor))
}
