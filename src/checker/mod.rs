//! # Version Checking Module
//!
//! Extraction and comparison of Kubernetes tooling versions from the textual
//! output of `kubectl version`.

pub mod kubectl;
pub mod report;
pub mod version;

pub use kubectl::{detect_kubectl, kubectl_version_output, KubectlStatus};
pub use report::{CheckOutcome, VersionReport};
pub use version::{check_version, found_version, version_match, Role};
