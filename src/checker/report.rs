use crate::checker::version::Role;
use colored::Colorize;
use serde::Serialize;

/// The result of checking one role against its expected version
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub role: Role,
    pub expected: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.message.is_none()
    }
}

/// Collected outcomes for a single `check` run
#[derive(Debug, Clone, Default, Serialize)]
pub struct VersionReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl VersionReport {
    pub fn push(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| !o.passed())
    }

    /// Print a formatted report to the console
    pub fn print_console_report(&self) {
        println!("\n🔎 Kubernetes Version Check");
        println!("{}", "=".repeat(50));

        for outcome in &self.outcomes {
            if outcome.passed() {
                println!(
                    "  {} {} version {} matches expected {}",
                    "✓".green(),
                    outcome.role,
                    outcome.found.as_deref().unwrap_or("?"),
                    outcome.expected
                );
            } else {
                println!(
                    "  {} {}",
                    "⚠".yellow(),
                    outcome.message.as_deref().unwrap_or_default().yellow()
                );
            }
        }

        let passed = self.outcomes.iter().filter(|o| o.passed()).count();
        println!("\n{}/{} checks passed", passed, self.outcomes.len());
    }
}
