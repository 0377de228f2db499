//! `sitenav check` command implementation.

use clap::Args;
use sitenav_taxonomy::{Issue, validate};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Treat warnings as errors.
    #[arg(long)]
    strict: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Validation` when the taxonomy has errors, or
    /// warnings in strict mode.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Checking {}", path.display()));
        }

        let issues = validate(&config.taxonomy);
        for issue in &issues {
            output.issue(issue);
        }

        verdict(&issues, self.strict)?;

        output.success(&format!(
            "Taxonomy OK: {} nav entries, {} sidebar sections, {} warnings",
            config.taxonomy.nav.len(),
            config.taxonomy.sidebar.len(),
            issues.len()
        ));
        Ok(())
    }
}

/// Decide whether the reported issues fail the check.
fn verdict(issues: &[Issue], strict: bool) -> Result<(), CliError> {
    let errors = issues.iter().filter(|issue| issue.is_error()).count();
    let warnings = issues.len() - errors;

    if errors > 0 || (strict && warnings > 0) {
        return Err(CliError::Validation(format!(
            "taxonomy check failed: {errors} errors, {warnings} warnings"
        )));
    }
    Ok(())
}
