//! `sitenav outline` command implementation.

use clap::Args;
use sitenav_taxonomy::SidebarSection;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the outline command.
#[derive(Args)]
pub(crate) struct OutlineArgs {
    /// Sidebar prefix to print (default: all sections).
    prefix: Option<String>,

    #[command(flatten)]
    config: ConfigArgs,
}

impl OutlineArgs {
    /// Execute the outline command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Validation` if the requested prefix has no section.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;
        let taxonomy = &config.taxonomy;

        let sections: Vec<&SidebarSection> = match &self.prefix {
            Some(prefix) => vec![taxonomy.section(prefix).ok_or_else(|| {
                CliError::Validation(format!("no sidebar section with prefix {prefix}"))
            })?],
            None => taxonomy.sidebar.iter().collect(),
        };

        for section in sections {
            output.data_highlight(&section.prefix);
            for line in outline_lines(section) {
                output.data(&line);
            }
        }

        Ok(())
    }
}

/// Render a section's groups and numbered pagination order.
fn outline_lines(section: &SidebarSection) -> Vec<String> {
    let mut lines = Vec::new();
    let mut position = 0;

    for group in &section.groups {
        lines.push(format!("  {}", group.text));
        for item in &group.items {
            position += 1;
            lines.push(format!("    {position:>3}. {}  {}", item.text, item.link));
        }
    }

    lines
}
