//! `sitenav resolve` command implementation.

use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use sitenav_config::Config;
use sitenav_config::theme::SiteConfig;
use sitenav_taxonomy::{NavigationContext, Navigator, normalize_path};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Page paths to resolve (e.g., /guide/installation).
    #[arg(required = true)]
    paths: Vec<String>,

    /// Resolve paths exactly as given, without normalization or base stripping.
    #[arg(long)]
    raw: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

/// One line of resolve output.
#[derive(Serialize)]
struct ResolvedPage<'a> {
    path: &'a str,
    #[serde(flatten)]
    context: &'a NavigationContext,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// Prints one JSON object per path to stdout.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;

        for line in self.render(config)? {
            output.data(&line);
        }

        Ok(())
    }

    /// Resolve every requested path into a JSON line.
    fn render(&self, config: Config) -> Result<Vec<String>, CliError> {
        let navigator = Navigator::new(Arc::new(config.taxonomy));
        let mut lines = Vec::with_capacity(self.paths.len());

        for raw in &self.paths {
            let path = request_path(raw, &config.site, self.raw);
            let context = navigator.resolve(&path);

            if context.active_item.is_none() && context.has_sidebar() {
                tracing::info!(path, "Page is not listed in its sidebar");
            }

            let page = ResolvedPage {
                path: &path,
                context: &context,
            };
            lines.push(if self.pretty {
                serde_json::to_string_pretty(&page)?
            } else {
                serde_json::to_string(&page)?
            });
        }

        Ok(lines)
    }
}

/// Turn a command-line path into the path handed to the resolver.
fn request_path(raw: &str, site: &SiteConfig, keep_raw: bool) -> String {
    if keep_raw {
        return raw.to_owned();
    }
    let normalized = normalize_path(raw);
    site.strip_base(&normalized).to_owned()
}
