//! Configuration management for sitenav.
//!
//! Parses `sitenav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. The file holds
//! the navigation [`Taxonomy`] plus the presentation records the renderer
//! consumes verbatim (see [`theme`]).
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `nav[].link`
//! - `social_links[].link`
//! - `edit_link.pattern`

mod expand;
pub mod theme;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use sitenav_taxonomy::{NavEntry, SidebarSection, Taxonomy};

use crate::theme::{
    DocFooterConfig, EditLinkConfig, FooterConfig, SearchConfig, SearchProvider, SiteConfig,
    SocialLink,
};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sitenav.toml";

/// Options an Algolia search configuration must define.
const ALGOLIA_REQUIRED_OPTIONS: [&str; 3] = ["app_id", "api_key", "index_name"];

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override deployment base path.
    pub base: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site metadata.
    pub site: SiteConfig,
    /// Top-level nav entries as parsed from TOML.
    nav: Vec<NavEntry>,
    /// Sidebar sections as parsed from TOML.
    sidebar: Vec<SidebarSection>,
    /// Nav bar icon links.
    pub social_links: Vec<SocialLink>,
    /// Page footer (optional section).
    pub footer: Option<FooterConfig>,
    /// Search settings.
    pub search: SearchConfig,
    /// "Edit this page" link (optional section).
    pub edit_link: Option<EditLinkConfig>,
    /// Pagination link labels.
    pub doc_footer: DocFooterConfig,

    /// Navigation taxonomy (set after loading).
    #[serde(skip)]
    pub taxonomy: Taxonomy,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`edit_link.pattern`").
        field: String,
        /// Error message (e.g., "${`REPO`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sitenav.toml` in current directory and parents,
    /// falling back to an empty taxonomy when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base) = &settings.base {
            self.site.base.clone_from(base);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_config_from(&cwd)
    }

    /// Search for config file in `start` and its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "Discovered configuration");
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        tracing::info!(
            path = %path.display(),
            nav_entries = config.taxonomy.nav.len(),
            sidebar_sections = config.taxonomy.sidebar.len(),
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Parse configuration text, expand environment variables and build the taxonomy.
    fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.build_taxonomy();
        Ok(config)
    }

    /// Move the parsed nav and sidebar into the taxonomy.
    fn build_taxonomy(&mut self) {
        self.taxonomy = Taxonomy::new(
            std::mem::take(&mut self.nav),
            std::mem::take(&mut self.sidebar),
        );
    }

    /// Validate configuration values.
    ///
    /// Checks presentation settings only. Taxonomy authoring problems are
    /// reported by [`sitenav_taxonomy::validate`], since resolution tolerates them.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_social_links()?;
        self.validate_search()?;
        if let Some(edit_link) = &self.edit_link {
            require_non_empty(&edit_link.pattern, "edit_link.pattern")?;
        }
        Ok(())
    }

    /// Validate site metadata.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;

        let base = &self.site.base;
        if !base.starts_with('/') || !base.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "site.base must start and end with '/', got {base:?}"
            )));
        }

        Ok(())
    }

    /// Validate social links.
    fn validate_social_links(&self) -> Result<(), ConfigError> {
        for (idx, social) in self.social_links.iter().enumerate() {
            require_non_empty(&social.icon, &format!("social_links[{idx}].icon"))?;
            require_non_empty(&social.link, &format!("social_links[{idx}].link"))?;
        }
        Ok(())
    }

    /// Validate search settings.
    fn validate_search(&self) -> Result<(), ConfigError> {
        if self.search.provider == SearchProvider::Algolia {
            for option in ALGOLIA_REQUIRED_OPTIONS {
                if !self.search.options.contains_key(option) {
                    return Err(ConfigError::Validation(format!(
                        "search.options.{option} is required for the algolia provider"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        for (idx, entry) in self.nav.iter_mut().enumerate() {
            entry.link = expand::expand_env(&entry.link, &format!("nav[{idx}].link"))?;
        }

        for (idx, social) in self.social_links.iter_mut().enumerate() {
            social.link = expand::expand_env(&social.link, &format!("social_links[{idx}].link"))?;
        }

        if let Some(ref mut edit_link) = self.edit_link {
            edit_link.pattern = expand::expand_env(&edit_link.pattern, "edit_link.pattern")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sitenav_taxonomy::{SidebarItem, resolve};

    use super::*;

    const AGENT_DOCS: &str = r#"
[site]
title = "Agent"
description = "Log shipping agent"

[[nav]]
text = "Guide"
link = "/guide/"

[[nav]]
text = "Features"
link = "/features/"
active_match = "^/features/"

[[sidebar]]
prefix = "/guide/"

[[sidebar.groups]]
text = "Getting Started"
items = [
  { text = "Install", link = "/guide/installation" },
  { text = "Config", link = "/guide/configuration" },
]

[[sidebar.groups]]
text = "Operations"
collapsed = true
items = [{ text = "Buffering", link = "/guide/buffering" }]

[[sidebar]]
prefix = "/features/"

[[sidebar.groups]]
text = "Features"
items = [{ text = "mTLS", link = "/features/mtls" }]

[[social_links]]
icon = "github"
link = "https://github.com/example/agent"

[footer]
message = "Released under the Apache-2.0 License."
copyright = "Copyright 2024"
"#;

    fn assert_validation_error(config: &Config, expected: &[&str]) {
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let message = err.to_string();
        for part in expected {
            assert!(message.contains(part), "{message:?} should contain {part:?}");
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.site.title, "Documentation");
        assert_eq!(config.site.base, "/");
        assert_eq!(config.site.lang, "en-US");
        assert_eq!(config.search.provider, SearchProvider::Local);
        assert_eq!(config.doc_footer.prev, "Previous page");
        assert_eq!(config.doc_footer.next, "Next page");
        assert!(config.taxonomy.nav.is_empty());
        assert!(config.footer.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.taxonomy, Taxonomy::default());
    }

    #[test]
    fn test_parse_taxonomy_preserves_order() {
        let config = Config::parse(AGENT_DOCS).unwrap();

        let nav: Vec<_> = config.taxonomy.nav.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(nav, vec!["Guide", "Features"]);

        let prefixes: Vec<_> = config
            .taxonomy
            .sidebar
            .iter()
            .map(|s| s.prefix.as_str())
            .collect();
        assert_eq!(prefixes, vec!["/guide/", "/features/"]);

        assert_eq!(
            config.taxonomy.flatten("/guide/"),
            vec![
                &SidebarItem::new("Install", "/guide/installation"),
                &SidebarItem::new("Config", "/guide/configuration"),
                &SidebarItem::new("Buffering", "/guide/buffering"),
            ]
        );
        assert_eq!(config.taxonomy.sidebar[0].groups[1].collapsed, Some(true));
    }

    #[test]
    fn test_parse_theme_records() {
        let config = Config::parse(AGENT_DOCS).unwrap();

        assert_eq!(config.site.title, "Agent");
        assert_eq!(config.social_links.len(), 1);
        assert_eq!(config.social_links[0].icon, "github");
        assert_eq!(
            config.footer,
            Some(FooterConfig {
                message: Some("Released under the Apache-2.0 License.".to_owned()),
                copyright: Some("Copyright 2024".to_owned()),
            })
        );
    }

    #[test]
    fn test_parsed_taxonomy_resolves() {
        let config = Config::parse(AGENT_DOCS).unwrap();

        let context = resolve(&config.taxonomy, "/guide/configuration");

        assert_eq!(context.active_nav.map(|nav| nav.text), Some("Guide".to_owned()));
        assert_eq!(context.prev_item.map(|item| item.text), Some("Install".to_owned()));
        assert_eq!(context.next_item.map(|item| item.text), Some("Buffering".to_owned()));
    }

    #[test]
    fn test_parse_invalid_active_match_fails() {
        let toml = r#"
[[nav]]
text = "Guide"
link = "/guide/"
active_match = "(unclosed"
"#;
        let result = Config::parse(toml);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_expand_env_vars_edit_link_and_social() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SITENAV_CONFIG_TEST_REPO", "example/agent");
        }

        let toml = r#"
[[social_links]]
icon = "github"
link = "https://github.com/${SITENAV_CONFIG_TEST_REPO}"

[edit_link]
pattern = "https://github.com/${SITENAV_CONFIG_TEST_REPO}/edit/main/docs/:path"
"#;
        let config = Config::parse(toml).unwrap();

        assert_eq!(config.social_links[0].link, "https://github.com/example/agent");
        let edit_link = config.edit_link.unwrap();
        assert_eq!(edit_link.text, "Edit this page");
        assert_eq!(
            edit_link.url_for("guide/installation.md"),
            "https://github.com/example/agent/edit/main/docs/guide/installation.md"
        );

        unsafe {
            std::env::remove_var("SITENAV_CONFIG_TEST_REPO");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SITENAV_CONFIG_TEST_MISSING");
        }

        let toml = r#"
[edit_link]
pattern = "https://${SITENAV_CONFIG_TEST_MISSING}/:path"
"#;
        let err = Config::parse(toml).unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("edit_link.pattern"));
    }

    #[test]
    fn test_expand_env_vars_nav_link() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SITENAV_CONFIG_TEST_NAV_REPO");
        }

        let toml = r#"
[[nav]]
text = "Guide"
link = "/guide/"

[[nav]]
text = "Changelog"
link = "https://github.com/${SITENAV_CONFIG_TEST_NAV_REPO:-example/agent}/releases"
"#;
        let config = Config::parse(toml).unwrap();

        let links: Vec<_> = config.taxonomy.nav.iter().map(|e| e.link.as_str()).collect();
        assert_eq!(
            links,
            vec!["/guide/", "https://github.com/example/agent/releases"]
        );
    }

    #[test]
    fn test_expand_env_vars_nav_link_missing_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SITENAV_CONFIG_TEST_NAV_MISSING");
        }

        let toml = r#"
[[nav]]
text = "Changelog"
link = "https://${SITENAV_CONFIG_TEST_NAV_MISSING}/releases"
"#;
        let err = Config::parse(toml).unwrap_err();

        assert!(err.to_string().contains("nav[0].link"));
    }

    #[test]
    fn test_apply_cli_settings_base() {
        let mut config = Config::default();
        let overrides = CliSettings {
            base: Some("/docs/".to_owned()),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.site.base, "/docs/");
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.site.base, "/");
    }

    #[test]
    fn test_validate_base_requires_slashes() {
        let mut config = Config::default();
        config.site.base = "docs/".to_owned();
        assert_validation_error(&config, &["site.base"]);

        config.site.base = "/docs".to_owned();
        assert_validation_error(&config, &["site.base"]);
    }

    #[test]
    fn test_validate_title_empty() {
        let mut config = Config::default();
        config.site.title = String::new();
        assert_validation_error(&config, &["site.title", "empty"]);
    }

    #[test]
    fn test_validate_social_link_empty() {
        let mut config = Config::default();
        config.social_links.push(SocialLink {
            icon: "github".to_owned(),
            link: String::new(),
            aria_label: None,
        });
        assert_validation_error(&config, &["social_links[0].link"]);
    }

    #[test]
    fn test_validate_algolia_requires_options() {
        let toml = r#"
[search]
provider = "algolia"

[search.options]
app_id = "APP"
api_key = "KEY"
"#;
        let config = Config::parse(toml).unwrap();
        assert_validation_error(&config, &["search.options.index_name", "algolia"]);
    }

    #[test]
    fn test_validate_edit_link_pattern_empty() {
        let config = Config::parse("[edit_link]\npattern = \"\"\n").unwrap();
        assert_validation_error(&config, &["edit_link.pattern"]);
    }

    #[test]
    fn test_load_explicit_missing_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_sets_config_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, AGENT_DOCS).unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.config_path, Some(path));
        assert_eq!(config.taxonomy.sidebar.len(), 2);
    }

    #[test]
    fn test_load_applies_and_validates_cli_settings() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, AGENT_DOCS).unwrap();

        let settings = CliSettings {
            base: Some("docs".to_owned()),
        };
        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();

        assert!(err.to_string().contains("site.base"));
    }

    #[test]
    fn test_load_from_file_rejects_invalid_values() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[site]\nbase = \"docs\"\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_discover_config_walks_up_parents() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("docs").join("guide");
        std::fs::create_dir_all(&nested).unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();

        assert_eq!(Config::discover_config_from(&nested), Some(path));
    }

    #[test]
    fn test_discover_config_prefers_nearest() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("site");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILENAME), "").unwrap();
        let nearest = nested.join(CONFIG_FILENAME);
        std::fs::write(&nearest, "").unwrap();

        assert_eq!(Config::discover_config_from(&nested), Some(nearest));
    }

    #[test]
    fn test_load_demo_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/sitenav.toml");

        let config = Config::load(Some(&path), None).unwrap();

        let mut links: Vec<&str> = config.taxonomy.nav.iter().map(|e| e.link.as_str()).collect();
        links.extend(config.social_links.iter().map(|s| s.link.as_str()));
        links.extend(config.edit_link.iter().map(|e| e.pattern.as_str()));
        assert!(links.iter().any(|link| link.ends_with("/releases")));
        for link in links {
            assert!(!link.contains("${"), "unexpanded link: {link}");
        }

        let errors: Vec<_> = sitenav_taxonomy::validate(&config.taxonomy)
            .into_iter()
            .filter(sitenav_taxonomy::Issue::is_error)
            .collect();
        assert_eq!(errors, vec![]);
    }
}
