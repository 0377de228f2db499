//! Presentation records passed through to the page renderer.
//!
//! Nothing here affects navigation resolution. Values are validated on
//! load and otherwise consumed verbatim.

use serde::Deserialize;

/// Site-wide metadata.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title shown in the nav bar and `<title>`.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Deployment base path (e.g., `/docs/`). Always starts and ends with `/`.
    pub base: String,
    /// Document language.
    pub lang: String,
    /// Nav bar logo path.
    pub logo: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            description: String::new(),
            base: "/".to_owned(),
            lang: "en-US".to_owned(),
            logo: None,
        }
    }
}

impl SiteConfig {
    /// Remove the deployment base from a request path.
    ///
    /// Paths outside the base are returned unchanged. The result keeps a
    /// leading `/`, so `/docs/guide/` under base `/docs/` becomes `/guide/`.
    #[must_use]
    pub fn strip_base<'a>(&self, path: &'a str) -> &'a str {
        if self.base == "/" {
            return path;
        }
        // Base ends with '/', so keep that slash as the new root.
        match path.strip_prefix(self.base.trim_end_matches('/')) {
            Some(rest) if rest.starts_with('/') => rest,
            Some("") => "/",
            _ => path,
        }
    }
}

/// Icon link in the nav bar (e.g., the project's GitHub).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    /// Icon name (`github`, `discord`, ...).
    pub icon: String,
    /// Link target.
    pub link: String,
    /// Accessible label.
    #[serde(default)]
    pub aria_label: Option<String>,
}

/// Page footer text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub message: Option<String>,
    pub copyright: Option<String>,
}

/// Search provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Client-side index built by the generator.
    #[default]
    Local,
    /// Hosted Algolia `DocSearch`.
    Algolia,
}

/// Search settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub provider: SearchProvider,
    /// Provider-specific options, passed through untouched.
    pub options: toml::Table,
}

/// "Edit this page" link.
#[derive(Debug, Deserialize)]
pub struct EditLinkConfig {
    /// URL pattern with a `:path` placeholder for the page's source path.
    pub pattern: String,
    /// Link text.
    #[serde(default = "default_edit_link_text")]
    pub text: String,
}

impl EditLinkConfig {
    /// Build the edit URL for a page source path (e.g., `guide/installation.md`).
    #[must_use]
    pub fn url_for(&self, source_path: &str) -> String {
        self.pattern
            .replace(":path", source_path.trim_start_matches('/'))
    }
}

fn default_edit_link_text() -> String {
    "Edit this page".to_owned()
}

/// Labels of the prev/next pagination links.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DocFooterConfig {
    pub prev: String,
    pub next: String,
}

impl Default for DocFooterConfig {
    fn default() -> Self {
        Self {
            prev: "Previous page".to_owned(),
            next: "Next page".to_owned(),
        }
    }
}
