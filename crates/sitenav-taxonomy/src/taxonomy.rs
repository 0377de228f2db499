//! Navigation taxonomy data model.
//!
//! The taxonomy is the static description of a documentation site's
//! navigation chrome: ordered top-level nav entries plus sidebar sections
//! keyed by path prefix. It is loaded once and never mutated, so every
//! type here is plain owned data that can be shared behind an `Arc`.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Regular expression that marks a nav entry active beyond its literal link prefix.
///
/// Serialized as the pattern string. Patterns are compiled when the
/// taxonomy is deserialized, so invalid expressions fail at load time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActiveMatch(Regex);

impl ActiveMatch {
    /// Compile an active-match pattern.
    ///
    /// # Errors
    ///
    /// Returns the regex compilation error for invalid patterns.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }

    /// Source pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Check whether the pattern matches a page path.
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.0.is_match(path)
    }
}

impl PartialEq for ActiveMatch {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ActiveMatch {}

impl TryFrom<String> for ActiveMatch {
    type Error = regex::Error;

    fn try_from(pattern: String) -> Result<Self, Self::Error> {
        Self::new(&pattern)
    }
}

impl From<ActiveMatch> for String {
    fn from(active: ActiveMatch) -> Self {
        active.as_str().to_owned()
    }
}

/// Top-level navigation bar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display text.
    pub text: String,
    /// Link target. Internal links are absolute paths (`/guide/`).
    pub link: String,
    /// Optional pattern that also activates this entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_match: Option<ActiveMatch>,
}

impl NavEntry {
    /// Create a nav entry without an active-match pattern.
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
            active_match: None,
        }
    }

    /// Attach an active-match pattern.
    #[must_use]
    pub fn with_active_match(mut self, active_match: ActiveMatch) -> Self {
        self.active_match = Some(active_match);
        self
    }

    /// Check whether this entry is a candidate for the given page path.
    ///
    /// An entry matches when its link is a literal prefix of the path, or
    /// when its active-match pattern matches the path.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.link)
            || self
                .active_match
                .as_ref()
                .is_some_and(|active| active.is_match(path))
    }
}

/// Sidebar leaf pointing to one page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    /// Display text.
    pub text: String,
    /// Page path.
    pub link: String,
}

impl SidebarItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// Titled group of sidebar items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub text: String,
    /// Initial collapse state (`None` means the group is not collapsible).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Items in display order.
    #[serde(default)]
    pub items: Vec<SidebarItem>,
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self {
            text: text.into(),
            collapsed: None,
            items,
        }
    }
}

/// Sidebar shown for every page under a path prefix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSection {
    /// Path prefix owning this sidebar (e.g., `/guide/`).
    pub prefix: String,
    /// Groups in display order.
    #[serde(default)]
    pub groups: Vec<SidebarGroup>,
}

impl SidebarSection {
    pub fn new(prefix: impl Into<String>, groups: Vec<SidebarGroup>) -> Self {
        Self {
            prefix: prefix.into(),
            groups,
        }
    }

    /// Iterate items in pagination order: group order, then item order.
    pub fn items(&self) -> impl Iterator<Item = &SidebarItem> {
        self.groups.iter().flat_map(|group| group.items.iter())
    }

    /// Check whether a page path falls under this section's prefix.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }
}

/// Complete navigation taxonomy of a site.
///
/// Immutable for the process lifetime; pass it explicitly (or behind an
/// `Arc`) to every resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    /// Top-level nav entries in display order.
    #[serde(default)]
    pub nav: Vec<NavEntry>,
    /// Sidebar sections in declaration order.
    #[serde(default)]
    pub sidebar: Vec<SidebarSection>,
}

impl Taxonomy {
    #[must_use]
    pub fn new(nav: Vec<NavEntry>, sidebar: Vec<SidebarSection>) -> Self {
        Self { nav, sidebar }
    }

    /// Get a sidebar section by its exact prefix.
    #[must_use]
    pub fn section(&self, prefix: &str) -> Option<&SidebarSection> {
        self.sidebar.iter().find(|section| section.prefix == prefix)
    }

    /// Flattened pagination order of a section.
    ///
    /// Returns an empty list for unknown prefixes.
    #[must_use]
    pub fn flatten(&self, prefix: &str) -> Vec<&SidebarItem> {
        self.section(prefix)
            .map(|section| section.items().collect())
            .unwrap_or_default()
    }
}
