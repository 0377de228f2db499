//! Page path to navigation context resolution.
//!
//! [`resolve`] is a pure function of the taxonomy and the requested path.
//! Every "not found" outcome is an absent field, never an error, so the
//! function is total over all string inputs.

use serde::Serialize;

use crate::taxonomy::{NavEntry, SidebarItem, SidebarSection, Taxonomy};

/// Link rendered in navigation chrome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Display text.
    pub text: String,
    /// Link target.
    pub link: String,
}

impl From<&NavEntry> for NavLink {
    fn from(entry: &NavEntry) -> Self {
        Self {
            text: entry.text.clone(),
            link: entry.link.clone(),
        }
    }
}

impl From<&SidebarItem> for NavLink {
    fn from(item: &SidebarItem) -> Self {
        Self {
            text: item.text.clone(),
            link: item.link.clone(),
        }
    }
}

/// Navigation state for one rendered page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationContext {
    /// Highlighted top-level nav entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_nav: Option<NavLink>,
    /// Prefix of the sidebar section shown (None for full-width pages).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_section: Option<String>,
    /// Highlighted sidebar item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_item: Option<NavLink>,
    /// Previous page in the section's pagination order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_item: Option<NavLink>,
    /// Next page in the section's pagination order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_item: Option<NavLink>,
}

impl NavigationContext {
    /// Whether the page is rendered with a sidebar.
    #[must_use]
    pub fn has_sidebar(&self) -> bool {
        self.active_section.is_some()
    }
}

/// Resolve the navigation context of a page.
///
/// # Arguments
///
/// * `taxonomy` - Site taxonomy
/// * `path` - Normalized absolute page path (see [`normalize_path`](crate::normalize_path))
///
/// # Example
///
/// ```
/// use sitenav_taxonomy::{NavEntry, SidebarGroup, SidebarItem, SidebarSection, Taxonomy, resolve};
///
/// let taxonomy = Taxonomy::new(
///     vec![NavEntry::new("Guide", "/guide/")],
///     vec![SidebarSection::new(
///         "/guide/",
///         vec![SidebarGroup::new(
///             "Getting Started",
///             vec![
///                 SidebarItem::new("Install", "/guide/installation"),
///                 SidebarItem::new("Config", "/guide/configuration"),
///             ],
///         )],
///     )],
/// );
///
/// let context = resolve(&taxonomy, "/guide/installation");
/// assert_eq!(context.active_nav.unwrap().text, "Guide");
/// assert_eq!(context.next_item.unwrap().text, "Config");
/// assert!(context.prev_item.is_none());
/// ```
#[must_use]
pub fn resolve(taxonomy: &Taxonomy, path: &str) -> NavigationContext {
    let active_nav = active_nav_entry(&taxonomy.nav, path).map(NavLink::from);

    let Some(section) = active_section(&taxonomy.sidebar, path) else {
        return NavigationContext {
            active_nav,
            ..NavigationContext::default()
        };
    };

    let items: Vec<&SidebarItem> = section.items().collect();
    let (active_item, prev_item, next_item) =
        match items.iter().position(|item| item.link == path) {
            Some(idx) => (
                Some(NavLink::from(items[idx])),
                idx.checked_sub(1).map(|prev| NavLink::from(items[prev])),
                items.get(idx + 1).map(|next| NavLink::from(*next)),
            ),
            None => (None, None, None),
        };

    NavigationContext {
        active_nav,
        active_section: Some(section.prefix.clone()),
        active_item,
        prev_item,
        next_item,
    }
}

/// Select the matching nav entry with the longest link.
///
/// Ties go to the first listed entry.
pub(crate) fn active_nav_entry<'a>(nav: &'a [NavEntry], path: &str) -> Option<&'a NavEntry> {
    longest(
        nav.iter().filter(|entry| entry.matches(path)),
        |entry| entry.link.len(),
    )
}

/// Select the sidebar section with the longest prefix of `path`.
///
/// Ties go to the first declared section.
pub(crate) fn active_section<'a>(
    sidebar: &'a [SidebarSection],
    path: &str,
) -> Option<&'a SidebarSection> {
    longest(
        sidebar.iter().filter(|section| section.contains(path)),
        |section| section.prefix.len(),
    )
}

/// First element with the strictly greatest key.
fn longest<'a, T>(
    candidates: impl Iterator<Item = &'a T>,
    key: impl Fn(&T) -> usize,
) -> Option<&'a T> {
    candidates.fold(None, |best, candidate| match best {
        Some(current) if key(current) >= key(candidate) => Some(current),
        _ => Some(candidate),
    })
}
