//! Build-time taxonomy validation.
//!
//! Resolution never fails, so authoring mistakes surface as odd navigation
//! rather than errors. [`validate`] reports them up front. Errors make a
//! taxonomy unusable as written; warnings describe configurations that
//! resolve deterministically but probably not as intended.

use std::collections::HashMap;
use std::fmt;

use crate::resolver::active_section;
use crate::taxonomy::Taxonomy;

/// Issue severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// Problem found in a taxonomy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Issue {
    /// A sidebar section repeats an earlier prefix and is unreachable.
    DuplicatePrefix { prefix: String },
    /// One sidebar prefix is a prefix of another. Longest prefix wins.
    OverlappingPrefixes { outer: String, inner: String },
    /// Two nav entries share a link. The first listed wins.
    DuplicateNavLink { link: String },
    /// A section lists the same link twice. Only the first is ever active.
    DuplicateSidebarLink { prefix: String, link: String },
    /// Internal link is not an absolute path.
    RelativeLink { location: String, link: String },
    /// Sidebar item link is outside its section's prefix.
    OrphanItem { prefix: String, link: String },
    /// Sidebar item resolves to another section (a more specific one, or the
    /// first declaration of a duplicated prefix), so it is never active here.
    ShadowedItem {
        prefix: String,
        link: String,
        owner: String,
    },
    /// Sidebar group has no items.
    EmptyGroup { prefix: String, group: String },
}

impl Issue {
    /// Severity of this issue.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::DuplicatePrefix { .. } | Self::RelativeLink { .. } => Severity::Error,
            Self::OverlappingPrefixes { .. }
            | Self::DuplicateNavLink { .. }
            | Self::DuplicateSidebarLink { .. }
            | Self::OrphanItem { .. }
            | Self::ShadowedItem { .. }
            | Self::EmptyGroup { .. } => Severity::Warning,
        }
    }

    /// Whether this issue is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicatePrefix { prefix } => {
                write!(f, "sidebar prefix {prefix} is declared more than once")
            }
            Self::OverlappingPrefixes { outer, inner } => write!(
                f,
                "sidebar prefixes {outer} and {inner} overlap; pages under {inner} use the {inner} sidebar"
            ),
            Self::DuplicateNavLink { link } => {
                write!(f, "nav link {link} is listed more than once")
            }
            Self::DuplicateSidebarLink { prefix, link } => {
                write!(f, "sidebar {prefix} lists {link} more than once")
            }
            Self::RelativeLink { location, link } => {
                write!(f, "{location}: link {link} must start with '/'")
            }
            Self::OrphanItem { prefix, link } => {
                write!(f, "sidebar {prefix} lists {link}, which is outside its prefix")
            }
            Self::ShadowedItem {
                prefix,
                link,
                owner,
            } if prefix == owner => write!(
                f,
                "duplicate sidebar {prefix} lists {link}, but that page resolves to the first sidebar {owner}"
            ),
            Self::ShadowedItem {
                prefix,
                link,
                owner,
            } => write!(
                f,
                "sidebar {prefix} lists {link}, but that page resolves to sidebar {owner}"
            ),
            Self::EmptyGroup { prefix, group } => {
                write!(f, "sidebar {prefix} group \"{group}\" has no items")
            }
        }
    }
}

/// Check a taxonomy for authoring mistakes.
///
/// Issues are reported in taxonomy order: nav entries first, then sidebar
/// prefixes, then each section's groups and items.
#[must_use]
pub fn validate(taxonomy: &Taxonomy) -> Vec<Issue> {
    let mut issues = Vec::new();
    check_nav(taxonomy, &mut issues);
    check_prefixes(taxonomy, &mut issues);
    check_sections(taxonomy, &mut issues);
    issues
}

/// Check whether a link leaves the site.
fn is_external(link: &str) -> bool {
    ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| link.starts_with(scheme))
}

fn check_nav(taxonomy: &Taxonomy, issues: &mut Vec<Issue>) {
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (idx, entry) in taxonomy.nav.iter().enumerate() {
        if !is_external(&entry.link) && !entry.link.starts_with('/') {
            issues.push(Issue::RelativeLink {
                location: format!("nav[{idx}] \"{}\"", entry.text),
                link: entry.link.clone(),
            });
        }

        let count = seen.entry(entry.link.as_str()).or_default();
        *count += 1;
        if *count == 2 {
            issues.push(Issue::DuplicateNavLink {
                link: entry.link.clone(),
            });
        }
    }
}

fn check_prefixes(taxonomy: &Taxonomy, issues: &mut Vec<Issue>) {
    // Distinct prefixes in declaration order; repeats are reported once per
    // redundant declaration and excluded from overlap checks.
    let mut distinct: Vec<&str> = Vec::new();

    for (idx, section) in taxonomy.sidebar.iter().enumerate() {
        let prefix = section.prefix.as_str();
        if !prefix.starts_with('/') {
            issues.push(Issue::RelativeLink {
                location: format!("sidebar[{idx}] prefix"),
                link: prefix.to_owned(),
            });
        }

        if distinct.contains(&prefix) {
            issues.push(Issue::DuplicatePrefix {
                prefix: prefix.to_owned(),
            });
        } else {
            distinct.push(prefix);
        }
    }

    for (idx, a) in distinct.iter().enumerate() {
        for b in &distinct[idx + 1..] {
            let (outer, inner) = if b.starts_with(a) {
                (a, b)
            } else if a.starts_with(b) {
                (b, a)
            } else {
                continue;
            };
            issues.push(Issue::OverlappingPrefixes {
                outer: (*outer).to_owned(),
                inner: (*inner).to_owned(),
            });
        }
    }
}

fn check_sections(taxonomy: &Taxonomy, issues: &mut Vec<Issue>) {
    for section in &taxonomy.sidebar {
        let prefix = &section.prefix;
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for group in &section.groups {
            if group.items.is_empty() {
                issues.push(Issue::EmptyGroup {
                    prefix: prefix.clone(),
                    group: group.text.clone(),
                });
            }

            for item in &group.items {
                let link = &item.link;

                if !link.starts_with('/') {
                    issues.push(Issue::RelativeLink {
                        location: format!("sidebar {prefix} item \"{}\"", item.text),
                        link: link.clone(),
                    });
                } else if !section.contains(link) {
                    issues.push(Issue::OrphanItem {
                        prefix: prefix.clone(),
                        link: link.clone(),
                    });
                } else if let Some(owner) = active_section(&taxonomy.sidebar, link)
                    && !std::ptr::eq(owner, section)
                {
                    issues.push(Issue::ShadowedItem {
                        prefix: prefix.clone(),
                        link: link.clone(),
                        owner: owner.prefix.clone(),
                    });
                }

                let count = seen.entry(link.as_str()).or_default();
                *count += 1;
                if *count == 2 {
                    issues.push(Issue::DuplicateSidebarLink {
                        prefix: prefix.clone(),
                        link: link.clone(),
                    });
                }
            }
        }
    }
}
