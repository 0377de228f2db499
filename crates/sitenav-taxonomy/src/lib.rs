//! Navigation taxonomy and page path resolution for sitenav.
//!
//! This crate provides:
//! - [`Taxonomy`]: Static description of nav entries and sidebar sections
//! - [`resolve`]: Maps a page path to its [`NavigationContext`]
//! - [`Navigator`]: Memoizing, thread-safe wrapper around [`resolve`]
//! - [`validate`]: Build-time checks for taxonomy authoring mistakes
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use sitenav_taxonomy::{
//!     NavEntry, Navigator, SidebarGroup, SidebarItem, SidebarSection, Taxonomy, normalize_path,
//! };
//!
//! let taxonomy = Taxonomy::new(
//!     vec![NavEntry::new("Guide", "/guide/"), NavEntry::new("Features", "/features/")],
//!     vec![SidebarSection::new(
//!         "/guide/",
//!         vec![SidebarGroup::new(
//!             "Getting Started",
//!             vec![
//!                 SidebarItem::new("Install", "/guide/installation"),
//!                 SidebarItem::new("Config", "/guide/configuration"),
//!             ],
//!         )],
//!     )],
//! );
//!
//! let navigator = Navigator::new(Arc::new(taxonomy));
//! let context = navigator.resolve(&normalize_path("guide/configuration.html"));
//!
//! assert_eq!(context.active_section.as_deref(), Some("/guide/"));
//! assert_eq!(context.prev_item.as_ref().map(|item| item.text.as_str()), Some("Install"));
//! assert!(context.next_item.is_none());
//! ```

mod navigator;
mod normalize;
mod resolver;
mod taxonomy;
mod validate;

pub use navigator::Navigator;
pub use normalize::normalize_path;
pub use resolver::{NavLink, NavigationContext, resolve};
pub use taxonomy::{ActiveMatch, NavEntry, SidebarGroup, SidebarItem, SidebarSection, Taxonomy};
pub use validate::{Issue, Severity, validate};
