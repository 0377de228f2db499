//! Memoizing navigation resolver.
//!
//! A generator renders every page once per build, and a dev server renders
//! the same pages repeatedly. Since the taxonomy never changes while a
//! [`Navigator`] holds it, resolved contexts can be reused per path.
//!
//! # Thread Safety
//!
//! `Navigator` is designed for concurrent access:
//! - The taxonomy is shared as an immutable `Arc<Taxonomy>`
//! - Resolved contexts are stored as `Arc<NavigationContext>` behind a `RwLock`
//! - Cache hits only take the read lock
//!
//! A poisoned lock is recovered rather than propagated: the memo only
//! ever holds complete entries, so its contents stay valid.
//!
//! Only contexts with an active sidebar item are memoized, so the memo is
//! bounded by the number of sidebar links. Any other request (pages outside
//! the sidebar, typos sent to a dev server) is resolved each time and never
//! grows the memo.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::resolver::{NavigationContext, resolve};
use crate::taxonomy::Taxonomy;

/// Resolves navigation contexts and memoizes them per path.
pub struct Navigator {
    taxonomy: Arc<Taxonomy>,
    memo: RwLock<HashMap<String, Arc<NavigationContext>>>,
}

impl Navigator {
    /// Create a navigator over a taxonomy.
    #[must_use]
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self {
            taxonomy,
            memo: RwLock::new(HashMap::new()),
        }
    }

    /// Taxonomy this navigator resolves against.
    #[must_use]
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Resolve the navigation context of a page.
    ///
    /// Returns the same result as [`resolve`], reusing a previous result for
    /// the same path when available. Contexts without an active sidebar item
    /// are not stored.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Arc<NavigationContext> {
        if let Some(context) = self
            .memo
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
        {
            return Arc::clone(context);
        }

        let context = Arc::new(resolve(&self.taxonomy, path));
        tracing::debug!(
            path,
            section = context.active_section.as_deref(),
            "Resolved navigation context"
        );

        if context.active_item.is_none() {
            return context;
        }

        let mut memo = self.memo.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(memo.entry(path.to_owned()).or_insert(context))
    }

    /// Number of memoized paths.
    #[must_use]
    pub fn cached_paths(&self) -> usize {
        self.memo
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Drop all memoized contexts.
    ///
    /// Readers holding an `Arc<NavigationContext>` keep their copy.
    pub fn clear(&self) {
        self.memo
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
