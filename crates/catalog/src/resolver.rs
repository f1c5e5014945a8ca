//! Free-text query → ordered component set.
//!
//! Two rule tiers are consulted in order:
//! 1. **Phrase rules** match when the whole normalized query contains the phrase.
//! 2. **Word rules** run only if no phrase matched. Each whitespace token
//!    matches a rule when it equals the key, or when either string contains
//!    the other, so `"form"` also hits every multi-word key containing it.
//!
//! When neither tier contributes anything the catalog fallback is returned, so
//! the result is never empty.

use std::sync::Arc;

use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

use suggest_core::ComponentId;

use crate::catalog::{ComponentCatalog, KeywordRule};

/// Which rule tier produced a [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Phrase,
    Keyword,
    Fallback,
}

/// Outcome of resolving one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Deduplicated components in first-insertion order. Never empty.
    pub components: Vec<ComponentId>,
    pub tier: MatchTier,
    /// Rule keys that contributed, in the order they first fired.
    pub matched_rules: Vec<String>,
}

/// Stateless resolver over a shared catalog.
#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Arc<ComponentCatalog>,
}

/// Insertion-ordered accumulator for one resolution pass.
#[derive(Default)]
struct Matches<'a> {
    components: IndexSet<ComponentId>,
    rules: IndexSet<&'a str>,
}

impl<'a> Matches<'a> {
    fn add(&mut self, rule: &'a KeywordRule) {
        self.rules.insert(rule.key.as_str());
        self.components.extend(rule.components.iter().copied());
    }

    fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl Resolver {
    pub fn new(catalog: Arc<ComponentCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    /// Resolve a query to its component set.
    pub fn resolve(&self, query: &str) -> Resolution {
        let normalized = normalize(query);

        let mut matches = self.phrase_pass(&normalized);
        let mut tier = MatchTier::Phrase;

        if matches.is_empty() {
            matches = self.keyword_pass(&normalized);
            tier = MatchTier::Keyword;
        }

        let resolution = if matches.is_empty() {
            Resolution {
                components: self.catalog.fallback().to_vec(),
                tier: MatchTier::Fallback,
                matched_rules: Vec::new(),
            }
        } else {
            Resolution {
                components: matches.components.into_iter().collect(),
                tier,
                matched_rules: matches.rules.into_iter().map(str::to_string).collect(),
            }
        };

        debug!(
            query = %normalized,
            tier = ?resolution.tier,
            components = resolution.components.len(),
            rules = resolution.matched_rules.len(),
            "Query resolved"
        );
        resolution
    }

    /// Shorthand for `resolve(query).components`.
    pub fn components(&self, query: &str) -> Vec<ComponentId> {
        self.resolve(query).components
    }

    fn phrase_pass(&self, normalized: &str) -> Matches<'_> {
        let mut matches = Matches::default();
        for rule in self.catalog.phrase_rules() {
            if normalized.contains(rule.key.as_str()) {
                matches.add(rule);
            }
        }
        matches
    }

    fn keyword_pass(&self, normalized: &str) -> Matches<'_> {
        let mut matches = Matches::default();
        for token in normalized.split_whitespace() {
            if let Some(rule) = self.catalog.word_rule(token) {
                matches.add(rule);
            }
            for rule in self.catalog.word_rules() {
                let key = rule.key.as_str();
                if key.contains(token) || token.contains(key) {
                    matches.add(rule);
                }
            }
        }
        matches
    }
}

fn normalize(query: &str) -> String {
    query.to_lowercase().trim().to_string()
}
