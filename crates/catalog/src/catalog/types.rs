use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use suggest_core::ComponentId;

// ── YAML-level types ────────────────────────────────────────────────

/// Catalog document as written on disk.
///
/// Mappings deserialize into [`IndexMap`] so rule tables keep the order in
/// which they were written; resolution depends on that order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    /// Import packages in emission order. The last one receives detected icons.
    pub packages: Vec<String>,
    /// Icon identifiers detected in assembled bodies even when not imported.
    #[serde(default)]
    pub icons: Vec<String>,
    /// Returned when no rule matches a query.
    pub fallback: Vec<ComponentId>,
    pub templates: IndexMap<ComponentId, String>,
    /// Multi-word patterns, checked first against the whole query.
    pub phrase_rules: IndexMap<String, Vec<ComponentId>>,
    /// Single keywords, checked per token when no phrase matched.
    pub word_rules: IndexMap<String, Vec<ComponentId>>,
}

// ── Compiled (hot-path) types ───────────────────────────────────────

/// A trigger key and the components it contributes, in definition order.
///
/// `components` may contain duplicates; callers dedupe on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub key: String,
    pub components: Vec<ComponentId>,
}

/// Immutable, validated catalog shared by the resolver and the assembler.
#[derive(Debug, Clone)]
pub struct ComponentCatalog {
    pub(super) templates: HashMap<ComponentId, String>,
    pub(super) phrase_rules: Vec<KeywordRule>,
    pub(super) word_rules: Vec<KeywordRule>,
    /// Lowercased word key → index into `word_rules` (first definition wins).
    pub(super) word_index: HashMap<String, usize>,
    pub(super) fallback: Vec<ComponentId>,
    pub(super) packages: Vec<String>,
    pub(super) icons: Vec<String>,
}

impl ComponentCatalog {
    /// Raw snippet template for a component.
    pub fn snippet(&self, id: ComponentId) -> Option<&str> {
        self.templates.get(&id).map(String::as_str)
    }

    /// Every component with its template, in [`ComponentId::ALL`] order.
    pub fn components(&self) -> impl Iterator<Item = (ComponentId, &str)> + '_ {
        ComponentId::ALL
            .iter()
            .filter_map(move |id| self.snippet(*id).map(|s| (*id, s)))
    }

    /// Number of components with a template.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn phrase_rules(&self) -> &[KeywordRule] {
        &self.phrase_rules
    }

    pub fn word_rules(&self) -> &[KeywordRule] {
        &self.word_rules
    }

    /// Exact lookup of a word rule by its (lowercase) key.
    pub fn word_rule(&self, key: &str) -> Option<&KeywordRule> {
        self.word_index.get(key).map(|&i| &self.word_rules[i])
    }

    pub fn fallback(&self) -> &[ComponentId] {
        &self.fallback
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    /// Package that receives icon imports (the last configured package).
    pub fn icon_package(&self) -> &str {
        self.packages.last().map(String::as_str).unwrap_or_default()
    }

    pub fn icons(&self) -> &[String] {
        &self.icons
    }
}
