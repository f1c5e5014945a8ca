use std::collections::HashMap;

use indexmap::IndexMap;

use suggest_core::ComponentId;

use super::types::{CatalogDocument, ComponentCatalog, KeywordRule};
use crate::error::CatalogError;

impl CatalogDocument {
    /// Validate the document and build the lookup tables used at query time.
    ///
    /// Every [`ComponentId`] must have a template, the fallback list and the
    /// package list must be non-empty, and rule keys are lowercased and trimmed.
    pub fn compile(&self) -> Result<ComponentCatalog, CatalogError> {
        if let Some(missing) = ComponentId::ALL
            .iter()
            .find(|id| !self.templates.contains_key(*id))
        {
            return Err(CatalogError::MissingTemplate(*missing));
        }
        if self.fallback.is_empty() {
            return Err(CatalogError::EmptyFallback);
        }
        if self.packages.is_empty() {
            return Err(CatalogError::NoPackages);
        }

        let phrase_rules = compile_rules(&self.phrase_rules)?;
        let word_rules = compile_rules(&self.word_rules)?;

        let mut word_index = HashMap::with_capacity(word_rules.len());
        for (i, rule) in word_rules.iter().enumerate() {
            word_index.entry(rule.key.clone()).or_insert(i);
        }

        let templates = self
            .templates
            .iter()
            .map(|(id, text)| (*id, text.clone()))
            .collect();

        Ok(ComponentCatalog {
            templates,
            phrase_rules,
            word_rules,
            word_index,
            fallback: self.fallback.clone(),
            packages: self.packages.clone(),
            icons: self.icons.clone(),
        })
    }
}

fn compile_rules(
    rules: &IndexMap<String, Vec<ComponentId>>,
) -> Result<Vec<KeywordRule>, CatalogError> {
    rules
        .iter()
        .map(|(key, components)| {
            let normalized = key.trim().to_lowercase();
            if normalized.is_empty() {
                return Err(CatalogError::EmptyRuleKey(key.clone()));
            }
            Ok(KeywordRule {
                key: normalized,
                components: components.clone(),
            })
        })
        .collect()
}
