use std::sync::Arc;

use suggest_analytics::UsageTracker;
use suggest_catalog::{ComponentCatalog, Resolver, SnippetAssembler};

pub struct AppState {
    pub catalog: Arc<ComponentCatalog>,
    pub resolver: Resolver,
    pub assembler: SnippetAssembler,
    pub tracker: UsageTracker,
}

impl AppState {
    pub fn new(catalog: Arc<ComponentCatalog>, tracker: UsageTracker) -> Self {
        Self {
            resolver: Resolver::new(catalog.clone()),
            assembler: SnippetAssembler::new(catalog.clone()),
            catalog,
            tracker,
        }
    }
}
