use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::AnalyticsError;
use crate::store::{MemoryEventStore, SearchEventStore};
use crate::types::{NewSearch, SearchEvent, UsageAggregate};

/// Records searches and reports usage statistics.
///
/// Cheap to clone; clones share the same underlying store.
#[derive(Clone)]
pub struct UsageTracker {
    store: Arc<dyn SearchEventStore>,
}

impl UsageTracker {
    pub fn new(store: Arc<dyn SearchEventStore>) -> Self {
        Self { store }
    }

    pub fn in_memory(capacity: usize) -> Self {
        Self::new(Arc::new(MemoryEventStore::with_capacity(capacity)))
    }

    pub fn store(&self) -> &Arc<dyn SearchEventStore> {
        &self.store
    }

    /// Validate and store one search, stamped with the current time.
    ///
    /// The query is trimmed. A missing or blank query, or a missing component
    /// list, is rejected; an empty component list is accepted.
    pub fn record(&self, search: NewSearch) -> Result<SearchEvent, AnalyticsError> {
        self.record_at(search, Utc::now())
    }

    pub fn record_at(
        &self,
        search: NewSearch,
        timestamp: DateTime<Utc>,
    ) -> Result<SearchEvent, AnalyticsError> {
        let query = search
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or(AnalyticsError::MissingFields)?
            .to_string();
        let components = search.components.ok_or(AnalyticsError::MissingFields)?;

        let event = SearchEvent {
            id: Uuid::new_v4().to_string(),
            query,
            components,
            timestamp,
            user_agent: search.user_agent,
        };
        self.store.append(event.clone());

        tracing::info!(
            id = %event.id,
            query = %event.query,
            components = event.components.len(),
            "Search recorded"
        );
        Ok(event)
    }

    pub fn aggregate(&self) -> UsageAggregate {
        self.aggregate_at(Utc::now())
    }

    pub fn aggregate_at(&self, now: DateTime<Utc>) -> UsageAggregate {
        self.store.aggregate(now)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl std::fmt::Debug for UsageTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsageTracker")
            .field("events", &self.store.len())
            .finish()
    }
}
