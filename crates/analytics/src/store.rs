use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;

use suggest_core::ComponentId;

use crate::types::{PopularQuery, SearchEvent, UsageAggregate};

/// Length of the "today" window, measured back from the evaluation time.
pub const RECENT_WINDOW_HOURS: i64 = 24;
/// Maximum entries in [`UsageAggregate::popular_queries`].
pub const POPULAR_LIMIT: usize = 5;

// ---------------------------------------------------------------------------
// Store abstraction
// ---------------------------------------------------------------------------

/// Append-only event log the tracker writes to.
///
/// Implementations must make `append` atomic with respect to eviction, and
/// `aggregate` must observe a consistent snapshot.
pub trait SearchEventStore: Send + Sync {
    fn append(&self, event: SearchEvent);

    fn aggregate(&self, now: DateTime<Utc>) -> UsageAggregate;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Bounded FIFO log held in process memory. Contents are lost on restart.
pub struct MemoryEventStore {
    events: RwLock<VecDeque<SearchEvent>>,
    capacity: usize,
}

impl MemoryEventStore {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of retained events, oldest first.
    pub fn snapshot(&self) -> Vec<SearchEvent> {
        let events = self.events.read().unwrap_or_else(PoisonError::into_inner);
        events.iter().cloned().collect()
    }
}

impl SearchEventStore for MemoryEventStore {
    fn append(&self, event: SearchEvent) {
        let mut events = self.events.write().unwrap_or_else(PoisonError::into_inner);
        events.push_back(event);
        while events.len() > self.capacity {
            if let Some(evicted) = events.pop_front() {
                tracing::debug!(id = %evicted.id, "Evicted oldest search event");
            }
        }
    }

    fn aggregate(&self, now: DateTime<Utc>) -> UsageAggregate {
        let events = self.events.read().unwrap_or_else(PoisonError::into_inner);
        summarize(events.iter(), now)
    }

    fn len(&self) -> usize {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Compute usage statistics over `events` as of `now`.
///
/// An event counts towards `today_queries` only if it is strictly newer than
/// `now - 24h`. Popular queries are ranked by exact-text frequency; equal
/// counts keep the order in which each query was first seen.
pub fn summarize<'a>(
    events: impl IntoIterator<Item = &'a SearchEvent>,
    now: DateTime<Utc>,
) -> UsageAggregate {
    let cutoff = now - Duration::hours(RECENT_WINDOW_HOURS);

    let mut total = 0usize;
    let mut today = 0usize;
    let mut counts: IndexMap<&str, usize> = IndexMap::new();

    for event in events {
        total += 1;
        if event.timestamp > cutoff {
            today += 1;
        }
        *counts.entry(event.query.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(POPULAR_LIMIT);

    UsageAggregate {
        total_queries: total,
        today_queries: today,
        total_components: ComponentId::COUNT,
        popular_queries: ranked
            .into_iter()
            .map(|(query, count)| PopularQuery {
                query: query.to_string(),
                count,
            })
            .collect(),
    }
}
