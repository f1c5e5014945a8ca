//! Search usage analytics: an append-only, capacity-bounded event log with
//! on-demand aggregation.

pub mod demo;
pub mod error;
pub mod store;
pub mod tracker;
pub mod types;

pub use error::AnalyticsError;
pub use store::{MemoryEventStore, SearchEventStore};
pub use tracker::UsageTracker;
pub use types::{NewSearch, PopularQuery, SearchEvent, UsageAggregate};
