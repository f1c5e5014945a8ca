use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// One recorded search: the query text and the components suggested for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchEvent {
    pub id: String,
    pub query: String,
    pub components: Vec<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// An unvalidated submission, as received from a caller.
#[derive(Debug, Clone, Default)]
pub struct NewSearch {
    pub query: Option<String>,
    pub components: Option<Vec<String>>,
    pub user_agent: Option<String>,
}

impl NewSearch {
    pub fn new(query: impl Into<String>, components: Vec<String>) -> Self {
        Self {
            query: Some(query.into()),
            components: Some(components),
            user_agent: None,
        }
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// A query text and how many retained events carry it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct PopularQuery {
    pub query: String,
    pub count: usize,
}

/// Usage statistics derived from the retained events at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsageAggregate {
    /// Number of retained events.
    pub total_queries: usize,
    /// Events newer than 24 hours before the evaluation time.
    pub today_queries: usize,
    /// Size of the component catalog.
    pub total_components: usize,
    /// Up to five most frequent queries, most frequent first.
    pub popular_queries: Vec<PopularQuery>,
}
