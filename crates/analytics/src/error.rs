//! Analytics error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyticsError {
    /// `query` was absent or blank, or `components` was absent.
    #[error("Missing required fields: query and components")]
    MissingFields,
}
