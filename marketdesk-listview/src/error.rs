//! Error types for list criteria and configuration.
//!
//! The pipeline itself never fails; these errors come from building a
//! [`PageWindow`](crate::PageWindow) or loading configuration.

use thiserror::Error;

/// Errors raised while constructing list criteria.
#[derive(Debug, Error, PartialEq)]
pub enum ListError {
    /// Pages are 1-indexed.
    #[error("page numbers start at 1")]
    ZeroPage,

    /// A page must hold at least one record.
    #[error("page size must be at least 1")]
    ZeroPageSize,

    /// Page size outside the configured tiers.
    #[error("unsupported page size {size} (allowed: {allowed:?})")]
    UnsupportedPageSize { size: usize, allowed: Vec<usize> },

    /// A sort key string like `"name:asc"` could not be parsed.
    #[error("invalid sort key: {0}")]
    InvalidSortKey(String),

    /// Configuration file could not be parsed or is inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for list operations.
pub type ListResult<T> = Result<T, ListError>;
