//! Core type definitions for MarketDesk.
//!
//! This crate defines the fundamental, entity-agnostic types used by the
//! admin workspace:
//! - Record identifiers as delivered by the commerce API
//! - Parsed timestamps for temporal ordering
//!
//! Entity shapes (products, categories, users) belong in `marketdesk-model`.

mod ids;
mod timestamp;

pub use ids::RecordId;
pub use timestamp::Timestamp;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("invalid record id: {0}")]
    InvalidRecordId(String),
}
