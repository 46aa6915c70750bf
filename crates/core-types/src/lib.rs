//! # Core Types
//!
//! The read-only data model shared by every crate in the dashboard: the five
//! tables of the pre-computed market bundle.

pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use structs::{CorrelationMatrix, DataBundle, MarketSummary, MasterRow, MetricRow, MonthlyRow};
