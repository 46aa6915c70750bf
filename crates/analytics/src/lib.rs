//! # Analytics
//!
//! The derived-metrics layer behind every dashboard page.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** no I/O and no knowledge of how results are displayed. Every
//!   function takes borrowed bundle tables and returns plain values.
//! - **Recomputed on demand:** nothing is cached; the inputs are immutable.
//!
//! ## Public API
//!
//! - `returns`: cumulative return series and price history per symbol.
//! - `sectors`: sector rollup.
//! - `rankings`: top / worst performers and most volatile symbols.
//! - `correlation`: unordered pair enumeration and insight selection.
//! - `monthly`: per-month movers and breadth.
//! - `comparison`: head-to-head metric comparison of two symbols.
//! - `tiers`: threshold classifications used for colouring.
//! - `stats`: mean, median, histogram and market-wide averages.

// Declare the modules that constitute this crate.
pub mod comparison;
pub mod correlation;
pub mod error;
pub mod monthly;
pub mod rankings;
pub mod returns;
pub mod sectors;
pub mod stats;
pub mod tiers;

// Re-export the key components to create a clean, public-facing API.
pub use comparison::{compare, ComparisonMetric, MetricComparison};
pub use correlation::{correlation_pairs, split_insights, CorrelationPair};
pub use error::AnalyticsError;
pub use monthly::{available_months, month_movers, MonthlyMovers};
pub use rankings::{most_volatile, ranked_by_return, top_performers, worst_performers};
pub use returns::{cumulative_returns, price_history, CumulativePoint, PricePoint};
pub use sectors::{sector_rollup, SectorSummary};
pub use stats::{histogram, market_averages, mean, median, HistogramBin, MarketAverages};
pub use tiers::{DeclineTier, GainTier, RiskClass};
