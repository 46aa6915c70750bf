//! # Data Bundle Crate
//!
//! Reads the pre-computed market bundle from disk and keeps it for the life of the
//! process.
//!
//! ## Public API
//!
//! - `load_bundle`: reads and validates one artifact. Fails closed on any problem.
//! - `BundleCache`: a read-once cache; `global()` returns the process-wide instance.
//! - `BundleError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod cache;
pub mod error;
pub mod loader;

// Re-export the key components to create a clean, public-facing API.
pub use cache::{global, BundleCache};
pub use error::BundleError;
pub use loader::{load_bundle, save_bundle, BundleFormat};
