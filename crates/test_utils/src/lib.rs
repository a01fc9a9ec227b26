//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claim document test suites.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built insurers, claim types and document sets
//! - `builders`: Builder patterns for documents and request bodies
//! - `assertions`: Verdict assertion helpers
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
