//! Testing infrastructure for turndown integration tests.
//!
//! This crate provides utilities for writing robust tests:
//! - `TestWorld`: Fluent interface for declarative CLI test setup
//! - `stubs`: Deterministic controller collaborators (identity, clock)
//! - `fixtures`: Catalog seeding helpers

pub mod fixtures;
pub mod stubs;
pub mod world;

pub use fixtures::seed_minimal_catalog;
pub use stubs::{FixedClock, StubIdentity};
pub use world::TestWorld;
