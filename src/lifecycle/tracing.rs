//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the walkthrough.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Log output goes through the subscriber; the lessons' own `println!` lines (the engine
//! start message, `Saved: ...`) go straight to stdout and are not affected by `RUST_LOG`.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`). Every lesson
//! runs inside a `lesson` span carrying its acronym, so the prefix is redundant.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lesson titles and outcomes
//! RUST_LOG=info cargo run
//!
//! # Also show constructed values and delegated calls
//! RUST_LOG=debug cargo run
//!
//! # Filter to one lesson module
//! RUST_LOG=solid_recipe::dependency_inversion=debug cargo run
//! ```
//!
//! ## Walkthrough Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Starting walkthrough count=5
//! INFO lesson{acronym="SRP"}: Single Responsibility Principle statement="..."
//! INFO lesson{acronym="SRP"}: Lesson complete summary=User Alice <alice@example.com>
//! INFO lesson{acronym="LSP"}:demonstrate: Engine start event event="Electric motor started"
//! INFO lesson{acronym="DIP"}:demonstrate:save: Saved to database data="user data" size=1
//! INFO Walkthrough finished
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
