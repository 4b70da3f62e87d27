#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # SOLID Recipe
//!
//! > **The five SOLID principles, one small Rust example each.**
//!
//! Each lesson is a self-contained module. They share vocabulary and nothing else: no
//! state, no wiring, no runtime. Read them in order, or run the walkthrough to see them
//! execute one after another.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Traits instead of class hierarchies
//!
//! Every principle here is usually taught with base classes and overrides. In Rust the same
//! ideas land on traits:
//! - **Capability**: a trait (`Shape`, `Vehicle`, `Storage`).
//! - **Variant**: a type that implements it (`Circle`, `ElectricCar`, `Database`).
//! - **Specialization**: overriding a provided trait method (`ElectricCar::start_engine`).
//! - **Injection**: a constructor that takes `Box<dyn Trait>` (`Users::new`).
//!
//! ### No error handling in the lessons
//!
//! The operations being shown are total: constructing a user, computing an area, starting
//! an engine, saving data. Adding validation would blur the structural point each lesson
//! makes, so none is added. The only error type, [`RecipeError`](error::RecipeError),
//! belongs to the catalog around the lessons.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Lessons
//! - [`single_responsibility`] - [`User`](single_responsibility::User), one reason to change.
//! - [`open_closed`] - [`Shape`](open_closed::Shape) with `Rectangle` and `Circle`.
//! - [`liskov_substitution`] - [`Vehicle`](liskov_substitution::Vehicle) with `Car` and `ElectricCar`.
//! - [`interface_segregation`] - the fat-trait `violation` next to the `segregated` fix.
//! - [`dependency_inversion`] - the `coupled` "before", and `Users` over [`Storage`](dependency_inversion::Storage).
//!
//! ### 2. The Catalog ([`principles`])
//! - **Role**: Names each principle, states it, and dispatches to its lesson.
//! - **Key items**: [`Principle`](principles::Principle).
//!
//! ### 3. The Conductor ([`lifecycle`])
//! - **Role**: Runs lessons in sequence and sets up tracing.
//! - **Key items**: [`Walkthrough`](lifecycle::Walkthrough), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🧪 Testing
//!
//! See [`dependency_inversion::mock`] for a storage double that injects through the same
//! constructor as the real providers.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the walkthrough with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod dependency_inversion;
pub mod error;
pub mod interface_segregation;
pub mod lifecycle;
pub mod liskov_substitution;
pub mod open_closed;
pub mod principles;
pub mod single_responsibility;
