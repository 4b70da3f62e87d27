//! # Walkthrough Lifecycle
//!
//! The lessons do not depend on each other, but reading them in order is the point of the
//! crate. This module is the "conductor" that runs them in sequence.
//!
//! **Key Responsibilities:**
//! 1. **Ordering** - Run lessons in S-O-L-I-D order (or any order the caller picks)
//! 2. **Reporting** - Collect one [`LessonOutcome`] per lesson
//! 3. **Observability Setup** - Initialize tracing and logging via [`setup_tracing`]
//!
//! ```rust
//! use solid_recipe::lifecycle::Walkthrough;
//!
//! let outcomes = Walkthrough::default().run();
//! assert_eq!(outcomes.len(), 5);
//! ```

pub mod tracing;
pub mod walkthrough;

pub use self::tracing::*;
pub use walkthrough::*;
