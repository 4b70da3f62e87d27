//! # SOLID Recipe Walkthrough
//!
//! Runs every lesson in S-O-L-I-D order and prints a one-line outcome for each.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use solid_recipe::lifecycle::{setup_tracing, Walkthrough};
use tracing::info;

fn main() {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting SOLID walkthrough");

    let outcomes = Walkthrough::default().run();
    for outcome in &outcomes {
        println!("[{}] {}", outcome.principle.acronym(), outcome.summary);
    }

    info!(lessons = outcomes.len(), "Walkthrough completed successfully");
}
