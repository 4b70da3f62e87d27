use crate::principles::Principle;
use tracing::{info, info_span};

/// The outcome of running one lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonOutcome {
    pub principle: Principle,
    pub summary: String,
}

/// Runs a sequence of lessons, one after another.
///
/// `Walkthrough` is the tour guide for the crate:
/// - **Ordering**: Lessons run in the order they were given
/// - **Observability**: Each lesson runs inside its own `lesson` span
/// - **Isolation**: Lessons share nothing; each builds and drops its own values
///
/// # Example
///
/// ```rust
/// use solid_recipe::lifecycle::Walkthrough;
/// use solid_recipe::principles::Principle;
///
/// let outcomes = Walkthrough::new(vec![Principle::OpenClosed]).run();
/// assert_eq!(outcomes.len(), 1);
/// assert_eq!(outcomes[0].principle, Principle::OpenClosed);
/// ```
#[derive(Debug, Clone)]
pub struct Walkthrough {
    lessons: Vec<Principle>,
}

impl Default for Walkthrough {
    fn default() -> Self {
        Self::new(Principle::ALL.to_vec())
    }
}

impl Walkthrough {
    pub fn new(lessons: Vec<Principle>) -> Self {
        Self { lessons }
    }

    pub fn lessons(&self) -> &[Principle] {
        &self.lessons
    }

    /// Runs every lesson and collects one outcome per lesson.
    pub fn run(&self) -> Vec<LessonOutcome> {
        info!(count = self.lessons.len(), "Starting walkthrough");

        let outcomes: Vec<LessonOutcome> = self
            .lessons
            .iter()
            .map(|&principle| {
                let span = info_span!("lesson", acronym = principle.acronym());
                let _guard = span.enter();

                info!(statement = principle.statement(), "{}", principle.title());
                let summary = principle.demonstrate();
                info!(%summary, "Lesson complete");

                LessonOutcome { principle, summary }
            })
            .collect();

        info!("Walkthrough finished");
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_covers_all_principles_in_order() {
        let walkthrough = Walkthrough::default();
        assert_eq!(walkthrough.lessons(), &Principle::ALL);
    }

    #[test]
    fn test_empty_walkthrough_runs_nothing() {
        assert!(Walkthrough::new(Vec::new()).run().is_empty());
    }
}
