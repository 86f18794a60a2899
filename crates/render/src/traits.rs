//! Core trait for result rendering.

use model::Assessment;

use crate::NO_RESULTS_MESSAGE;

/// Turns a result list into the content of the results area.
///
/// ## Design Note
/// - `Send + Sync` so a boxed renderer can live inside the controller
/// - Rendering never fails: any well-formed [`Assessment`], including one
///   with every field missing, must produce output
pub trait ResultsRenderer: Send + Sync {
    /// Returns the name of this renderer (for logging/debugging)
    fn name(&self) -> &str;

    /// A single informational block carrying `message`.
    fn empty_state(&self, message: &str) -> String;

    /// One row per assessment, in the given order, numbered from 1.
    ///
    /// Only called with a non-empty slice.
    fn table(&self, recommendations: &[Assessment]) -> String;

    /// Table for a non-empty list, the "no results" empty state otherwise.
    fn results(&self, recommendations: &[Assessment]) -> String {
        if recommendations.is_empty() {
            self.empty_state(NO_RESULTS_MESSAGE)
        } else {
            self.table(recommendations)
        }
    }
}
