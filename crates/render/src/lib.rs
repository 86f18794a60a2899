//! Rendering of recommendation results.
//!
//! This crate provides:
//! - ResultsRenderer trait for turning a result list into results-area content
//! - HtmlRenderer for the browser results box
//! - TextRenderer for terminals
//! - Badge classification for remote/adaptive support
//!
//! ## Example Usage
//! ```ignore
//! use render::{count_label, HtmlRenderer, ResultsRenderer};
//!
//! let markup = HtmlRenderer.results(&assessments);
//! let meta = count_label(assessments.len());
//! ```

pub mod badge;
pub mod renderers;
pub mod traits;

// Re-export main types
pub use badge::{Badge, BadgeKind};
pub use renderers::{escape_html, HtmlRenderer, TextRenderer};
pub use traits::ResultsRenderer;

/// Shown before the first submission
pub const DEFAULT_EMPTY_MESSAGE: &str = "No recommendations yet.";

/// Shown when the service returned nothing for the query
pub const NO_RESULTS_MESSAGE: &str = "No assessments returned for this query.";

/// Tag used when an assessment lists no test types
pub const UNSPECIFIED_TEST_TYPE: &str = "Unspecified";

/// Text for the results count indicator.
pub fn count_label(count: usize) -> String {
    format!("{count} assessments")
}
