//! Client for the remote assessment recommendation service.
//!
//! This crate talks JSON over HTTP to the recommendation backend. It handles:
//! - Resolving endpoints against a configurable API base
//! - Sending one `POST /recommend` per call
//! - Turning non-2xx answers into errors with a short body snippet
//! - Tolerating responses that omit the assessment list
//!
//! The [`RecommendationSource`] trait is the seam the submission controller
//! depends on; [`RecommendationClient`] is the HTTP implementation.

pub mod client;
pub mod config;
pub mod error;

pub use client::{HealthStatus, RecommendationClient, RecommendationSource, ERROR_SNIPPET_CHARS};
pub use config::{ClientConfig, DEFAULT_API_BASE};
pub use error::ClientError;
