//! # Model Crate
//!
//! Data model shared by the recommendation client, the renderer and the
//! submission controller.
//!
//! ## Main Components
//!
//! - **input**: raw form values and their normalization (query, limit, filters)
//! - **types**: request/response wire types and display defaults
//! - **error**: validation errors
//!
//! ## Example Usage
//!
//! ```ignore
//! use model::FormInput;
//!
//! let input = FormInput {
//!     query: "Java developer who collaborates with business teams".into(),
//!     limit: "5".into(),
//!     prefer_remote: true,
//!     prefer_adaptive: false,
//! };
//! let request = input.normalize()?;
//! assert_eq!(request.k, 5);
//! ```

pub mod error;
pub mod input;
pub mod types;

pub use error::{Result, ValidationError};
pub use input::{FilterFlags, FormInput, Query, RequestLimit};
pub use types::{
    Assessment,
    RecommendationRequest,
    RecommendationResponse,
    SupportLevel,
    MISSING_URL,
    NOT_AVAILABLE,
    UNKNOWN_SUPPORT,
    UNNAMED_ASSESSMENT,
};
