//! Query form controller for the assessment recommendation client.
//!
//! This crate contains the controller that ties the form, the
//! recommendation source and the results renderer together, plus the
//! document contract it talks through.

pub mod controller;
pub mod error;
pub mod view;

pub use controller::{
    Phase, SubmissionController, SubmitOutcome, BACKEND_ERROR, FETCH_FAILED, REQUEST_IN_FLIGHT,
    WAITING_FOR_QUERY,
};
pub use error::ControllerError;
pub use view::{ids, FormView, MemoryView, TriggerState, HISTORY_LIMIT};
