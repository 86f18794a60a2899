use thiserror::Error;

/// Errors raised while wiring the controller to a document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// The host document has no `query-form` element
    #[error("Form not found. Check HTML IDs.")]
    FormNotFound,
}

pub type Result<T> = std::result::Result<T, ControllerError>;
