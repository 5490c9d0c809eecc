use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Errors raised by the fallible surfaces of the crate (registry, filesystem, settings).
// Merging and comparing never fail and never produce one of these.
#[derive(Debug, Error)]
pub enum HelperError {
    // No function registered under this name
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    // Function called with an argument count outside its arity
    #[error("function `{name}` expects {min}..={max} arguments, got {got}")]
    Arity {
        name: &'static str,
        min: usize,
        max: usize,
        got: usize,
    },

    // An argument had the wrong shape for the function
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // The filesystem method needs a transport this crate does not provide
    #[error("unsupported filesystem transport: {0}")]
    UnsupportedTransport(String),

    // A host-supplied collaborator failed; its message is passed through untouched
    #[error("collaborator error: {0}")]
    Collaborator(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Type alias for results that use `HelperError` as the error type
pub type Result<T> = std::result::Result<T, HelperError>;
