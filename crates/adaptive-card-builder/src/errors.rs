use thiserror::Error;

/// Raised when a value in the tree has no JSON representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot render value at {path}: {reason}")]
pub struct RenderError {
    /// Dotted attribute path of the offending value, e.g. `body[0].items[1].width`.
    pub path: String,
    pub reason: String,
}

impl RenderError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Raised when a composer cannot derive an attribute from its payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot derive `{target}`: payload has no string field `{field}`")]
pub struct DerivationError {
    pub field: String,
    pub target: String,
}

/// Crate-level error wrapper.
#[derive(Debug, Error)]
pub enum CardError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Derivation(#[from] DerivationError),
    #[error("indentation width must be a positive integer, got {0}")]
    InvalidIndent(usize),
    #[error("invalid builder configuration: {0}")]
    Config(String),
    #[error("at least one card must be provided")]
    NoCards,
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("rendered json is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type CardResult<T> = Result<T, CardError>;
