//! Error types for scmextract-ir
//!
//! Every error here is a deterministic function of the caller's input, so
//! none of them is worth retrying without changing that input.

use crate::shared::models::Span;
use thiserror::Error;

/// Main error type for extraction and evaluation
#[derive(Debug, Error)]
pub enum ScmError {
    /// The analyzed source is not syntactically valid
    #[error("Parse error{}: {message}", location(.path, .span))]
    SourceParse {
        message: String,
        path: Option<String>,
        span: Option<Span>,
    },

    /// A dependency mapping names a variable outside the stated node set
    #[error("Malformed graph: {role} '{variable}' is not in the declared node set")]
    MalformedGraph { variable: String, role: GraphRole },

    /// Comparison requested across graphs with different node sets
    #[error(
        "Node set mismatch: only in predicted {only_in_predicted:?}, only in ground truth {only_in_ground_truth:?}"
    )]
    NodeSetMismatch {
        only_in_predicted: Vec<String>,
        only_in_ground_truth: Vec<String>,
    },

    /// Extractor lookup by name failed
    #[error("Unknown extractor: '{name}'. Available: {available:?}")]
    UnknownExtractor { name: String, available: Vec<String> },

    /// Extractor name registered twice
    #[error("Extractor '{0}' is already registered")]
    DuplicateExtractor(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which side of a dependency entry referenced the unknown variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphRole {
    Effect,
    Cause,
}

impl std::fmt::Display for GraphRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphRole::Effect => write!(f, "effect"),
            GraphRole::Cause => write!(f, "cause"),
        }
    }
}

fn location(path: &Option<String>, span: &Option<Span>) -> String {
    match (path, span) {
        (Some(path), Some(span)) => format!(" in {}:{}", path, span),
        (Some(path), None) => format!(" in {}", path),
        (None, Some(span)) => format!(" at {}", span),
        (None, None) => String::new(),
    }
}

impl ScmError {
    /// Create a parse error without location
    pub fn parse(message: impl Into<String>) -> Self {
        ScmError::SourceParse {
            message: message.into(),
            path: None,
            span: None,
        }
    }

    /// Attach the source file path to a parse error; other errors pass through
    pub fn with_path(self, file_path: impl Into<String>) -> Self {
        match self {
            ScmError::SourceParse { message, span, .. } => ScmError::SourceParse {
                message,
                path: Some(file_path.into()),
                span,
            },
            other => other,
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, ScmError::SourceParse { .. })
    }
}

/// Result type alias for scmextract operations
pub type Result<T> = std::result::Result<T, ScmError>;
