use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for model extraction (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the raw model text and a display name so extraction errors can
/// point back into the input.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a malformed model error, optionally pointing at the offending
    /// part of the input.
    pub fn malformed_model(&self, span: Option<SourceSpan>, reason: ModelError) -> Box<Error> {
        Box::new(Error::MalformedModel {
            src: self.named_source(),
            span,
            reason,
        })
    }

    /// Create a malformed field error pointing at the offending line.
    pub fn malformed_field(
        &self,
        line: impl Into<String>,
        span: impl Into<SourceSpan>,
        reason: LineError,
    ) -> Box<Error> {
        Box::new(Error::MalformedField {
            src: self.named_source(),
            span: span.into(),
            line: line.into(),
            reason,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("the format of the model provided is not correct")]
    #[diagnostic(
        code(rosetta::malformed_model),
        help(
            "ensure the format matches the data type from Swagger: a class name followed by a brace-delimited list of fields ({reason})"
        )
    )]
    MalformedModel {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: Option<SourceSpan>,
        reason: ModelError,
    },

    #[error("cannot parse line, invalid format provided")]
    #[diagnostic(
        code(rosetta::malformed_field),
        help("the line `{line}` does not seem to have a valid format, expected `name (type)` or `name (type, ['a', 'b'])`")
    )]
    MalformedField {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
        line: String,
        reason: LineError,
    },
}

impl Error {
    /// The offending body line, for field errors.
    pub fn line(&self) -> Option<&str> {
        match self {
            Error::MalformedField { line, .. } => Some(line),
            Error::MalformedModel { .. } => None,
        }
    }

    pub fn is_malformed_model(&self) -> bool {
        matches!(self, Error::MalformedModel { .. })
    }

    pub fn is_malformed_field(&self) -> bool {
        matches!(self, Error::MalformedField { .. })
    }
}

/// Why the model as a whole was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("{0} non-empty segments found, expected 2")]
    SegmentCount(usize),
    #[error("'{0}' is not a valid class name")]
    InvalidClassName(String),
}

/// Why a single field line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("missing '(' after the field name")]
    MissingOpenParen,
    #[error("'(' is never closed")]
    UnclosedParen,
    #[error("field name is empty")]
    EmptyName,
    #[error("field type is empty")]
    EmptyType,
    #[error("'{0}' is not a valid type")]
    InvalidType(String),
}
