use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use rosetta_core::FileWriteError;
use thiserror::Error;

/// Result type for rosetta-config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
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

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `key` when it is present.
    pub fn validation_error(&self, key: &str, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: find_key_span(&self.src, key),
            message: message.into(),
        })
    }
}

/// Span of the first `key = ...` line.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let is_key = trimmed
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if is_key {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::from((start, trimmed.trim_end().len())));
        }
        offset += line.len();
    }
    None
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{}'", .path.display())]
    #[diagnostic(help("run 'rosetta init' to create a preferences file"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rosetta.toml")]
    #[diagnostic(code(rosetta::config_parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(rosetta::config_validation))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid value '{value}' for '{key}'")]
    #[diagnostic(code(rosetta::config_value), help("{reason}"))]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("failed to serialize preferences")]
    Serialize {
        #[source]
        source: toml::ser::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Write(#[from] FileWriteError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_key_span() {
        let src = "[preferences]\n  indent = 0\n";
        let span = find_key_span(src, "indent").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "indent = 0");
    }

    #[test]
    fn test_find_key_span_ignores_prefixes() {
        let src = "[preferences]\nindentation = 2\n";
        assert_eq!(find_key_span(src, "indent"), None);
    }
}
