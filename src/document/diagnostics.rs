//! Document errors with source-annotated diagnostics

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading an input document
#[derive(Debug, Error, Diagnostic)]
pub enum DocumentError {
    #[error("Input document not found: {}", .path.display())]
    #[diagnostic(
        code(bomplan::input_not_found),
        help("Pass the path with --bom/--routings or set it in bomplan.yaml")
    )]
    NotFound { path: PathBuf },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] DocumentSyntaxError),

    #[error("Failed to read {}: {source}", .path.display())]
    #[diagnostic(code(bomplan::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A document that could not be parsed into the expected shape
#[derive(Debug, Error, Diagnostic)]
#[error("Failed to parse {filename}: {message}")]
#[diagnostic(code(bomplan::parse))]
pub struct DocumentSyntaxError {
    pub filename: String,
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: Option<SourceSpan>,
}

impl DocumentSyntaxError {
    /// Build from a serde_json error, locating it in the document text
    pub fn from_json_error(err: &serde_json::Error, content: &str, filename: &str) -> Self {
        let span = (err.line() > 0).then(|| {
            let offset = line_col_to_offset(content, err.line(), err.column());
            SourceSpan::from((offset, 0))
        });
        Self::new(err.to_string(), span, content, filename)
    }

    /// Build from a serde_yml error, locating it in the document text
    pub fn from_yaml_error(err: &serde_yml::Error, content: &str, filename: &str) -> Self {
        let span = err
            .location()
            .map(|loc| SourceSpan::from((loc.index().min(content.len()), 0)));
        Self::new(err.to_string(), span, content, filename)
    }

    fn new(message: String, span: Option<SourceSpan>, content: &str, filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            message,
            src: NamedSource::new(filename, content.to_string()),
            span,
        }
    }
}

/// Convert a 1-based line and column into a byte offset, clamped to the content length
fn line_col_to_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(content.len())
}
