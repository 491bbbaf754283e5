//! Input document parsing (JSON or YAML)

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::document::diagnostics::{DocumentError, DocumentSyntaxError};

/// Document encodings accepted for inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension; anything other than .yaml/.yml is JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Parse document content into a typed value with source-annotated errors
pub fn parse_document<T: DeserializeOwned>(
    content: &str,
    filename: &str,
    format: DocumentFormat,
) -> Result<T, DocumentSyntaxError> {
    match format {
        DocumentFormat::Json => serde_json::from_str(content)
            .map_err(|e| DocumentSyntaxError::from_json_error(&e, content, filename)),
        DocumentFormat::Yaml => serde_yml::from_str(content)
            .map_err(|e| DocumentSyntaxError::from_yaml_error(&e, content, filename)),
    }
}

/// Read and parse a document from disk
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, DocumentError> {
    if !path.is_file() {
        return Err(DocumentError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let filename = path.display().to_string();
    tracing::debug!(path = %filename, bytes = content.len(), "loading document");

    Ok(parse_document(
        &content,
        &filename,
        DocumentFormat::from_path(path),
    )?)
}
