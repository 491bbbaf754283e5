//! Input document loading and error handling

pub mod diagnostics;
pub mod parser;

pub use diagnostics::{DocumentError, DocumentSyntaxError};
pub use parser::{load_document, parse_document, DocumentFormat};
