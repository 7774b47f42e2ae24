//! Error types for the SafeInCloud import pipeline.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ImportError {
    /// XML parsing error (malformed export file)
    #[error("XML parse error: {0}")]
    XmlParse(String),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(String),
    /// The pass binary could not be found
    #[error("pass not found at '{0}'; install pass or point --pass-bin at it")]
    PassNotFound(String),
    /// pass accepted the subprocess call but exited unsuccessfully
    #[error("pass insert failed for '{path}': {message}")]
    Store { path: String, message: String },
}

pub type ImportResult<T> = Result<T, ImportError>;

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<quick_xml::Error> for ImportError {
    fn from(e: quick_xml::Error) -> Self {
        Self::XmlParse(e.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for ImportError {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        Self::XmlParse(e.to_string())
    }
}
