use flexure_layout::LayoutError;
use flexure_style::StyleParseError;
use thiserror::Error;

/// Everything that can go wrong between reading a tree document and
/// printing its layout.
#[derive(Error, Debug)]
pub enum FlexureError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Invalid style: {0}")]
    Style(#[from] StyleParseError),

    #[error("Document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid document: {0}")]
    Document(String),
}

pub type Result<T> = std::result::Result<T, FlexureError>;
