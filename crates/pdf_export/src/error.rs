//! Error types for the export pipeline

use crate::image_data::ImageError;
use crate::pdf::PdfError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export: the content list is empty")]
    EmptyContent,

    #[error("image error: {0}")]
    Image(#[from] ImageError),

    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image decode task failed: {0}")]
    DecodeTask(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ExportError>;
