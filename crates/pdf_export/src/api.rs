//! Public export API
//!
//! The caller hands in the frozen content list and the options read from
//! its configuration surface; the result is either the finished PDF or a
//! single error for the whole attempt. The content list itself is never
//! touched, so a failed export loses nothing.

use crate::engine;
use crate::options::ExportOptions;
use crate::{ExportError, Result};
use content_model::ContentItem;
use std::path::Path;

/// Export content items to PDF bytes in memory.
///
/// The items are processed in list order; the export is all-or-nothing.
/// An empty list is rejected with [`ExportError::EmptyContent`].
///
/// # Example
///
/// ```ignore
/// use pdf_export::{export_to_bytes, ExportOptions};
///
/// let options = ExportOptions::new().with_document_name("holiday");
/// let bytes = export_to_bytes(list.items(), &options).await?;
/// ```
pub async fn export_to_bytes(items: &[ContentItem], options: &ExportOptions) -> Result<Vec<u8>> {
    if items.is_empty() {
        return Err(ExportError::EmptyContent);
    }

    tracing::info!(
        items = items.len(),
        document = options.document_name(),
        "starting PDF export"
    );

    match engine::run(items, options).await {
        Ok(bytes) => {
            tracing::info!(bytes = bytes.len(), "PDF export finished");
            Ok(bytes)
        }
        Err(error) => {
            tracing::error!(%error, "PDF export failed");
            Err(error)
        }
    }
}

/// Export content items to a PDF file at `path`.
///
/// Use [`ExportOptions::file_name`] to derive the conventional
/// `{documentName}.pdf` name for the target path.
pub async fn export_to_file(
    items: &[ContentItem],
    options: &ExportOptions,
    path: impl AsRef<Path>,
) -> Result<()> {
    let bytes = export_to_bytes(items, options).await?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
