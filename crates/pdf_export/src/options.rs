//! Export configuration
//!
//! Options are read fresh from the caller at export time; nothing here is
//! persisted between exports.

use layout_engine::{Orientation, PageFormat};
use serde::{Deserialize, Serialize};

/// Fallback document name used when the configured name is blank.
pub const DEFAULT_DOCUMENT_NAME: &str = "my-lovely-pdf";

/// Options for one export run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    /// Document name; also the stem of the output file name. Blank or
    /// whitespace-only falls back to [`DEFAULT_DOCUMENT_NAME`].
    #[serde(default)]
    pub document_name: String,
    /// Paper size
    #[serde(default)]
    pub page_format: PageFormat,
    /// Page orientation
    #[serde(default)]
    pub orientation: Orientation,
    /// JPEG quality (1-100) used when an image has to be re-encoded
    #[serde(default = "default_image_quality")]
    pub image_quality: u8,
    /// Whether to compress content streams
    #[serde(default = "default_compress")]
    pub compress: bool,
}

fn default_image_quality() -> u8 {
    85
}

fn default_compress() -> bool {
    true
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            document_name: String::new(),
            page_format: PageFormat::default(),
            orientation: Orientation::default(),
            image_quality: default_image_quality(),
            compress: default_compress(),
        }
    }
}

impl ExportOptions {
    /// Create new default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document name
    pub fn with_document_name(mut self, name: impl Into<String>) -> Self {
        self.document_name = name.into();
        self
    }

    /// Set the page format
    pub fn with_page_format(mut self, format: PageFormat) -> Self {
        self.page_format = format;
        self
    }

    /// Set the page orientation
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the JPEG re-encode quality
    pub fn with_image_quality(mut self, quality: u8) -> Self {
        self.image_quality = quality.min(100);
        self
    }

    /// Set compression enabled/disabled
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// The effective document name: trimmed, with the fallback literal
    /// substituted for blank input.
    pub fn document_name(&self) -> &str {
        let trimmed = self.document_name.trim();
        if trimmed.is_empty() {
            DEFAULT_DOCUMENT_NAME
        } else {
            trimmed
        }
    }

    /// The output file name: the effective document name plus `.pdf`.
    pub fn file_name(&self) -> String {
        format!("{}.pdf", self.document_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = ExportOptions::default();
        assert_eq!(opts.page_format, PageFormat::A4);
        assert_eq!(opts.orientation, Orientation::Portrait);
        assert_eq!(opts.image_quality, 85);
        assert!(opts.compress);
    }

    #[test]
    fn test_file_name_fallback() {
        assert_eq!(ExportOptions::new().file_name(), "my-lovely-pdf.pdf");
        assert_eq!(
            ExportOptions::new().with_document_name("   ").file_name(),
            "my-lovely-pdf.pdf"
        );
        assert_eq!(
            ExportOptions::new().with_document_name(" trip ").file_name(),
            "trip.pdf"
        );
    }

    #[test]
    fn test_builder_pattern() {
        let opts = ExportOptions::new()
            .with_document_name("holiday")
            .with_page_format(PageFormat::Letter)
            .with_orientation(Orientation::Landscape)
            .with_compression(false);

        assert_eq!(opts.document_name(), "holiday");
        assert_eq!(opts.page_format, PageFormat::Letter);
        assert_eq!(opts.orientation, Orientation::Landscape);
        assert!(!opts.compress);
    }

    #[test]
    fn test_image_quality_clamped() {
        let opts = ExportOptions::new().with_image_quality(250);
        assert_eq!(opts.image_quality, 100);
    }

    #[test]
    fn test_serialization() {
        let opts = ExportOptions::new()
            .with_document_name("notes")
            .with_page_format(PageFormat::A5);

        let json = serde_json::to_string(&opts).unwrap();
        assert!(json.contains("\"pageFormat\":\"a5\""));
        assert!(json.contains("\"orientation\":\"portrait\""));

        let parsed: ExportOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_deserialization_defaults() {
        let parsed: ExportOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, ExportOptions::default());
    }
}
