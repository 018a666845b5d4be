//! Content item types

use serde::{Deserialize, Serialize};

/// One unit of user-added material: a text block or an uploaded image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    /// A block of plain text, trusted as already-sanitized.
    Text {
        /// The text content, with surrounding whitespace already trimmed.
        content: String,
    },
    /// An uploaded image file.
    Image {
        /// Raw bytes of the image file; the format is detected from magic
        /// bytes when the image is decoded at export time.
        data: Vec<u8>,
        /// Original filename, display-only.
        source_name: String,
    },
}

/// Discriminant of a content item, used for partitioned counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Image,
}

impl ContentItem {
    /// Create a text block.
    pub fn text(content: impl Into<String>) -> Self {
        ContentItem::Text {
            content: content.into(),
        }
    }

    /// Create an image block from raw file bytes.
    pub fn image(data: Vec<u8>, source_name: impl Into<String>) -> Self {
        ContentItem::Image {
            data,
            source_name: source_name.into(),
        }
    }

    /// Get the item kind.
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentItem::Text { .. } => ContentKind::Text,
            ContentItem::Image { .. } => ContentKind::Image,
        }
    }

    /// Check if this item is a text block.
    pub fn is_text(&self) -> bool {
        matches!(self, ContentItem::Text { .. })
    }

    /// Check if this item is an image block.
    pub fn is_image(&self) -> bool {
        matches!(self, ContentItem::Image { .. })
    }
}
