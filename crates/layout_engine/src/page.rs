//! Page formats, orientation, and resolved page geometry

use serde::{Deserialize, Serialize};

/// Margin on all four page sides, in millimetres. Fixed, not configurable.
pub const PAGE_MARGIN_MM: f64 = 15.0;

/// Body text size in points.
pub const BODY_FONT_SIZE_PT: f64 = 12.0;

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    /// A4 (210mm x 297mm)
    #[default]
    A4,
    /// A5 (148mm x 210mm)
    A5,
    /// US Letter (8.5" x 11")
    Letter,
    /// US Legal (8.5" x 14")
    Legal,
}

impl PageFormat {
    /// Get the portrait width and height in millimetres.
    pub fn dimensions_mm(&self) -> (f64, f64) {
        match self {
            PageFormat::A4 => (210.0, 297.0),
            PageFormat::A5 => (148.0, 210.0),
            PageFormat::Letter => (215.9, 279.4), // 8.5" x 11"
            PageFormat::Legal => (215.9, 355.6),  // 8.5" x 14"
        }
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Resolved page geometry for one export run, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    /// Page width
    pub width: f64,
    /// Page height
    pub height: f64,
    /// Margin on all sides
    pub margin: f64,
}

impl PageMetrics {
    /// Resolve metrics from a format and orientation. Landscape swaps the
    /// format's width and height.
    pub fn new(format: PageFormat, orientation: Orientation) -> Self {
        let (w, h) = format.dimensions_mm();
        let (width, height) = match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        };
        Self {
            width,
            height,
            margin: PAGE_MARGIN_MM,
        }
    }

    /// Page width minus both horizontal margins.
    pub fn usable_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Page height minus both vertical margins. The tallest a single
    /// placed image may be.
    pub fn content_height(&self) -> f64 {
        self.height - 2.0 * self.margin
    }

    /// Vertical position of the bottom margin; a block whose end would
    /// cross this line overflows the page.
    pub fn bottom_limit(&self) -> f64 {
        self.height - self.margin
    }
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self::new(PageFormat::default(), Orientation::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_dimensions() {
        assert_eq!(PageFormat::A4.dimensions_mm(), (210.0, 297.0));
        assert_eq!(PageFormat::A5.dimensions_mm(), (148.0, 210.0));
        assert_eq!(PageFormat::Letter.dimensions_mm(), (215.9, 279.4));
        assert_eq!(PageFormat::Legal.dimensions_mm(), (215.9, 355.6));
    }

    #[test]
    fn test_landscape_swaps_dimensions() {
        let portrait = PageMetrics::new(PageFormat::A4, Orientation::Portrait);
        let landscape = PageMetrics::new(PageFormat::A4, Orientation::Landscape);

        assert_eq!(portrait.width, landscape.height);
        assert_eq!(portrait.height, landscape.width);
    }

    #[test]
    fn test_derived_geometry() {
        let metrics = PageMetrics::new(PageFormat::A4, Orientation::Portrait);
        assert_eq!(metrics.margin, 15.0);
        assert_eq!(metrics.usable_width(), 180.0);
        assert_eq!(metrics.content_height(), 267.0);
        assert_eq!(metrics.bottom_limit(), 282.0);
    }

    #[test]
    fn test_default_is_a4_portrait() {
        let metrics = PageMetrics::default();
        assert_eq!(metrics.width, 210.0);
        assert_eq!(metrics.height, 297.0);
    }
}
