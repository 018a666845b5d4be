//! Sequential block placement with overflow-driven page breaks

use crate::PageMetrics;
use serde::{Deserialize, Serialize};

/// Vertical advance per wrapped text line, in millimetres. A fixed
/// approximation independent of actual font metrics.
pub const LINE_HEIGHT_MM: f64 = 7.0;

/// Vertical spacing after every placed block, in millimetres.
pub const BLOCK_SPACING_MM: f64 = 10.0;

/// A rectangle in page coordinates: millimetres, origin at the top-left
/// corner of the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One block placed on a page.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacedBlock {
    /// Wrapped text lines. `y` is the baseline of the first line; each
    /// following line sits [`LINE_HEIGHT_MM`] below the previous one.
    Text { lines: Vec<String>, x: f64, y: f64 },
    /// A scaled image. `handle` identifies the decoded image payload the
    /// caller registered for this placement.
    Image { handle: usize, rect: Rect },
}

/// All blocks placed on one page, in placement order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub blocks: Vec<PlacedBlock>,
}

/// Lays blocks out top-to-bottom, starting a new page whenever the next
/// block would cross the bottom margin.
///
/// The overflow check is skipped until the first block of the whole
/// document has been placed: an oversized leading block is placed as-is
/// and may visibly overflow the page, rather than forcing a break onto an
/// identical page where it would overflow anyway.
#[derive(Debug)]
pub struct PageComposer {
    metrics: PageMetrics,
    pages: Vec<PageLayout>,
    current_y: f64,
    placed_any: bool,
}

impl PageComposer {
    /// Create a composer with the cursor at the top margin of page one.
    pub fn new(metrics: PageMetrics) -> Self {
        Self {
            metrics,
            pages: vec![PageLayout::default()],
            current_y: metrics.margin,
            placed_any: false,
        }
    }

    /// The page geometry this composer lays out against.
    pub fn metrics(&self) -> &PageMetrics {
        &self.metrics
    }

    /// Current vertical cursor position on the current page.
    pub fn cursor(&self) -> f64 {
        self.current_y
    }

    /// Number of pages started so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Place a text block of pre-wrapped lines at the cursor, breaking to
    /// a new page first if it would overflow.
    pub fn place_text(&mut self, lines: Vec<String>) {
        let height = lines.len() as f64 * LINE_HEIGHT_MM;
        self.break_if_overflowing(height);

        let block = PlacedBlock::Text {
            lines,
            x: self.metrics.margin,
            y: self.current_y,
        };
        self.push_block(block, height);
    }

    /// Place an image with the given intrinsic pixel dimensions.
    ///
    /// The image is scaled to the usable width; if that would make it
    /// taller than the content area it is clamped to the content height
    /// instead, preserving aspect ratio either way. An image is never
    /// split across pages. Returns the placed rectangle.
    pub fn place_image(&mut self, handle: usize, pixel_width: u32, pixel_height: u32) -> Rect {
        debug_assert!(pixel_width > 0 && pixel_height > 0);
        let ratio = pixel_width as f64 / pixel_height as f64;

        let mut width = self.metrics.usable_width();
        let mut height = width / ratio;
        if height > self.metrics.content_height() {
            height = self.metrics.content_height();
            width = height * ratio;
        }

        self.break_if_overflowing(height);

        let rect = Rect {
            x: self.metrics.margin,
            y: self.current_y,
            width,
            height,
        };
        self.push_block(PlacedBlock::Image { handle, rect }, height);
        rect
    }

    /// Consume the composer and return the laid-out pages.
    pub fn finish(self) -> Vec<PageLayout> {
        self.pages
    }

    fn break_if_overflowing(&mut self, block_height: f64) {
        if self.placed_any && self.current_y + block_height > self.metrics.bottom_limit() {
            self.pages.push(PageLayout::default());
            self.current_y = self.metrics.margin;
        }
    }

    fn push_block(&mut self, block: PlacedBlock, height: f64) {
        self.pages.last_mut().unwrap().blocks.push(block);
        self.current_y += height + BLOCK_SPACING_MM;
        self.placed_any = true;
    }
}
