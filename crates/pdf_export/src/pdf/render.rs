//! Laid-out pages to content streams
//!
//! The layout engine works in millimetres with the origin at the top-left
//! corner; PDF content streams use points with the origin at the
//! bottom-left. This module converts each placed block into the
//! corresponding text or image operators.

use super::content::ContentStream;
use super::fonts::BODY_FONT_RESOURCE;
use super::images::xobject_name;
use layout_engine::{PageLayout, PageMetrics, PlacedBlock, BODY_FONT_SIZE_PT, LINE_HEIGHT_MM};

/// Points per millimetre (72 points per inch, 25.4 mm per inch).
pub const PT_PER_MM: f64 = 72.0 / 25.4;

/// Convert millimetres to points.
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * PT_PER_MM
}

/// One rendered page: final size in points, content stream bytes, and the
/// image handles the content refers to.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub width_pt: f64,
    pub height_pt: f64,
    pub content: Vec<u8>,
    pub image_handles: Vec<usize>,
}

/// Render one laid-out page into a content stream.
pub fn render_page(page: &PageLayout, metrics: &PageMetrics) -> RenderedPage {
    let width_pt = mm_to_pt(metrics.width);
    let height_pt = mm_to_pt(metrics.height);

    let mut cs = ContentStream::new();
    let mut image_handles = Vec::new();

    for block in &page.blocks {
        match block {
            PlacedBlock::Text { lines, x, y } => {
                // `y` is the first line's baseline measured from the page
                // top; flip to the bottom-left origin.
                cs.begin_text()
                    .set_fill_rgb(0.0, 0.0, 0.0)
                    .set_font(BODY_FONT_RESOURCE, BODY_FONT_SIZE_PT)
                    .set_leading(mm_to_pt(LINE_HEIGHT_MM))
                    .move_text(mm_to_pt(*x), height_pt - mm_to_pt(*y));
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        cs.next_line();
                    }
                    cs.show_text(line);
                }
                cs.end_text();
            }
            PlacedBlock::Image { handle, rect } => {
                // The unit image square is scaled to the placed size and
                // translated to its bottom-left corner.
                let w = mm_to_pt(rect.width);
                let h = mm_to_pt(rect.height);
                let x = mm_to_pt(rect.x);
                let y = height_pt - mm_to_pt(rect.y + rect.height);
                cs.save_state()
                    .transform(w, 0.0, 0.0, h, x, y)
                    .draw_xobject(&xobject_name(*handle))
                    .restore_state();
                image_handles.push(*handle);
            }
        }
    }

    RenderedPage {
        width_pt,
        height_pt,
        content: cs.into_bytes(),
        image_handles,
    }
}
