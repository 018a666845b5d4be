//! Layout Engine - page geometry and sequential block placement
//!
//! This crate turns a sequence of measured content blocks into per-page
//! placements. It works entirely in millimetres with a top-left origin;
//! converting to output coordinates is the export backend's job.
//!
//! The layout rules are deliberately simple and fixed: a 15 mm margin on
//! all sides, text at 12 pt with a flat 7 mm line height, 10 mm of spacing
//! after every block, and a page break whenever the next block would cross
//! the bottom margin.

mod composer;
mod page;
mod wrap;

pub use composer::*;
pub use page::*;
pub use wrap::*;
