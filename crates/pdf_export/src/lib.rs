//! PDF Export - turns an ordered content list into a single PDF document
//!
//! The export runs as one sequential pass over the content list: text is
//! wrapped and placed synchronously, each image is decoded off the async
//! runtime (one at a time, in list order, because page-break decisions
//! depend on the cursor accumulated from every prior block), and the
//! resulting pages are assembled by a small PDF backend that embeds
//! images as JPEG XObjects and text as selectable Helvetica runs.
//!
//! An export is all-or-nothing: any decode or assembly failure aborts the
//! whole attempt with a single error and produces no output.

mod api;
mod engine;
mod error;
mod image_data;
mod options;
pub mod pdf;

pub use api::*;
pub use error::*;
pub use image_data::{ImageData, ImageError, ImageFormat};
pub use options::*;
