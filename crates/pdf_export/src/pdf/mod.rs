//! PDF backend
//!
//! Generates the output file from rendered pages:
//!
//! - `objects`: PDF object model (dictionaries, arrays, streams, refs)
//! - `content`: content stream operators (text runs, image placement)
//! - `fonts`: the standard-14 body font resource
//! - `images`: image XObject generation
//! - `document`: catalog, page tree, page resources, info dictionary
//! - `render`: laid-out pages (mm) to content streams (pt)
//! - `writer`: file framing, compression, xref table, trailer

mod content;
mod document;
mod fonts;
mod images;
mod objects;
mod render;
mod writer;

pub use content::ContentStream;
pub use document::{DocumentInfo, PdfPage};
pub use fonts::{body_font_dict, BODY_FONT_RESOURCE};
pub use images::{xobject_name, ImageXObject};
pub use objects::{Dict, Object, Stream};
pub use render::{mm_to_pt, render_page, RenderedPage, PT_PER_MM};
pub use writer::{PdfDocumentWriter, PdfError, PdfWriter};

#[cfg(test)]
mod tests;
