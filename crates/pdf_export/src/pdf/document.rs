//! PDF document structure
//!
//! Catalog, page tree, per-page dictionaries with their resources, and
//! the document information dictionary.

use super::fonts::BODY_FONT_RESOURCE;
use super::images::xobject_name;
use super::objects::{Dict, Object};

/// Document information dictionary
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    /// Document title
    pub title: Option<String>,
    /// Creator application
    pub creator: Option<String>,
    /// PDF producer
    pub producer: Option<String>,
    /// Creation date (PDF date string format)
    pub creation_date: Option<String>,
}

impl DocumentInfo {
    /// Create document info with the producer strings filled in.
    pub fn new() -> Self {
        Self {
            creator: Some("Bindery".to_string()),
            producer: Some("Bindery PDF Export".to_string()),
            creation_date: Some(pdf_date_now()),
            ..Default::default()
        }
    }

    /// Convert to a PDF dictionary
    pub fn to_dict(&self) -> Dict {
        let mut dict = Dict::new();
        if let Some(ref title) = self.title {
            dict.insert("Title", Object::text(title.as_bytes()));
        }
        if let Some(ref creator) = self.creator {
            dict.insert("Creator", Object::text(creator.as_bytes()));
        }
        if let Some(ref producer) = self.producer {
            dict.insert("Producer", Object::text(producer.as_bytes()));
        }
        if let Some(ref date) = self.creation_date {
            dict.insert("CreationDate", Object::text(date.as_bytes()));
        }
        dict
    }
}

/// Current time as a PDF date string (D:YYYYMMDDHHmmSS+00'00').
fn pdf_date_now() -> String {
    format!("D:{}+00'00'", chrono::Utc::now().format("%Y%m%d%H%M%S"))
}

/// One page ready for writing: its size, content stream reference, and
/// the image handles its content refers to.
#[derive(Debug, Clone)]
pub struct PdfPage {
    /// Page width in points
    pub width_pt: f64,
    /// Page height in points
    pub height_pt: f64,
    /// Content stream object number
    pub content_ref: u32,
    /// Handles of the images placed on this page
    pub image_handles: Vec<usize>,
}

impl PdfPage {
    /// Build the page resources dictionary. Every page carries the body
    /// font; XObject entries are added only for the images it places.
    pub fn build_resources(&self, font_ref: u32, image_refs: &[u32]) -> Dict {
        let mut resources = Dict::new();

        let mut font_dict = Dict::new();
        font_dict.insert(BODY_FONT_RESOURCE, Object::Ref(font_ref));
        resources.insert("Font", font_dict);

        if !self.image_handles.is_empty() {
            let mut xobjects = Dict::new();
            for &handle in &self.image_handles {
                xobjects.insert(xobject_name(handle), Object::Ref(image_refs[handle]));
            }
            resources.insert("XObject", xobjects);
        }

        resources.insert(
            "ProcSet",
            vec![
                Object::name("PDF"),
                Object::name("Text"),
                Object::name("ImageC"),
            ],
        );

        resources
    }

    /// Build the page dictionary
    pub fn to_dict(&self, parent_ref: u32, font_ref: u32, image_refs: &[u32]) -> Dict {
        let mut dict = Dict::of_type("Page");
        dict.insert("Parent", Object::Ref(parent_ref));
        dict.insert(
            "MediaBox",
            vec![
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(self.width_pt),
                Object::Real(self.height_pt),
            ],
        );
        dict.insert("Contents", Object::Ref(self.content_ref));
        dict.insert("Resources", self.build_resources(font_ref, image_refs));
        dict
    }
}

/// Create the catalog (document root) dictionary
pub fn create_catalog(pages_ref: u32) -> Dict {
    let mut dict = Dict::of_type("Catalog");
    dict.insert("Pages", Object::Ref(pages_ref));
    dict
}

/// Create the page tree root dictionary
pub fn create_pages(page_refs: &[u32]) -> Dict {
    let mut dict = Dict::of_type("Pages");
    let kids: Vec<Object> = page_refs.iter().map(|&r| Object::Ref(r)).collect();
    dict.insert("Kids", kids);
    dict.insert("Count", page_refs.len() as i64);
    dict
}
