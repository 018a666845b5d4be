//! Cross-module assembly tests for the PDF backend.

use super::*;
use layout_engine::{Orientation, PageComposer, PageFormat, PageMetrics};

fn a4() -> PageMetrics {
    PageMetrics::new(PageFormat::A4, Orientation::Portrait)
}

fn text_page(lines: &[&str]) -> RenderedPage {
    let metrics = a4();
    let mut composer = PageComposer::new(metrics);
    composer.place_text(lines.iter().map(|s| s.to_string()).collect());
    let pages = composer.finish();
    render_page(&pages[0], &metrics)
}

#[test]
fn test_text_document_structure() {
    let writer = PdfDocumentWriter::new(true, DocumentInfo::new());
    let bytes = writer
        .write_to_bytes(&[text_page(&["Hello, PDF!"])], &[])
        .unwrap();

    assert!(bytes.starts_with(b"%PDF-1.4"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("/Type /Catalog"));
    assert!(text.contains("/Type /Pages"));
    assert!(text.contains("/Type /Page"));
    assert!(text.contains("/BaseFont /Helvetica"));
    assert!(text.contains("xref"));
    assert!(text.contains("trailer"));
    assert!(text.contains("startxref"));
    assert!(text.ends_with("%%EOF\n"));
}

#[test]
fn test_uncompressed_text_is_visible() {
    let writer = PdfDocumentWriter::new(false, DocumentInfo::new());
    let bytes = writer
        .write_to_bytes(&[text_page(&["selectable text"])], &[])
        .unwrap();

    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("BT"));
    assert!(text.contains("(selectable text) Tj"));
    assert!(text.contains("ET"));
}

#[test]
fn test_compressed_text_is_not_plaintext() {
    let writer = PdfDocumentWriter::new(true, DocumentInfo::new());
    let bytes = writer
        .write_to_bytes(&[text_page(&["selectable text"])], &[])
        .unwrap();

    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("/Filter /FlateDecode"));
    assert!(!text.contains("(selectable text) Tj"));
}

#[test]
fn test_page_count_matches() {
    let pages = vec![
        text_page(&["page one"]),
        text_page(&["page two"]),
        text_page(&["page three"]),
    ];
    let writer = PdfDocumentWriter::new(true, DocumentInfo::new());
    let bytes = writer.write_to_bytes(&pages, &[]).unwrap();

    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("/Count 3"));
}

#[test]
fn test_document_title_from_info() {
    let mut info = DocumentInfo::new();
    info.title = Some("my-lovely-pdf".to_string());
    let writer = PdfDocumentWriter::new(true, info);
    let bytes = writer
        .write_to_bytes(&[text_page(&["hello"])], &[])
        .unwrap();

    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("/Title (my-lovely-pdf)"));
}

#[test]
fn test_image_document() {
    let metrics = a4();
    let mut composer = PageComposer::new(metrics);
    composer.place_image(0, 300, 200);
    let pages = composer.finish();
    let rendered = render_page(&pages[0], &metrics);

    let jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x01, 0x02, 0xFF, 0xD9];
    let images = vec![ImageXObject::new(300, 200, jpeg.clone())];

    let writer = PdfDocumentWriter::new(true, DocumentInfo::new());
    let bytes = writer.write_to_bytes(&[rendered], &images).unwrap();

    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("/Subtype /Image"));
    assert!(text.contains("/Filter /DCTDecode"));
    assert!(text.contains("/Width 300"));
    assert!(text.contains("/Height 200"));
    // The JPEG payload is embedded as-is.
    assert!(bytes
        .windows(jpeg.len())
        .any(|window| window == jpeg.as_slice()));
}

#[test]
fn test_image_resource_only_on_its_page() {
    let metrics = a4();

    let mut with_image = PageComposer::new(metrics);
    with_image.place_image(0, 300, 200);
    let image_page = render_page(&with_image.finish()[0], &metrics);

    let plain_page = text_page(&["no images here"]);

    let images = vec![ImageXObject::new(300, 200, vec![0xFF, 0xD8, 0xFF, 0xD9])];
    let writer = PdfDocumentWriter::new(false, DocumentInfo::new());
    let bytes = writer
        .write_to_bytes(&[image_page, plain_page], &images)
        .unwrap();

    let text = String::from_utf8_lossy(&bytes);
    // Only the image page carries an XObject resource dictionary.
    assert_eq!(text.matches("/XObject").count(), 1);
    // And exactly one content stream draws it.
    assert_eq!(text.matches("/Im0 Do").count(), 1);
}
