//! PDF file writer
//!
//! Handles the physical file structure: header, indirect objects with
//! their byte offsets, optional flate compression of streams, the
//! cross-reference table, and the trailer. On top of that sits the
//! document-level writer that assembles catalog, page tree, info, font,
//! image XObjects, and pages.

use super::document::{create_catalog, create_pages, DocumentInfo, PdfPage};
use super::fonts::body_font_dict;
use super::images::ImageXObject;
use super::objects::{Dict, Object, Stream};
use super::render::RenderedPage;
use std::io::{self, Write};
use thiserror::Error;

/// Error type for PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Invalid document structure
    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Low-level PDF writer: object numbering, offsets, xref, trailer.
pub struct PdfWriter<W: Write> {
    writer: W,
    position: u64,
    /// (object number, byte offset) for every written object
    offsets: Vec<(u32, u64)>,
    next_obj_num: u32,
    compress: bool,
}

impl<W: Write> PdfWriter<W> {
    /// Create a new writer. `compress` controls flate compression of
    /// stream objects that are not already encoded.
    pub fn new(writer: W, compress: bool) -> Self {
        Self {
            writer,
            position: 0,
            offsets: Vec::new(),
            next_obj_num: 1,
            compress,
        }
    }

    /// Allocate the next object number.
    pub fn allocate_object(&mut self) -> u32 {
        let num = self.next_obj_num;
        self.next_obj_num += 1;
        num
    }

    /// Write the PDF header with the binary marker comment.
    pub fn write_header(&mut self) -> Result<()> {
        self.write_bytes(b"%PDF-1.4\n")?;
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])?;
        Ok(())
    }

    /// Write an indirect object.
    pub fn write_object(&mut self, obj_num: u32, object: Object) -> Result<()> {
        self.offsets.push((obj_num, self.position));
        self.write_bytes(format!("{obj_num} 0 obj\n").as_bytes())?;

        let mut buf = Vec::new();
        object.write_to(&mut buf);
        self.write_bytes(&buf)?;

        self.write_bytes(b"\nendobj\n")?;
        Ok(())
    }

    /// Write a stream as an indirect object, compressing it first when
    /// compression is on and the data is not already encoded.
    pub fn write_stream(&mut self, obj_num: u32, mut stream: Stream) -> Result<()> {
        if self.compress && !stream.compressed {
            stream.data = deflate(&stream.data)?;
            stream.compressed = true;
            stream.dict.insert("Filter", Object::name("FlateDecode"));
        }
        stream
            .dict
            .insert("Length", stream.data.len() as i64);

        self.offsets.push((obj_num, self.position));
        self.write_bytes(format!("{obj_num} 0 obj\n").as_bytes())?;

        let mut buf = Vec::new();
        stream.dict.write_to(&mut buf);
        buf.extend_from_slice(b"\nstream\n");
        buf.extend_from_slice(&stream.data);
        buf.extend_from_slice(b"\nendstream");
        self.write_bytes(&buf)?;

        self.write_bytes(b"\nendobj\n")?;
        Ok(())
    }

    /// Write the cross-reference table and trailer, then flush.
    pub fn finish(mut self, catalog_ref: u32, info_ref: u32) -> Result<()> {
        let xref_offset = self.position;
        self.offsets.sort_by_key(|&(num, _)| num);

        self.write_bytes(format!("xref\n0 {}\n", self.next_obj_num).as_bytes())?;
        self.write_bytes(b"0000000000 65535 f \n")?;

        // Unwritten object numbers get free entries so the table stays
        // dense from 0 to Size-1.
        let offsets = std::mem::take(&mut self.offsets);
        let mut expected = 1u32;
        for (obj_num, offset) in offsets {
            while expected < obj_num {
                self.write_bytes(b"0000000000 65535 f \n")?;
                expected += 1;
            }
            self.write_bytes(format!("{offset:010} 00000 n \n").as_bytes())?;
            expected = obj_num + 1;
        }

        let mut trailer = Dict::new();
        trailer.insert("Size", i64::from(self.next_obj_num));
        trailer.insert("Root", Object::Ref(catalog_ref));
        trailer.insert("Info", Object::Ref(info_ref));

        let mut buf = Vec::new();
        buf.extend_from_slice(b"trailer\n");
        trailer.write_to(&mut buf);
        buf.extend_from_slice(format!("\nstartxref\n{xref_offset}\n%%EOF\n").as_bytes());
        self.write_bytes(&buf)?;

        self.writer.flush()?;
        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.position += data.len() as u64;
        Ok(())
    }
}

/// Compress bytes with zlib.
fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Document-level writer: assembles a complete PDF from rendered pages
/// and their image payloads.
pub struct PdfDocumentWriter {
    /// Whether to compress content streams
    pub compress: bool,
    /// Document information
    pub info: DocumentInfo,
}

impl PdfDocumentWriter {
    pub fn new(compress: bool, info: DocumentInfo) -> Self {
        Self { compress, info }
    }

    /// Write a complete PDF document.
    pub fn write<W: Write>(
        &self,
        pages: &[RenderedPage],
        images: &[ImageXObject],
        writer: W,
    ) -> Result<()> {
        if pages.is_empty() {
            return Err(PdfError::InvalidDocument("no pages to write".into()));
        }

        let mut pdf = PdfWriter::new(writer, self.compress);
        pdf.write_header()?;

        let catalog_ref = pdf.allocate_object();
        let pages_ref = pdf.allocate_object();
        let info_ref = pdf.allocate_object();
        let font_ref = pdf.allocate_object();
        let image_refs: Vec<u32> = images.iter().map(|_| pdf.allocate_object()).collect();

        let mut page_refs = Vec::with_capacity(pages.len());
        let mut content_refs = Vec::with_capacity(pages.len());
        for _ in pages {
            page_refs.push(pdf.allocate_object());
            content_refs.push(pdf.allocate_object());
        }

        pdf.write_object(catalog_ref, create_catalog(pages_ref).into())?;
        pdf.write_object(pages_ref, create_pages(&page_refs).into())?;
        pdf.write_object(info_ref, self.info.to_dict().into())?;
        pdf.write_object(font_ref, body_font_dict().into())?;

        for (image, &obj_ref) in images.iter().zip(&image_refs) {
            pdf.write_stream(obj_ref, image.to_stream())?;
        }

        for (i, page) in pages.iter().enumerate() {
            pdf.write_stream(content_refs[i], Stream::new(page.content.clone()))?;

            let pdf_page = PdfPage {
                width_pt: page.width_pt,
                height_pt: page.height_pt,
                content_ref: content_refs[i],
                image_handles: page.image_handles.clone(),
            };
            pdf.write_object(
                page_refs[i],
                pdf_page.to_dict(pages_ref, font_ref, &image_refs).into(),
            )?;
        }

        pdf.finish(catalog_ref, info_ref)
    }

    /// Write a complete PDF document to bytes.
    pub fn write_to_bytes(
        &self,
        pages: &[RenderedPage],
        images: &[ImageXObject],
    ) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write(pages, images, &mut buffer)?;
        Ok(buffer)
    }
}
