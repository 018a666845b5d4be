//! The sequential export pass
//!
//! One pass over the frozen content list, in order. Text blocks are
//! wrapped and placed synchronously. For each image block the pass
//! suspends until its bytes have been inspected and transcoded on a
//! blocking worker, then places it and moves on - decodes are strictly
//! sequential, never pipelined, because every page-break decision depends
//! on the cursor accumulated from all prior blocks.

use crate::image_data::{ImageData, ImageError};
use crate::options::ExportOptions;
use crate::pdf::{render_page, DocumentInfo, ImageXObject, PdfDocumentWriter, RenderedPage};
use crate::Result;
use content_model::ContentItem;
use layout_engine::{wrap_text, PageComposer, PageLayout, PageMetrics, BODY_FONT_SIZE_PT};

/// Run the whole export and return the finished PDF bytes.
pub(crate) async fn run(items: &[ContentItem], options: &ExportOptions) -> Result<Vec<u8>> {
    let metrics = PageMetrics::new(options.page_format, options.orientation);
    let (pages, images) = paginate(items, options, metrics).await?;

    let rendered: Vec<RenderedPage> = pages
        .iter()
        .map(|page| render_page(page, &metrics))
        .collect();

    let mut info = DocumentInfo::new();
    info.title = Some(options.document_name().to_string());

    let writer = PdfDocumentWriter::new(options.compress, info);
    let bytes = writer.write_to_bytes(&rendered, &images)?;

    tracing::debug!(
        pages = rendered.len(),
        images = images.len(),
        bytes = bytes.len(),
        "assembled document"
    );
    Ok(bytes)
}

/// The sequential fold over the item list: produces laid-out pages and
/// the decoded images they reference, in placement order.
async fn paginate(
    items: &[ContentItem],
    options: &ExportOptions,
    metrics: PageMetrics,
) -> Result<(Vec<PageLayout>, Vec<ImageXObject>)> {
    let mut composer = PageComposer::new(metrics);
    let mut images: Vec<ImageXObject> = Vec::new();

    for (index, item) in items.iter().enumerate() {
        match item {
            ContentItem::Text { content } => {
                let lines = wrap_text(content, metrics.usable_width(), BODY_FONT_SIZE_PT);
                tracing::debug!(index, lines = lines.len(), "placing text block");
                composer.place_text(lines);
            }
            ContentItem::Image { data, source_name } => {
                let image = decode_image(data.clone(), options.image_quality).await?;
                let handle = images.len();
                let rect = composer.place_image(handle, image.width, image.height);
                tracing::debug!(
                    index,
                    source = %source_name,
                    width = image.width,
                    height = image.height,
                    placed_width_mm = rect.width,
                    placed_height_mm = rect.height,
                    "placing image block"
                );
                images.push(image);
            }
        }
    }

    Ok((composer.finish(), images))
}

/// Inspect and transcode one image off the async runtime. The caller
/// awaits the result before laying out anything that follows.
async fn decode_image(bytes: Vec<u8>, quality: u8) -> Result<ImageXObject> {
    let image = tokio::task::spawn_blocking(
        move || -> std::result::Result<ImageXObject, ImageError> {
            let payload = ImageData::new(bytes)?;
            let (width, height) = payload.dimensions();
            let jpeg = payload.into_jpeg(quality)?;
            Ok(ImageXObject::new(width, height, jpeg))
        },
    )
    .await??;
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExportError;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut png = Vec::new();
        let buffer = image::RgbImage::from_pixel(width, height, image::Rgb([30, 60, 90]));
        image::DynamicImage::ImageRgb8(buffer)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        png
    }

    #[tokio::test]
    async fn test_pagination_interleaves_text_and_images() {
        let items = vec![
            ContentItem::text("Hello world"),
            ContentItem::image(png_bytes(30, 20), "photo.png"),
            ContentItem::text("after the image"),
        ];
        let options = ExportOptions::default();
        let metrics = PageMetrics::default();

        let (pages, images) = paginate(&items, &options, metrics).await.unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].blocks.len(), 3);
        assert_eq!(images.len(), 1);
        // Transcoded to JPEG for embedding.
        assert!(images[0].jpeg_data.starts_with(&[0xFF, 0xD8, 0xFF]));
        assert_eq!((images[0].width, images[0].height), (30, 20));
    }

    #[tokio::test]
    async fn test_malformed_image_aborts_export() {
        let items = vec![
            ContentItem::text("fine"),
            ContentItem::image(b"not an image at all".to_vec(), "broken.jpg"),
        ];
        let err = run(&items, &ExportOptions::default()).await.unwrap_err();
        assert!(matches!(err, ExportError::Image(_)));
    }
}
