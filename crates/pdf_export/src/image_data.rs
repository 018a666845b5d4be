//! Image payload inspection
//!
//! This module handles everything the export needs to know about an
//! uploaded image's raw bytes: detecting the format from magic bytes,
//! probing intrinsic pixel dimensions from the header (without a full
//! decode), and producing the JPEG payload that gets embedded in the PDF.

use thiserror::Error;

/// Error types for image payload operations
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("unknown or unsupported image format")]
    UnsupportedFormat,

    #[error("invalid {format} data: {reason}")]
    InvalidData {
        format: &'static str,
        reason: String,
    },

    #[error("image decode error: {0}")]
    Decode(String),

    #[error("image encode error: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, ImageError>;

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
    Bmp,
    Unknown,
}

impl ImageFormat {
    /// Detect format from magic bytes
    pub fn from_bytes(data: &[u8]) -> Self {
        if data.len() < 4 {
            return Self::Unknown;
        }

        // PNG: 89 50 4E 47
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Self::Png;
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Self::Jpeg;
        }

        // GIF: 47 49 46 38
        if data.starts_with(&[0x47, 0x49, 0x46, 0x38]) {
            return Self::Gif;
        }

        // WebP: 52 49 46 46 ... 57 45 42 50
        if data.len() >= 12 && data.starts_with(&[0x52, 0x49, 0x46, 0x46]) && &data[8..12] == b"WEBP"
        {
            return Self::WebP;
        }

        // BMP: 42 4D
        if data.starts_with(&[0x42, 0x4D]) {
            return Self::Bmp;
        }

        Self::Unknown
    }

    /// Get the MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::WebP => "image/webp",
            Self::Bmp => "image/bmp",
            Self::Unknown => "application/octet-stream",
        }
    }

    /// Check if this is a supported format
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// An inspected image payload: raw bytes plus the header facts the layout
/// and embedding steps need.
#[derive(Debug, Clone)]
pub struct ImageData {
    data: Vec<u8>,
    format: ImageFormat,
    width: u32,
    height: u32,
    /// Component count from the JPEG SOF header, when the payload is JPEG.
    jpeg_components: Option<u8>,
}

impl ImageData {
    /// Inspect raw image bytes: detect the format and probe dimensions.
    ///
    /// Fails when the format is unrecognized or the header does not yield
    /// positive dimensions; malformed uploads surface here, at export
    /// decode time.
    pub fn new(data: Vec<u8>) -> Result<Self> {
        let format = ImageFormat::from_bytes(&data);
        if !format.is_supported() {
            return Err(ImageError::UnsupportedFormat);
        }

        let mut jpeg_components = None;
        let (width, height) = match format {
            ImageFormat::Png => png_dimensions(&data)?,
            ImageFormat::Jpeg => {
                let sof = jpeg_sof(&data)?;
                jpeg_components = Some(sof.components);
                (sof.width, sof.height)
            }
            ImageFormat::Gif => gif_dimensions(&data)?,
            ImageFormat::Bmp => bmp_dimensions(&data)?,
            ImageFormat::WebP => webp_dimensions(&data)?,
            ImageFormat::Unknown => unreachable!(),
        };

        if width == 0 || height == 0 {
            return Err(ImageError::InvalidData {
                format: format.mime_type(),
                reason: format!("invalid dimensions {width}x{height}"),
            });
        }

        Ok(Self {
            data,
            format,
            width,
            height,
            jpeg_components,
        })
    }

    /// Detected format.
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Intrinsic width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Intrinsic height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Intrinsic pixel dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw payload bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Convert to a data URL for frontend rendering
    pub fn to_data_url(&self) -> String {
        use base64::{engine::general_purpose::STANDARD, Engine};
        let base64_data = STANDARD.encode(&self.data);
        format!("data:{};base64,{}", self.format.mime_type(), base64_data)
    }

    /// Produce the JPEG bytes to embed in the PDF.
    ///
    /// RGB JPEG uploads pass through untouched (no generation loss);
    /// everything else - other formats, and grayscale/CMYK JPEGs whose
    /// data would not match the `DeviceRGB` color space the backend
    /// declares - is decoded and re-encoded as an RGB JPEG at `quality`.
    pub fn into_jpeg(self, quality: u8) -> Result<Vec<u8>> {
        if self.format == ImageFormat::Jpeg && self.jpeg_components == Some(3) {
            return Ok(self.data);
        }
        transcode_to_jpeg(&self.data, quality)
    }
}

/// Decode with the `image` crate and re-encode as an RGB JPEG.
fn transcode_to_jpeg(data: &[u8], quality: u8) -> Result<Vec<u8>> {
    use image::codecs::jpeg::JpegEncoder;

    let decoded =
        image::load_from_memory(data).map_err(|e| ImageError::Decode(e.to_string()))?;
    let rgb = image::DynamicImage::ImageRgb8(decoded.to_rgb8());

    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100));
    rgb.write_with_encoder(encoder)
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(out)
}

fn png_dimensions(data: &[u8]) -> Result<(u32, u32)> {
    // IHDR is always the first chunk: width at byte 16, height at byte 20
    if data.len() < 24 {
        return Err(ImageError::InvalidData {
            format: "image/png",
            reason: "truncated header".into(),
        });
    }
    let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
    let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);
    Ok((width, height))
}

struct JpegSof {
    width: u32,
    height: u32,
    components: u8,
}

/// Scan JPEG markers for the start-of-frame header.
fn jpeg_sof(data: &[u8]) -> Result<JpegSof> {
    let invalid = |reason: &str| ImageError::InvalidData {
        format: "image/jpeg",
        reason: reason.into(),
    };

    let mut pos = 2;
    while pos + 1 < data.len() {
        if data[pos] != 0xFF {
            return Err(invalid("expected marker"));
        }

        let marker = data[pos + 1];
        pos += 2;

        // Fill bytes before a marker
        while pos < data.len() && data[pos] == 0xFF {
            pos += 1;
        }

        // Standalone markers carry no length field
        if marker == 0xD8 || marker == 0xD9 || (0xD0..=0xD7).contains(&marker) {
            continue;
        }

        if pos + 2 > data.len() {
            break;
        }
        let length = u16::from_be_bytes([data[pos], data[pos + 1]]) as usize;

        // SOF0-SOF15, excluding DHT/DAC/JPG (C4, C8, CC)
        let is_sof = (0xC0..=0xCF).contains(&marker)
            && marker != 0xC4
            && marker != 0xC8
            && marker != 0xCC;
        if is_sof {
            if pos + 8 > data.len() {
                break;
            }
            let height = u16::from_be_bytes([data[pos + 3], data[pos + 4]]) as u32;
            let width = u16::from_be_bytes([data[pos + 5], data[pos + 6]]) as u32;
            let components = data[pos + 7];
            return Ok(JpegSof {
                width,
                height,
                components,
            });
        }

        pos += length;
    }

    Err(invalid("no start-of-frame header found"))
}

fn gif_dimensions(data: &[u8]) -> Result<(u32, u32)> {
    // Logical screen descriptor: width at bytes 6-7, height at 8-9
    if data.len() < 10 {
        return Err(ImageError::InvalidData {
            format: "image/gif",
            reason: "truncated header".into(),
        });
    }
    let width = u16::from_le_bytes([data[6], data[7]]) as u32;
    let height = u16::from_le_bytes([data[8], data[9]]) as u32;
    Ok((width, height))
}

fn bmp_dimensions(data: &[u8]) -> Result<(u32, u32)> {
    // BITMAPINFOHEADER: width at bytes 18-21, height at 22-25
    if data.len() < 26 {
        return Err(ImageError::InvalidData {
            format: "image/bmp",
            reason: "truncated header".into(),
        });
    }
    let width = i32::from_le_bytes([data[18], data[19], data[20], data[21]]);
    // Height can be negative for top-down rows
    let height = i32::from_le_bytes([data[22], data[23], data[24], data[25]]);
    Ok((width.unsigned_abs(), height.unsigned_abs()))
}

fn webp_dimensions(data: &[u8]) -> Result<(u32, u32)> {
    let invalid = |reason: &str| ImageError::InvalidData {
        format: "image/webp",
        reason: reason.into(),
    };

    if data.len() < 30 {
        return Err(invalid("truncated header"));
    }

    match &data[12..16] {
        // Lossy VP8: dimensions follow the frame tag
        b"VP8 " => {
            let width = (u16::from_le_bytes([data[26], data[27]]) & 0x3FFF) as u32;
            let height = (u16::from_le_bytes([data[28], data[29]]) & 0x3FFF) as u32;
            Ok((width, height))
        }
        // Lossless VP8L: 14-bit fields packed after the signature byte
        b"VP8L" => {
            let bits = u32::from_le_bytes([data[21], data[22], data[23], data[24]]);
            let width = (bits & 0x3FFF) + 1;
            let height = ((bits >> 14) & 0x3FFF) + 1;
            Ok((width, height))
        }
        // Extended VP8X: 24-bit fields minus one
        b"VP8X" => {
            let width = u32::from_le_bytes([data[24], data[25], data[26], 0]) + 1;
            let height = u32::from_le_bytes([data[27], data[28], data[29], 0]) + 1;
            Ok((width, height))
        }
        _ => Err(invalid("unrecognized chunk")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal JPEG header: SOI, then an SOF0 with the given geometry.
    fn jpeg_header(width: u16, height: u16, components: u8) -> Vec<u8> {
        let mut data = vec![0xFF, 0xD8];
        data.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08]);
        data.extend_from_slice(&height.to_be_bytes());
        data.extend_from_slice(&width.to_be_bytes());
        data.push(components);
        data
    }

    /// Minimal PNG header: signature + IHDR with the given geometry.
    fn png_header(width: u32, height: u32) -> Vec<u8> {
        let mut data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        data.extend_from_slice(&13u32.to_be_bytes());
        data.extend_from_slice(b"IHDR");
        data.extend_from_slice(&width.to_be_bytes());
        data.extend_from_slice(&height.to_be_bytes());
        data
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ImageFormat::from_bytes(&png_header(1, 1)),
            ImageFormat::Png
        );
        assert_eq!(
            ImageFormat::from_bytes(&jpeg_header(1, 1, 3)),
            ImageFormat::Jpeg
        );
        assert_eq!(
            ImageFormat::from_bytes(b"GIF89a\x01\x00\x01\x00"),
            ImageFormat::Gif
        );
        assert_eq!(ImageFormat::from_bytes(b"BM\x00\x00"), ImageFormat::Bmp);
        assert_eq!(
            ImageFormat::from_bytes(b"not an image"),
            ImageFormat::Unknown
        );
    }

    #[test]
    fn test_png_probe() {
        let payload = ImageData::new(png_header(640, 480)).unwrap();
        assert_eq!(payload.format(), ImageFormat::Png);
        assert_eq!(payload.dimensions(), (640, 480));
    }

    #[test]
    fn test_jpeg_probe() {
        let payload = ImageData::new(jpeg_header(300, 200, 3)).unwrap();
        assert_eq!(payload.format(), ImageFormat::Jpeg);
        assert_eq!(payload.dimensions(), (300, 200));
    }

    #[test]
    fn test_jpeg_probe_skips_app_segments() {
        // SOI, APP0 (JFIF, 16-byte segment), then SOF0.
        let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        data.extend_from_slice(&[0u8; 14]);
        data.extend_from_slice(&jpeg_header(120, 80, 3)[2..]);
        let payload = ImageData::new(data).unwrap();
        assert_eq!(payload.dimensions(), (120, 80));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = ImageData::new(b"plain text".to_vec()).unwrap_err();
        assert!(matches!(err, ImageError::UnsupportedFormat));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let err = ImageData::new(png_header(0, 100)).unwrap_err();
        assert!(matches!(err, ImageError::InvalidData { .. }));
    }

    #[test]
    fn test_rgb_jpeg_passes_through() {
        let bytes = jpeg_header(300, 200, 3);
        let payload = ImageData::new(bytes.clone()).unwrap();
        assert_eq!(payload.into_jpeg(85).unwrap(), bytes);
    }

    #[test]
    fn test_png_transcodes_to_jpeg() {
        // A real decodable PNG, produced by the image crate itself.
        let mut png = Vec::new();
        let buffer = image::RgbImage::from_pixel(4, 3, image::Rgb([200, 10, 10]));
        image::DynamicImage::ImageRgb8(buffer)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let payload = ImageData::new(png).unwrap();
        assert_eq!(payload.dimensions(), (4, 3));

        let jpeg = payload.into_jpeg(85).unwrap();
        assert!(jpeg.starts_with(&[0xFF, 0xD8, 0xFF]));
    }

    #[test]
    fn test_to_data_url() {
        let payload = ImageData::new(png_header(2, 2)).unwrap();
        let url = payload.to_data_url();
        assert!(url.starts_with("data:image/png;base64,"));
    }
}
