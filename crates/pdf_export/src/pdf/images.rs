//! Image XObject generation
//!
//! Every embedded image arrives here as JPEG bytes (uploads are passed
//! through or transcoded upstream), so XObjects always use the DCTDecode
//! filter with the DeviceRGB color space.

use super::objects::{Dict, Object, Stream};

/// A decoded image ready for embedding.
#[derive(Debug, Clone)]
pub struct ImageXObject {
    /// Intrinsic width in pixels
    pub width: u32,
    /// Intrinsic height in pixels
    pub height: u32,
    /// JPEG-encoded pixel data
    pub jpeg_data: Vec<u8>,
}

impl ImageXObject {
    pub fn new(width: u32, height: u32, jpeg_data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            jpeg_data,
        }
    }

    /// Convert to an XObject stream. The JPEG data is already compressed,
    /// so the writer must not deflate it again.
    pub fn to_stream(&self) -> Stream {
        let mut dict = Dict::of_type("XObject");
        dict.insert("Subtype", Object::name("Image"));
        dict.insert("Width", i64::from(self.width));
        dict.insert("Height", i64::from(self.height));
        dict.insert("BitsPerComponent", 8i64);
        dict.insert("ColorSpace", Object::name("DeviceRGB"));
        dict.insert("Filter", Object::name("DCTDecode"));

        Stream {
            dict,
            data: self.jpeg_data.clone(),
            compressed: true,
        }
    }
}

/// Resource name for the image with the given handle (e.g. "Im0").
pub fn xobject_name(handle: usize) -> String {
    format!("Im{handle}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xobject_stream() {
        let image = ImageXObject::new(300, 200, vec![0xFF, 0xD8, 0xFF, 0xD9]);
        let stream = image.to_stream();

        assert!(stream.compressed);
        assert_eq!(stream.data.len(), 4);

        let mut out = Vec::new();
        stream.dict.write_to(&mut out);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("/Subtype /Image"));
        assert!(text.contains("/Width 300"));
        assert!(text.contains("/Height 200"));
        assert!(text.contains("/Filter /DCTDecode"));
        assert!(text.contains("/ColorSpace /DeviceRGB"));
    }

    #[test]
    fn test_xobject_names() {
        assert_eq!(xobject_name(0), "Im0");
        assert_eq!(xobject_name(7), "Im7");
    }
}
