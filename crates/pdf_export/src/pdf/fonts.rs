//! Font resources
//!
//! The layout uses a single body font: Helvetica, one of the standard 14
//! fonts every PDF viewer ships, so nothing is embedded. Text stays
//! selectable and extractable through the WinAnsi encoding.

use super::objects::{Dict, Object};

/// Resource name of the body font in every page's Font dictionary.
pub const BODY_FONT_RESOURCE: &str = "F1";

/// Build the font dictionary for the Helvetica body font.
pub fn body_font_dict() -> Dict {
    let mut dict = Dict::of_type("Font");
    dict.insert("Subtype", Object::name("Type1"));
    dict.insert("BaseFont", Object::name("Helvetica"));
    dict.insert("Encoding", Object::name("WinAnsiEncoding"));
    dict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_font_dict() {
        let dict = body_font_dict();
        let mut out = Vec::new();
        dict.write_to(&mut out);
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("/Type /Font"));
        assert!(text.contains("/Subtype /Type1"));
        assert!(text.contains("/BaseFont /Helvetica"));
        assert!(text.contains("/Encoding /WinAnsiEncoding"));
    }
}
