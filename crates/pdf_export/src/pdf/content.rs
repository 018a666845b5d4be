//! PDF content stream generation
//!
//! A small builder for the graphics operators the renderer emits: text
//! objects (BT/ET, Tf, TL, Td, T*, Tj, rg) and image placement (q/Q, cm,
//! Do).

use std::io::Write;

/// Content stream builder
#[derive(Debug, Default)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    /// Create a new empty content stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the content stream data
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Check if the content stream is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Save the graphics state (q)
    pub fn save_state(&mut self) -> &mut Self {
        self.write_line("q");
        self
    }

    /// Restore the graphics state (Q)
    pub fn restore_state(&mut self) -> &mut Self {
        self.write_line("Q");
        self
    }

    /// Concatenate a transformation matrix (cm)
    pub fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> &mut Self {
        self.write_fmt(format_args!(
            "{} {} {} {} {} {} cm\n",
            Self::fmt_num(a),
            Self::fmt_num(b),
            Self::fmt_num(c),
            Self::fmt_num(d),
            Self::fmt_num(e),
            Self::fmt_num(f)
        ));
        self
    }

    /// Set the fill color to RGB (rg)
    pub fn set_fill_rgb(&mut self, r: f64, g: f64, b: f64) -> &mut Self {
        self.write_fmt(format_args!(
            "{} {} {} rg\n",
            Self::fmt_num(r),
            Self::fmt_num(g),
            Self::fmt_num(b)
        ));
        self
    }

    /// Begin a text object (BT)
    pub fn begin_text(&mut self) -> &mut Self {
        self.write_line("BT");
        self
    }

    /// End a text object (ET)
    pub fn end_text(&mut self) -> &mut Self {
        self.write_line("ET");
        self
    }

    /// Set the font and size (Tf)
    pub fn set_font(&mut self, font_name: &str, size: f64) -> &mut Self {
        self.write_fmt(format_args!("/{} {} Tf\n", font_name, Self::fmt_num(size)));
        self
    }

    /// Set the text leading (TL)
    pub fn set_leading(&mut self, leading: f64) -> &mut Self {
        self.write_fmt(format_args!("{} TL\n", Self::fmt_num(leading)));
        self
    }

    /// Move text position (Td)
    pub fn move_text(&mut self, tx: f64, ty: f64) -> &mut Self {
        self.write_fmt(format_args!(
            "{} {} Td\n",
            Self::fmt_num(tx),
            Self::fmt_num(ty)
        ));
        self
    }

    /// Move to the next line (T*)
    pub fn next_line(&mut self) -> &mut Self {
        self.write_line("T*");
        self
    }

    /// Show a text string (Tj)
    pub fn show_text(&mut self, text: &str) -> &mut Self {
        self.write_pdf_string(text);
        self.write_line(" Tj");
        self
    }

    /// Paint an XObject (Do)
    pub fn draw_xobject(&mut self, name: &str) -> &mut Self {
        self.write_fmt(format_args!("/{name} Do\n"));
        self
    }

    fn write_line(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
        self.data.push(b'\n');
    }

    fn write_fmt(&mut self, args: std::fmt::Arguments<'_>) {
        let _ = self.data.write_fmt(args);
    }

    /// Write a PDF literal string (escaped). Text content reaches this
    /// point verbatim; only the wire syntax characters are escaped.
    fn write_pdf_string(&mut self, s: &str) {
        self.data.push(b'(');
        for byte in s.bytes() {
            match byte {
                b'(' | b')' | b'\\' => {
                    self.data.push(b'\\');
                    self.data.push(byte);
                }
                0x0A => self.data.extend_from_slice(b"\\n"),
                0x0D => self.data.extend_from_slice(b"\\r"),
                0x09 => self.data.extend_from_slice(b"\\t"),
                _ => self.data.push(byte),
            }
        }
        self.data.push(b')');
    }

    fn fmt_num(n: f64) -> String {
        if n.fract() == 0.0 {
            format!("{n:.0}")
        } else {
            let s = format!("{n:.4}");
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}
