//! PDF object model
//!
//! The handful of basic object types the backend emits, and their
//! serialized form. Everything serializes into an in-memory buffer; the
//! writer owns file offsets and framing.

use std::collections::BTreeMap;

/// A direct PDF object
#[derive(Debug, Clone)]
pub enum Object {
    /// Integer number
    Integer(i64),
    /// Real (floating-point) number
    Real(f64),
    /// Name object (written with a leading /)
    Name(String),
    /// Literal string, written with escaping inside parentheses
    Text(Vec<u8>),
    /// Array of objects
    Array(Vec<Object>),
    /// Dictionary
    Dict(Dict),
    /// Indirect reference to object number `n` (generation 0)
    Ref(u32),
}

impl Object {
    /// Create a name object
    pub fn name(name: impl Into<String>) -> Self {
        Object::Name(name.into())
    }

    /// Create a literal string object
    pub fn text(text: impl Into<Vec<u8>>) -> Self {
        Object::Text(text.into())
    }

    /// Serialize this object into `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        match self {
            Object::Integer(n) => out.extend_from_slice(n.to_string().as_bytes()),
            Object::Real(x) => out.extend_from_slice(fmt_real(*x).as_bytes()),
            Object::Name(name) => write_name(name, out),
            Object::Text(bytes) => write_literal_string(bytes, out),
            Object::Array(items) => {
                out.push(b'[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(b' ');
                    }
                    item.write_to(out);
                }
                out.push(b']');
            }
            Object::Dict(dict) => dict.write_to(out),
            Object::Ref(num) => {
                out.extend_from_slice(format!("{num} 0 R").as_bytes());
            }
        }
    }
}

impl From<i64> for Object {
    fn from(n: i64) -> Self {
        Object::Integer(n)
    }
}

impl From<f64> for Object {
    fn from(x: f64) -> Self {
        Object::Real(x)
    }
}

impl From<Dict> for Object {
    fn from(dict: Dict) -> Self {
        Object::Dict(dict)
    }
}

impl From<Vec<Object>> for Object {
    fn from(items: Vec<Object>) -> Self {
        Object::Array(items)
    }
}

/// A PDF dictionary with stable key order
#[derive(Debug, Clone, Default)]
pub struct Dict {
    entries: BTreeMap<String, Object>,
}

impl Dict {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dictionary with a Type entry
    pub fn of_type(type_name: &str) -> Self {
        let mut dict = Self::new();
        dict.insert("Type", Object::name(type_name));
        dict
    }

    /// Insert a key-value pair
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Object>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&Object> {
        self.entries.get(key)
    }

    /// Check if the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize this dictionary into `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"<<");
        for (key, value) in &self.entries {
            out.push(b' ');
            write_name(key, out);
            out.push(b' ');
            value.write_to(out);
        }
        out.extend_from_slice(b" >>");
    }
}

/// A stream object: dictionary plus byte data. The writer fills in the
/// Length entry and (optionally) compresses the data when it frames the
/// stream as an indirect object.
#[derive(Debug, Clone)]
pub struct Stream {
    pub dict: Dict,
    pub data: Vec<u8>,
    /// Whether the data is already in its final (encoded) form
    pub compressed: bool,
}

impl Stream {
    /// Create a stream with an empty dictionary
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            dict: Dict::new(),
            data,
            compressed: false,
        }
    }
}

/// Format a real number without trailing zeros.
fn fmt_real(x: f64) -> String {
    if x.fract() == 0.0 {
        format!("{x:.0}")
    } else {
        let s = format!("{x:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Write a name with escaping for delimiter and non-regular characters.
fn write_name(name: &str, out: &mut Vec<u8>) {
    out.push(b'/');
    for byte in name.bytes() {
        let regular = matches!(byte, 0x21..=0x7E)
            && !matches!(
                byte,
                b'#' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
            );
        if regular {
            out.push(byte);
        } else {
            out.extend_from_slice(format!("#{byte:02X}").as_bytes());
        }
    }
}

/// Write a literal string with escaping inside parentheses.
fn write_literal_string(bytes: &[u8], out: &mut Vec<u8>) {
    out.push(b'(');
    for &byte in bytes {
        match byte {
            b'(' | b')' | b'\\' => {
                out.push(b'\\');
                out.push(byte);
            }
            0x0A => out.extend_from_slice(b"\\n"),
            0x0D => out.extend_from_slice(b"\\r"),
            0x09 => out.extend_from_slice(b"\\t"),
            0x08 => out.extend_from_slice(b"\\b"),
            0x0C => out.extend_from_slice(b"\\f"),
            0x20..=0x7E => out.push(byte),
            _ => out.extend_from_slice(format!("\\{byte:03o}").as_bytes()),
        }
    }
    out.push(b')');
}
