//! Source-code renderings of a packed bitmap.
//!
//! The packer's output is substituted into a named constant array plus the
//! header values an embedded UI needs (width, height, data size).

use alloc::string::String;
use core::{fmt, str::FromStr};

use crate::{
    bitmap::PackedBitmap,
    error::{Error, Result},
};

mod lvgl;
mod rust;

const BYTES_PER_LINE: usize = 16;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// C source declaring an `lv_img_dsc_t` with `LV_IMG_CF_ALPHA_1BIT`.
    #[default]
    Lvgl,
    /// Rust module with dimension constants and a static byte array.
    Rust,
}

impl OutputFormat {
    pub fn repr(self) -> &'static str {
        match self {
            OutputFormat::Lvgl => "lvgl",
            OutputFormat::Rust => "rust",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Lvgl => "c",
            OutputFormat::Rust => "rs",
        }
    }

    /// Whether `name` can be declared without clashing with the layout's own
    /// identifiers or the target language's keywords.
    pub fn accepts_name(self, name: &str) -> bool {
        is_valid_name(name)
            && match self {
                OutputFormat::Lvgl => !lvgl::is_reserved(name),
                OutputFormat::Rust => !rust::is_reserved(name),
            }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.repr())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lvgl" | "c" => Ok(OutputFormat::Lvgl),
            "rust" | "rs" => Ok(OutputFormat::Rust),
            _ => Err(Error::UnknownFormat),
        }
    }
}

/// Render `bitmap` as source text declaring the symbol `name`.
pub fn render(format: OutputFormat, name: &str, bitmap: &PackedBitmap) -> Result<String> {
    let mut out = String::new();
    write(&mut out, format, name, bitmap)?;
    Ok(out)
}

pub fn write(
    out: &mut impl fmt::Write,
    format: OutputFormat,
    name: &str,
    bitmap: &PackedBitmap,
) -> Result<()> {
    if !format.accepts_name(name) {
        return Err(Error::InvalidName);
    }
    match format {
        OutputFormat::Lvgl => lvgl::write(out, name, bitmap)?,
        OutputFormat::Rust => rust::write(out, name, bitmap)?,
    }
    Ok(())
}

/// `[A-Za-z_][A-Za-z0-9_]*`, the syntax shared by both layouts.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Turn arbitrary text (usually a file stem) into a valid symbol name.
pub fn sanitize_name(raw: &str) -> String {
    let mut name = String::with_capacity(raw.len() + 1);
    if raw.starts_with(|c: char| c.is_ascii_digit()) {
        name.push('_');
    }
    name.extend(raw.chars().map(|c| {
        if c.is_ascii_alphanumeric() || c == '_' {
            c
        } else {
            '_'
        }
    }));
    if name.is_empty() {
        name.push_str("image");
    }
    name
}

/// `0xNN` bytes, comma separated, `BYTES_PER_LINE` per line.
fn write_hex_bytes(out: &mut impl fmt::Write, bytes: &[u8], indent: &str) -> fmt::Result {
    for line in bytes.chunks(BYTES_PER_LINE) {
        out.write_str(indent)?;
        for (idx, byte) in line.iter().enumerate() {
            if idx > 0 {
                out.write_char(' ')?;
            }
            write!(out, "0x{byte:02X},")?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}
