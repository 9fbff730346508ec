use core::fmt::{self, Write};

use crate::bitmap::PackedBitmap;

use super::write_hex_bytes;

/// Identifiers the module declares next to the static.
const LAYOUT_NAMES: [&str; 3] = ["WIDTH", "HEIGHT", "DATA_SIZE"];

/// The static is declared as `name.to_ascii_uppercase()`, which must not
/// collide with the layout's constants or be the bare `_` pattern.
pub(super) fn is_reserved(name: &str) -> bool {
    let upper = name.to_ascii_uppercase();
    upper == "_" || LAYOUT_NAMES.contains(&upper.as_str())
}

pub(super) fn write(out: &mut impl Write, name: &str, bitmap: &PackedBitmap) -> fmt::Result {
    writeln!(out, "// Image dimensions: {}x{}", bitmap.width(), bitmap.height())?;
    writeln!(
        out,
        "// Alpha encoding: 1-bit, 8 pixels per byte, MSB first, rows padded to whole bytes"
    )?;
    writeln!(out, "// Bit values: 0=Transparent, 1=Opaque")?;
    writeln!(out)?;
    writeln!(out, "pub const WIDTH: usize = {};", bitmap.width())?;
    writeln!(out, "pub const HEIGHT: usize = {};", bitmap.height())?;
    writeln!(out, "pub const DATA_SIZE: usize = {};", bitmap.byte_count())?;
    writeln!(out)?;
    writeln!(
        out,
        "pub static {}: [u8; DATA_SIZE] = [",
        name.to_ascii_uppercase()
    )?;
    write_hex_bytes(out, bitmap.bytes(), "    ")?;
    writeln!(out, "];")
}
