use core::fmt::{self, Write};

use crate::bitmap::PackedBitmap;

use super::write_hex_bytes;

// C11 and C23 keywords, none of which may name the descriptor.
const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double",
    "else", "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long",
    "register", "restrict", "return", "short", "signed", "sizeof", "static", "struct",
    "switch", "typedef", "union", "unsigned", "void", "volatile", "while", "_Alignas",
    "_Alignof", "_Atomic", "_Bool", "_Complex", "_Generic", "_Imaginary", "_Noreturn",
    "_Static_assert", "_Thread_local", "alignas", "alignof", "bool", "constexpr", "false",
    "nullptr", "static_assert", "thread_local", "true", "typeof", "typeof_unqual",
];

pub(super) fn is_reserved(name: &str) -> bool {
    C_KEYWORDS.contains(&name)
}

// https://docs.lvgl.io/8.3/overview/image.html#c-array-images
pub(super) fn write(out: &mut impl Write, name: &str, bitmap: &PackedBitmap) -> fmt::Result {
    writeln!(out, "#include \"lvgl.h\"")?;
    writeln!(out)?;
    writeln!(out, "LV_IMG_DECLARE({name});")?;
    writeln!(out)?;
    writeln!(
        out,
        "const LV_ATTRIBUTE_MEM_ALIGN LV_ATTRIBUTE_LARGE_CONST uint8_t {name}_map[] = {{"
    )?;
    write_hex_bytes(out, bitmap.bytes(), "    ")?;
    writeln!(out, "}};")?;
    writeln!(out)?;
    writeln!(out, "const lv_img_dsc_t {name} = {{")?;
    writeln!(out, "  .header.always_zero = 0,")?;
    writeln!(out, "  .header.w = {},", bitmap.width())?;
    writeln!(out, "  .header.h = {},", bitmap.height())?;
    writeln!(out, "  .data_size = {},", bitmap.byte_count())?;
    writeln!(out, "  .header.cf = LV_IMG_CF_ALPHA_1BIT,")?;
    writeln!(out, "  .data = {name}_map,")?;
    writeln!(out, "}};")
}
