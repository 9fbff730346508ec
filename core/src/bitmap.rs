use alloc::vec::Vec;

use embedded_graphics::{image::ImageRaw, pixelcolor::BinaryColor};
use log::trace;

use crate::{grid::IntensityGrid, threshold::Threshold};

/// Monochrome bitmap packed 8 pixels per byte, MSB = leftmost pixel.
///
/// Every row starts on a fresh byte; the low bits of a row's last byte beyond
/// `width` are always 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedBitmap {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl PackedBitmap {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per packed row.
    pub fn stride(&self) -> usize {
        self.width.div_ceil(8)
    }

    /// `height * ceil(width / 8)`, recomputed from the dimensions.
    pub fn byte_count(&self) -> usize {
        self.height * self.stride()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.stride();
        self.bytes.get(y * stride..(y + 1) * stride)
    }

    /// Whether the pixel at (`x`, `y`) is set; `None` outside the bitmap.
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x >= self.width {
            return None;
        }
        let byte = self.row(y)?[x / 8];
        Some((byte >> (7 - (x % 8))) & 1 == 1)
    }

    /// Borrow the packed data as an embedded-graphics image.
    ///
    /// `ImageRaw<BinaryColor>` uses the same MSB-first, row-padded layout, so no
    /// copy is needed. Returns `None` for empty bitmaps.
    pub fn as_image_raw(&self) -> Option<ImageRaw<'_, BinaryColor>> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let width = u32::try_from(self.width).ok()?;
        Some(ImageRaw::new(&self.bytes, width))
    }
}

/// Threshold `grid` into a packed 1-bit bitmap.
///
/// A sample is opaque (bit set) when `sample >= threshold`. Grids with zero
/// width or height produce an empty bitmap.
pub fn pack(grid: &impl IntensityGrid, threshold: Threshold) -> PackedBitmap {
    let width = grid.width();
    let height = grid.height();
    let stride = width.div_ceil(8);
    let mut bytes = Vec::with_capacity(stride * height);

    for y in 0..height {
        match grid.row(y) {
            Some(row) if row.len() == width => {
                pack_row(row.iter().copied(), threshold, &mut bytes)
            }
            _ => pack_row((0..width).map(|x| grid.intensity(x, y)), threshold, &mut bytes),
        }
    }
    debug_assert_eq!(bytes.len(), stride * height);
    trace!(
        "Packed {}x{} grid at threshold {} into {} bytes",
        width,
        height,
        threshold.value(),
        bytes.len()
    );

    PackedBitmap {
        width,
        height,
        bytes,
    }
}

fn pack_row(samples: impl Iterator<Item = u8>, threshold: Threshold, out: &mut Vec<u8>) {
    let mut acc = 0u8;
    let mut bit = 0u32;
    for sample in samples {
        if threshold.is_opaque(sample) {
            acc |= 0x80 >> bit;
        }
        bit += 1;
        if bit == 8 {
            out.push(acc);
            acc = 0;
            bit = 0;
        }
    }
    // Partial byte-group, padding bits stay 0
    if bit != 0 {
        out.push(acc);
    }
}
