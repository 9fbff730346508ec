extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use embedded_graphics::{
    Pixel,
    image::Image,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, Drawable, OriginDimensions, Point, Size},
};

use super::*;

/// Deterministic xorshift samples so failures are reproducible.
fn noise(width: usize, height: usize, mut seed: u32) -> Vec<u8> {
    (0..width * height)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            (seed >> 24) as u8
        })
        .collect()
}

fn pack_slice(width: usize, height: usize, data: &[u8], threshold: u8) -> PackedBitmap {
    let grid = GrayGrid::new(width, height, data).unwrap();
    pack(&grid, Threshold::new(threshold))
}

#[test]
fn degenerate_grids_are_empty() {
    for (w, h) in [(0, 0), (0, 7), (13, 0)] {
        let bitmap = pack_slice(w, h, &[], 128);
        assert!(bitmap.bytes().is_empty());
        assert_eq!(bitmap.byte_count(), 0);
        assert_eq!(bitmap.width(), w);
        assert_eq!(bitmap.height(), h);
    }
}

#[test]
fn byte_count_formula() {
    for w in 0..=33 {
        for h in 0..=5 {
            let data = noise(w, h, (w * 31 + h + 1) as u32);
            let bitmap = pack_slice(w, h, &data, 128);
            assert_eq!(bitmap.byte_count(), h * w.div_ceil(8));
            assert_eq!(bitmap.bytes().len(), bitmap.byte_count());
        }
    }
}

#[test]
fn packing_is_idempotent() {
    let data = noise(37, 11, 0xC0FFEE);
    let a = pack_slice(37, 11, &data, 90);
    let b = pack_slice(37, 11, &data, 90);
    assert_eq!(a, b);
}

#[test]
fn raising_threshold_never_sets_bits() {
    let data = noise(21, 9, 7);
    let mut previous = pack_slice(21, 9, &data, 0);
    assert!(previous.row(0).unwrap()[0] == 0xFF);
    for threshold in 1..=255u8 {
        let current = pack_slice(21, 9, &data, threshold);
        for (old, new) in previous.bytes().iter().zip(current.bytes()) {
            assert_eq!(new & !old, 0, "bit appeared at threshold {threshold}");
        }
        previous = current;
    }
}

#[test]
fn partial_byte_keeps_padding_clear() {
    let expected = [0x80, 0xC0, 0xE0, 0xF0, 0xF8, 0xFC, 0xFE, 0xFF];
    for width in 1..=8 {
        let data = vec![255u8; width * 3];
        let bitmap = pack_slice(width, 3, &data, 128);
        assert_eq!(bitmap.bytes(), &[expected[width - 1]; 3]);
    }
    assert_eq!(pack_slice(3, 1, &[255; 3], 128).bytes(), &[0xE0]);
}

#[test]
fn alternating_row() {
    let data = [255, 0, 255, 0, 255, 0, 255, 0];
    assert_eq!(pack_slice(8, 1, &data, 128).bytes(), &[0xAA]);
}

#[test]
fn rows_do_not_share_bytes() {
    let bitmap = pack_slice(1, 2, &[255, 0], 128);
    assert_eq!(bitmap.bytes(), &[0x80, 0x00]);
}

#[test]
fn uniform_16x16() {
    let data = [200u8; 256];
    let bitmap = pack_slice(16, 16, &data, 128);
    assert_eq!(bitmap.byte_count(), 32);
    assert!(bitmap.bytes().iter().all(|&b| b == 0xFF));
}

#[test]
fn threshold_boundary() {
    let data = [127, 128];
    assert_eq!(pack_slice(2, 1, &data, 128).bytes(), &[0x40]);
    assert_eq!(pack_slice(2, 1, &data, 127).bytes(), &[0xC0]);
    assert_eq!(pack_slice(2, 1, &data, 129).bytes(), &[0x00]);
}

#[test]
fn pixels_match_grid() {
    let (w, h) = (19, 6);
    let data = noise(w, h, 42);
    let bitmap = pack_slice(w, h, &data, 100);
    for y in 0..h {
        for x in 0..w {
            assert_eq!(bitmap.pixel(x, y), Some(data[y * w + x] >= 100));
        }
    }
}

/// Records every drawn pixel so the embedded-graphics view can be compared.
struct Recorder {
    size: Size,
    pixels: Vec<Option<bool>>,
}

impl OriginDimensions for Recorder {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Recorder {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let width = self.size.width as i32;
        for Pixel(Point { x, y }, color) in pixels {
            self.pixels[(y * width + x) as usize] = Some(color.is_on());
        }
        Ok(())
    }
}

#[test]
fn image_raw_view_matches_pixels() {
    let (w, h) = (13, 5);
    let data = noise(w, h, 99);
    let bitmap = pack_slice(w, h, &data, 128);
    let raw = bitmap.as_image_raw().unwrap();

    let mut recorder = Recorder {
        size: Size::new(w as u32, h as u32),
        pixels: vec![None; w * h],
    };
    Image::new(&raw, Point::zero()).draw(&mut recorder).unwrap();

    for y in 0..h {
        for x in 0..w {
            assert_eq!(recorder.pixels[y * w + x], bitmap.pixel(x, y));
        }
    }
}
