use std::path::Path;

use embedded_graphics::{
    Pixel,
    image::Image,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, Drawable, OriginDimensions, Point, Size},
};
use image::{GrayImage, ImageFormat, Luma};
use log::warn;
use monopack_core::PackedBitmap;
use tempfile::NamedTempFile;

use crate::convert::{ConvertError, Result, staging_file};

/// Grayscale canvas the packed bitmap is drawn onto, opaque = white.
pub struct PreviewCanvas {
    image: GrayImage,
}

impl PreviewCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: GrayImage::new(width, height),
        }
    }

    pub fn into_image(self) -> GrayImage {
        self.image
    }
}

impl OriginDimensions for PreviewCanvas {
    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }
}

impl DrawTarget for PreviewCanvas {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> std::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = self.image.dimensions();
        for Pixel(coord, color) in pixels {
            if coord.x < 0 || coord.y < 0 || coord.x as u32 >= width || coord.y as u32 >= height {
                continue;
            }
            let luma = match color {
                BinaryColor::On => 255,
                BinaryColor::Off => 0,
            };
            self.image.put_pixel(coord.x as u32, coord.y as u32, Luma([luma]));
        }
        Ok(())
    }
}

/// Draw `bitmap` through its embedded-graphics view; `None` for empty bitmaps.
pub fn render(bitmap: &PackedBitmap) -> Option<GrayImage> {
    let raw = bitmap.as_image_raw()?;
    let mut canvas = PreviewCanvas::new(bitmap.width() as u32, bitmap.height() as u32);
    Image::new(&raw, Point::zero())
        .draw(&mut canvas)
        .unwrap_or_else(|e| match e {});
    Some(canvas.into_image())
}

/// Encode the preview as PNG into a staging file next to `path`.
///
/// Returns `None` for empty bitmaps, which have nothing to show.
pub fn stage(bitmap: &PackedBitmap, path: &Path) -> Result<Option<NamedTempFile>> {
    let Some(image) = render(bitmap) else {
        warn!("Skipping preview {}: bitmap is empty", path.display());
        return Ok(None);
    };
    let mut file = staging_file(path)?;
    image
        .write_to(&mut file, ImageFormat::Png)
        .map_err(ConvertError::Preview)?;
    Ok(Some(file))
}
