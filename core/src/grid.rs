use crate::error::{Error, Result};

/// Read-only access to an 8-bit grayscale image.
pub trait IntensityGrid {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Sample at column `x`, row `y`. Callers stay inside `width() x height()`.
    fn intensity(&self, x: usize, y: usize) -> u8;

    /// Samples of row `y`, when the grid is backed by contiguous memory.
    fn row(&self, _y: usize) -> Option<&[u8]> {
        None
    }
}

/// Row-major grayscale samples borrowed from a decoder's buffer.
#[derive(Clone, Copy, Debug)]
pub struct GrayGrid<'a> {
    width: usize,
    height: usize,
    data: &'a [u8],
}

impl<'a> GrayGrid<'a> {
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self> {
        let expected = width.checked_mul(height);
        if expected != Some(data.len()) {
            return Err(Error::DimensionMismatch {
                width,
                height,
                samples: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }
}

impl IntensityGrid for GrayGrid<'_> {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn intensity(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    fn row(&self, y: usize) -> Option<&[u8]> {
        let start = y * self.width;
        self.data.get(start..start + self.width)
    }
}
