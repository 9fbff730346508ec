#![no_std]

pub mod bitmap;
pub mod emit;
pub mod error;
pub mod grid;
pub mod threshold;

pub use bitmap::{PackedBitmap, pack};
pub use emit::OutputFormat;
pub use error::{Error, Result};
pub use grid::{GrayGrid, IntensityGrid};
pub use threshold::Threshold;

extern crate alloc;

#[cfg(test)]
mod tests;
