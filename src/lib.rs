//! Animated pixel-art mosaics built from a small set of recolorable sprites
//!
//! The input image is shrunk to one color per cell, each cell is drawn with a
//! sprite whose key colors take on that cell color, and the sprite pose is
//! offset diagonally per animation step so a wave travels across the loop.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Sprite recoloring and frame compositing
pub mod mosaic;

pub use io::error::{ErrorKind, MosaicError, Result};
pub use io::export::export_gif;
pub use mosaic::generator::generate;
pub use mosaic::resample::ResampleFilter;
pub use mosaic::{FrameGenerator, FrameSequence, SpriteSet};
