//! Sprite frame loading and set validation

use crate::io::configuration::{SPRITE_COUNT, SPRITE_FILE_EXTENSION};
use crate::io::error::{MosaicError, Result, invalid_sprite_set};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Ordered, equally sized set of sprite frames
///
/// Frames are never modified after construction. Recoloring always works on
/// a copy, so one set can back any number of generations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSet {
    frames: Vec<RgbaImage>,
    width: u32,
    height: u32,
}

impl SpriteSet {
    /// Build a set from already decoded frames
    ///
    /// The first frame fixes the reference size.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The frame count differs from [`SPRITE_COUNT`]
    /// - The reference frame has a zero dimension
    /// - Any frame differs in size from the reference frame
    pub fn from_frames(frames: Vec<RgbaImage>) -> Result<Self> {
        if frames.len() != SPRITE_COUNT {
            return Err(invalid_sprite_set(&format!(
                "expected {SPRITE_COUNT} frames, found {}",
                frames.len()
            )));
        }

        let (width, height) = frames
            .first()
            .map(RgbaImage::dimensions)
            .ok_or_else(|| invalid_sprite_set(&"sprite set is empty"))?;
        if width == 0 || height == 0 {
            return Err(invalid_sprite_set(&format!(
                "reference frame has zero size ({width}x{height})"
            )));
        }

        for (index, frame) in frames.iter().enumerate() {
            if frame.dimensions() != (width, height) {
                return Err(invalid_sprite_set(&format!(
                    "frame {index} is {}x{}, expected {width}x{height}",
                    frame.width(),
                    frame.height()
                )));
            }
        }

        Ok(Self {
            frames,
            width,
            height,
        })
    }

    /// Load `0.png` through `5.png` from a directory
    ///
    /// # Errors
    ///
    /// Returns an error if any frame is missing or cannot be decoded, or if
    /// the decoded frames do not form a valid set
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let frames = (0..SPRITE_COUNT)
            .map(|index| load_frame(&frame_path(dir, index)))
            .collect::<Result<Vec<_>>>()?;

        let set = Self::from_frames(frames)?;
        tracing::info!(
            dir = %dir.display(),
            width = set.width,
            height = set.height,
            "sprite frames loaded"
        );
        Ok(set)
    }

    /// Width of every frame in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of every frame in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of frames, which is also the animation length
    pub const fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false for a validated set
    pub const fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&RgbaImage> {
        self.frames.get(index)
    }

    /// All frames in animation order
    pub fn frames(&self) -> &[RgbaImage] {
        &self.frames
    }
}

/// Path of the sprite frame with the given index inside `dir`
pub fn frame_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("{index}.{SPRITE_FILE_EXTENSION}"))
}

fn load_frame(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| MosaicError::AssetLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}
