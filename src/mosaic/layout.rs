//! Cell grid geometry for the sprite mosaic

use crate::io::configuration::{MAX_CANVAS_BYTES, MAX_OUTPUT_WIDTH_CELLS, SPRITE_COUNT};
use crate::io::error::{MosaicError, Result, invalid_parameter};

/// Mosaic dimensions in cells together with the sprite size they tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicLayout {
    /// Columns of sprite tiles
    pub width_cells: u32,
    /// Rows of sprite tiles
    pub height_cells: u32,
    /// Width of one sprite tile in pixels
    pub sprite_width: u32,
    /// Height of one sprite tile in pixels
    pub sprite_height: u32,
}

impl MosaicLayout {
    /// Derive the layout for an input of `input_dims` drawn `width_cells` wide
    ///
    /// Row count compensates for the sprite aspect ratio so the mosaic keeps
    /// the visual proportions of the input. At least one row is produced.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `width_cells` is zero or above [`MAX_OUTPUT_WIDTH_CELLS`]
    /// - The input or sprite has a zero dimension
    /// - The resulting canvas would not fit in `u32` pixel dimensions
    /// - All frames together would exceed [`MAX_CANVAS_BYTES`]
    pub fn new(input_dims: (u32, u32), sprite_dims: (u32, u32), width_cells: u32) -> Result<Self> {
        if width_cells == 0 || width_cells > MAX_OUTPUT_WIDTH_CELLS {
            return Err(invalid_parameter(
                "width_cells",
                &width_cells,
                &format!("must be between 1 and {MAX_OUTPUT_WIDTH_CELLS}"),
            ));
        }

        let (input_width, input_height) = input_dims;
        if input_width == 0 || input_height == 0 {
            return Err(MosaicError::InvalidInput {
                reason: format!("image has zero size ({input_width}x{input_height})"),
            });
        }

        let (sprite_width, sprite_height) = sprite_dims;
        if sprite_width == 0 || sprite_height == 0 {
            return Err(invalid_parameter(
                "sprite_dims",
                &format!("{sprite_width}x{sprite_height}"),
                &"sprite dimensions must be non-zero",
            ));
        }

        let height_cells = height_cells(input_dims, sprite_dims, width_cells);
        if width_cells.checked_mul(sprite_width).is_none()
            || height_cells.checked_mul(sprite_height).is_none()
        {
            return Err(invalid_parameter(
                "width_cells",
                &width_cells,
                &format!("{width_cells}x{height_cells} cells overflow the canvas size"),
            ));
        }

        let animation_bytes = u64::from(width_cells * sprite_width)
            .saturating_mul(u64::from(height_cells * sprite_height))
            .saturating_mul(4)
            .saturating_mul(SPRITE_COUNT as u64);
        if animation_bytes > MAX_CANVAS_BYTES {
            return Err(invalid_parameter(
                "width_cells",
                &width_cells,
                &format!(
                    "{width_cells}x{height_cells} cells need {animation_bytes} bytes of frames, limit is {MAX_CANVAS_BYTES}"
                ),
            ));
        }

        Ok(Self {
            width_cells,
            height_cells,
            sprite_width,
            sprite_height,
        })
    }

    /// Canvas size in pixels
    pub const fn canvas_dimensions(&self) -> (u32, u32) {
        (
            self.width_cells * self.sprite_width,
            self.height_cells * self.sprite_height,
        )
    }

    /// Pixel offset of the top-left corner of cell `(x, y)`
    pub const fn tile_origin(&self, x: u32, y: u32) -> (u32, u32) {
        (x * self.sprite_width, y * self.sprite_height)
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> u64 {
        self.width_cells as u64 * self.height_cells as u64
    }
}

/// Rows needed for `width_cells` columns, rounded and clamped to at least one
pub fn height_cells(input_dims: (u32, u32), sprite_dims: (u32, u32), width_cells: u32) -> u32 {
    let (input_width, input_height) = input_dims;
    let (sprite_width, sprite_height) = sprite_dims;

    let rows = f64::from(width_cells)
        * (f64::from(input_height) / f64::from(input_width))
        * (f64::from(sprite_width) / f64::from(sprite_height));

    rows.round().clamp(1.0, f64::from(u32::MAX)) as u32
}

/// Sprite index for cell `(x, y)` at animation step `step`
///
/// Offsetting by column minus row makes the pose travel diagonally across the
/// mosaic as `step` advances. The result is always in `0..sprite_count`.
pub const fn sprite_index(x: u32, y: u32, step: usize, sprite_count: usize) -> usize {
    let offset = x as i64 - y as i64 + step as i64;
    offset.rem_euclid(sprite_count as i64) as usize
}
