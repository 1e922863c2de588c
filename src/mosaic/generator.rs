//! Frame generation: recolors sprite tiles per cell and composites each animation step

use crate::io::error::{MosaicError, Result};
use crate::mosaic::layout::{MosaicLayout, sprite_index};
use crate::mosaic::palette::Palette;
use crate::mosaic::resample::{CellGrid, ResampleFilter};
use crate::mosaic::sprites::SpriteSet;
use image::{RgbImage, RgbaImage, imageops};
use std::path::Path;

/// Ordered animation frames, one per animation step
///
/// Every frame shares the canvas size given by [`FrameSequence::layout`].
#[derive(Debug, Clone)]
pub struct FrameSequence {
    frames: Vec<RgbaImage>,
    layout: MosaicLayout,
}

impl FrameSequence {
    /// Create an empty sequence for the given layout
    pub const fn new(layout: MosaicLayout) -> Self {
        Self {
            frames: Vec::new(),
            layout,
        }
    }

    /// Append the next frame in playback order
    pub fn push(&mut self, frame: RgbaImage) {
        self.frames.push(frame);
    }

    /// Number of frames
    pub const fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when no frame has been added
    pub const fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames in playback order
    pub fn frames(&self) -> &[RgbaImage] {
        &self.frames
    }

    /// Geometry shared by every frame
    pub const fn layout(&self) -> &MosaicLayout {
        &self.layout
    }

    /// Consume the sequence, returning the frames
    pub fn into_frames(self) -> Vec<RgbaImage> {
        self.frames
    }
}

/// Builds animated mosaics from a sprite set and a substitution palette
#[derive(Debug, Clone)]
pub struct FrameGenerator {
    sprites: SpriteSet,
    palette: Palette,
}

impl FrameGenerator {
    /// Create a generator using the default key-color palette
    pub fn new(sprites: SpriteSet) -> Self {
        Self {
            sprites,
            palette: Palette::default(),
        }
    }

    /// Create a generator from the sprite frames stored in `dir`
    ///
    /// # Errors
    ///
    /// Returns an error if any sprite frame is missing, corrupt or differs in
    /// size from the first one
    pub fn from_sprite_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        SpriteSet::load_dir(dir).map(Self::new)
    }

    /// Replace the substitution palette
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sprite frames backing this generator
    pub const fn sprites(&self) -> &SpriteSet {
        &self.sprites
    }

    /// Substitution palette applied to every tile
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Number of animation steps, equal to the number of sprite frames
    pub const fn frame_count(&self) -> usize {
        self.sprites.len()
    }

    /// Compute the layout for `input` and resample it to one color per cell
    ///
    /// # Errors
    ///
    /// Returns an error if `width_cells` is out of range or the input has a
    /// zero dimension
    pub fn prepare(
        &self,
        input: &RgbImage,
        width_cells: u32,
        filter: ResampleFilter,
    ) -> Result<CellGrid> {
        let layout = MosaicLayout::new(
            input.dimensions(),
            (self.sprites.width(), self.sprites.height()),
            width_cells,
        )?;
        tracing::debug!(
            width_cells = layout.width_cells,
            height_cells = layout.height_cells,
            %filter,
            "resampling input to cell grid"
        );
        Ok(CellGrid::resample(input, layout, filter))
    }

    /// Composite the frame for animation step `step`
    ///
    /// Each cell gets a private recolored copy of its sprite, pasted as a
    /// straight pixel copy so transparent sprite pixels stay transparent.
    pub fn render_frame(&self, grid: &CellGrid, step: usize) -> RgbaImage {
        let layout = grid.layout();
        let (canvas_width, canvas_height) = layout.canvas_dimensions();
        let mut canvas = RgbaImage::new(canvas_width, canvas_height);

        for (x, y, color) in grid.cells() {
            let index = sprite_index(x, y, step, self.sprites.len());
            if let Some(sprite) = self.sprites.get(index) {
                let tile = self.palette.recolor(sprite, color);
                let (origin_x, origin_y) = layout.tile_origin(x, y);
                imageops::replace(
                    &mut canvas,
                    &tile,
                    i64::from(origin_x),
                    i64::from(origin_y),
                );
            }
        }

        tracing::debug!(step, "frame rendered");
        canvas
    }

    /// Render every animation step for an already decoded input
    ///
    /// # Errors
    ///
    /// Returns an error if `width_cells` is out of range or the input has a
    /// zero dimension
    #[tracing::instrument(level = "info", skip(self, input), fields(input_width = input.width(), input_height = input.height()))]
    pub fn generate_from_image(
        &self,
        input: &RgbImage,
        width_cells: u32,
        filter: ResampleFilter,
    ) -> Result<FrameSequence> {
        let grid = self.prepare(input, width_cells, filter)?;
        let mut sequence = FrameSequence::new(*grid.layout());
        for step in 0..self.frame_count() {
            sequence.push(self.render_frame(&grid, step));
        }
        tracing::info!(frames = sequence.len(), "frame sequence generated");
        Ok(sequence)
    }

    /// Decode the input at `input_path` and render every animation step
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be decoded, `width_cells` is out
    /// of range, or the input has a zero dimension
    pub fn generate<P: AsRef<Path>>(
        &self,
        input_path: P,
        width_cells: u32,
        filter: ResampleFilter,
    ) -> Result<FrameSequence> {
        let input = load_input(input_path)?;
        self.generate_from_image(&input, width_cells, filter)
    }
}

/// Decode an input image as RGB, dropping any alpha channel
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| MosaicError::InputLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "input image loaded"
    );
    Ok(img.to_rgb8())
}

/// Load the sprite set from `sprite_dir` and animate the image at `input_path`
///
/// # Errors
///
/// Returns an error if the sprite set or the input fails to load, or if the
/// requested width is out of range
pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(
    sprite_dir: P,
    input_path: Q,
    width_cells: u32,
    filter: ResampleFilter,
) -> Result<FrameSequence> {
    FrameGenerator::from_sprite_dir(sprite_dir)?.generate(input_path, width_cells, filter)
}
