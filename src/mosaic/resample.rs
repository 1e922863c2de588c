//! Downscaling of the input image into one color per mosaic cell

use crate::mosaic::layout::MosaicLayout;
use clap::ValueEnum;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use std::fmt;

/// Filter used when shrinking the input to the cell grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ResampleFilter {
    /// Take the closest input pixel
    #[default]
    Nearest,
    /// Linear interpolation between neighbours
    Bilinear,
    /// Catmull-Rom cubic interpolation
    Bicubic,
    /// Gaussian weighted average
    Gaussian,
    /// Lanczos windowed sinc with radius 3
    Lanczos,
}

impl ResampleFilter {
    /// Corresponding `image` crate filter
    pub const fn filter_type(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Bilinear => FilterType::Triangle,
            Self::Bicubic => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos => FilterType::Lanczos3,
        }
    }
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nearest => "nearest",
            Self::Bilinear => "bilinear",
            Self::Bicubic => "bicubic",
            Self::Gaussian => "gaussian",
            Self::Lanczos => "lanczos",
        };
        f.write_str(name)
    }
}

/// Input image reduced to exactly one color per cell
#[derive(Debug, Clone)]
pub struct CellGrid {
    colors: RgbImage,
    layout: MosaicLayout,
}

impl CellGrid {
    /// Resample `input` once, in bulk, to the layout's cell dimensions
    pub fn resample(input: &RgbImage, layout: MosaicLayout, filter: ResampleFilter) -> Self {
        let colors = imageops::resize(
            input,
            layout.width_cells,
            layout.height_cells,
            filter.filter_type(),
        );
        Self { colors, layout }
    }

    /// Geometry this grid was resampled for
    pub const fn layout(&self) -> &MosaicLayout {
        &self.layout
    }

    /// Color of cell `(x, y)`, if in range
    pub fn color(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.colors.get_pixel_checked(x, y).copied()
    }

    /// Row-major iterator over `(x, y, color)` for every cell
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, Rgb<u8>)> + '_ {
        self.colors
            .enumerate_pixels()
            .map(|(x, y, color)| (x, y, *color))
    }
}
