//! Sprite mosaic construction
//!
//! This module contains everything between the decoded images and the
//! finished frames:
//! - Sprite set loading and validation
//! - Cell grid geometry and input resampling
//! - Key-color substitution and frame compositing

/// Frame generation across all animation steps
pub mod generator;
/// Cell grid geometry and sprite index selection
pub mod layout;
/// Key-color substitution rules
pub mod palette;
/// Input downscaling filters
pub mod resample;
/// Sprite frame loading
pub mod sprites;

pub use generator::{FrameGenerator, FrameSequence};
pub use sprites::SpriteSet;
