//! Sprite set constants and runtime configuration defaults

// Sprite set layout
/// Number of frames in the sprite animation set
pub const SPRITE_COUNT: usize = 6;
/// File extension of sprite frames (`0.png` through `5.png`)
pub const SPRITE_FILE_EXTENSION: &str = "png";

// Key colors are tied to the shipped sprite art and must change with it
/// Sprite color replaced by the sampled cell color
pub const PRIMARY_KEY_COLOR: [u8; 3] = [214, 224, 240];
/// Sprite color replaced by a darkened shade of the sampled cell color
pub const SHADOW_KEY_COLOR: [u8; 3] = [131, 148, 191];
/// Numerator of the shadow shade factor
pub const SHADOW_NUMERATOR: u16 = 2;
/// Denominator of the shadow shade factor
pub const SHADOW_DENOMINATOR: u16 = 3;

// Default values for configurable parameters
/// Default mosaic width in sprite cells
pub const DEFAULT_OUTPUT_WIDTH_CELLS: u32 = 30;
/// Upper bound on mosaic width in sprite cells
pub const MAX_OUTPUT_WIDTH_CELLS: u32 = 1_000;
/// Upper bound on the RGBA bytes held by all frames of one animation
pub const MAX_CANVAS_BYTES: u64 = 1 << 32;
/// Default directory holding the sprite frames
pub const DEFAULT_SPRITE_DIR: &str = "sprites";

// Output settings
/// Default path of the exported animation
pub const DEFAULT_OUTPUT_PATH: &str = "mosaic.gif";
/// Display duration of each animation frame
pub const FRAME_DELAY_MS: u32 = 50;
