//! Unit-level tests mirroring the `src` tree, one file per source module


use image::{Rgba, RgbaImage};
use std::path::Path;

/// Sprite pixel carrying the primary key color
const PRIMARY: Rgba<u8> = Rgba([214, 224, 240, 255]);
/// Sprite pixel carrying the shadow key color
const SHADOW: Rgba<u8> = Rgba([131, 148, 191, 255]);
/// Primary key color drawn half transparent
const PRIMARY_FAINT: Rgba<u8> = Rgba([214, 224, 240, 128]);
/// Opaque outline color no substitution touches
const OUTLINE: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Red channel of the marker pixel identifying sprite `index`
fn marker_red(index: usize) -> u8 {
    10 + index as u8
}

/// Synthetic sprite: row 0 holds primary, shadow, marker and outline pixels,
/// the bottom-right pixel is a faint primary and everything else is transparent
fn test_sprite(index: usize, width: u32, height: u32) -> RgbaImage {
    let mut sprite = RgbaImage::new(width, height);
    sprite.put_pixel(0, 0, PRIMARY);
    sprite.put_pixel(1, 0, SHADOW);
    sprite.put_pixel(2, 0, Rgba([marker_red(index), 0, 0, 255]));
    sprite.put_pixel(3, 0, OUTLINE);
    sprite.put_pixel(width - 1, height - 1, PRIMARY_FAINT);
    sprite
}

/// Full set of six synthetic sprites
fn test_sprites(width: u32, height: u32) -> Vec<RgbaImage> {
    (0..6).map(|index| test_sprite(index, width, height)).collect()
}

/// Write six synthetic sprites as `0.png` through `5.png` into `dir`
fn write_sprite_dir(dir: &Path, width: u32, height: u32) {
    for (index, sprite) in test_sprites(width, height).iter().enumerate() {
        sprite.save(dir.join(format!("{index}.png"))).unwrap();
    }
}
