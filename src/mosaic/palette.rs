//! Key-color substitution rules and tile recoloring

use crate::io::configuration::{
    PRIMARY_KEY_COLOR, SHADOW_DENOMINATOR, SHADOW_KEY_COLOR, SHADOW_NUMERATOR,
};
use crate::io::error::{Result, invalid_parameter};
use image::{Rgb, RgbaImage};

/// Rational brightness factor applied to a sampled color with truncation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    numerator: u16,
    denominator: u16,
}

impl Shade {
    /// Leaves the sampled color unchanged
    pub const FULL: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Create a shade of `numerator / denominator`
    ///
    /// # Errors
    ///
    /// Returns an error if the denominator is zero or the factor exceeds one
    pub fn new(numerator: u16, denominator: u16) -> Result<Self> {
        if denominator == 0 {
            return Err(invalid_parameter(
                "denominator",
                &denominator,
                &"must be non-zero",
            ));
        }
        if numerator > denominator {
            return Err(invalid_parameter(
                "numerator",
                &numerator,
                &format!("shade {numerator}/{denominator} would brighten past full"),
            ));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Scale a single channel, rounding toward zero
    pub const fn apply_channel(self, channel: u8) -> u8 {
        (channel as u32 * self.numerator as u32 / self.denominator as u32) as u8
    }

    /// Scale every channel of a color
    pub const fn apply(self, color: Rgb<u8>) -> Rgb<u8> {
        let [r, g, b] = color.0;
        Rgb([
            self.apply_channel(r),
            self.apply_channel(g),
            self.apply_channel(b),
        ])
    }
}

/// Replaces one exact sprite color with a shade of the sampled cell color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    /// Sprite RGB value to match exactly
    pub key: [u8; 3],
    /// Shade applied to the cell color before it replaces the key
    pub shade: Shade,
}

/// Ordered list of substitutions applied to every sprite tile
///
/// Matching is evaluated against the untouched sprite pixel, so a substituted
/// color never feeds into a later rule. When more than one key matches the
/// same pixel the last rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    substitutions: Vec<Substitution>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            substitutions: vec![
                Substitution {
                    key: PRIMARY_KEY_COLOR,
                    shade: Shade::FULL,
                },
                Substitution {
                    key: SHADOW_KEY_COLOR,
                    shade: Shade {
                        numerator: SHADOW_NUMERATOR,
                        denominator: SHADOW_DENOMINATOR,
                    },
                },
            ],
        }
    }
}

impl Palette {
    /// Build a palette from explicit substitutions
    pub const fn new(substitutions: Vec<Substitution>) -> Self {
        Self { substitutions }
    }

    /// Substitutions in evaluation order
    pub fn substitutions(&self) -> &[Substitution] {
        &self.substitutions
    }

    /// Color a sprite pixel with RGB `rgb` should take for cell color `cell`
    ///
    /// Returns `None` when no key matches and the pixel stays as drawn.
    pub fn resolve(&self, rgb: [u8; 3], cell: Rgb<u8>) -> Option<Rgb<u8>> {
        self.substitutions
            .iter()
            .rev()
            .find(|substitution| substitution.key == rgb)
            .map(|substitution| substitution.shade.apply(cell))
    }

    /// Produce a recolored copy of `sprite` for the given cell color
    ///
    /// Alpha of substituted pixels is kept from the sprite and non-matching
    /// pixels are copied unchanged, transparent ones included.
    pub fn recolor(&self, sprite: &RgbaImage, cell: Rgb<u8>) -> RgbaImage {
        let mut tile = sprite.clone();
        for pixel in tile.pixels_mut() {
            let [r, g, b, a] = pixel.0;
            if let Some(Rgb([nr, ng, nb])) = self.resolve([r, g, b], cell) {
                pixel.0 = [nr, ng, nb, a];
            }
        }
        tile
    }
}
