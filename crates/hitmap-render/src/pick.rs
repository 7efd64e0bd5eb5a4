//! Pick color encoding for the identification pass.
//!
//! Every hit id is rendered as a flat, opaque color. When the user clicks, the
//! pixel under the pointer is read back and decoded to the id that drew it.

use hitmap_core::{HitId, HitmapError, Result, BACKGROUND_HIT_ID, MAX_HIT_ID};

/// An 8-bit-per-channel pick color.
///
/// Layout matches an `Rgba8Unorm` target so a colors sequence can be uploaded
/// as an instance buffer without conversion.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct HitColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl HitColor {
    /// The cleared background of an identification pass.
    pub const BACKGROUND: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    /// Encodes a hit id.
    ///
    /// Ids beyond [`MAX_HIT_ID`] are rejected rather than wrapped, since a
    /// wrapped id would alias another object's color.
    pub fn from_id(id: HitId) -> Result<Self> {
        let [r, g, b] = index_to_color(id)?;
        Ok(Self { r, g, b, a: 255 })
    }

    /// Decodes the hit id. Alpha is ignored.
    #[must_use]
    pub fn id(self) -> HitId {
        color_to_index(self.r, self.g, self.b)
    }

    /// Returns true if this color decodes to the background id.
    #[must_use]
    pub fn is_background(self) -> bool {
        self.id() == BACKGROUND_HIT_ID
    }

    /// Builds a color from a read-back RGBA8 pixel.
    #[must_use]
    pub fn from_rgba8(pixel: [u8; 4]) -> Self {
        let [r, g, b, a] = pixel;
        Self { r, g, b, a }
    }

    /// Returns the color as RGBA8 bytes.
    #[must_use]
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns the color normalized to `[0, 1]` for float vertex attributes.
    #[must_use]
    pub fn to_rgba_f32(self) -> [f32; 4] {
        self.to_rgba8().map(|c| f32::from(c) / 255.0)
    }

    /// Builds a color from normalized channels, rounding to the nearest byte.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_rgba_f32(rgba: [f32; 4]) -> Self {
        let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        Self { r, g, b, a }
    }
}

/// Encodes an index as a pick color.
///
/// Returns [R, G, B] where:
/// - R contains bits 16-23
/// - G contains bits 8-15
/// - B contains bits 0-7
#[allow(clippy::cast_possible_truncation)]
pub fn index_to_color(index: HitId) -> Result<[u8; 3]> {
    if index > MAX_HIT_ID {
        return Err(HitmapError::IdOutOfRange {
            id: index,
            max: MAX_HIT_ID,
        });
    }
    Ok([
        ((index >> 16) & 0xFF) as u8,
        ((index >> 8) & 0xFF) as u8,
        (index & 0xFF) as u8,
    ])
}

/// Decodes a pick color back to an index.
#[must_use]
pub fn color_to_index(r: u8, g: u8, b: u8) -> HitId {
    (HitId::from(r) << 16) | (HitId::from(g) << 8) | HitId::from(b)
}
