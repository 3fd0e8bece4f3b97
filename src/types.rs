use glam::IVec4;
use serde::{Deserialize, Serialize};

/// A grid sample: integer position plus alpha, red, green and blue channels.
///
/// Channels are deliberately unclamped. Midpoint blending can push them past
/// the byte range and it is up to the consumer to normalize.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
    pub argb: IVec4, // (alpha, red, green, blue)
}

impl Pixel {
    pub const fn new(x: u32, y: u32, argb: IVec4) -> Self {
        Self { x, y, argb }
    }

    pub const fn from_channels(x: u32, y: u32, a: i32, r: i32, g: i32, b: i32) -> Self {
        Self::new(x, y, IVec4::new(a, r, g, b))
    }

    /// Zero-valued, fully transparent pixel used to pre-fill a grid
    pub const fn placeholder(x: u32, y: u32) -> Self {
        Self::new(x, y, IVec4::ZERO)
    }

    pub fn alpha(&self) -> i32 {
        self.argb.x
    }

    pub fn red(&self) -> i32 {
        self.argb.y
    }

    pub fn green(&self) -> i32 {
        self.argb.z
    }

    pub fn blue(&self) -> i32 {
        self.argb.w
    }

    pub fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// Channels clamped into the byte range, ARGB order
    pub fn to_bytes(&self) -> [u8; 4] {
        let clamped = self.argb.clamp(IVec4::ZERO, IVec4::splat(255));
        [
            clamped.x as u8,
            clamped.y as u8,
            clamped.z as u8,
            clamped.w as u8,
        ]
    }

    /// Clamped channels packed as 0xAARRGGBB
    pub fn to_argb_u32(&self) -> u32 {
        u32::from_be_bytes(self.to_bytes())
    }
}
