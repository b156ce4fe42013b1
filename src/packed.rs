//! Packed integer color representations, bit compatible with the Android
//! `@ColorInt` and `@ColorLong` formats.

use std::{fmt, str::FromStr};

use half::f16;

use crate::{
    color::{clip_unit, Color, Component, Components, Space},
    error::{Error, Result},
};

/// An 8-bit per channel sRGB color packed as `0xAARRGGBB`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

/// Quantize a component in [0..1] to 8 bits.
fn to_u8(value: Component) -> u8 {
    (clip_unit(value) * 255.0).round() as u8
}

impl Argb {
    /// Opaque black.
    pub const BLACK: Argb = Argb::new(0xff, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Argb = Argb::new(0xff, 0xff, 0xff, 0xff);

    /// Pack the four channels.
    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self((alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// The alpha channel.
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The red channel.
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// The green channel.
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// The blue channel.
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// The red, green and blue channels normalized to [0..1].
    pub fn components(self) -> Components {
        Components(
            self.red() as Component / 255.0,
            self.green() as Component / 255.0,
            self.blue() as Component / 255.0,
        )
    }

    /// Replace the red, green and blue channels, keeping the alpha channel
    /// bits as they are.
    pub fn with_components(self, components: Components) -> Self {
        let Components(red, green, blue) = components;
        Self::new(self.alpha(), to_u8(red), to_u8(green), to_u8(blue))
    }

    /// Unpack to a wide sRGB [`Color`].
    pub fn to_color(self) -> Color {
        let Components(red, green, blue) = self.components();
        Color::srgb(red, green, blue, self.alpha() as Component / 255.0)
    }

    /// Pack a wide color, converting it to sRGB first if needed. Out of range
    /// components are clamped.
    pub fn from_color(color: &Color) -> Self {
        let srgb = color.to_space(Space::Srgb);
        Self(0).with_components(srgb.components).with_alpha(to_u8(srgb.alpha))
    }

    fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00ff_ffff) | (alpha as u32) << 24)
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(value: Argb) -> Self {
        value.0
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Argb {
    type Err = Error;

    /// Parse a hex color.
    ///
    /// Supports `#RGB`, `#RRGGBB` and `#AARRGGBB`, with or without the leading
    /// hash. Colors without an alpha channel are opaque.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let digits = s
            .chars()
            .map(|c| c.to_digit(16).ok_or(Error::InvalidHexDigit(c)))
            .collect::<Result<Vec<_>>>()?;
        let value = digits.iter().fold(0u32, |value, &digit| value << 4 | digit);

        match digits.len() {
            3 => {
                let [r, g, b] = [digits[0], digits[1], digits[2]].map(|d| d as u8 * 17);
                Ok(Self::new(0xff, r, g, b))
            }
            6 => Ok(Self(value | 0xff00_0000)),
            8 => Ok(Self(value)),
            len => Err(Error::InvalidHexLength(len)),
        }
    }
}

/// A wide color packed into 64 bits.
///
/// For sRGB (color space id 0) the upper 32 bits hold an [`Argb`] and the
/// lower 32 bits are zero. For every other color space the layout is:
///
/// | bits   | content                    |
/// |--------|----------------------------|
/// | 63..48 | red, half float            |
/// | 47..32 | green, half float          |
/// | 31..16 | blue, half float           |
/// | 15..6  | alpha, 10-bit unsigned     |
/// | 5..0   | color space id             |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorLong(pub u64);

impl ColorLong {
    const SPACE_MASK: u64 = 0x3f;
    const ALPHA_AND_SPACE_MASK: u64 = 0xffff;

    /// The color space id stored in the low 6 bits.
    pub fn space_id(self) -> u8 {
        (self.0 & Self::SPACE_MASK) as u8
    }

    /// The color space of this color, if it is one that is supported.
    pub fn space(self) -> Option<Space> {
        Space::from_id(self.space_id())
    }

    /// Wrap an sRGB color.
    pub fn from_argb(argb: Argb) -> Self {
        Self((argb.0 as u64) << 32)
    }

    /// The upper 32 bits as an [`Argb`]. Only meaningful for sRGB colors.
    fn argb(self) -> Argb {
        Argb((self.0 >> 32) as u32)
    }

    /// The alpha component normalized to [0..1].
    pub fn alpha(self) -> Component {
        if self.space_id() == Space::Srgb.id() {
            self.argb().alpha() as Component / 255.0
        } else {
            ((self.0 >> 6) & 0x3ff) as Component / 1023.0
        }
    }

    /// The three color components and the space they are encoded in.
    pub(crate) fn components(self) -> Option<(Space, Components)> {
        let space = self.space()?;
        if space == Space::Srgb {
            return Some((space, self.argb().components()));
        }

        let half = |shift: u32| Component::from(f16::from_bits((self.0 >> shift) as u16).to_f32());
        Some((space, Components(half(48), half(32), half(16))))
    }

    /// Replace the three color components, keeping the alpha and color space
    /// bits as they are.
    pub(crate) fn with_components(self, components: Components) -> Self {
        if self.space_id() == Space::Srgb.id() {
            let argb = self.argb().with_components(components);
            return Self((argb.0 as u64) << 32 | (self.0 & 0xffff_ffff));
        }

        #[allow(clippy::unnecessary_cast)]
        let half = |value: Component| f16::from_f32(clip_unit(value) as f32).to_bits() as u64;
        let Components(red, green, blue) = components;
        Self(
            half(red) << 48
                | half(green) << 32
                | half(blue) << 16
                | (self.0 & Self::ALPHA_AND_SPACE_MASK),
        )
    }

    /// Unpack to a wide [`Color`].
    pub fn try_to_color(self) -> Result<Color> {
        let (space, Components(red, green, blue)) = self
            .components()
            .ok_or(Error::UnsupportedSpace(self.space_id()))?;
        Ok(Color::new(space, red, green, blue, self.alpha()))
    }

    /// Pack a wide color. Components are clamped to [0..1].
    pub fn from_color(color: &Color) -> Self {
        if color.space == Space::Srgb {
            return Self::from_argb(Argb::from_color(color));
        }

        let alpha = (clip_unit(color.alpha) * 1023.0).round() as u64;
        Self(alpha << 6 | color.space.id() as u64).with_components(color.components)
    }
}

impl From<Argb> for ColorLong {
    fn from(value: Argb) -> Self {
        Self::from_argb(value)
    }
}

impl From<u64> for ColorLong {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ColorLong> for u64 {
    fn from(value: ColorLong) -> Self {
        value.0
    }
}

impl From<&Color> for ColorLong {
    fn from(value: &Color) -> Self {
        Self::from_color(value)
    }
}

impl From<&Color> for Argb {
    fn from(value: &Color) -> Self {
        Self::from_color(value)
    }
}
