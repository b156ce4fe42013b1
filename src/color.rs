//! A [`Color`] is a wide colour sample: three floating point channels, an
//! alpha channel and the [`Space`] the channels are encoded in.

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

use crate::math::lerp;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Interpolate each component towards `other`. A `t` of 0 returns these
    /// components and a `t` of 1 returns `other`, both exactly.
    pub fn lerp(&self, other: &Self, t: Component) -> Self {
        Self(
            lerp(self.0, other.0, t),
            lerp(self.1, other.1, t),
            lerp(self.2, other.2, t),
        )
    }

    /// Clamp each component to [0..1]. NaN components become 0.
    pub fn clip(&self) -> Self {
        self.map(clip_unit)
    }
}

/// Clamp a single value to [0..1], mapping NaN to 0.
pub(crate) fn clip_unit(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// RGB color spaces a [`Color`] can be specified in.
///
/// The discriminants are the identifiers Android uses for its named color
/// spaces, which is also what gets stored in the low 6 bits of a
/// [`crate::ColorLong`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// The sRGB color space.
    Srgb = 0,
    /// The sRGB color space with no gamma encoding.
    SrgbLinear = 1,
    /// sRGB with components allowed outside of [0..1].
    ExtendedSrgb = 2,
    /// Linear sRGB with components allowed outside of [0..1].
    LinearExtendedSrgb = 3,
    /// ITU-R BT.709, sRGB primaries with the BT.709 transfer function.
    Bt709 = 4,
    /// ITU-R BT.2020.
    Bt2020 = 5,
    /// DCI-P3 as used in digital cinema, with the DCI white point and a pure
    /// 2.6 gamma.
    DciP3 = 6,
    /// Display P3.
    DisplayP3 = 7,
    /// The original NTSC primaries from 1953, with illuminant C as white.
    Ntsc1953 = 8,
    /// SMPTE RP 145, better known as SMPTE-C.
    SmpteC = 9,
    /// Adobe RGB (1998).
    AdobeRgb = 10,
    /// ROMM RGB, better known as ProPhoto RGB. Uses a D50 white point.
    ProPhotoRgb = 11,
    /// ACES2065-1, linear with the AP0 primaries.
    Aces = 12,
    /// ACEScg, linear with the AP1 primaries.
    AcesCg = 13,
    /// BT.2020 primaries with the hybrid log-gamma transfer function.
    Bt2020Hlg = 16,
    /// BT.2020 primaries with the perceptual quantizer transfer function.
    Bt2020Pq = 17,
}

impl Space {
    /// All supported color spaces.
    pub const ALL: [Space; 16] = [
        Space::Srgb,
        Space::SrgbLinear,
        Space::ExtendedSrgb,
        Space::LinearExtendedSrgb,
        Space::Bt709,
        Space::Bt2020,
        Space::DciP3,
        Space::DisplayP3,
        Space::Ntsc1953,
        Space::SmpteC,
        Space::AdobeRgb,
        Space::ProPhotoRgb,
        Space::Aces,
        Space::AcesCg,
        Space::Bt2020Hlg,
        Space::Bt2020Pq,
    ];

    /// The numeric identifier of the color space.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look up a color space by its numeric identifier.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|space| space.id() == id)
    }

    /// Returns true if the components of this space are stored without a
    /// transfer function applied.
    pub fn is_linear(self) -> bool {
        matches!(
            self,
            Space::SrgbLinear | Space::LinearExtendedSrgb | Space::Aces | Space::AcesCg
        )
    }
}

impl TryFrom<u8> for Space {
    type Error = crate::Error;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or(crate::Error::UnsupportedSpace(id))
    }
}

/// A wide color sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// The red, green and blue components, encoded with the transfer function
    /// of `space`.
    pub components: Components,
    /// The alpha component of the color. Never touched by a simulation.
    pub alpha: Component,
    /// The color space in which the components are set.
    pub space: Space,
}

impl Color {
    /// Create a new [`Color`] in the given color space.
    /// ```rust
    /// use colourblind::{Color, Space};
    /// let c = Color::new(Space::DisplayP3, 1.0, 0.5, 0.0, 1.0);
    /// assert_eq!(c.red(), 1.0);
    /// ```
    pub fn new(
        space: Space,
        red: Component,
        green: Component,
        blue: Component,
        alpha: Component,
    ) -> Self {
        Self {
            components: Components(red, green, blue),
            alpha,
            space,
        }
    }

    /// Create a new [`Color`] in the sRGB color space.
    pub fn srgb(red: Component, green: Component, blue: Component, alpha: Component) -> Self {
        Self::new(Space::Srgb, red, green, blue, alpha)
    }

    /// Return the red component of the color.
    pub fn red(&self) -> Component {
        self.components.0
    }

    /// Return the green component of the color.
    pub fn green(&self) -> Component {
        self.components.1
    }

    /// Return the blue component of the color.
    pub fn blue(&self) -> Component {
        self.components.2
    }

    /// Return a color with each of the components clipped (clamped to [0..1]).
    /// NOTE: This is a lossy operation.
    pub fn clip(&self) -> Self {
        Self {
            components: self.components.clip(),
            ..*self
        }
    }

    /// Returns true if all the components are inside [0..1].
    pub fn in_gamut(&self) -> bool {
        let Components(r, g, b) = self.components;
        [r, g, b].iter().all(|v| (0.0..=1.0).contains(v))
    }
}
