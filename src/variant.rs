//! The forms of color vision deficiency that can be simulated.

use std::{fmt, str::FromStr};

use bitflags::bitflags;

use crate::{error::Error, sample::Sample, simulate::Simulator};

bitflags! {
    /// The cone types of the human retina.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Cones : u8 {
        /// Long wavelength, red sensitive cones.
        const LONG = 1 << 0;
        /// Medium wavelength, green sensitive cones.
        const MEDIUM = 1 << 1;
        /// Short wavelength, blue sensitive cones.
        const SHORT = 1 << 2;
    }
}

/// A form of color vision to simulate.
///
/// Variants ending in *-opia* are the complete loss of a cone type, variants
/// ending in *-omaly* the reduced sensitivity of one. Any selector that does
/// not name a variant resolves to [`Variant::Normal`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Variant {
    /// Normal vision.
    #[default]
    Normal = 0,
    /// Unable to perceive red light.
    Protanopia = 1,
    /// Reduced sensitivity to red light.
    Protanomaly = 2,
    /// Unable to perceive green light.
    Deuteranopia = 3,
    /// Reduced sensitivity to green light. This is the most common form.
    Deuteranomaly = 4,
    /// Unable to perceive blue light.
    Tritanopia = 5,
    /// Reduced sensitivity to blue light.
    Tritanomaly = 6,
    /// Monochrome vision. This is very rare.
    Achromatopsia = 7,
    /// Reduced sensitivity to all colours.
    Achromatomaly = 8,
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Variant; 9] = [
        Variant::Normal,
        Variant::Protanopia,
        Variant::Protanomaly,
        Variant::Deuteranopia,
        Variant::Deuteranomaly,
        Variant::Tritanopia,
        Variant::Tritanomaly,
        Variant::Achromatopsia,
        Variant::Achromatomaly,
    ];

    /// Look up a variant by its position in [`Variant::ALL`]. Positions out
    /// of range select [`Variant::Normal`].
    pub fn from_ordinal(ordinal: i32) -> Self {
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .unwrap_or_else(|| {
                tracing::debug!(ordinal, "unknown simulation variant, using normal vision");
                Variant::Normal
            })
    }

    /// Look up a variant by name like [`Variant::from_str`], but select
    /// [`Variant::Normal`] for anything unrecognised.
    pub fn from_name_or_normal(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: Error| {
            tracing::debug!(%err, "using normal vision");
            Variant::Normal
        })
    }

    /// Lower case name of the variant.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Normal => "normal",
            Variant::Protanopia => "protanopia",
            Variant::Protanomaly => "protanomaly",
            Variant::Deuteranopia => "deuteranopia",
            Variant::Deuteranomaly => "deuteranomaly",
            Variant::Tritanopia => "tritanopia",
            Variant::Tritanomaly => "tritanomaly",
            Variant::Achromatopsia => "achromatopsia",
            Variant::Achromatomaly => "achromatomaly",
        }
    }

    /// A short human readable description.
    pub fn description(self) -> &'static str {
        match self {
            Variant::Normal => "Normal vision.",
            Variant::Protanopia => "Unable to perceive red light.",
            Variant::Protanomaly => "Reduced sensitivity to red light.",
            Variant::Deuteranopia => "Unable to perceive green light.",
            Variant::Deuteranomaly => {
                "Reduced sensitivity to green light. This is the most common form."
            }
            Variant::Tritanopia => "Unable to perceive blue light.",
            Variant::Tritanomaly => "Reduced sensitivity to blue light.",
            Variant::Achromatopsia => "Monochrome vision. This is very rare.",
            Variant::Achromatomaly => "Reduced sensitivity to all colours.",
        }
    }

    /// The cone types whose response is lost or reduced.
    pub fn affected_cones(self) -> Cones {
        match self {
            Variant::Normal => Cones::empty(),
            Variant::Protanopia | Variant::Protanomaly => Cones::LONG,
            Variant::Deuteranopia | Variant::Deuteranomaly => Cones::MEDIUM,
            Variant::Tritanopia | Variant::Tritanomaly => Cones::SHORT,
            Variant::Achromatopsia | Variant::Achromatomaly => Cones::all(),
        }
    }

    /// Returns true for the reduced sensitivity forms, whose strength is
    /// controlled by a severity.
    pub fn is_anomalous(self) -> bool {
        matches!(
            self,
            Variant::Protanomaly
                | Variant::Deuteranomaly
                | Variant::Tritanomaly
                | Variant::Achromatomaly
        )
    }

    /// Simulate how `sample` looks with this form of vision, using the
    /// default severity.
    pub fn transform<S: Sample>(self, sample: S) -> S {
        Simulator::new(self).transform(sample)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    /// Parse a variant from its name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownVariant(s.to_string()))
    }
}
