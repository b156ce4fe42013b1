//! The simulation pipeline.
//!
//! A color is linearised, converted to CIE-XYZ with the primaries of its own
//! color space and from there to LMS cone responses. Dichromacy replaces the
//! response of the missing cone with a combination of the other two, after
//! Vienot, Brettel & Mollon (1999): the combination is fitted so that white
//! and one anchor primary (blue for the red-green deficiencies, red for
//! tritanopia) are unchanged. Monochromacy replaces the color with its
//! luminance. The anomalous forms interpolate between the original and the
//! fully deficient response by the severity. The result is converted back,
//! clamped and encoded.

use crate::{
    color::{Component, Components, Space},
    math::{transform, transform_3x3, Transform},
    models::{LinearRgb, Lms, ToXyz},
    sample::Sample,
    variant::{Cones, Variant},
};

/// Severity used for the anomalous variants unless configured otherwise.
pub const DEFAULT_SEVERITY: Component = 0.5;

// The projections below act on LMS responses. In the row vector order of
// `transform_3x3` each row holds what one input cone contributes to the
// L, M and S outputs.

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const PROTANOPIA: Transform = transform_3x3(
    0.0,                  0.0, 0.0,
    1.0511618872604565,   1.0, 0.0,
    -0.05116188726045646, 0.0, 1.0,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const DEUTERANOPIA: Transform = transform_3x3(
    1.0, 0.951328251261283,    0.0,
    0.0, 0.0,                  0.0,
    0.0, 0.048671748738716956, 1.0,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const TRITANOPIA: Transform = transform_3x3(
    1.0, 0.0, -0.8675806011376365,
    0.0, 1.0,  1.8675806011376366,
    0.0, 0.0,  0.0,
);

impl Cones {
    /// The LMS projection simulating the loss of a single cone type.
    fn projection(self) -> Option<Transform> {
        if self == Cones::LONG {
            Some(PROTANOPIA)
        } else if self == Cones::MEDIUM {
            Some(DEUTERANOPIA)
        } else if self == Cones::SHORT {
            Some(TRITANOPIA)
        } else {
            None
        }
    }
}

enum Deficiency {
    None,
    Dichromacy(Transform),
    Monochromacy,
}

impl Variant {
    fn deficiency(self) -> Deficiency {
        let cones = self.affected_cones();
        if cones.is_all() {
            Deficiency::Monochromacy
        } else {
            cones
                .projection()
                .map_or(Deficiency::None, Deficiency::Dichromacy)
        }
    }
}

/// Simulates one [`Variant`] at a configured severity.
///
/// ```rust
/// use colourblind::{Argb, Simulator, Variant};
///
/// let simulator = Simulator::new(Variant::Deuteranomaly).with_severity(0.8);
/// let red = simulator.transform(Argb(0xffff0000));
/// assert_eq!(red.alpha(), 0xff);
/// assert_ne!(red, Argb(0xffff0000));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Simulator {
    variant: Variant,
    severity: Component,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(Variant::Normal)
    }
}

impl From<Variant> for Simulator {
    fn from(variant: Variant) -> Self {
        Self::new(variant)
    }
}

impl Simulator {
    /// Create a simulator for `variant` with the [`DEFAULT_SEVERITY`].
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            severity: DEFAULT_SEVERITY,
        }
    }

    /// Set the severity of the anomalous variants, from 0 (normal vision) to
    /// 1 (the complete deficiency). Values are clamped into that range and
    /// NaN selects the default.
    pub fn with_severity(self, severity: Component) -> Self {
        let severity = if severity.is_nan() {
            DEFAULT_SEVERITY
        } else {
            severity.clamp(0.0, 1.0)
        };
        Self { severity, ..self }
    }

    /// The simulated variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The configured severity.
    pub fn severity(&self) -> Component {
        self.severity
    }

    /// How far the color is moved towards the deficient response.
    fn strength(&self) -> Component {
        match self.variant {
            Variant::Normal => 0.0,
            v if v.is_anomalous() => self.severity,
            _ => 1.0,
        }
    }

    /// Returns true if this simulator leaves every color unchanged.
    pub fn is_identity(&self) -> bool {
        self.strength() == 0.0
    }

    /// Simulate linear light components with the primaries of `space`. The
    /// result is not clamped.
    pub fn simulate_linear(&self, space: Space, rgb: &LinearRgb) -> LinearRgb {
        let strength = self.strength();

        match self.variant.deficiency() {
            Deficiency::None => *rgb,
            Deficiency::Dichromacy(projection) => {
                let lms = Lms::from(space.to_xyz(rgb)).to_components();
                let dichromat = transform(&projection, lms);
                let simulated = Lms::from(lms.lerp(&dichromat, strength));
                space.from_xyz(&simulated.to_xyz())
            }
            Deficiency::Monochromacy => {
                let luminance = space.to_xyz(rgb).y;
                let gray = Components(luminance, luminance, luminance);
                rgb.to_components().lerp(&gray, strength).into()
            }
        }
    }

    /// Simulate components encoded with the transfer function of `space`.
    /// Input and output are clamped to [0..1].
    pub fn simulate_components(&self, space: Space, components: Components) -> Components {
        let linear = space.to_linear_light(&components.clip());
        let simulated = LinearRgb::from(self.simulate_linear(space, &linear).to_components().clip());
        space.to_gamma_encoded(&simulated).clip()
    }

    /// Simulate how `sample` looks with the configured form of vision.
    pub fn transform<S: Sample>(&self, sample: S) -> S {
        sample.simulate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_channel_near, assert_component_eq, Argb, Color, ColorLong};

    const SAMPLES: [u32; 8] = [
        0xff000000, 0xffffffff, 0xffff0000, 0xff00ff00, 0xff0000ff, 0x80808080, 0x00123456,
        0x7fc08040,
    ];

    fn severities() -> impl Iterator<Item = Component> {
        (0..=10).map(|i| i as Component / 10.0)
    }

    #[test]
    fn white_and_anchors_are_fixed_points_of_the_projections() {
        let white = Lms::new(1.0, 1.0, 1.0).to_components();
        for projection in [PROTANOPIA, DEUTERANOPIA, TRITANOPIA] {
            let Components(l, m, s) = transform(&projection, white);
            assert_component_eq!(l, 1.0);
            assert_component_eq!(m, 1.0);
            assert_component_eq!(s, 1.0);
        }

        let blue = Lms::from(Space::SrgbLinear.to_xyz(&LinearRgb::new(0.0, 0.0, 1.0)));
        for projection in [PROTANOPIA, DEUTERANOPIA] {
            let Components(l, m, s) = transform(&projection, blue.to_components());
            assert_component_eq!(l, blue.long);
            assert_component_eq!(m, blue.medium);
            assert_component_eq!(s, blue.short);
        }

        let red = Lms::from(Space::SrgbLinear.to_xyz(&LinearRgb::new(1.0, 0.0, 0.0)));
        let Components(l, m, s) = transform(&TRITANOPIA, red.to_components());
        assert_component_eq!(l, red.long);
        assert_component_eq!(m, red.medium);
        assert_component_eq!(s, red.short);
    }

    #[test]
    fn projections_by_cone() {
        assert_eq!(Cones::LONG.projection(), Some(PROTANOPIA));
        assert_eq!(Cones::MEDIUM.projection(), Some(DEUTERANOPIA));
        assert_eq!(Cones::SHORT.projection(), Some(TRITANOPIA));
        assert_eq!(Cones::empty().projection(), None);
        assert_eq!((Cones::LONG | Cones::MEDIUM).projection(), None);
    }

    #[test]
    fn severity_configuration() {
        let simulator = Simulator::new(Variant::Protanomaly);
        assert_eq!(simulator.severity(), DEFAULT_SEVERITY);
        assert_eq!(simulator.with_severity(0.25).severity(), 0.25);
        assert_eq!(simulator.with_severity(-1.0).severity(), 0.0);
        assert_eq!(simulator.with_severity(7.0).severity(), 1.0);
        assert_eq!(simulator.with_severity(Component::NAN).severity(), DEFAULT_SEVERITY);
        assert_eq!(Simulator::default().variant(), Variant::Normal);
        assert_eq!(Simulator::from(Variant::Tritanopia).variant(), Variant::Tritanopia);
    }

    #[test]
    fn identity() {
        assert!(Simulator::new(Variant::Normal).is_identity());
        assert!(Simulator::new(Variant::Normal).with_severity(1.0).is_identity());
        assert!(Simulator::new(Variant::Tritanomaly).with_severity(0.0).is_identity());
        assert!(!Simulator::new(Variant::Tritanomaly).is_identity());
        assert!(!Simulator::new(Variant::Protanopia).with_severity(0.0).is_identity());
    }

    #[test]
    fn normal_is_bit_exact_identity() {
        for argb in SAMPLES {
            assert_eq!(Variant::Normal.transform(Argb(argb)), Argb(argb));
        }

        let long = ColorLong(0x1234_5678_9abc_def7);
        assert_eq!(Variant::Normal.transform(long), long);

        let color = Color::new(Space::DisplayP3, 1.5, -0.25, 0.3, 0.7);
        assert_eq!(Variant::Normal.transform(color), color);
    }

    #[test]
    fn alpha_is_preserved() {
        for variant in Variant::ALL {
            for argb in SAMPLES {
                let out = variant.transform(Argb(argb));
                assert_eq!(out.alpha(), Argb(argb).alpha(), "{variant}");
            }

            let long = ColorLong::from_color(&Color::new(Space::Bt2020, 0.9, 0.2, 0.4, 0.3));
            let out = variant.transform(long);
            assert_eq!(out.0 & 0xffff, long.0 & 0xffff, "{variant}");

            let color = Color::new(Space::AdobeRgb, 0.9, 0.2, 0.4, 0.123);
            assert_eq!(variant.transform(color).alpha, 0.123, "{variant}");
        }
    }

    #[test]
    fn outputs_stay_in_range() {
        for variant in Variant::ALL {
            let simulator = Simulator::new(variant);
            for space in Space::ALL {
                for c in [
                    Color::new(space, 0.0, 0.0, 0.0, 1.0),
                    Color::new(space, 1.0, 1.0, 1.0, 1.0),
                    Color::new(space, 1.0, 0.0, 0.0, 1.0),
                    Color::new(space, 0.0, 1.0, 1.0, 1.0),
                    Color::new(space, 0.2, 0.9, 0.1, 1.0),
                    Color::new(space, 2.0, -1.0, Component::NAN, 1.0),
                ] {
                    let out = simulator.transform(c);
                    if variant != Variant::Normal {
                        assert!(out.in_gamut(), "{variant} {space:?} {out:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn anomalous_severity_boundaries() {
        let pairs = [
            (Variant::Protanomaly, Variant::Protanopia),
            (Variant::Deuteranomaly, Variant::Deuteranopia),
            (Variant::Tritanomaly, Variant::Tritanopia),
            (Variant::Achromatomaly, Variant::Achromatopsia),
        ];

        for (anomalous, full) in pairs {
            let none = Simulator::new(anomalous).with_severity(0.0);
            let complete = Simulator::new(anomalous).with_severity(1.0);
            let dichromat = Simulator::new(full);

            for argb in SAMPLES {
                let argb = Argb(argb);
                assert_eq!(none.transform(argb), Variant::Normal.transform(argb));
                assert_eq!(complete.transform(argb), dichromat.transform(argb));
            }

            let color = Color::new(Space::DisplayP3, 0.8, 0.3, 0.6, 1.0);
            assert_eq!(none.transform(color), color);
            assert_eq!(complete.transform(color), dichromat.transform(color));
        }
    }

    #[test]
    fn dichromacy_ignores_severity() {
        let default = Simulator::new(Variant::Deuteranopia);
        for severity in severities() {
            let configured = default.with_severity(severity);
            assert_eq!(
                configured.transform(Argb(0xff3399cc)),
                default.transform(Argb(0xff3399cc))
            );
        }
    }

    #[test]
    fn achromatopsia_is_gray() {
        for argb in SAMPLES {
            let out = Variant::Achromatopsia.transform(Argb(argb));
            assert_eq!(out.red(), out.green());
            assert_eq!(out.green(), out.blue());
        }

        for space in Space::ALL {
            let out = Variant::Achromatopsia.transform(Color::new(space, 0.9, 0.3, 0.1, 1.0));
            assert_component_eq!(out.red(), out.green(), 1.0e-6);
            assert_component_eq!(out.green(), out.blue(), 1.0e-6);
        }
    }

    #[test]
    fn achromatopsia_uses_luminance() {
        // The relative luminance of sRGB red is 0.2126.
        let out = Variant::Achromatopsia.transform(Argb(0xffff0000));
        assert_channel_near!(out.red(), 127, 1);
    }

    #[test]
    fn gray_is_invariant() {
        for variant in Variant::ALL {
            for severity in severities() {
                let simulator = Simulator::new(variant).with_severity(severity);
                let out = simulator.transform(Argb(0xff808080));
                assert_eq!(out.alpha(), 0xff);
                assert_channel_near!(out.red(), 0x80, 2);
                assert_channel_near!(out.green(), 0x80, 2);
                assert_channel_near!(out.blue(), 0x80, 2);
            }
        }
    }

    #[test]
    fn black_and_white_are_invariant() {
        for variant in Variant::ALL {
            for argb in [Argb::BLACK, Argb::WHITE] {
                let out = variant.transform(argb);
                assert_channel_near!(out.red(), argb.red(), 1);
                assert_channel_near!(out.green(), argb.green(), 1);
                assert_channel_near!(out.blue(), argb.blue(), 1);
            }
        }
    }

    #[test]
    fn protanopia_darkens_and_yellows_red() {
        let red = Argb(0xffff0000);
        assert_eq!(Variant::Normal.transform(red), red);

        let out = Variant::Protanopia.transform(red);
        assert_ne!(out, red);
        assert_eq!(out.alpha(), 0xff);
        assert_channel_near!(out.red(), 115, 2);
        assert_channel_near!(out.green(), 115, 2);
        assert_channel_near!(out.blue(), 0, 1);
    }

    #[test]
    fn deuteranopia_yellows_red() {
        let out = Variant::Deuteranopia.transform(Argb(0xffff0000));
        assert_channel_near!(out.red(), 156, 2);
        assert_channel_near!(out.green(), 156, 2);
        assert_channel_near!(out.blue(), 0, 1);
    }

    #[test]
    fn tritanopia_keeps_red_and_shifts_blue() {
        let red = Variant::Tritanopia.transform(Argb(0xffff0000));
        assert_channel_near!(red.red(), 255, 1);
        assert_channel_near!(red.green(), 0, 1);
        assert_channel_near!(red.blue(), 0, 1);

        let blue = Variant::Tritanopia.transform(Argb(0xff0000ff));
        assert_channel_near!(blue.red(), 0, 1);
        assert_channel_near!(blue.green(), 100, 2);
        assert_channel_near!(blue.blue(), 100, 2);
    }

    #[test]
    fn protanomaly_lies_between() {
        let out = Variant::Protanomaly.transform(Argb(0xffff0000));
        assert_channel_near!(out.red(), 201, 2);
        assert_channel_near!(out.green(), 82, 2);
        assert_channel_near!(out.blue(), 0, 1);
    }

    #[test]
    fn wide_and_packed_agree() {
        for variant in Variant::ALL {
            let argb = Argb(0xff3399cc);
            let packed = variant.transform(argb);
            let wide = Argb::from_color(&variant.transform(argb.to_color()));
            assert_eq!(packed, wide, "{variant}");

            let long = variant.transform(ColorLong::from_argb(argb));
            assert_eq!(long, ColorLong::from_argb(packed), "{variant}");
        }
    }

    #[test]
    fn wide_color_longs_are_simulated_in_their_own_space() {
        let color = Color::new(Space::DisplayP3, 1.0, 0.0, 0.0, 1.0);
        let long = ColorLong::from_color(&color);
        let out = Variant::Protanopia.transform(long).try_to_color().unwrap();
        let expected = Variant::Protanopia.transform(color);

        assert_eq!(out.space, Space::DisplayP3);
        // Half floats carry about 11 bits of precision.
        assert_component_eq!(out.red(), expected.red(), 1.0e-3);
        assert_component_eq!(out.green(), expected.green(), 1.0e-3);
        assert_component_eq!(out.blue(), expected.blue(), 1.0e-3);
    }

    #[test]
    fn unsupported_color_longs_pass_through() {
        let long = ColorLong(0x3c00_0000_0000_ffc0 | 14);
        assert_eq!(Variant::Achromatopsia.transform(long), long);
    }

    #[test]
    fn every_rgb_color_long_space_is_simulated() {
        // Opaque red in extended sRGB.
        let red = ColorLong(0x3c00 << 48 | 0x3ff << 6 | 2);
        let out = Variant::Protanopia.transform(red);
        assert_ne!(out, red);
        assert_eq!(out.0 & 0xffff, red.0 & 0xffff);

        for space in Space::ALL {
            let long = ColorLong::from_color(&Color::new(space, 0.9, 0.2, 0.1, 1.0));

            let out = Variant::Protanopia.transform(long);
            assert_ne!(out, long, "{space:?}");
            assert_eq!(out.space(), Some(space));
            assert_eq!(out.alpha(), long.alpha());

            let gray = Variant::Achromatopsia.transform(long).try_to_color().unwrap();
            assert_eq!(gray.red(), gray.green(), "{space:?}");
            assert_eq!(gray.green(), gray.blue(), "{space:?}");
        }
    }
}
