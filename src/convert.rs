//! Conversion of a [`Color`] between the supported RGB color spaces. All of
//! them share the D65 white point, so CIE-XYZ D65 is used as the common base
//! without any chromatic adaptation.

use crate::{
    color::{Color, Space},
    models::ToXyz,
};

impl Space {
    fn has_srgb_primaries(self) -> bool {
        matches!(
            self,
            Space::Srgb
                | Space::SrgbLinear
                | Space::ExtendedSrgb
                | Space::LinearExtendedSrgb
                | Space::Bt709
        )
    }
}

impl Color {
    /// Convert this color from its current color space to the specified color
    /// space. Alpha is carried over unchanged.
    pub fn to_space(&self, space: Space) -> Self {
        if self.space == space {
            return *self;
        }

        // Spaces sharing primaries only need the transfer functions swapped.
        let linear = if self.space.has_srgb_primaries() && space.has_srgb_primaries() {
            self.space.to_linear_light(&self.components)
        } else {
            space.from_xyz(&self.to_xyz())
        };

        Color {
            components: space.to_gamma_encoded(&linear),
            alpha: self.alpha,
            space,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_component_eq;
    use crate::color::{Color, Component, Space};

    #[test]
    fn test_conversions() {
        use Space as S;

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        #[allow(clippy::type_complexity)]
        const TESTS: &[(Space, Component, Component, Component, Space, Component, Component, Component)] = &[
            (S::Srgb, 0.823529, 0.411765, 0.117647, S::Srgb, 0.823529, 0.411765, 0.117647),
            (S::Srgb, 0.823529, 0.411765, 0.117647, S::SrgbLinear, 0.644480, 0.141263, 0.012983),
            (S::Srgb, 0.823529, 0.411765, 0.117647, S::DisplayP3, 0.770569, 0.434015, 0.199849),
            (S::Srgb, 0.823529, 0.411765, 0.117647, S::AdobeRgb, 0.730405, 0.410688, 0.162005),
            (S::Srgb, 0.823529, 0.411765, 0.117647, S::Bt2020, 0.669266, 0.401900, 0.142716),
            (S::SrgbLinear, 0.644480, 0.141263, 0.012983, S::Srgb, 0.823529, 0.411765, 0.117647),
            (S::DisplayP3, 0.770569, 0.434015, 0.199849, S::Srgb, 0.823529, 0.411765, 0.117647),
            (S::AdobeRgb, 0.730405, 0.410688, 0.162005, S::Srgb, 0.823529, 0.411765, 0.117647),
            (S::Bt2020, 0.669266, 0.401900, 0.142716, S::Srgb, 0.823529, 0.411765, 0.117647),
        ];

        for (i, &(from_space, c0, c1, c2, to_space, t0, t1, t2)) in TESTS.iter().enumerate() {
            let color = Color::new(from_space, c0, c1, c2, 0.5);
            let converted = color.to_space(to_space);
            println!("{i}: {from_space:?} -> {to_space:?}");
            assert_eq!(converted.space, to_space);
            assert_eq!(converted.alpha, 0.5);
            assert_component_eq!(converted.components.0, t0, 1.0e-4);
            assert_component_eq!(converted.components.1, t1, 1.0e-4);
            assert_component_eq!(converted.components.2, t2, 1.0e-4);
        }
    }

    #[test]
    fn adapted_spaces_round_trip_through_srgb() {
        let color = Color::srgb(0.823529, 0.411765, 0.117647, 1.0);
        for space in Space::ALL {
            let back = color.to_space(space).to_space(Space::Srgb);
            assert_component_eq!(back.components.0, color.components.0, 1.0e-4);
            assert_component_eq!(back.components.1, color.components.1, 1.0e-4);
            assert_component_eq!(back.components.2, color.components.2, 1.0e-4);
        }

        let extended = color.to_space(Space::ExtendedSrgb);
        assert_component_eq!(extended.components.0, color.components.0);
        assert_component_eq!(extended.components.2, color.components.2);
    }

    #[test]
    fn bt709_shares_srgb_primaries() {
        let color = Color::new(Space::SrgbLinear, 0.2, 0.4, 0.6, 1.0);
        let back = color.to_space(Space::Bt709).to_space(Space::SrgbLinear);
        assert_component_eq!(back.components.0, 0.2);
        assert_component_eq!(back.components.1, 0.4);
        assert_component_eq!(back.components.2, 0.6);
    }
}
