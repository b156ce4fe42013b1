//! The color representations a simulation can be applied to.

use crate::{
    color::{Color, Space},
    packed::{Argb, ColorLong},
    simulate::Simulator,
    variant::Variant,
};

/// A color sample that can be passed through a [`Simulator`].
///
/// Implementations only ever touch the color channels. Alpha, and any other
/// bits that are not a color channel, are returned exactly as they came in.
pub trait Sample: Copy {
    /// Return the sample as it would be seen with the vision of `simulator`.
    fn simulate(self, simulator: &Simulator) -> Self;
}

impl Sample for Argb {
    fn simulate(self, simulator: &Simulator) -> Self {
        if simulator.is_identity() {
            return self;
        }

        let components = simulator.simulate_components(Space::Srgb, self.components());
        self.with_components(components)
    }
}

impl Sample for ColorLong {
    fn simulate(self, simulator: &Simulator) -> Self {
        if simulator.is_identity() {
            return self;
        }

        match self.components() {
            Some((space, components)) => {
                self.with_components(simulator.simulate_components(space, components))
            }
            None => {
                tracing::trace!(
                    space_id = self.space_id(),
                    "color space is not an RGB space, leaving color unchanged"
                );
                self
            }
        }
    }
}

impl Sample for Color {
    fn simulate(self, simulator: &Simulator) -> Self {
        if simulator.is_identity() {
            return self;
        }

        Color {
            components: simulator.simulate_components(self.space, self.components),
            ..self
        }
    }
}

/// Simulate how `sample` looks with the vision described by `variant`, at the
/// default severity.
///
/// ```rust
/// use colourblind::{transform, Argb, Variant};
///
/// let gray = Argb(0xff808080);
/// assert_eq!(transform(Variant::Normal, gray), gray);
/// assert_eq!(transform(Variant::Achromatopsia, gray).alpha(), 0xff);
/// ```
pub fn transform<S: Sample>(variant: Variant, sample: S) -> S {
    variant.transform(sample)
}
