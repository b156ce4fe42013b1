//! Model a color by the response of the three cone types of the human eye.

use crate::{
    color::Component,
    math::{transform, transform_3x3, Transform},
    models::xyz::{ToXyz, XyzD65},
};

colourblind_macros::gen_model! {
    /// A color in the LMS cone response space.
    ///
    /// This is the Hunt-Pointer-Estevez space with each row scaled so that
    /// the D65 white point excites every cone type with a response of 1.
    pub struct Lms {
        /// Response of the long wavelength (red) cones.
        pub long: Component,
        /// Response of the medium wavelength (green) cones.
        pub medium: Component,
        /// Response of the short wavelength (blue) cones.
        pub short: Component,
    }
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const FROM_XYZ: Transform = transform_3x3(
     0.4002385097502296,  -0.2262996010523751,  0.0,
     0.7075973653289589,   1.165317945640096,   0.0,
    -0.08080969911282246,  0.04569991943479249, 0.9182249511582472,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const TO_XYZ: Transform = transform_3x3(
     1.859943312750899,   0.36119278110349823,     0.0,
    -1.1293836095872,     0.6388135894589894,      0.0,
     0.21989622388797253, -0.0000063705624877742606, 1.0890577507598784,
);

impl From<XyzD65> for Lms {
    fn from(value: XyzD65) -> Self {
        transform(&FROM_XYZ, value.to_components()).into()
    }
}

impl ToXyz for Lms {
    fn to_xyz(&self) -> XyzD65 {
        transform(&TO_XYZ, self.to_components()).into()
    }
}
