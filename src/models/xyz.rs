//! Model a color in the CIE-XYZ color space.

use crate::color::Component;

colourblind_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a D65 white point
    /// reference.
    pub struct XyzD65 {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color, the relative luminance.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

impl XyzD65 {
    /// The D65 white point.
    #[allow(clippy::excessive_precision)]
    pub const WHITE_POINT: XyzD65 = XyzD65 {
        x: 0.9504559270516716,
        y: 1.0,
        z: 1.0890577507598784,
    };
}

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> XyzD65;
}
