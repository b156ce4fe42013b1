//! colourblind simulates how colors are seen with the common forms of color
//! vision deficiency.
//!
//! A simulation is selected with a [`Variant`] and optionally configured with
//! a severity through a [`Simulator`]. It can be applied to packed 8-bit
//! [`Argb`] colors, packed wide [`ColorLong`] colors and floating point
//! [`Color`]s in any of the supported [`Space`]s. Alpha always passes through
//! unchanged.
//!
//! ```rust
//! use colourblind::{Argb, Simulator, Variant};
//!
//! let red = Argb(0xffff0000);
//! assert_eq!(Variant::Normal.transform(red), red);
//!
//! let seen = Variant::Protanopia.transform(red);
//! assert_eq!(seen.alpha(), 0xff);
//! assert_eq!(seen.red(), seen.green());
//!
//! let mut pixels = vec![0xffff0000, 0x80808080];
//! Simulator::new(Variant::Deuteranomaly)
//!     .with_severity(0.3)
//!     .transform_argb_slice(&mut pixels);
//! ```

#![deny(missing_docs)]

mod buffer;
mod color;
mod convert;
mod error;
mod math;
mod models;
mod packed;
mod sample;
mod simulate;
mod variant;


pub use color::{Color, Component, Components, Space};
pub use error::{Error, Result};
pub use models::{LinearRgb, Lms, ToXyz, XyzD65};
pub use packed::{Argb, ColorLong};
pub use sample::{transform, Sample};
pub use simulate::{Simulator, DEFAULT_SEVERITY};
pub use variant::{Cones, Variant};
