//! Models are structs that represent a color in a specified color space. They
//! are the type safe intermediate steps of a simulation:
//! linear RGB -> CIE-XYZ -> LMS and back.

mod lms;
mod rgb;
mod xyz;

pub use lms::Lms;
pub use rgb::LinearRgb;
pub use xyz::{ToXyz, XyzD65};
