//! Model a color in one of the supported RGB color spaces, with the transfer
//! functions and primaries of each.

use crate::{
    color::{Color, Component, Components, Space},
    math::{transform, transform_3x3, Transform},
    models::xyz::{ToXyz, XyzD65},
};

colourblind_macros::gen_model! {
    /// Linear light RGB components. Which primaries they refer to is decided
    /// by the [`Space`] they are used with.
    pub struct LinearRgb {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

mod encoding {
    use crate::color::Components;

    /// The conversion to and from gamma encoded components.
    pub trait HasGammaEncoding {
        /// Convert the components from linear light to gamma encoded.
        fn to_gamma_encoded(from: &Components) -> Components;

        /// Convert the components from gamma encoded to linear light.
        fn to_linear_light(from: &Components) -> Components;
    }

    /// Conversion of linear light components to and from CIE-XYZ.
    pub trait HasPrimaries {
        const TO_XYZ: crate::math::Transform;
        const FROM_XYZ: crate::math::Transform;
    }
}

use encoding::{HasGammaEncoding, HasPrimaries};

mod space {
    /// Tag for the sRGB primaries and transfer function.
    pub struct Srgb;

    /// Tag for the BT.709 transfer function.
    pub struct Bt709;

    /// Tag for the BT.2020 primaries and transfer function.
    pub struct Bt2020;

    /// Tag for the Display P3 primaries.
    pub struct DisplayP3;

    /// Tag for the Adobe RGB primaries and transfer function.
    pub struct AdobeRgb;

    /// Tag for the DCI-P3 primaries and transfer function.
    pub struct DciP3;

    /// Tag for the NTSC 1953 primaries.
    pub struct Ntsc1953;

    /// Tag for the SMPTE-C primaries.
    pub struct SmpteC;

    /// Tag for the ProPhoto RGB primaries and transfer function.
    pub struct ProPhotoRgb;

    /// Tag for the ACES AP0 primaries.
    pub struct Aces;

    /// Tag for the ACES AP1 primaries.
    pub struct AcesCg;

    /// Tag for the hybrid log-gamma transfer function.
    pub struct Hlg;

    /// Tag for the SMPTE ST 2084 perceptual quantizer transfer function.
    pub struct Pq;
}

impl HasGammaEncoding for space::Srgb {
    fn to_gamma_encoded(from: &Components) -> Components {
        from.map(|value| {
            let abs = value.abs();

            if abs > 0.0031308 {
                value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
            } else {
                12.92 * value
            }
        })
    }

    fn to_linear_light(from: &Components) -> Components {
        from.map(|value| {
            let abs = value.abs();

            if abs < 0.04045 {
                value / 12.92
            } else {
                value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
            }
        })
    }
}

impl HasPrimaries for space::Srgb {
    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const TO_XYZ: Transform = transform_3x3(
        0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
        0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
        0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
    );

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const FROM_XYZ: Transform = transform_3x3(
         3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
        -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
        -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
    );
}

impl space::Bt2020 {
    #[allow(clippy::excessive_precision)]
    const ALPHA: Component = 1.09929682680944;
    #[allow(clippy::excessive_precision)]
    const BETA: Component = 0.018053968510807;
}

impl HasGammaEncoding for space::Bt2020 {
    fn to_gamma_encoded(from: &Components) -> Components {
        from.map(|v| {
            let abs = v.abs();

            if abs > Self::BETA {
                v.signum() * (Self::ALPHA * abs.powf(0.45) - (Self::ALPHA - 1.0))
            } else {
                4.5 * v
            }
        })
    }

    fn to_linear_light(from: &Components) -> Components {
        from.map(|v| {
            let abs = v.abs();

            if abs < Self::BETA * 4.5 {
                v / 4.5
            } else {
                v.signum() * ((abs + Self::ALPHA - 1.0) / Self::ALPHA).powf(1.0 / 0.45)
            }
        })
    }
}

impl HasPrimaries for space::Bt2020 {
    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const TO_XYZ: Transform = transform_3x3(
        0.6369580483012913,  0.26270021201126703,  0.0,
        0.14461690358620838, 0.677998071518871,    0.028072693049087508,
        0.16888097516417205, 0.059301716469861945, 1.0609850577107909,
    );

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const FROM_XYZ: Transform = transform_3x3(
         1.7166511879712676, -0.666684351832489,    0.017639857445310915,
        -0.3556707837763924,  1.616481236634939,   -0.042770613257808655,
        -0.2533662813736598,  0.01576854581391113,  0.942103121235474,
    );
}

// BT.709 shares its transfer function with BT.2020 and its primaries with
// sRGB.
impl HasGammaEncoding for space::Bt709 {
    fn to_gamma_encoded(from: &Components) -> Components {
        space::Bt2020::to_gamma_encoded(from)
    }

    fn to_linear_light(from: &Components) -> Components {
        space::Bt2020::to_linear_light(from)
    }
}

impl HasGammaEncoding for space::DisplayP3 {
    fn to_gamma_encoded(from: &Components) -> Components {
        space::Srgb::to_gamma_encoded(from)
    }

    fn to_linear_light(from: &Components) -> Components {
        space::Srgb::to_linear_light(from)
    }
}

impl HasPrimaries for space::DisplayP3 {
    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const TO_XYZ: Transform = transform_3x3(
        0.48657094864821626, 0.22897456406974884, 0.0,
        0.26566769316909294, 0.6917385218365062,  0.045113381858902575,
        0.1982172852343625,  0.079286914093745,   1.0439443689009757,
    );

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const FROM_XYZ: Transform = transform_3x3(
         2.4934969119414245,  -0.829488969561575,    0.035845830243784335,
        -0.9313836179191236,   1.7626640603183468,  -0.07617238926804171,
        -0.40271078445071684,  0.02362468584194359,  0.9568845240076873,
    );
}

impl HasGammaEncoding for space::AdobeRgb {
    fn to_gamma_encoded(from: &Components) -> Components {
        from.map(|v| v.signum() * v.abs().powf(256.0 / 563.0))
    }

    fn to_linear_light(from: &Components) -> Components {
        from.map(|v| v.signum() * v.abs().powf(563.0 / 256.0))
    }
}

impl HasPrimaries for space::AdobeRgb {
    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const TO_XYZ: Transform = transform_3x3(
        0.5766690429101308,  0.29734497525053616, 0.027031361386412378,
        0.18555823790654627, 0.627363566255466,   0.07068885253582714,
        0.18822864623499472, 0.07529145849399789, 0.9913375368376389,
    );

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const FROM_XYZ: Transform = transform_3x3(
         2.041587903810746,  -0.9692436362808798,   0.013444280632031024,
        -0.5650069742788596,  1.8759675015077206,  -0.11836239223101824,
        -0.3447313507783295,  0.04155505740717561,  1.0151749943912054,
    );
}

// Spaces with a white point other than D65 have their matrices Bradford
// adapted, so every space below converts to and from XYZ D65.

impl HasGammaEncoding for space::DciP3 {
    fn to_gamma_encoded(from: &Components) -> Components {
        from.map(|v| v.signum() * v.abs().powf(1.0 / 2.6))
    }

    fn to_linear_light(from: &Components) -> Components {
        from.map(|v| v.signum() * v.abs().powf(2.6))
    }
}

impl HasPrimaries for space::DciP3 {
    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const TO_XYZ: Transform = transform_3x3(
        0.45925165499198684, 0.21515051246430855, 0.0002720055437312384,
        0.2957917875057225,  0.7091336366498756,  0.04693951408858213,
        0.19541248455396215, 0.07571585088581566, 1.0418462311275654,
    );

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const FROM_XYZ: Transform = transform_3x3(
         2.6902259116255953, -0.8200821842734923,   0.0362457546540047,
        -1.0940019373661398,  1.75048090829206,    -0.07858083680558872,
        -0.4250823476747516,  0.026601954212205715, 0.9587469936609861,
    );
}

impl HasPrimaries for space::Ntsc1953 {
    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const TO_XYZ: Transform = transform_3x3(
        0.5989882369438995,  0.2960980238605419,  -0.00014058163411941933,
        0.16676361429603215, 0.5932937229663823,   0.06399977854349491,
        0.18470407581173998, 0.11060825317307575, 1.025198553850503,
    );

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const FROM_XYZ: Transform = transform_3x3(
         1.920770853324731,  -0.9699461760588701,   0.060813942175437626,
        -0.5084805417661106,  1.9621243965572464,  -0.12255870768449592,
        -0.2911943834596509, -0.03694322415217763,  0.9776871200389052,
    );
}

impl HasPrimaries for space::SmpteC {
    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const TO_XYZ: Transform = transform_3x3(
        0.3935209036593898,  0.21237636070506752, 0.018739090650447116,
        0.36525807671760363, 0.701059856925723,   0.11193392673603979,
        0.1916769466746783,  0.08656378236920957, 0.9583847333733915,
    );

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const FROM_XYZ: Transform = transform_3x3(
         3.506003282724663,  -1.069047559853815,    0.05630659173412772,
        -1.7397907263028325,  1.9777788827287868,  -0.19697565482077187,
        -0.5440582683627413,  0.035171419337195094, 1.0499523282187337,
    );
}

impl HasGammaEncoding for space::ProPhotoRgb {
    fn to_gamma_encoded(from: &Components) -> Components {
        const E: Component = 1.0 / 512.0;

        from.map(|v| {
            let abs = v.abs();

            if abs >= E {
                v.signum() * abs.powf(1.0 / 1.8)
            } else {
                16.0 * v
            }
        })
    }

    fn to_linear_light(from: &Components) -> Components {
        const E: Component = 16.0 / 512.0;

        from.map(|v| {
            let abs = v.abs();

            if abs <= E {
                v / 16.0
            } else {
                v.signum() * abs.powf(1.8)
            }
        })
    }
}

impl HasPrimaries for space::ProPhotoRgb {
    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const TO_XYZ: Transform = transform_3x3(
        0.7555607976103882,  0.26831907701344404,  0.003913750568018408,
        0.11276679422188993, 0.7151304150834937,  -0.01293165034372892,
        0.0821283352193933,  0.016550507903062145, 1.098075650535589,
    );

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const FROM_XYZ: Transform = transform_3x3(
         1.4032808030276016,  -0.5262559825078383, -0.011199091238410926,
        -0.22311628056624674,  1.481638013635868,   0.018243958135621293,
        -0.10159266201628721,  0.01702857729277293, 0.9112467027731834,
    );
}

impl HasPrimaries for space::Aces {
    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const TO_XYZ: Transform = transform_3x3(
         0.938279849277257,    0.33736889078783755,  0.0011739508496858607,
        -0.004451445812360904, 0.729521566690265,   -0.003710706402052534,
         0.016627523586775616, -0.0668904574781025,  1.0915945063122454,
    );

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const FROM_XYZ: Transform = transform_3x3(
         1.0634954914941996,   -0.4920741279238918, -0.0028164616392534984,
         0.006408910197117987,  1.3682234074733284,  0.004644171056800669,
        -0.01580678661760545,   0.09133708831447356, 0.9164185745936563,
    );
}

impl HasPrimaries for space::AcesCg {
    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const TO_XYZ: Transform = transform_3x3(
        0.6522375418862886,  0.2676721801253368,  -0.005381815766387653,
        0.12823613599971256, 0.6743399888015509,   0.0013690602090958332,
        0.16998224916567062, 0.05798783107311247,  1.0930705063171708,
    );

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const FROM_XYZ: Transform = transform_3x3(
         1.6605853264911827,  -0.6599260632241543,  0.009002569137834126,
        -0.31529556082587057,  1.6083914695660546, -0.003566876390337308,
        -0.2415093276083768,   0.017298594705445477, 0.9136433127631036,
    );
}

impl space::Hlg {
    #[allow(clippy::excessive_precision)]
    const A: Component = 0.17883277;
    #[allow(clippy::excessive_precision)]
    const B: Component = 0.28466892;
    #[allow(clippy::excessive_precision)]
    const C: Component = 0.559910729529562;
}

// Scene referred, so linear light 1.0 is the nominal peak.
impl HasGammaEncoding for space::Hlg {
    fn to_gamma_encoded(from: &Components) -> Components {
        from.map(|v| {
            let abs = v.abs();

            if abs <= 1.0 / 12.0 {
                v.signum() * (3.0 * abs).sqrt()
            } else {
                v.signum() * (Self::A * (12.0 * abs - Self::B).ln() + Self::C)
            }
        })
    }

    fn to_linear_light(from: &Components) -> Components {
        from.map(|v| {
            let abs = v.abs();

            if abs <= 0.5 {
                v.signum() * abs * abs / 3.0
            } else {
                v.signum() * (((abs - Self::C) / Self::A).exp() + Self::B) / 12.0
            }
        })
    }
}

impl space::Pq {
    const M1: Component = 2610.0 / 16384.0;
    const M2: Component = 2523.0 / 4096.0 * 128.0;
    const C1: Component = 3424.0 / 4096.0;
    const C2: Component = 2413.0 / 4096.0 * 32.0;
    const C3: Component = 2392.0 / 4096.0 * 32.0;
}

// Linear light 1.0 is 10000 cd/m2.
impl HasGammaEncoding for space::Pq {
    fn to_gamma_encoded(from: &Components) -> Components {
        from.map(|v| {
            let y = v.abs().powf(Self::M1);
            v.signum() * ((Self::C1 + Self::C2 * y) / (1.0 + Self::C3 * y)).powf(Self::M2)
        })
    }

    fn to_linear_light(from: &Components) -> Components {
        from.map(|v| {
            let e = v.abs().powf(1.0 / Self::M2);
            let y = (e - Self::C1).max(0.0) / (Self::C2 - Self::C3 * e);
            v.signum() * y.powf(1.0 / Self::M1)
        })
    }
}

impl Space {
    /// Convert components encoded in this space to linear light.
    pub fn to_linear_light(self, from: &Components) -> LinearRgb {
        use Space as S;

        match self {
            S::Srgb | S::ExtendedSrgb => space::Srgb::to_linear_light(from),
            S::SrgbLinear | S::LinearExtendedSrgb | S::Aces | S::AcesCg => *from,
            S::Bt709 | S::Ntsc1953 | S::SmpteC => space::Bt709::to_linear_light(from),
            S::Bt2020 => space::Bt2020::to_linear_light(from),
            S::DciP3 => space::DciP3::to_linear_light(from),
            S::DisplayP3 => space::DisplayP3::to_linear_light(from),
            S::AdobeRgb => space::AdobeRgb::to_linear_light(from),
            S::ProPhotoRgb => space::ProPhotoRgb::to_linear_light(from),
            S::Bt2020Hlg => space::Hlg::to_linear_light(from),
            S::Bt2020Pq => space::Pq::to_linear_light(from),
        }
        .into()
    }

    /// Apply the transfer function of this space to linear light components.
    pub fn to_gamma_encoded(self, from: &LinearRgb) -> Components {
        use Space as S;

        let from = from.to_components();
        match self {
            S::Srgb | S::ExtendedSrgb => space::Srgb::to_gamma_encoded(&from),
            S::SrgbLinear | S::LinearExtendedSrgb | S::Aces | S::AcesCg => from,
            S::Bt709 | S::Ntsc1953 | S::SmpteC => space::Bt709::to_gamma_encoded(&from),
            S::Bt2020 => space::Bt2020::to_gamma_encoded(&from),
            S::DciP3 => space::DciP3::to_gamma_encoded(&from),
            S::DisplayP3 => space::DisplayP3::to_gamma_encoded(&from),
            S::AdobeRgb => space::AdobeRgb::to_gamma_encoded(&from),
            S::ProPhotoRgb => space::ProPhotoRgb::to_gamma_encoded(&from),
            S::Bt2020Hlg => space::Hlg::to_gamma_encoded(&from),
            S::Bt2020Pq => space::Pq::to_gamma_encoded(&from),
        }
    }

    fn primaries(self) -> (Transform, Transform) {
        use Space as S;

        fn of<P: HasPrimaries>() -> (Transform, Transform) {
            (P::TO_XYZ, P::FROM_XYZ)
        }

        match self {
            S::Srgb | S::SrgbLinear | S::ExtendedSrgb | S::LinearExtendedSrgb | S::Bt709 => {
                of::<space::Srgb>()
            }
            S::Bt2020 | S::Bt2020Hlg | S::Bt2020Pq => of::<space::Bt2020>(),
            S::DciP3 => of::<space::DciP3>(),
            S::DisplayP3 => of::<space::DisplayP3>(),
            S::Ntsc1953 => of::<space::Ntsc1953>(),
            S::SmpteC => of::<space::SmpteC>(),
            S::AdobeRgb => of::<space::AdobeRgb>(),
            S::ProPhotoRgb => of::<space::ProPhotoRgb>(),
            S::Aces => of::<space::Aces>(),
            S::AcesCg => of::<space::AcesCg>(),
        }
    }

    /// Convert linear light components with the primaries of this space to
    /// CIE-XYZ.
    pub fn to_xyz(self, from: &LinearRgb) -> XyzD65 {
        let (to_xyz, _) = self.primaries();
        transform(&to_xyz, from.to_components()).into()
    }

    /// Convert CIE-XYZ to linear light components with the primaries of this
    /// space.
    pub fn from_xyz(self, from: &XyzD65) -> LinearRgb {
        let (_, from_xyz) = self.primaries();
        transform(&from_xyz, from.to_components()).into()
    }
}

impl ToXyz for Color {
    fn to_xyz(&self) -> XyzD65 {
        self.space
            .to_xyz(&self.space.to_linear_light(&self.components))
    }
}
