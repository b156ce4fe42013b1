//! Simulation of whole pixel buffers, spread over the rayon thread pool.

use rayon::prelude::*;
use tracing::debug_span;

use crate::{packed::Argb, sample::Sample, simulate::Simulator};

impl Simulator {
    /// Simulate every sample in `samples` in place.
    pub fn transform_slice<S: Sample + Send>(&self, samples: &mut [S]) {
        if self.is_identity() {
            return;
        }

        let _span = debug_span!(
            "transform_slice",
            variant = %self.variant(),
            severity = self.severity(),
            pixels = samples.len(),
        )
        .entered();

        samples
            .par_iter_mut()
            .for_each(|sample| *sample = self.transform(*sample));
    }

    /// Simulate a buffer of `0xAARRGGBB` packed pixels in place.
    pub fn transform_argb_slice(&self, pixels: &mut [u32]) {
        if self.is_identity() {
            return;
        }

        let _span = debug_span!(
            "transform_argb_slice",
            variant = %self.variant(),
            severity = self.severity(),
            pixels = pixels.len(),
        )
        .entered();

        pixels
            .par_iter_mut()
            .for_each(|pixel| *pixel = self.transform(Argb(*pixel)).0);
    }

    /// Simulate a tightly packed RGBA8 buffer in place. The alpha bytes, and
    /// any trailing bytes that do not make up a whole pixel, are not touched.
    pub fn transform_rgba8(&self, bytes: &mut [u8]) {
        if self.is_identity() {
            return;
        }

        let _span = debug_span!(
            "transform_rgba8",
            variant = %self.variant(),
            severity = self.severity(),
            pixels = bytes.len() / 4,
        )
        .entered();

        bytes.par_chunks_exact_mut(4).for_each(|pixel| {
            let out = self.transform(Argb::new(pixel[3], pixel[0], pixel[1], pixel[2]));
            pixel[0] = out.red();
            pixel[1] = out.green();
            pixel[2] = out.blue();
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::{Argb, Color, ColorLong, Simulator, Space, Variant};

    #[test]
    fn slices_match_single_samples() {
        let simulator = Simulator::new(Variant::Deuteranomaly).with_severity(0.7);
        let input = (0..1024u32)
            .map(|i| i.wrapping_mul(0x9e37_79b9))
            .collect::<Vec<_>>();

        let mut argb = input.clone();
        simulator.transform_argb_slice(&mut argb);

        let mut samples = input.iter().copied().map(Argb).collect::<Vec<_>>();
        simulator.transform_slice(&mut samples);

        for ((&original, &packed), sample) in input.iter().zip(&argb).zip(&samples) {
            let expected = simulator.transform(Argb(original));
            assert_eq!(Argb(packed), expected);
            assert_eq!(*sample, expected);
        }
    }

    #[test]
    fn wide_slices() {
        let simulator = Simulator::new(Variant::Tritanopia);
        let mut colors = Space::ALL
            .into_iter()
            .map(|space| Color::new(space, 0.2, 0.5, 0.9, 0.25))
            .collect::<Vec<_>>();
        let expected = colors
            .iter()
            .map(|&c| simulator.transform(c))
            .collect::<Vec<_>>();

        simulator.transform_slice(&mut colors);
        assert_eq!(colors, expected);

        let mut longs = vec![ColorLong::from_argb(Argb(0x80ff0000)), ColorLong(0x3c00 << 48 | 15)];
        let expected = longs
            .iter()
            .map(|&c| simulator.transform(c))
            .collect::<Vec<_>>();
        simulator.transform_slice(&mut longs);
        assert_eq!(longs, expected);
    }

    #[test]
    fn rgba8_keeps_alpha_and_trailing_bytes() {
        let simulator = Simulator::new(Variant::Protanopia);
        let mut bytes = vec![255, 0, 0, 17, 128, 128, 128, 200, 1, 2];
        simulator.transform_rgba8(&mut bytes);

        let red = simulator.transform(Argb(0x11ff0000));
        assert_eq!(&bytes[0..4], &[red.red(), red.green(), red.blue(), 17]);
        assert_ne!(&bytes[0..3], &[255, 0, 0]);
        assert_eq!(bytes[7], 200);
        assert_eq!(&bytes[8..], &[1, 2]);
    }

    #[test]
    fn normal_leaves_buffers_alone() {
        let simulator = Simulator::new(Variant::Normal);
        let mut bytes = vec![1, 2, 3, 4, 5, 6, 7, 8];
        simulator.transform_rgba8(&mut bytes);
        assert_eq!(bytes, [1, 2, 3, 4, 5, 6, 7, 8]);

        let mut pixels = vec![0xdead_beef, 0x0123_4567];
        simulator.transform_argb_slice(&mut pixels);
        assert_eq!(pixels, [0xdead_beef, 0x0123_4567]);
    }
}
