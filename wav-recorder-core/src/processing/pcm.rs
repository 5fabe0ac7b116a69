/// Quantize a float sample to signed 16-bit PCM.
///
/// The input is clamped to [-1.0, 1.0], then scaled asymmetrically: negative
/// values by 32768 so that -1.0 maps to i16::MIN, non-negative values by
/// 32767 so that 1.0 maps to i16::MAX, and the result is rounded to the
/// nearest integer. The mapping must stay bit-exact across releases; players
/// decode the data section assuming it.
pub fn quantize(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    let scaled = if clamped < 0.0 {
        clamped * 32768.0
    } else {
        clamped * 32767.0
    };
    scaled.round() as i16
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Inverse of `quantize`, used to bound the round-trip error.
    fn dequantize(value: i16) -> f32 {
        if value < 0 {
            value as f32 / 32768.0
        } else {
            value as f32 / 32767.0
        }
    }

    #[test]
    fn full_scale_boundaries() {
        assert_eq!(quantize(1.0), 32767);
        assert_eq!(quantize(-1.0), -32768);
        assert_eq!(quantize(0.0), 0);
    }

    #[test]
    fn out_of_range_values_clamp() {
        assert_eq!(quantize(2.0), 32767);
        assert_eq!(quantize(-2.0), -32768);
        assert_eq!(quantize(f32::INFINITY), 32767);
        assert_eq!(quantize(f32::NEG_INFINITY), -32768);
    }

    #[test]
    fn half_scale_values() {
        assert_eq!(quantize(0.5), 0x4000); // 16384
        assert_eq!(quantize(-0.5), -16384); // 0xC000 as u16
    }

    #[test]
    fn round_trip_error_is_within_one_step() {
        let samples = [
            0.0f32, 0.1, -0.1, 0.25, -0.25, 0.333, -0.333, 0.5, -0.5, 0.7071, -0.7071, 0.9,
            -0.9, 0.9999, -0.9999, 1.0, -1.0,
        ];
        for &s in &samples {
            let restored = dequantize(quantize(s));
            assert_abs_diff_eq!(restored, s, epsilon = 1.0 / 32768.0);
        }
    }
}
