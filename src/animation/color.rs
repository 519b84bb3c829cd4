//! Color math for the blob layers.
//!
//! Pure functions: scale a base channel by an opacity factor to fake
//! translucency on an opaque black background, and modulate it with a slow
//! sine pulse, clamped back into the valid channel range.

/// An RGB triple.
pub type Rgb = (u8, u8, u8);

/// Amplitude of the sinusoidal channel pulse.
const PULSE_AMPLITUDE: f64 = 30.0;

/// Clamp an intermediate channel value into `0..=255`.
fn clamp_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Simulate translucency by scaling every channel toward black.
pub fn dim(color: Rgb, alpha: f64) -> Rgb {
    (
        clamp_channel(f64::from(color.0) * alpha),
        clamp_channel(f64::from(color.1) * alpha),
        clamp_channel(f64::from(color.2) * alpha),
    )
}

/// One pulsed channel: `base * alpha + 30 * sin(phase + offset)`, clamped.
///
/// The per-channel offsets (0, 1, 2 for r, g, b) keep the channels out of
/// sync so the pulse reads as a color shift rather than a brightness wobble.
pub fn pulse(base: u8, alpha: f64, phase: f64, offset: f64) -> u8 {
    clamp_channel(f64::from(base) * alpha + PULSE_AMPLITUDE * (phase + offset).sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_scales_channels() {
        assert_eq!(dim((255, 107, 107), 0.4), (102, 42, 42));
        assert_eq!(dim((100, 200, 50), 0.5), (50, 100, 25));
    }

    #[test]
    fn test_dim_identity_and_black() {
        assert_eq!(dim((10, 20, 30), 1.0), (10, 20, 30));
        assert_eq!(dim((10, 20, 30), 0.0), (0, 0, 0));
    }

    #[test]
    fn test_pulse_clamps_low() {
        // sin(-pi/2) = -1, so 0*alpha - 30 must clamp to 0
        assert_eq!(pulse(0, 0.4, -std::f64::consts::FRAC_PI_2, 0.0), 0);
    }

    #[test]
    fn test_pulse_clamps_high() {
        // 255 + 30 must clamp to 255
        assert_eq!(pulse(255, 1.0, std::f64::consts::FRAC_PI_2, 0.0), 255);
    }

    #[test]
    fn test_pulse_at_zero_phase_matches_dim() {
        // sin(0) = 0, so the pulse term vanishes
        assert_eq!(pulse(200, 0.25, 0.0, 0.0), 50);
    }
}
