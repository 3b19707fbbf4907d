//! Waveform shaping primitives.
//!
//! Every function takes an unbounded phase in radians and wraps it into one
//! cycle before shaping. Rectangular waves are high for the first `duty`
//! fraction of the cycle; ramps follow the usual piecewise-linear sawtooth
//! definition where `width` is the fraction of the cycle spent rising.

use std::f64::consts::PI;

use freqset_spec::WaveformKind;

/// 2π.
pub const TWO_PI: f64 = std::f64::consts::TAU;

/// Duty cycle of the `lilly` rectangular wave.
pub const LILLY_DUTY: f64 = 0.25;
/// Duty cycle of the `square` wave.
pub const SQUARE_DUTY: f64 = 0.5;
/// Duty cycle of the `pulse` wave.
pub const PULSE_DUTY: f64 = 0.05;

/// Wraps a phase into `[0, 2π)`.
#[inline]
pub fn wrap_phase(phase: f64) -> f64 {
    let wrapped = phase.rem_euclid(TWO_PI);
    // rem_euclid can round up to exactly 2π for tiny negative inputs.
    if wrapped >= TWO_PI {
        0.0
    } else {
        wrapped
    }
}

/// Sine wave.
#[inline]
pub fn sine(phase: f64) -> f64 {
    phase.sin()
}

/// Rectangular wave in {-1, 1}.
#[inline]
pub fn rectangle(phase: f64, duty: f64) -> f64 {
    if wrap_phase(phase) < duty * TWO_PI {
        1.0
    } else {
        -1.0
    }
}

/// Piecewise-linear ramp in [-1, 1].
///
/// `width = 1` rises over the whole cycle, `width = 0` falls over the whole
/// cycle and `width = 0.5` is a triangle starting at -1.
#[inline]
pub fn ramp(phase: f64, width: f64) -> f64 {
    let p = wrap_phase(phase);
    if width >= 1.0 || p < width * TWO_PI {
        p / (PI * width) - 1.0
    } else {
        (PI * (width + 1.0) - p) / (PI * (1.0 - width))
    }
}

/// Rising sawtooth.
#[inline]
pub fn sawtooth(phase: f64) -> f64 {
    ramp(phase, 1.0)
}

/// Falling sawtooth.
#[inline]
pub fn reverse_sawtooth(phase: f64) -> f64 {
    ramp(phase, 0.0)
}

/// Triangle wave.
#[inline]
pub fn triangle(phase: f64) -> f64 {
    ramp(phase, 0.5)
}

/// Maps an instantaneous phase to an amplitude.
pub trait Shape {
    /// Returns the shaped value for `phase` (radians, unbounded).
    fn shape(&self, phase: f64) -> f64;
}

impl Shape for WaveformKind {
    fn shape(&self, phase: f64) -> f64 {
        match self {
            WaveformKind::Sine => sine(phase),
            WaveformKind::Lilly => rectangle(phase, LILLY_DUTY),
            WaveformKind::Square => rectangle(phase, SQUARE_DUTY),
            WaveformKind::Pulse => (rectangle(phase, PULSE_DUTY) + 1.0) / 2.0,
            WaveformKind::Sawtooth => sawtooth(phase),
            WaveformKind::ReverseSawtooth => reverse_sawtooth(phase),
            WaveformKind::Triangle => triangle(phase),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn at(fraction: f64) -> f64 {
        fraction * TWO_PI
    }

    #[test]
    fn test_wrap_phase() {
        assert!((wrap_phase(at(2.25)) - at(0.25)).abs() < 1e-9);
        assert!((wrap_phase(-at(0.25)) - at(0.75)).abs() < 1e-9);
        assert!(wrap_phase(-1e-300) < TWO_PI);
    }

    #[test]
    fn test_rectangle_duty() {
        assert_eq!(rectangle(at(0.0), 0.25), 1.0);
        assert_eq!(rectangle(at(0.24), 0.25), 1.0);
        assert_eq!(rectangle(at(0.26), 0.25), -1.0);
        assert_eq!(rectangle(at(0.49), 0.5), 1.0);
        assert_eq!(rectangle(at(0.51), 0.5), -1.0);
        assert_eq!(rectangle(at(10.04), 0.05), 1.0);
        assert_eq!(rectangle(at(10.06), 0.05), -1.0);
    }

    #[test]
    fn test_sawtooth_rises() {
        assert!((sawtooth(at(0.0)) + 1.0).abs() < EPS);
        assert!(sawtooth(at(0.5)).abs() < 1e-9);
        assert!(sawtooth(at(0.75)) > sawtooth(at(0.25)));
    }

    #[test]
    fn test_reverse_sawtooth_falls() {
        assert!((reverse_sawtooth(at(0.0)) - 1.0).abs() < EPS);
        assert!(reverse_sawtooth(at(0.5)).abs() < 1e-9);
        assert!(reverse_sawtooth(at(0.75)) < reverse_sawtooth(at(0.25)));
    }

    #[test]
    fn test_triangle_shape() {
        assert!((triangle(at(0.0)) + 1.0).abs() < EPS);
        assert!(triangle(at(0.25)).abs() < 1e-9);
        assert!((triangle(at(0.5)) - 1.0).abs() < 1e-9);
        assert!(triangle(at(0.75)).abs() < 1e-9);
    }

    #[test]
    fn test_shapes_stay_in_range() {
        for kind in WaveformKind::ALL {
            let (lo, hi) = if kind.is_unipolar() {
                (0.0, 1.0)
            } else {
                (-1.0, 1.0)
            };
            for i in 0..1000 {
                let value = kind.shape(i as f64 * 0.0137);
                assert!(
                    value >= lo - EPS && value <= hi + EPS,
                    "{} produced {} at step {}",
                    kind,
                    value,
                    i
                );
            }
        }
    }

    #[test]
    fn test_pulse_is_offset_rectangle() {
        assert_eq!(WaveformKind::Pulse.shape(at(0.01)), 1.0);
        assert_eq!(WaveformKind::Pulse.shape(at(0.5)), 0.0);
        assert_eq!(WaveformKind::Lilly.shape(at(0.5)), -1.0);
    }
}
