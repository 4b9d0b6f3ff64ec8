//! Bode conversion: magnitude in dB and unwrapped phase in degrees.

use std::f64::consts::PI;

use num_complex::Complex;

/// Magnitude/phase view of a complex frequency response, aligned
/// index-for-index with the grid the response was evaluated on.
#[derive(Debug, Clone)]
pub struct Bode {
    /// 20·log10(|H|) per point. A zero response yields −∞, which is the
    /// documented degenerate result, not an error.
    pub magnitude_db: Vec<f64>,
    /// Unwrapped phase in degrees: the continuous branch matching the
    /// first sample, with artificial ±360° jumps removed.
    pub phase_deg: Vec<f64>,
}

/// Convert a complex response sequence into Bode magnitude and phase.
pub fn to_bode(h: &[Complex<f64>]) -> Bode {
    let magnitude_db = h.iter().map(|v| 20.0 * v.norm().log10()).collect();

    let mut phase_deg = Vec::with_capacity(h.len());
    let mut prev_raw = 0.0;
    let mut prev_unwrapped = 0.0;
    for (i, v) in h.iter().enumerate() {
        let raw = v.arg();
        let unwrapped = if i == 0 {
            raw
        } else {
            let mut delta = raw - prev_raw;
            while delta > PI {
                delta -= 2.0 * PI;
            }
            while delta <= -PI {
                delta += 2.0 * PI;
            }
            prev_unwrapped + delta
        };
        phase_deg.push(unwrapped * 180.0 / PI);
        prev_raw = raw;
        prev_unwrapped = unwrapped;
    }

    Bode {
        magnitude_db,
        phase_deg,
    }
}
