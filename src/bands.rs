//! Construction of the `valid_hz` frequency ladder.

use serde::Serialize;

use crate::error::TonemapError;

/// How bands are distributed across a frequency range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    /// Evenly spaced bands.
    Linear,
    /// Log-spaced bands. Matches how pitch is perceived, so low bands sit
    /// closer together than high ones.
    Logarithmic,
}

/// Arithmetic progression of `count` frequencies starting at `start_hz`.
pub fn arithmetic(start_hz: u32, step_hz: u32, count: usize) -> Vec<u32> {
    (0..count).map(|i| start_hz + step_hz * i as u32).collect()
}

/// `count` bands across `min_hz..=max_hz` with the requested spacing,
/// rounded to whole Hz. Both endpoints are always included.
pub fn spread(
    min_hz: u32,
    max_hz: u32,
    count: usize,
    spacing: Spacing,
) -> Result<Vec<u32>, TonemapError> {
    if min_hz >= max_hz {
        return Err(TonemapError::Bands(format!(
            "min {min_hz} Hz must be below max {max_hz} Hz"
        )));
    }
    if count < 2 {
        return Err(TonemapError::Bands(format!(
            "need at least 2 bands, got {count}"
        )));
    }

    let mut bands = Vec::with_capacity(count);
    match spacing {
        Spacing::Linear => {
            let step = (max_hz - min_hz) as f64 / (count - 1) as f64;
            for i in 0..count {
                bands.push((min_hz as f64 + step * i as f64).round() as u32);
            }
        }
        Spacing::Logarithmic => {
            let log_min = (min_hz as f64).ln();
            let step = ((max_hz as f64).ln() - log_min) / (count - 1) as f64;
            for i in 0..count {
                bands.push((log_min + step * i as f64).exp().round() as u32);
            }
        }
    }
    Ok(bands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_ladder() {
        assert_eq!(arithmetic(3000, 50, 4), vec![3000, 3050, 3100, 3150]);
        assert!(arithmetic(3000, 50, 0).is_empty());
    }

    #[test]
    fn linear_endpoints_and_step() {
        let bands = spread(400, 8000, 50, Spacing::Linear).unwrap();
        assert_eq!(bands.len(), 50);
        assert_eq!(bands[0], 400);
        assert_eq!(bands[49], 8000);
        // step is 7600/49 = 155.1 Hz
        assert_eq!(bands[1], 555);
    }

    #[test]
    fn logarithmic_is_ascending() {
        let bands = spread(300, 3500, 40, Spacing::Logarithmic).unwrap();
        assert_eq!(bands.len(), 40);
        assert_eq!(bands[0], 300);
        assert_eq!(bands[39], 3500);
        assert!(bands.windows(2).all(|w| w[0] < w[1]));
        // log spacing packs the low end tighter than the high end
        assert!(bands[1] - bands[0] < bands[39] - bands[38]);
    }

    #[test]
    fn degenerate_plans_rejected() {
        assert!(spread(8000, 400, 50, Spacing::Linear).is_err());
        assert!(spread(400, 400, 50, Spacing::Linear).is_err());
        assert!(spread(400, 8000, 1, Spacing::Linear).is_err());
    }
}
