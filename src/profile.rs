//! Named, fully hardcoded schema profiles.
//!
//! Each profile fixes every generation parameter; choosing one is the
//! only knob the tooling exposes.

use clap::ValueEnum;

use crate::alphabet;
use crate::bands::Spacing;
use crate::config::BandPlan;
use crate::error::TonemapError;
use crate::generator::{banded_schema, cyclic_schema, mixed_schema};
use crate::schema::Schema;

/// First band of the cyclic ladder.
pub const CYCLIC_START_HZ: u32 = 3000;
/// Band-to-band step of the cyclic ladder.
pub const CYCLIC_STEP_HZ: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    /// Arithmetic ladder from 3000 Hz with cyclic tone pairs.
    Cyclic,
    /// Two linear tones per symbol across 400-8000 Hz.
    Basic,
    /// Linear bands above the speech range, 8000-17000 Hz.
    Ultrasonic,
    /// Log-spaced bands inside the speech range, 300-3500 Hz.
    Voice,
    /// Four scattered log-spaced tones per symbol, 1000-5000 Hz.
    Quad,
    /// One tone per symbol across 2000-6000 Hz.
    Single,
}

impl Profile {
    /// Build this profile's schema.
    pub fn build(self) -> Result<Schema, TonemapError> {
        let base = alphabet::base_symbols();
        match self {
            Profile::Cyclic => {
                cyclic_schema(&alphabet::SYMBOLS, CYCLIC_START_HZ, CYCLIC_STEP_HZ)
            }
            Profile::Basic => banded_schema(base, &BandPlan::default()),
            Profile::Ultrasonic => banded_schema(
                base,
                &BandPlan {
                    min_hz: 8000,
                    max_hz: 17000,
                    bands: 35,
                    ..BandPlan::default()
                },
            ),
            Profile::Voice => banded_schema(
                base,
                &BandPlan {
                    min_hz: 300,
                    max_hz: 3500,
                    bands: 40,
                    spacing: Spacing::Logarithmic,
                    ..BandPlan::default()
                },
            ),
            Profile::Quad => mixed_schema(
                base,
                &BandPlan {
                    min_hz: 1000,
                    max_hz: 5000,
                    bands: 20,
                    spacing: Spacing::Logarithmic,
                    tones_per_symbol: Some(4),
                },
            ),
            // one band per symbol collapses base-N addressing to a
            // direct 1-to-1 mapping
            Profile::Single => banded_schema(
                base,
                &BandPlan {
                    min_hz: 2000,
                    max_hz: 6000,
                    bands: base.len() + 1,
                    ..BandPlan::default()
                },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_profile_builds() {
        for profile in [
            Profile::Cyclic,
            Profile::Basic,
            Profile::Ultrasonic,
            Profile::Voice,
            Profile::Quad,
            Profile::Single,
        ] {
            let schema = profile.build().unwrap();
            assert!(!schema.frequency_map.is_empty());
        }
    }
}
