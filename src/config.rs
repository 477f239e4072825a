use crate::bands::Spacing;

/// Parameters for banded schema generation.
///
/// Every named profile pins one of these down completely; the struct only
/// exists so generators take a single plan instead of a parameter list.
#[derive(Debug, Clone)]
pub struct BandPlan {
    /// Lowest band in Hz.
    pub min_hz: u32,
    /// Highest band in Hz.
    pub max_hz: u32,
    /// Number of bands across the range.
    pub bands: usize,
    /// Band distribution across the range.
    pub spacing: Spacing,
    /// Tones per symbol. Derived from the alphabet and band count when
    /// `None`.
    pub tones_per_symbol: Option<usize>,
}

impl Default for BandPlan {
    fn default() -> Self {
        Self {
            min_hz: 400,
            max_hz: 8000,
            bands: 50,
            spacing: Spacing::Linear,
            tones_per_symbol: None,
        }
    }
}

impl BandPlan {
    /// Range label emitted with banded schemas, e.g. `"400-8000 Hz"`.
    pub fn range_label(&self) -> String {
        format!("{}-{} Hz", self.min_hz, self.max_hz)
    }
}
