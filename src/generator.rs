//! Schema construction strategies.
//!
//! All strategies share the same shape: validate the alphabet, build the
//! `valid_hz` ladder, then assign each symbol tones by its index.

use crate::alphabet;
use crate::bands;
use crate::config::BandPlan;
use crate::error::TonemapError;
use crate::schema::{FrequencyMap, Schema};

/// Index offset between the two tones of a cyclic pair. The second tone
/// wraps around the end of the ladder.
pub const CYCLIC_OFFSET: usize = 30;

/// Spare bands appended beyond the alphabet in a cyclic ladder. Keeps the
/// ladder length nonzero for any validated alphabet, so the wraparound
/// modulo is always defined.
pub const CYCLIC_SPARE_BANDS: usize = 2;

/// Cyclic pair schema: the symbol at index `i` is assigned
/// `[valid_hz[i], valid_hz[(i + CYCLIC_OFFSET) % ladder_len]]` over an
/// arithmetic ladder of `symbols.len() + CYCLIC_SPARE_BANDS` bands.
pub fn cyclic_schema(
    symbols: &[char],
    start_hz: u32,
    step_hz: u32,
) -> Result<Schema, TonemapError> {
    alphabet::validate(symbols)?;
    let valid_hz = bands::arithmetic(start_hz, step_hz, symbols.len() + CYCLIC_SPARE_BANDS);

    let mut map = FrequencyMap::new();
    for (i, &symbol) in symbols.iter().enumerate() {
        let first = valid_hz[i];
        let second = valid_hz[(i + CYCLIC_OFFSET) % valid_hz.len()];
        map.insert(symbol, vec![first, second]);
    }

    Ok(Schema::new(symbols.to_vec(), map, valid_hz))
}

/// Base-N banded schema: the base-`bands` digits of a symbol's index
/// select its tones, least significant digit first. The start marker is
/// appended to the base alphabet before assignment.
pub fn banded_schema(base_symbols: &[char], plan: &BandPlan) -> Result<Schema, TonemapError> {
    let symbols = alphabet::with_start(base_symbols)?;
    let valid_hz = bands::spread(plan.min_hz, plan.max_hz, plan.bands, plan.spacing)?;
    let tones = plan
        .tones_per_symbol
        .unwrap_or_else(|| tones_per_symbol(symbols.len(), plan.bands));

    let mut map = FrequencyMap::new();
    for (index, &symbol) in symbols.iter().enumerate() {
        let mut assigned = Vec::with_capacity(tones);
        let mut v = index;
        for _ in 0..tones {
            assigned.push(valid_hz[v % plan.bands]);
            v /= plan.bands;
        }
        map.insert(symbol, assigned);
    }

    let mut schema = Schema::new(symbols, map, valid_hz);
    schema.bands = Some(plan.bands);
    schema.range = Some(plan.range_label());
    Ok(schema)
}

/// Banded schema with scattered digits: like [`banded_schema`], but each
/// digit is remapped with a prime step so adjacent symbols land on well
/// separated bands instead of neighbouring ones.
pub fn mixed_schema(base_symbols: &[char], plan: &BandPlan) -> Result<Schema, TonemapError> {
    let symbols = alphabet::with_start(base_symbols)?;
    let valid_hz = bands::spread(plan.min_hz, plan.max_hz, plan.bands, plan.spacing)?;
    let tones = plan
        .tones_per_symbol
        .unwrap_or_else(|| tones_per_symbol(symbols.len(), plan.bands));

    let mut map = FrequencyMap::new();
    for (index, &symbol) in symbols.iter().enumerate() {
        let mut assigned = Vec::with_capacity(tones);
        let mut v = index;
        for position in 0..tones {
            let digit = v % plan.bands;
            let slot = (digit * 13 + position * 7) % plan.bands;
            assigned.push(valid_hz[slot]);
            v /= plan.bands;
        }
        map.insert(symbol, assigned);
    }

    let mut schema = Schema::new(symbols, map, valid_hz);
    schema.bands = Some(plan.bands);
    schema.range = Some(plan.range_label());
    schema.spacing_mode = Some(plan.spacing);
    schema.tones_per_symbol = Some(tones);
    Ok(schema)
}

/// Smallest tone count able to address every symbol with `band_count`
/// bands per tone: `ceil(ln(symbols) / ln(bands))`, at least one.
fn tones_per_symbol(symbol_count: usize, band_count: usize) -> usize {
    let t = (symbol_count as f64).ln() / (band_count as f64).ln();
    (t.ceil() as usize).max(1)
}
