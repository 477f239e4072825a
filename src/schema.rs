//! The schema document handed to the audio encoder.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::alphabet::START_SYMBOL;
use crate::bands::Spacing;
use crate::error::TonemapError;

/// Symbol-to-tones lookup table.
///
/// Entries are kept in alphabet order and serialize to a JSON object
/// whose keys appear in exactly that order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyMap {
    entries: Vec<(char, Vec<u32>)>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a symbol's tones. Callers insert in alphabet order; no
    /// reordering happens afterwards.
    pub fn insert(&mut self, symbol: char, tones: Vec<u32>) {
        self.entries.push((symbol, tones));
    }

    /// Tones assigned to `symbol`, if it is mapped.
    pub fn get(&self, symbol: char) -> Option<&[u32]> {
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, tones)| tones.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &[u32])> {
        self.entries.iter().map(|(s, tones)| (*s, tones.as_slice()))
    }
}

impl Serialize for FrequencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        let mut key = String::with_capacity(4);
        for (symbol, tones) in &self.entries {
            key.clear();
            key.push(*symbol);
            map.serialize_entry(&key, tones)?;
        }
        map.end()
    }
}

/// Complete schema document. Struct field order is the emitted JSON field
/// order; the trailing fields are only present on banded schemas.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    /// Ordered alphabet; one-character strings in JSON.
    pub alphabet: Vec<char>,
    /// Start marker for downstream framing.
    pub start: char,
    #[serde(rename = "frequencyMap")]
    pub frequency_map: FrequencyMap,
    /// The full band ladder tones are drawn from.
    pub valid_hz: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bands: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(rename = "spacingMode", skip_serializing_if = "Option::is_none")]
    pub spacing_mode: Option<Spacing>,
    #[serde(rename = "tonesPerSymbol", skip_serializing_if = "Option::is_none")]
    pub tones_per_symbol: Option<usize>,
}

impl Schema {
    /// A bare schema with the start marker and no banded extras.
    pub fn new(alphabet: Vec<char>, frequency_map: FrequencyMap, valid_hz: Vec<u32>) -> Self {
        Self {
            alphabet,
            start: START_SYMBOL,
            frequency_map,
            valid_hz,
            bands: None,
            range: None,
            spacing_mode: None,
            tones_per_symbol: None,
        }
    }

    /// Compact single-line JSON document.
    pub fn to_json_line(&self) -> Result<String, TonemapError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON document for inspection.
    pub fn to_json_pretty(&self) -> Result<String, TonemapError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
