//! Fixed symbol alphabets and their validation.
//!
//! Symbol order is significant everywhere in this crate: a symbol's index
//! in its alphabet selects the frequencies it is assigned.

use crate::error::TonemapError;

/// Start marker emitted with every schema. Receivers key off this symbol
/// to detect the beginning of a transmission.
pub const START_SYMBOL: char = '~';

/// Full ordered alphabet used by the cyclic schema: lowercase letters,
/// digits, uppercase letters, punctuation, space, and the start marker as
/// the final symbol.
pub const SYMBOLS: [char; 78] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '1', '2', '3', '4', '5', '6', '7', '8', '9', '0',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '-', '/', '.', ',', '#', '$', '%', '^', '&', '*',
    '(', ')', '!', '\'', ' ', START_SYMBOL,
];

/// Base alphabet for the banded profiles: the full set without the space
/// and without the start marker, which the generators append themselves.
pub fn base_symbols() -> &'static [char] {
    &SYMBOLS[..SYMBOLS.len() - 2]
}

/// Reject alphabets no schema can be built from: empty sets and sets with
/// repeated symbols.
pub fn validate(symbols: &[char]) -> Result<(), TonemapError> {
    if symbols.is_empty() {
        return Err(TonemapError::Alphabet("alphabet is empty".into()));
    }
    let mut seen = std::collections::HashSet::new();
    for &symbol in symbols {
        if !seen.insert(symbol) {
            return Err(TonemapError::Alphabet(format!(
                "duplicate symbol {symbol:?}"
            )));
        }
    }
    Ok(())
}

/// Validate a base alphabet and append the start marker to it. The marker
/// is reserved, so a base alphabet that already contains it is rejected.
pub fn with_start(base: &[char]) -> Result<Vec<char>, TonemapError> {
    validate(base)?;
    if base.contains(&START_SYMBOL) {
        return Err(TonemapError::Alphabet(
            "alphabet contains reserved start symbol".into(),
        ));
    }
    let mut symbols = base.to_vec();
    symbols.push(START_SYMBOL);
    Ok(symbols)
}
