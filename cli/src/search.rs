//! Search input validation.
//!
//! Runs before any request is issued. The client never trims, so trimming
//! happens here.

use pokeapi_core::MAX_POKEMON_ID;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a Pokemon name or ID")]
    Empty,

    #[error("Pokemon ID must be between 1 and {max}", max = MAX_POKEMON_ID)]
    IdOutOfRange,
}

/// Trim `input` and check it is a searchable term.
///
/// A term that reads as a number must have a leading integer in
/// `1..=MAX_POKEMON_ID`; only the digits before any `.` or exponent count,
/// so `"2e3"` is id 2. The trimmed text is returned as typed, so `"025"`
/// stays `"025"`.
pub fn validate(input: &str) -> Result<&str, ValidationError> {
    let term = input.trim();
    if term.is_empty() {
        return Err(ValidationError::Empty);
    }

    if is_numeric(term) {
        if let Some(id) = leading_integer(term) {
            if id < 1.0 || id > f64::from(MAX_POKEMON_ID) {
                return Err(ValidationError::IdOutOfRange);
            }
        }
    }

    Ok(term)
}

/// The whole term parses as a number (`nan` spellings do not count).
fn is_numeric(term: &str) -> bool {
    term.parse::<f64>().is_ok_and(|n| !n.is_nan())
}

/// Optional sign followed by at least one decimal digit; the rest is
/// ignored. `None` when there are no leading digits (`".5"`, `"inf"`).
fn leading_integer(term: &str) -> Option<f64> {
    let (negative, rest) = match term.as_bytes().first() {
        Some(b'-') => (true, &term[1..]),
        Some(b'+') => (false, &term[1..]),
        _ => (false, term),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: f64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}
