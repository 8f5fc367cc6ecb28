use chrono::Duration;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("Duration: {0} is malformed. Expected a whole number followed by s, m, h or d")]
pub struct InvalidDurationError(pub String);

/// Parses delay expressions like `30s`, `10m`, `2h` or `1d`: exactly one
/// integer followed by exactly one unit letter, with only surrounding
/// whitespace allowed.
pub fn parse_duration(input: &str) -> Result<Duration, InvalidDurationError> {
    let malformed = || InvalidDurationError(input.to_string());

    let trimmed = input.trim();
    let unit = trimmed.chars().last().ok_or_else(malformed)?;
    let digits = &trimmed[..trimmed.len() - unit.len_utf8()];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let amount = digits.parse::<i64>().map_err(|_| malformed())?;

    let unit_secs = match unit.to_ascii_lowercase() {
        's' => 1,
        'm' => 60,
        'h' => 60 * 60,
        'd' => 24 * 60 * 60,
        _ => return Err(malformed()),
    };
    amount
        .checked_mul(unit_secs)
        .and_then(|secs| secs.checked_mul(1000))
        .map(Duration::milliseconds)
        .ok_or_else(malformed)
}
