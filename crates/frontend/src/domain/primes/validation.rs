use contracts::domain::primes::GenerationLimit;

/// Message shown when the entered limit is rejected before calling the service
pub const INVALID_LIMIT_MESSAGE: &str = "Entered generationLimit is not a valid integer";

/// Parse the raw input field text into a generation limit.
///
/// Accepts anything that reads as a finite number without a fractional part:
/// surrounding whitespace is ignored, and decimal or exponent notation such as
/// `"10.0"` or `"1e3"` is fine. Zero and negative values pass; the service
/// decides whether they are in range.
pub fn parse_generation_limit(input: &str) -> Option<GenerationLimit> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Exact path first so large integers keep full precision
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(GenerationLimit::new(value));
    }

    let number = trimmed.parse::<f64>().ok()?;
    if !number.is_finite() || number.fract() != 0.0 {
        return None;
    }

    // i64::MAX as f64 rounds up to 2^63, which no longer fits
    if number < i64::MIN as f64 || number >= i64::MAX as f64 {
        return None;
    }

    Some(GenerationLimit::new(number as i64))
}

/// Validate the generation limit as a non-blank integer
pub fn is_valid_generation_limit(input: &str) -> bool {
    parse_generation_limit(input).is_some()
}
