//! Numeric normalization utilities.

/// Removes thousands separators and surrounding whitespace.
///
/// Returns `None` when nothing is left.
pub fn strip_thousands(value: &str) -> Option<String> {
    let cleaned: String = value.trim().chars().filter(|ch| *ch != ',').collect();
    if cleaned.is_empty() { None } else { Some(cleaned) }
}

/// Parses a non-negative whole number such as `"12,345"` or `"200.0"`.
pub fn parse_count(value: &str) -> Option<u32> {
    let cleaned = strip_thousands(value)?;
    if let Ok(count) = cleaned.parse::<u32>() {
        return Some(count);
    }
    let number = cleaned.parse::<f64>().ok()?;
    let whole = number.is_finite()
        && number >= 0.0
        && number.fract() == 0.0
        && number <= f64::from(u32::MAX);
    whole.then_some(number as u32)
}

/// Parses a finite decimal such as `"53.78"` or `"1,234.5"`.
pub fn parse_decimal(value: &str) -> Option<f64> {
    strip_thousands(value)?
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// Parses a highest score, honouring the trailing not-out marker.
///
/// `"248*"` is `Some((248, true))`, `"194"` is `Some((194, false))`.
pub fn parse_highest_score(value: &str) -> Option<(u32, bool)> {
    let trimmed = value.trim();
    match trimmed.strip_suffix('*') {
        Some(score) => parse_count(score).map(|runs| (runs, true)),
        None => parse_count(trimmed).map(|runs| (runs, false)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_with_separators() {
        assert_eq!(parse_count("12,345"), Some(12_345));
        assert_eq!(parse_count(" 1,000,000 "), Some(1_000_000));
        assert_eq!(parse_count("200.0"), Some(200));
    }

    #[test]
    fn unparseable_counts_are_unknown() {
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("   "), None);
        assert_eq!(parse_count("-"), None);
        assert_eq!(parse_count("DNB"), None);
        assert_eq!(parse_count("12.5"), None);
        assert_eq!(parse_count("-4"), None);
        assert_eq!(parse_count(","), None);
    }

    #[test]
    fn decimals() {
        assert_eq!(parse_decimal("53.78"), Some(53.78));
        assert_eq!(parse_decimal("1,234.5"), Some(1234.5));
        assert_eq!(parse_decimal("-"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("inf"), None);
    }

    #[test]
    fn highest_scores() {
        assert_eq!(parse_highest_score("248*"), Some((248, true)));
        assert_eq!(parse_highest_score(" 194 "), Some((194, false)));
        assert_eq!(parse_highest_score("*"), None);
        assert_eq!(parse_highest_score(""), None);
    }
}
