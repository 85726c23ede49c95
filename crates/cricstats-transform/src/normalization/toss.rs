use std::sync::LazyLock;

use cricstats_model::TossDecision;
use regex::Regex;

/// Captures the verb in "... elected to <verb> first".
static ELECTED_TO_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)elected to\s+(.+?)\s+first").expect("Invalid toss regex")
});

/// Extracts the toss decision from free text such as
/// `"India won the toss and elected to bat first"`.
pub fn parse_toss_decision(text: &str) -> TossDecision {
    let Some(captures) = ELECTED_TO_REGEX.captures(text) else {
        return TossDecision::Unknown;
    };
    let verb = captures
        .get(1)
        .map(|m| m.as_str().trim().to_ascii_lowercase())
        .unwrap_or_default();
    match verb.as_str() {
        "bat" => TossDecision::Bat,
        "field" | "bowl" => TossDecision::Field,
        _ => TossDecision::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_decision() {
        assert_eq!(parse_toss_decision("India elected to bat first"), TossDecision::Bat);
        assert_eq!(
            parse_toss_decision("Pakistan won the toss and elected to field first"),
            TossDecision::Field
        );
        assert_eq!(parse_toss_decision("Elected To Bowl First"), TossDecision::Field);
    }

    #[test]
    fn unmatched_text_is_unknown() {
        assert_eq!(parse_toss_decision(""), TossDecision::Unknown);
        assert_eq!(parse_toss_decision("India won the toss"), TossDecision::Unknown);
        assert_eq!(parse_toss_decision("elected to bat"), TossDecision::Unknown);
        assert_eq!(
            parse_toss_decision("elected to sulk first"),
            TossDecision::Unknown
        );
    }
}
