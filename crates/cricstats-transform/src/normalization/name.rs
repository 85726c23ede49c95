use cricstats_model::PlayerKey;

/// Lowercases a player name and strips non-breaking spaces, asterisk markers
/// and surrounding whitespace.
///
/// Idempotent: an already-normalized name is returned unchanged.
pub fn normalize_name(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|ch| !matches!(ch, '\u{a0}' | '*'))
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn player_key(raw: &str) -> PlayerKey {
    PlayerKey::from_normalized(normalize_name(raw))
}

/// Trimmed text, or `None` when blank.
pub fn clean_text(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markers_and_case() {
        assert_eq!(normalize_name("  SR Tendulkar* "), "sr tendulkar");
        assert_eq!(normalize_name("JE\u{a0}Root*"), "jeroot");
        assert_eq!(normalize_name("V Kohli\u{a0}"), "v kohli");
    }

    #[test]
    fn idempotent_on_normalized_names() {
        let once = normalize_name("Kumar Sangakkara*");
        assert_eq!(normalize_name(&once), once);
    }

    #[test]
    fn blank_text_is_absent() {
        assert_eq!(clean_text(Some("  India ")), Some("India".to_string()));
        assert_eq!(clean_text(Some("   ")), None);
        assert_eq!(clean_text(None), None);
    }
}
