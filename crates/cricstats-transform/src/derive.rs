//! Second-pass derived fields.
//!
//! Runs after every raw field of a record is normalized. Derived values are
//! unknown whenever an input is unknown.

use cricstats_model::PlayerRecord;

/// `centuries / innings`; unknown when either is unknown or innings is zero.
pub fn century_rate(centuries: Option<u32>, innings: Option<u32>) -> Option<f64> {
    match (centuries, innings) {
        (Some(hundreds), Some(innings)) if innings > 0 => {
            Some(f64::from(hundreds) / f64::from(innings))
        }
        _ => None,
    }
}

/// `end_year - start_year`; unknown unless both years are known.
pub fn career_length(start_year: Option<i32>, end_year: Option<i32>) -> Option<i32> {
    Some(end_year? - start_year?)
}

/// Populates the derived fields of `record` from its normalized fields.
pub fn derive_player_fields(record: &mut PlayerRecord) {
    record.century_rate = century_rate(record.centuries, record.innings);
    record.career_length = career_length(record.start_year, record.end_year);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn century_rate_never_divides_by_zero() {
        assert_eq!(century_rate(Some(5), Some(0)), None);
        assert_eq!(century_rate(Some(5), None), None);
        assert_eq!(century_rate(None, Some(10)), None);
        assert_eq!(century_rate(Some(0), Some(10)), Some(0.0));
        assert_eq!(century_rate(Some(51), Some(329)), Some(51.0 / 329.0));
    }

    #[test]
    fn career_length_needs_both_years() {
        assert_eq!(career_length(Some(2001), Some(2013)), Some(12));
        assert_eq!(career_length(Some(2001), None), None);
        assert_eq!(career_length(None, Some(2013)), None);
    }
}
