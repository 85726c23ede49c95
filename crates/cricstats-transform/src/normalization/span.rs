/// Career span parsed from `"START-END"` text. Either side may be unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CareerSpan {
    pub start: Option<i32>,
    pub end: Option<i32>,
}

/// Splits on the first `-` and parses each side as a year.
///
/// Text without a separator leaves both years unknown.
pub fn parse_span(value: &str) -> CareerSpan {
    let Some((start, end)) = value.trim().split_once('-') else {
        return CareerSpan::default();
    };
    CareerSpan {
        start: parse_year(start),
        end: parse_year(end),
    }
}

fn parse_year(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_years() {
        assert_eq!(
            parse_span("2001-2013"),
            CareerSpan {
                start: Some(2001),
                end: Some(2013)
            }
        );
        assert_eq!(parse_span(" 1989 - 2013 ").end, Some(2013));
    }

    #[test]
    fn malformed_sides_are_unknown() {
        assert_eq!(parse_span("2001"), CareerSpan::default());
        assert_eq!(parse_span(""), CareerSpan::default());
        assert_eq!(
            parse_span("2001-"),
            CareerSpan {
                start: Some(2001),
                end: None
            }
        );
        assert_eq!(parse_span("abcd-2013").start, None);
        // Only the first separator splits; "2013-2014" is not a year.
        assert_eq!(parse_span("2001-2013-2014").end, None);
    }
}
