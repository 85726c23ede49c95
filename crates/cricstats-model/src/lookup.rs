use std::collections::HashMap;

/// Position of each header keyed by its case-folded, whitespace-collapsed form.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    map: HashMap<String, Vec<usize>>,
}

impl HeaderIndex {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, header) in headers.into_iter().enumerate() {
            map.entry(fold(header.as_ref())).or_default().push(idx);
        }
        Self { map }
    }

    /// All positions whose header matches `name`, in source order.
    pub fn positions(&self, name: &str) -> &[usize] {
        self.map.get(&fold(name)).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        !self.positions(name).is_empty()
    }
}

/// Case- and spacing-insensitive form of a header, also tolerating a leading BOM.
pub fn fold(name: &str) -> String {
    name.trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_ignoring_case_and_spacing() {
        let index = HeaderIndex::new(["\u{feff}Player of the Match", "Winner"]);
        assert_eq!(index.positions("player  of the MATCH"), &[0]);
        assert!(index.contains(" winner "));
        assert!(!index.contains("Toss"));
    }

    #[test]
    fn keeps_every_position_of_a_repeated_header() {
        let index = HeaderIndex::new(["Runs", "Inn", "runs"]);
        assert_eq!(index.positions("RUNS"), &[0, 2]);
    }
}
