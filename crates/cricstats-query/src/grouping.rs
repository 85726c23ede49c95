//! Grouped counts and percentage shares.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{QueryError, Result};

/// Number of rows carrying one distinct value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub value: String,
    pub count: usize,
}

/// A group's share of a total. `value` is `None` for the bucket of rows whose
/// value was unknown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupShare {
    pub value: Option<String>,
    pub count: usize,
    pub percent: f64,
}

impl GroupShare {
    pub fn label(&self) -> &str {
        self.value.as_deref().unwrap_or("unknown")
    }
}

/// Counts occurrences of each distinct known value.
///
/// Unknown and blank values are excluded. Ordered by count descending, ties
/// broken alphabetically.
pub fn grouped_count<'a, I>(values: I) -> Vec<GroupCount>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values.into_iter().flatten() {
        let value = value.trim();
        if !value.is_empty() {
            *counts.entry(value).or_default() += 1;
        }
    }
    let mut groups: Vec<GroupCount> = counts
        .into_iter()
        .map(|(value, count)| GroupCount {
            value: value.to_string(),
            count,
        })
        .collect();
    // Stable sort over alphabetical input keeps ties alphabetical.
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}

/// Converts counts to percentages of `total` rows.
///
/// Rows of `total` not covered by `counts` form a trailing unknown bucket, so
/// the shares of a non-empty result always sum to 100. Empty when `total` is 0.
///
/// # Errors
///
/// Returns [`QueryError::InvalidParameter`] when the counts exceed `total`.
pub fn percentages(counts: &[GroupCount], total: usize) -> Result<Vec<GroupShare>> {
    if total == 0 {
        return Ok(Vec::new());
    }
    let covered: usize = counts.iter().map(|group| group.count).sum();
    if covered > total {
        return Err(QueryError::InvalidParameter {
            parameter: "total",
            message: format!("grouped counts sum to {covered}, more than {total} rows"),
        });
    }

    let share = |count: usize| count as f64 * 100.0 / total as f64;
    let mut shares: Vec<GroupShare> = counts
        .iter()
        .map(|group| GroupShare {
            value: Some(group.value.clone()),
            count: group.count,
            percent: share(group.count),
        })
        .collect();
    let unknown = total - covered;
    if unknown > 0 {
        shares.push(GroupShare {
            value: None,
            count: unknown,
            percent: share(unknown),
        });
    }
    Ok(shares)
}
