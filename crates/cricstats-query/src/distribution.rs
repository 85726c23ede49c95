//! Histograms and scatter points for the distribution views.

use cricstats_model::{PlayerRecord, QueryOptions};
use serde::Serialize;

use crate::dataset::Dataset;

/// Half-open `[lower, upper)` bin; the last bin of a histogram also includes
/// its upper edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint<'a> {
    pub player: &'a PlayerRecord,
    pub runs: u32,
    pub average: f64,
}

/// Splits the range of `values` into `bins` equal-width bins.
///
/// When every value is equal the range is widened by 0.5 on each side.
/// Non-finite values are ignored. Empty when there are no values or no bins.
pub fn equal_width_histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let Some((mut min, mut max)) = finite.iter().fold(None, |acc: Option<(f64, f64)>, &v| {
        Some(acc.map_or((v, v), |(lo, hi)| (lo.min(v), hi.max(v))))
    }) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }
    if min == max {
        min -= 0.5;
        max += 0.5;
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for v in finite {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| HistogramBin {
            lower: min + width * idx as f64,
            upper: if idx + 1 == bins {
                max
            } else {
                min + width * (idx + 1) as f64
            },
            count,
        })
        .collect()
}

/// Bins of fixed `width` starting at zero and covering the largest value.
///
/// Empty when there are no values or `width` is zero.
pub fn fixed_width_histogram(values: &[u32], width: u32) -> Vec<HistogramBin> {
    let Some(&max) = values.iter().max() else {
        return Vec::new();
    };
    if width == 0 {
        return Vec::new();
    }
    let bins = max.div_ceil(width).max(1) as usize;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = ((v / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| HistogramBin {
            lower: f64::from(width) * idx as f64,
            upper: f64::from(width) * (idx + 1) as f64,
            count,
        })
        .collect()
}

/// Distribution of batting averages among qualified players.
pub fn average_histogram(dataset: &Dataset, options: &QueryOptions) -> Vec<HistogramBin> {
    let averages: Vec<f64> = dataset
        .players()
        .iter()
        .filter(|record| options.qualifies(record.innings))
        .filter_map(|record| record.average)
        .collect();
    equal_width_histogram(&averages, options.average_bins)
}

/// Distribution of career centuries over every player with a known count.
pub fn century_histogram(dataset: &Dataset, options: &QueryOptions) -> Vec<HistogramBin> {
    let centuries: Vec<u32> = dataset
        .players()
        .iter()
        .filter_map(|record| record.centuries)
        .collect();
    fixed_width_histogram(&centuries, options.century_bin_width)
}

/// Runs against average for every player with both known.
pub fn runs_vs_average(dataset: &Dataset) -> Vec<ScatterPoint<'_>> {
    dataset
        .players()
        .iter()
        .filter_map(|player| {
            Some(ScatterPoint {
                player,
                runs: player.runs?,
                average: player.average?,
            })
        })
        .collect()
}
