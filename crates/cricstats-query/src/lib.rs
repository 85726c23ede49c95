//! Query and aggregation engine for cricstats.
//!
//! Every query is a pure read of an immutable [`Dataset`]: it takes the dataset
//! by reference plus parameters and returns an ordered result. An empty result
//! is a normal outcome, not an error.
//!
//! - **dataset**: load-once record collections and name lookup
//! - **ranking**: top-N, qualified top-N, year-window rankings
//! - **grouping**: grouped counts and percentage shares
//! - **trophy**: tournament aggregates over match results
//! - **summary** / **compare** / **distribution**: dashboard views

pub mod compare;
pub mod dataset;
pub mod distribution;
pub mod error;
pub mod grouping;
pub mod ranking;
pub mod summary;
pub mod trophy;

pub use compare::{COMPARISON_STATS, Comparison, ComparisonRow, compare_players};
pub use dataset::{Dataset, DuplicateKey};
pub use distribution::{
    HistogramBin, ScatterPoint, average_histogram, century_histogram, equal_width_histogram,
    fixed_width_histogram, runs_vs_average,
};
pub use error::{QueryError, Result};
pub use grouping::{GroupCount, GroupShare, grouped_count, percentages};
pub use ranking::{
    RankedPlayer, RankingShare, available_years, rank_by, ranking_shares, top_by_stat, top_n,
    top_n_qualified, top_scorers_in_year,
};
pub use summary::DatasetSummary;
pub use trophy::{
    YearCount, matches_by_year, top_awards, toss_counts, toss_shares, win_shares, wins_by_team,
};
