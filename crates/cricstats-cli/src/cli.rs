//! Command line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use cricstats_model::PlayerStat;

#[derive(Parser)]
#[command(
    name = "cricstats",
    version,
    about = "Query batting careers and tournament results",
    long_about = "Query batting careers and tournament results.\n\n\
                  Reads a player statistics sheet (CSV or spreadsheet) and an optional\n\
                  match results sheet, normalizes them once, and answers ranking and\n\
                  aggregation queries."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub sources: SourceArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct SourceArgs {
    /// Player statistics CSV or spreadsheet (overrides [data].players).
    #[arg(long = "players", value_name = "FILE", global = true)]
    pub players: Option<PathBuf>,

    /// Match results CSV or spreadsheet (overrides [data].matches).
    #[arg(long = "matches", value_name = "FILE", global = true)]
    pub matches: Option<PathBuf>,

    /// Config file (default: ./cricstats.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(flatten)]
    Query(QueryCommand),

    /// Render a saved live-score document.
    Live(LiveArgs),
}

/// Commands answered from the loaded dataset.
#[derive(Subcommand)]
pub enum QueryCommand {
    /// Headline figures for the loaded dataset.
    Summary,

    /// Career profile of one player.
    Player(PlayerArgs),

    /// Side-by-side comparison of two players.
    Compare(CompareArgs),

    /// Top players by a statistic.
    Top(TopArgs),

    /// Career start years present in the dataset.
    Years,

    /// Top run scorers among players active in a year.
    Year(YearArgs),

    /// Histograms of averages and centuries.
    Distribution(DistributionArgs),

    /// Tournament aggregates from the match results.
    #[command(subcommand)]
    Trophy(TrophyCommand),

    /// Player keys carried by more than one row.
    Duplicates,

    /// Write the normalized records as CSV.
    Export(ExportArgs),
}

#[derive(Args)]
pub struct PlayerArgs {
    /// Player name; case, asterisks and non-breaking spaces are ignored.
    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Args)]
pub struct CompareArgs {
    #[arg(value_name = "FIRST")]
    pub first: String,
    #[arg(value_name = "SECOND")]
    pub second: String,
}

#[derive(Args)]
pub struct TopArgs {
    /// Statistic to rank by.
    #[arg(long = "by", value_enum, default_value = "runs")]
    pub by: StatArg,

    /// Number of entries (overrides [query].top_n).
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Only rank players with more innings than this.
    ///
    /// Average and century-rate rankings always qualify, using [query].min_innings
    /// when this flag is absent.
    #[arg(long = "min-innings", value_name = "N")]
    pub min_innings: Option<u32>,

    /// Also show each entry's share of the ranked total.
    #[arg(long = "shares")]
    pub shares: bool,
}

#[derive(Args)]
pub struct YearArgs {
    #[arg(value_name = "YEAR")]
    pub year: i32,

    /// Number of entries (overrides [query].top_n).
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct DistributionArgs {
    /// Also list runs against average for every player with both known.
    #[arg(long = "scatter")]
    pub scatter: bool,
}

#[derive(Subcommand)]
pub enum TrophyCommand {
    /// Wins per team with share of all matches.
    Wins,
    /// Most player-of-the-match awards.
    Awards {
        #[arg(long = "limit", value_name = "N")]
        limit: Option<usize>,
    },
    /// Toss decisions with share of all matches.
    Toss,
    /// Matches played per year.
    Years,
}

#[derive(Args)]
pub struct LiveArgs {
    /// Saved provider response (JSON).
    #[arg(long = "file", value_name = "PATH")]
    pub file: PathBuf,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Destination for normalized player records.
    #[arg(long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Destination for normalized match results.
    #[arg(long = "matches-output", value_name = "PATH")]
    pub matches_output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StatArg {
    Matches,
    Innings,
    NotOuts,
    Runs,
    HighestScore,
    Average,
    Centuries,
    HalfCenturies,
    Ducks,
    CareerLength,
    CenturyRate,
}

impl From<StatArg> for PlayerStat {
    fn from(arg: StatArg) -> Self {
        match arg {
            StatArg::Matches => PlayerStat::Matches,
            StatArg::Innings => PlayerStat::Innings,
            StatArg::NotOuts => PlayerStat::NotOuts,
            StatArg::Runs => PlayerStat::Runs,
            StatArg::HighestScore => PlayerStat::HighestScore,
            StatArg::Average => PlayerStat::Average,
            StatArg::Centuries => PlayerStat::Centuries,
            StatArg::HalfCenturies => PlayerStat::HalfCenturies,
            StatArg::Ducks => PlayerStat::Ducks,
            StatArg::CareerLength => PlayerStat::CareerLength,
            StatArg::CenturyRate => PlayerStat::CenturyRate,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
