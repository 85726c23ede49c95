use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use cricstats_ingest::read_live_feed;
use cricstats_model::{PlayerStat, QueryOptions};
use cricstats_query::{
    Dataset, DatasetSummary, available_years, average_histogram, century_histogram,
    compare_players, matches_by_year, ranking_shares, runs_vs_average, top_awards, top_n,
    top_n_qualified, top_scorers_in_year, toss_shares, win_shares,
};
use tracing::{debug, info_span};

use cricstats_cli::config::AppConfig;
use cricstats_cli::export::{export_matches, export_players};

use crate::cli::{
    Cli, Command, CompareArgs, DistributionArgs, ExportArgs, LiveArgs, PlayerArgs, QueryCommand,
    SourceArgs, TopArgs, TrophyCommand, YearArgs,
};
use crate::render::{
    print_comparison, print_counts, print_duplicates, print_histogram, print_live, print_profile,
    print_ranking, print_scatter, print_shares, print_summary, print_year_counts, print_years,
};

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Live(args) => run_live(args),
        Command::Query(command) => {
            let config = AppConfig::load(cli.sources.config.as_deref()).context("load config")?;
            let dataset = load_dataset(&cli.sources, &config)?;
            run_query(&dataset, &config.query, command)
        }
    }
}

fn run_query(dataset: &Dataset, options: &QueryOptions, command: &QueryCommand) -> Result<()> {
    match command {
        QueryCommand::Summary => {
            print_summary(&DatasetSummary::compute(dataset, options));
            Ok(())
        }
        QueryCommand::Player(args) => run_player(dataset, args),
        QueryCommand::Compare(args) => run_compare(dataset, args),
        QueryCommand::Top(args) => {
            run_top(dataset, options, args);
            Ok(())
        }
        QueryCommand::Years => {
            print_years(&available_years(dataset));
            Ok(())
        }
        QueryCommand::Year(args) => {
            run_year(dataset, options, args);
            Ok(())
        }
        QueryCommand::Distribution(args) => {
            run_distribution(dataset, options, args);
            Ok(())
        }
        QueryCommand::Trophy(command) => run_trophy(dataset, options, command),
        QueryCommand::Duplicates => {
            print_duplicates(dataset.duplicate_keys());
            Ok(())
        }
        QueryCommand::Export(args) => run_export(dataset, args),
    }
}

/// Command-line paths win over the config file.
fn resolve_sources(sources: &SourceArgs, config: &AppConfig) -> Result<(PathBuf, Option<PathBuf>)> {
    let players = sources
        .players
        .clone()
        .or_else(|| config.data.players.clone())
        .ok_or_else(|| {
            anyhow!("no player statistics source: pass --players or set [data].players")
        })?;
    let matches = sources.matches.clone().or_else(|| config.data.matches.clone());
    Ok((players, matches))
}

fn load_dataset(sources: &SourceArgs, config: &AppConfig) -> Result<Dataset> {
    let (players, matches) = resolve_sources(sources, config)?;
    let span = info_span!("load", players = %players.display());
    let _guard = span.enter();
    Dataset::load(&players, matches.as_deref()).context("load dataset")
}

fn run_player(dataset: &Dataset, args: &PlayerArgs) -> Result<()> {
    let player = dataset.find_player(&args.name)?;
    print_profile(player);
    Ok(())
}

fn run_compare(dataset: &Dataset, args: &CompareArgs) -> Result<()> {
    let comparison = compare_players(dataset, &args.first, &args.second)?;
    print_comparison(&comparison);
    Ok(())
}

fn run_top(dataset: &Dataset, options: &QueryOptions, args: &TopArgs) {
    let stat = PlayerStat::from(args.by);
    let limit = args.limit.unwrap_or(options.top_n);
    let min_innings = args
        .min_innings
        .or_else(|| stat.needs_qualification().then_some(options.min_innings));
    debug!(stat = %stat, limit, ?min_innings, "ranking players");
    let ranked = match min_innings {
        Some(min) => top_n_qualified(dataset, stat, limit, min),
        None => top_n(dataset, stat, limit),
    };
    if let Some(min) = min_innings {
        println!("Qualified: more than {min} innings");
    }
    let shares = args.shares.then(|| ranking_shares(&ranked));
    print_ranking(stat, &ranked, shares.as_deref());
}

fn run_year(dataset: &Dataset, options: &QueryOptions, args: &YearArgs) {
    let limit = args.limit.unwrap_or(options.top_n);
    let ranked = top_scorers_in_year(dataset, args.year, limit);
    println!("Career runs of players active in {}", args.year);
    print_ranking(PlayerStat::Runs, &ranked, None);
}

fn run_distribution(dataset: &Dataset, options: &QueryOptions, args: &DistributionArgs) {
    print_histogram(
        &format!("Batting average (more than {} innings)", options.min_innings),
        &average_histogram(dataset, options),
        2,
    );
    print_histogram("Centuries", &century_histogram(dataset, options), 0);
    if args.scatter {
        print_scatter(&runs_vs_average(dataset));
    }
}

fn run_trophy(dataset: &Dataset, options: &QueryOptions, command: &TrophyCommand) -> Result<()> {
    match command {
        TrophyCommand::Wins => print_shares("Team", &win_shares(dataset)?),
        TrophyCommand::Awards { limit } => {
            print_counts("Player", &top_awards(dataset, limit.unwrap_or(options.top_n)));
        }
        TrophyCommand::Toss => print_shares("Decision", &toss_shares(dataset)?),
        TrophyCommand::Years => print_year_counts(&matches_by_year(dataset)),
    }
    Ok(())
}

fn run_live(args: &LiveArgs) -> Result<()> {
    let feed = read_live_feed(&args.file)?;
    print_live(&feed.data);
    Ok(())
}

fn run_export(dataset: &Dataset, args: &ExportArgs) -> Result<()> {
    let rows = export_players(dataset, &args.output)?;
    println!("Wrote {rows} players to {}", args.output.display());
    if let Some(path) = &args.matches_output {
        let rows = export_matches(dataset, path)?;
        println!("Wrote {rows} matches to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(players: Option<&str>) -> SourceArgs {
        SourceArgs {
            players: players.map(PathBuf::from),
            matches: None,
            config: None,
        }
    }

    #[test]
    fn flags_override_config_paths() {
        let mut config = AppConfig::default();
        config.data.players = Some(PathBuf::from("from_config.csv"));
        config.data.matches = Some(PathBuf::from("wc.csv"));

        let (players, matches) =
            resolve_sources(&sources(Some("from_flag.csv")), &config).expect("sources");
        assert_eq!(players, PathBuf::from("from_flag.csv"));
        assert_eq!(matches, Some(PathBuf::from("wc.csv")));
    }

    #[test]
    fn missing_player_source_is_an_error() {
        assert!(resolve_sources(&sources(None), &AppConfig::default()).is_err());
    }

    #[test]
    fn live_runs_without_config_or_dataset() {
        use clap::Parser;
        use tempfile::TempDir;

        let dir = TempDir::new().expect("temp dir");
        let feed = dir.path().join("live.json");
        std::fs::write(
            &feed,
            r#"{"data":[{"matchType":"odi","status":"Live","teamInfo":[{"name":"A"},{"name":"B"}]}]}"#,
        )
        .expect("write feed");
        let feed = feed.to_str().expect("utf-8 path").to_string();
        let missing_config = dir.path().join("absent.toml");
        let missing_config = missing_config.to_str().expect("utf-8 path").to_string();

        let live = Cli::try_parse_from([
            "cricstats",
            "--config",
            missing_config.as_str(),
            "live",
            "--file",
            feed.as_str(),
        ])
        .expect("parse live");
        run(&live).expect("live does not read the config");

        let summary =
            Cli::try_parse_from(["cricstats", "--config", missing_config.as_str(), "summary"])
                .expect("parse summary");
        assert!(run(&summary).is_err());
    }
}
