use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cricstats_model::{LiveMatch, PlayerRecord, PlayerStat};
use cricstats_query::{
    Comparison, DatasetSummary, DuplicateKey, GroupCount, GroupShare, HistogramBin, RankedPlayer,
    RankingShare, ScatterPoint, YearCount,
};

pub fn print_summary(summary: &DatasetSummary<'_>) {
    let mut table = key_value_table();
    table.add_row(vec![label_cell("Players"), Cell::new(summary.total_players)]);
    table.add_row(vec![label_cell("Matches"), Cell::new(summary.total_matches)]);
    table.add_row(vec![
        label_cell("Highest runs"),
        leader_cell(summary.most_runs.as_ref(), PlayerStat::Runs),
    ]);
    table.add_row(vec![
        label_cell(&format!("Best average (inn > {})", summary.min_innings)),
        leader_cell(summary.best_average.as_ref(), PlayerStat::Average),
    ]);
    table.add_row(vec![
        label_cell("Most 100s"),
        leader_cell(summary.most_centuries.as_ref(), PlayerStat::Centuries),
    ]);
    println!("{table}");
}

pub fn print_profile(player: &PlayerRecord) {
    println!("{}", player.name);
    let mut table = key_value_table();
    for stat in [
        PlayerStat::Matches,
        PlayerStat::Innings,
        PlayerStat::NotOuts,
        PlayerStat::Runs,
    ] {
        table.add_row(vec![label_cell(stat.label()), stat_cell(stat, stat.value(player))]);
    }
    table.add_row(vec![
        label_cell(PlayerStat::HighestScore.label()),
        optional_cell(player.highest_score_label()),
    ]);
    for stat in [
        PlayerStat::Average,
        PlayerStat::Centuries,
        PlayerStat::HalfCenturies,
        PlayerStat::Ducks,
    ] {
        table.add_row(vec![label_cell(stat.label()), stat_cell(stat, stat.value(player))]);
    }
    table.add_row(vec![label_cell("Career Span"), Cell::new(player.span_label())]);
    table.add_row(vec![
        label_cell(PlayerStat::CareerLength.label()),
        stat_cell(PlayerStat::CareerLength, PlayerStat::CareerLength.value(player)),
    ]);
    table.add_row(vec![
        label_cell(PlayerStat::CenturyRate.label()),
        stat_cell(PlayerStat::CenturyRate, player.century_rate),
    ]);
    println!("{table}");
}

pub fn print_comparison(comparison: &Comparison<'_>) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell(&comparison.left.name),
        header_cell(&comparison.right.name),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in &comparison.rows {
        let (left, right) = match row.leader() {
            Some(std::cmp::Ordering::Greater) => (
                stat_cell(row.stat, row.left).add_attribute(Attribute::Bold),
                stat_cell(row.stat, row.right),
            ),
            Some(std::cmp::Ordering::Less) => (
                stat_cell(row.stat, row.left),
                stat_cell(row.stat, row.right).add_attribute(Attribute::Bold),
            ),
            _ => (stat_cell(row.stat, row.left), stat_cell(row.stat, row.right)),
        };
        table.add_row(vec![label_cell(row.stat.label()), left, right]);
    }
    let (left_span, right_span) = comparison.spans();
    table.add_row(vec![
        label_cell("Career Span"),
        Cell::new(left_span),
        Cell::new(right_span),
    ]);
    println!("{table}");
}

pub fn print_ranking(
    stat: PlayerStat,
    ranked: &[RankedPlayer<'_>],
    shares: Option<&[RankingShare]>,
) {
    if ranked.is_empty() {
        println!("No players with a known {}.", stat.label().to_lowercase());
        return;
    }
    let mut table = Table::new();
    let mut header = vec![header_cell("#"), header_cell("Player"), header_cell(stat.label())];
    if shares.is_some() {
        header.push(header_cell("Share"));
    }
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (idx, entry) in ranked.iter().enumerate() {
        let mut row = vec![
            dim_cell(entry.rank),
            Cell::new(&entry.player.name),
            stat_cell(stat, Some(entry.value)),
        ];
        if let Some(share) = shares.and_then(|shares| shares.get(idx)) {
            row.push(Cell::new(format_percent(share.percent)));
        }
        table.add_row(row);
    }
    println!("{table}");
}

pub fn print_years(years: &[i32]) {
    if years.is_empty() {
        println!("No career start years in the dataset.");
        return;
    }
    let labels: Vec<String> = years.iter().map(ToString::to_string).collect();
    println!("{}", labels.join(", "));
}

pub fn print_histogram(title: &str, bins: &[HistogramBin], decimals: usize) {
    println!("{title}");
    if bins.is_empty() {
        println!("No values to bin.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("From"), header_cell("To"), header_cell("Players")]);
    apply_table_style(&mut table);
    for column in 0..3 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for bin in bins {
        table.add_row(vec![
            Cell::new(format!("{:.*}", decimals, bin.lower)),
            Cell::new(format!("{:.*}", decimals, bin.upper)),
            count_cell(bin.count),
        ]);
    }
    println!("{table}");
}

pub fn print_scatter(points: &[ScatterPoint<'_>]) {
    match scatter_table(points) {
        Some(table) => println!("{table}"),
        None => println!("No players with both runs and average."),
    }
}

fn scatter_table(points: &[ScatterPoint<'_>]) -> Option<Table> {
    if points.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Player"), header_cell("Runs"), header_cell("Average")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for point in points {
        table.add_row(vec![
            Cell::new(&point.player.name),
            Cell::new(point.runs),
            Cell::new(format!("{:.2}", point.average)),
        ]);
    }
    Some(table)
}

pub fn print_counts(value_header: &str, counts: &[GroupCount]) {
    if counts.is_empty() {
        println!("No recorded values.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell(value_header), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for group in counts {
        table.add_row(vec![Cell::new(&group.value), Cell::new(group.count)]);
    }
    println!("{table}");
}

pub fn print_shares(value_header: &str, shares: &[GroupShare]) {
    if shares.is_empty() {
        println!("No matches loaded.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(value_header),
        header_cell("Count"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for share in shares {
        let label = if share.value.is_some() {
            Cell::new(share.label())
        } else {
            dim_cell(share.label())
        };
        table.add_row(vec![
            label,
            Cell::new(share.count),
            Cell::new(format_percent(share.percent)),
        ]);
    }
    println!("{table}");
}

pub fn print_year_counts(years: &[YearCount]) {
    if years.is_empty() {
        println!("No dated matches.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Year"), header_cell("Matches")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in years {
        table.add_row(vec![Cell::new(entry.year), Cell::new(entry.count)]);
    }
    println!("{table}");
}

pub fn print_duplicates(duplicates: &[DuplicateKey]) {
    if duplicates.is_empty() {
        println!("Every player key is unique.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Key"), header_cell("Rows")]);
    apply_table_style(&mut table);
    for duplicate in duplicates {
        let rows: Vec<String> = duplicate.rows.iter().map(ToString::to_string).collect();
        table.add_row(vec![Cell::new(&duplicate.key), Cell::new(rows.join(", "))]);
    }
    println!("{table}");
}

pub fn print_live(matches: &[LiveMatch]) {
    if matches.is_empty() {
        println!("No live matches in the document.");
        return;
    }
    for live in matches {
        println!("{} ({})", live_title(live), live.match_type);
        println!("Status: {}", live.status);
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Inning"),
            header_cell("Runs"),
            header_cell("Wkts"),
            header_cell("Overs"),
        ]);
        apply_table_style(&mut table);
        for column in 1..4 {
            align_column(&mut table, column, CellAlignment::Right);
        }
        for score in &live.score {
            table.add_row(vec![
                Cell::new(&score.inning),
                Cell::new(score.r),
                Cell::new(score.w),
                Cell::new(score.o),
            ]);
        }
        if live.score.is_empty() {
            table.add_row(vec![
                dim_cell("No score yet"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
            ]);
        }
        println!("{table}");
    }
}

fn live_title(live: &LiveMatch) -> String {
    if let Some(name) = &live.name {
        return name.clone();
    }
    match (live.team(0), live.team(1)) {
        (Some(home), Some(away)) => format!("{home} vs {away}"),
        _ => "Unnamed match".to_string(),
    }
}

/// Counts print as integers, average with two decimals, century rate with three.
pub fn format_stat(stat: PlayerStat, value: f64) -> String {
    match stat {
        PlayerStat::Average => format!("{value:.2}"),
        PlayerStat::CenturyRate => format!("{value:.3}"),
        _ => format!("{value:.0}"),
    }
}

pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn key_value_table() -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn leader_cell(entry: Option<&RankedPlayer<'_>>, stat: PlayerStat) -> Cell {
    match entry {
        Some(entry) => Cell::new(format!(
            "{} ({})",
            format_stat(stat, entry.value),
            entry.player.name
        )),
        None => dim_cell("N/A"),
    }
}

fn stat_cell(stat: PlayerStat, value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format_stat(stat, value)),
        None => dim_cell("-"),
    }
}

fn optional_cell(value: Option<String>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_formatting_follows_kind() {
        assert_eq!(format_stat(PlayerStat::Runs, 15_921.0), "15921");
        assert_eq!(format_stat(PlayerStat::Average, 53.784), "53.78");
        assert_eq!(format_stat(PlayerStat::CenturyRate, 0.155_015), "0.155");
        assert_eq!(format_percent(66.666_7), "66.7%");
    }

    #[test]
    fn empty_scatter_has_no_table() {
        assert!(scatter_table(&[]).is_none());
    }
}
