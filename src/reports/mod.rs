use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;
use wagonwheel::dashboard::DashboardView;
use wagonwheel::dataset::BowlingType;
use wagonwheel::metrics::{AggregateMetrics, BattingAverage};
use wagonwheel::spatial::Point;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn join_or_all(values: &[String]) -> String {
    if values.is_empty() {
        "(all)".to_string()
    } else {
        values.join(", ")
    }
}

pub fn print_selection(view: &DashboardView) {
    let s = &view.selection;
    let bowling: Vec<String> = s.bowling.iter().map(|b| b.to_string()).collect();
    let runs: Vec<String> = s.runs.iter().map(|r| r.to_string()).collect();

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Filter").add_attribute(Attribute::Bold),
        Cell::new("Selection").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Batting Team"), Cell::new(join_or_all(&s.teams))]);
    table.add_row(vec![Cell::new("Batter"), Cell::new(join_or_all(&s.batters))]);
    table.add_row(vec![Cell::new("Bowling Type"), Cell::new(join_or_all(&bowling))]);
    table.add_row(vec![Cell::new("Runs to Display"), Cell::new(join_or_all(&runs))]);
    table.add_row(vec![
        Cell::new("Deliveries"),
        Cell::new(view.deliveries).fg(Color::Cyan),
    ]);
    println!("\n{}", table);
}

pub fn print_metrics_report(m: &AggregateMetrics) {
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("Runs").add_attribute(Attribute::Bold),
        Cell::new("Balls Faced").add_attribute(Attribute::Bold),
        Cell::new("Dismissals").add_attribute(Attribute::Bold),
        Cell::new("Average").add_attribute(Attribute::Bold),
        Cell::new("Strike Rate").add_attribute(Attribute::Bold),
        Cell::new("Boundary Runs %").add_attribute(Attribute::Bold),
    ]);

    for i in 0..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let avg_cell = match m.batting_average {
        BattingAverage::Finite(_) => Cell::new(m.batting_average),
        BattingAverage::Unbounded => Cell::new(m.batting_average).fg(Color::Green),
    };

    table.add_row(vec![
        Cell::new(m.total_runs).fg(Color::Cyan),
        Cell::new(m.balls_faced),
        Cell::new(m.dismissals).fg(Color::Red),
        avg_cell,
        Cell::new(format!("{:.2}", m.strike_rate)),
        Cell::new(format!("{:.2}", m.boundary_percentage)),
    ]);
    println!("\n{}", table);
}

pub fn print_dismissal_report(view: &DashboardView) {
    println!("\nDismissal Breakdown");
    if let Some(msg) = view.dismissals_placeholder() {
        println!("{}", msg);
        return;
    }

    let total: usize = view.dismissals.iter().map(|d| d.count).sum();
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Wicket").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Share"),
    ]);
    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for slice in &view.dismissals {
        let share = slice.count as f64 / total as f64 * 100.0;
        table.add_row(vec![
            Cell::new(&slice.kind),
            Cell::new(slice.count),
            Cell::new(format!("{:.1}%", share)),
        ]);
    }
    println!("{}", table);
}

pub fn print_visuals_report(view: &DashboardView) {
    let wagon = &view.wagon_wheel;
    let catches = &view.catch_map;
    let beehive = &view.beehive;

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Chart").add_attribute(Attribute::Bold),
        Cell::new("Series"),
        Cell::new("Points"),
        Cell::new("Off Frame"),
        Cell::new("Backdrop"),
    ]);
    for idx in [2, 3] {
        if let Some(col) = table.column_mut(idx) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let off_cell = |n: usize| {
        if n > 0 {
            Cell::new(n).fg(Color::Yellow)
        } else {
            Cell::new(n)
        }
    };

    let backdrop_cell = |present: bool| {
        if present {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("-")
        }
    };

    for entry in &wagon.legend {
        let landing: Vec<&Point> = wagon
            .trajectories
            .iter()
            .filter(|t| t.color == entry.color)
            .map(|t| &t.to)
            .collect();
        table.add_row(vec![
            Cell::new("Wagon Wheel"),
            Cell::new(&entry.label),
            Cell::new(landing.len()),
            off_cell(wagon.frame.outside(landing)),
            backdrop_cell(wagon.backdrop.is_some()),
        ]);
    }

    table.add_row(vec![
        Cell::new("Catch Map"),
        Cell::new("Caught"),
        Cell::new(catches.points.len()),
        off_cell(catches.off_frame()),
        backdrop_cell(catches.backdrop.is_some()),
    ]);

    for (label, points) in [
        ("4 Runs", &beehive.series.fours),
        ("6 Runs", &beehive.series.sixes),
        ("Dismissal", &beehive.series.dismissals),
    ] {
        table.add_row(vec![
            Cell::new("Beehive"),
            Cell::new(label),
            Cell::new(points.len()),
            off_cell(beehive.frame.outside(points)),
            backdrop_cell(beehive.backdrop.is_some()),
        ]);
    }
    println!("\n{}", table);
    println!(
        "Wagon wheel / catch map frame: {}. Beehive frame: {}.",
        wagon.frame, beehive.frame
    );

    for msg in [
        wagon.placeholder(),
        catches.placeholder(),
        beehive.placeholder(),
    ]
    .into_iter()
    .flatten()
    {
        println!("{}", msg);
    }
}

pub fn print_facets(teams: &[String], batters: &[String]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Facet").add_attribute(Attribute::Bold),
        Cell::new("Values").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Batting Team"), Cell::new(teams.join("\n"))]);
    table.add_row(vec![Cell::new("Batter"), Cell::new(batters.join("\n"))]);
    let bowling: Vec<String> = BowlingType::iter().map(|b| b.to_string()).collect();
    table.add_row(vec![Cell::new("Bowling Type"), Cell::new(bowling.join("\n"))]);
    println!("{}", table);
}
