use crate::reports;
use clap::Args;
use wagonwheel::config::Config;
use wagonwheel::dashboard::Dashboard;
use wagonwheel::dataset::Dataset;
use wagonwheel::error::WwResult;

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(config: Config, data: &Dataset) -> WwResult<()> {
    config.filters.validate()?;
    let selection = config.filters.to_selection(data);

    let dashboard = Dashboard::new(data, config.display);
    let view = dashboard.render(&selection);

    println!("\n🏏 === BATTER DASHBOARD === 🏏");
    reports::print_selection(&view);
    reports::print_metrics_report(&view.metrics);
    reports::print_dismissal_report(&view);
    reports::print_visuals_report(&view);
    Ok(())
}
