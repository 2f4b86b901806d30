use clap::Args;
use wagonwheel::config::Config;
use wagonwheel::dashboard::Dashboard;
use wagonwheel::dataset::Dataset;
use wagonwheel::error::WwResult;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub config: Config,

    /// Single-line JSON instead of pretty-printed
    #[arg(long, default_value_t = false)]
    pub compact: bool,
}

pub fn run(config: Config, args: &ExportArgs, data: &Dataset) -> WwResult<()> {
    config.filters.validate()?;
    let selection = config.filters.to_selection(data);
    let view = Dashboard::new(data, config.display).render(&selection);

    let json = if args.compact {
        serde_json::to_string(&view)?
    } else {
        serde_json::to_string_pretty(&view)?
    };
    println!("{}", json);
    Ok(())
}
