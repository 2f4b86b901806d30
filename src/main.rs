use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, warn, Level};
use wagonwheel::config::Config;
use wagonwheel::dataset;
use wagonwheel::error::WwResult;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/deliveries.csv")]
    data: String,

    /// JSON file with filter and display settings; explicit flags win
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Metrics and chart summaries as tables
    Summary(cmd::summary::SummaryArgs),
    /// Full dashboard view as JSON
    Export(cmd::export::ExportArgs),
    /// Values available for each filter
    Facets,
}

fn resolve_config(
    cli_config: &Config,
    config_path: Option<&str>,
    sub_matches: Option<&ArgMatches>,
) -> WwResult<Config> {
    let Some(path) = config_path else {
        return Ok(cli_config.clone());
    };

    info!("⚙️  Loading config from: {}", path);
    let mut config = Config::load_from_file(path)?;
    match sub_matches {
        Some(m) => config.merge_from_cli(cli_config, m),
        None => warn!("⚠️  No subcommand arguments to merge over config file."),
    }
    Ok(config)
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let data = dataset::shared(&cli.data).unwrap_or_else(|e| {
        error!("❌ Could not load deliveries from '{}': {}", cli.data, e);
        process::exit(1);
    });

    if data.is_empty() {
        warn!("⚠️  Dataset is empty. All metrics will be zero.");
    }

    let sub_matches = matches.subcommand().map(|(_, m)| m);

    let result = match &cli.command {
        Commands::Summary(args) => resolve_config(&args.config, cli.config.as_deref(), sub_matches)
            .and_then(|config| cmd::summary::run(config, data)),
        Commands::Export(args) => resolve_config(&args.config, cli.config.as_deref(), sub_matches)
            .and_then(|config| cmd::export::run(config, args, data)),
        Commands::Facets => {
            cmd::facets::run(data);
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
