use crate::dataset::{BowlingType, Dataset};
use crate::error::{WagonError, WwResult};
use crate::filter::{FilterSelection, ALL_RUNS};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub filters: FilterArgs,
    #[command(flatten)]
    pub display: DisplayParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilterArgs {
    /// Batting teams to keep (empty = all)
    #[arg(long = "team", value_delimiter = ',')]
    pub teams: Vec<String>,

    /// Batters to keep (empty = first batter, or all with --all-batters)
    #[arg(long = "batter", value_delimiter = ',')]
    pub batters: Vec<String>,

    #[arg(long, default_value_t = false)]
    pub all_batters: bool,

    #[arg(long, value_delimiter = ',', default_values_t = [BowlingType::Spin, BowlingType::Pace])]
    pub bowling: Vec<BowlingType>,

    /// Run values drawn on the wagon wheel
    #[arg(long, value_delimiter = ',', default_values_t = ALL_RUNS)]
    pub runs: Vec<u32>,
}

impl Default for FilterArgs {
    fn default() -> Self {
        Self {
            teams: Vec::new(),
            batters: Vec::new(),
            all_batters: false,
            bowling: vec![BowlingType::Spin, BowlingType::Pace],
            runs: ALL_RUNS.to_vec(),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayParams {
    #[arg(long, default_value = "wagon_background.png")]
    pub wagon_background: String,
    #[arg(long, default_value = "beehive_background.jpg")]
    pub beehive_background: String,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            wagon_background: "wagon_background.png".to_string(),
            beehive_background: "beehive_background.jpg".to_string(),
        }
    }
}

impl FilterArgs {
    pub fn validate(&self) -> WwResult<()> {
        if let Some(bad) = self.runs.iter().find(|r| !ALL_RUNS.contains(r)) {
            return Err(WagonError::Config(format!(
                "--runs accepts values 1-6, got {}",
                bad
            )));
        }
        Ok(())
    }

    /// Turns the flags into a selection, defaulting to the first batter like the dashboard does.
    pub fn to_selection(&self, dataset: &Dataset) -> FilterSelection {
        let batters = if self.batters.is_empty() && !self.all_batters {
            dataset.batters().into_iter().take(1).collect()
        } else {
            self.batters.clone()
        };

        FilterSelection::open()
            .with_teams(self.teams.iter().cloned())
            .with_batters(batters)
            .with_bowling(self.bowling.iter().copied())
            .with_runs(self.runs.iter().copied())
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> WwResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            WagonError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies over only the values the user typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(filters.teams);
        update_if_present!(filters.batters);
        update_if_present!(filters.all_batters);
        update_if_present!(filters.bowling);
        update_if_present!(filters.runs);

        update_if_present!(display.wagon_background);
        update_if_present!(display.beehive_background);
    }
}
