use crate::dataset::{BowlingType, Dataset, DeliveryRecord};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

pub const ALL_RUNS: [u32; 6] = [1, 2, 3, 4, 5, 6];

/// Active values per facet. An empty team, batter or bowling list switches that facet off.
/// `runs` only decides which scoring shots the wagon wheel draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    pub teams: Vec<String>,
    pub batters: Vec<String>,
    pub bowling: Vec<BowlingType>,
    pub runs: Vec<u32>,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::open()
    }
}

impl FilterSelection {
    /// No constraint on any facet; every scoring value shown.
    pub fn open() -> Self {
        Self {
            teams: Vec::new(),
            batters: Vec::new(),
            bowling: Vec::new(),
            runs: ALL_RUNS.to_vec(),
        }
    }

    /// Initial dashboard state: every team, the first batter, both bowling types.
    pub fn dashboard_defaults(dataset: &Dataset) -> Self {
        Self {
            teams: dataset.teams(),
            batters: dataset.batters().into_iter().take(1).collect(),
            bowling: BowlingType::iter().collect(),
            runs: ALL_RUNS.to_vec(),
        }
    }

    pub fn with_teams<I, S>(mut self, teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.teams = teams.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_batters<I, S>(mut self, batters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.batters = batters.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_bowling(mut self, bowling: impl IntoIterator<Item = BowlingType>) -> Self {
        self.bowling = bowling.into_iter().collect();
        self
    }

    pub fn with_runs(mut self, runs: impl IntoIterator<Item = u32>) -> Self {
        self.runs = runs.into_iter().collect();
        self
    }

    pub fn matches(&self, record: &DeliveryRecord) -> bool {
        let team_ok = self.teams.is_empty() || self.teams.contains(&record.batting_team);
        let batter_ok = self.batters.is_empty() || self.batters.contains(&record.batter);
        let bowling_ok = self.bowling.is_empty()
            || record
                .bowling_type
                .is_some_and(|bt| self.bowling.contains(&bt));

        team_ok && batter_ok && bowling_ok
    }
}

/// Records passing every active facet, in input order.
pub fn apply<'a>(
    records: &'a [DeliveryRecord],
    selection: &FilterSelection,
) -> Vec<&'a DeliveryRecord> {
    records.iter().filter(|r| selection.matches(r)).collect()
}
