pub mod loader;
pub mod types;

pub use self::types::{ArrivalPoint, BowlingType, DeliveryRecord, FieldPosition};
use crate::error::WwResult;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// Style code → bowling category. Codes outside the table have no category.
pub fn bowling_type_for(code: &str) -> Option<BowlingType> {
    match code.trim() {
        "LLB" | "LOB" | "RLB" | "ROB" => Some(BowlingType::Spin),
        "LF" | "LFM" | "LM" | "RF" | "RFM" | "RM" => Some(BowlingType::Pace),
        _ => None,
    }
}

/// The full delivery table. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<DeliveryRecord>,
}

impl Dataset {
    pub fn new(records: Vec<DeliveryRecord>) -> Self {
        Self { records }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> WwResult<Self> {
        let report = loader::load_deliveries(path)?;
        Ok(Self::new(report.records))
    }

    pub fn records(&self) -> &[DeliveryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted, distinct batting teams.
    pub fn teams(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.batting_team.as_str()))
    }

    /// Sorted, distinct batters.
    pub fn batters(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.batter.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

static SHARED: OnceLock<Dataset> = OnceLock::new();

/// Process-wide table, loaded on first call and never invalidated.
///
/// Later calls return the first table whatever `path` they pass. A failed
/// load leaves the cell empty so the next call retries.
pub fn shared<P: AsRef<Path>>(path: P) -> WwResult<&'static Dataset> {
    if let Some(ds) = SHARED.get() {
        debug!("Reusing memoised dataset ({} deliveries)", ds.len());
        return Ok(ds);
    }
    let loaded = Dataset::load(path)?;
    Ok(SHARED.get_or_init(|| loaded))
}
