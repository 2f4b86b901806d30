use crate::dataset::DeliveryRecord;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Wicket entries that end an innings without counting as a dismissal.
pub const NON_DISMISSALS: [&str; 3] = ["Retired Hurt", "Retired - Not Out", "Absent"];

pub const UNBOUNDED_SYMBOL: &str = "∞";

/// Runs per dismissal. `Unbounded` while the batter has not been dismissed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BattingAverage {
    Finite(f64),
    Unbounded,
}

impl BattingAverage {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Finite(v) => Some(*v),
            Self::Unbounded => None,
        }
    }
}

impl fmt::Display for BattingAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(v) => write!(f, "{:.2}", v),
            Self::Unbounded => f.write_str(UNBOUNDED_SYMBOL),
        }
    }
}

impl Serialize for BattingAverage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(v) => serializer.serialize_f64(*v),
            Self::Unbounded => serializer.serialize_str(UNBOUNDED_SYMBOL),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateMetrics {
    pub total_runs: u64,
    pub balls_faced: usize,
    pub dismissals: usize,
    pub batting_average: BattingAverage,
    pub strike_rate: f64,
    pub boundary_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DismissalSlice {
    pub kind: String,
    pub count: usize,
}

pub fn is_dismissal(record: &DeliveryRecord) -> bool {
    record
        .wicket
        .as_deref()
        .is_some_and(|w| !NON_DISMISSALS.contains(&w))
}

/// Two decimals, exact halves to even.
fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}

pub fn compute(subset: &[&DeliveryRecord]) -> AggregateMetrics {
    let total_runs: u64 = subset.iter().map(|r| u64::from(r.runs)).sum();
    let balls_faced = subset.iter().filter(|r| !r.is_wide()).count();
    let dismissals = subset.iter().filter(|r| is_dismissal(r)).count();
    let boundary_runs: u64 = subset
        .iter()
        .filter(|r| r.is_boundary())
        .map(|r| u64::from(r.runs))
        .sum();

    let batting_average = if dismissals > 0 {
        BattingAverage::Finite(round2(total_runs as f64 / dismissals as f64))
    } else {
        BattingAverage::Unbounded
    };

    let strike_rate = if balls_faced > 0 {
        round2(total_runs as f64 / balls_faced as f64 * 100.0)
    } else {
        0.0
    };

    let boundary_percentage = if total_runs > 0 {
        round2(boundary_runs as f64 / total_runs as f64 * 100.0)
    } else {
        0.0
    };

    AggregateMetrics {
        total_runs,
        balls_faced,
        dismissals,
        batting_average,
        strike_rate,
        boundary_percentage,
    }
}

/// Every recorded wicket entry (retirements included) grouped by kind,
/// most frequent first.
pub fn dismissal_breakdown(subset: &[&DeliveryRecord]) -> Vec<DismissalSlice> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for kind in subset.iter().filter_map(|r| r.wicket.as_deref()) {
        *counts.entry(kind).or_default() += 1;
    }

    let mut slices: Vec<DismissalSlice> = counts
        .into_iter()
        .map(|(kind, count)| DismissalSlice {
            kind: kind.to_string(),
            count,
        })
        .collect();
    slices.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.kind.cmp(&b.kind)));
    slices
}
