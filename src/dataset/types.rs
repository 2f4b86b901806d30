use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum BowlingType {
    Spin,
    Pace,
}

/// Landing spot of a shot in the scorer's field-diagram units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldPosition {
    pub x: f64,
    pub y: f64,
}

impl FieldPosition {
    /// Both coordinates or neither.
    pub fn from_parts(x: Option<f64>, y: Option<f64>) -> Option<Self> {
        match (x, y) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }
}

/// Where the ball reached the batter, in metres (line from middle stump, height above ground).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrivalPoint {
    pub line: f64,
    pub height: f64,
}

impl ArrivalPoint {
    pub fn from_parts(line: Option<f64>, height: Option<f64>) -> Option<Self> {
        match (line, height) {
            (Some(line), Some(height)) => Some(Self { line, height }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRecord {
    pub batting_team: String,
    pub batter: String,
    /// Raw style code, e.g. "RFM" or "LOB".
    pub bowler_type: String,
    pub bowling_type: Option<BowlingType>,
    pub runs: u32,
    pub extra: Option<String>,
    pub wicket: Option<String>,
    pub field: Option<FieldPosition>,
    pub arrival: Option<ArrivalPoint>,
}

impl DeliveryRecord {
    pub fn is_wide(&self) -> bool {
        self.extra
            .as_deref()
            .is_some_and(|e| e.to_ascii_lowercase().contains("wide"))
    }

    pub fn is_boundary(&self) -> bool {
        matches!(self.runs, 4 | 6)
    }
}
