use super::types::{ArrivalPoint, DeliveryRecord, FieldPosition};
use super::bowling_type_for;
use crate::error::{WagonError, WwResult};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

pub const COL_BATTING_TEAM: &str = "Batting Team";
pub const COL_BATTER: &str = "Batter";
pub const COL_BOWLER_TYPE: &str = "Bowler Type";
pub const COL_RUNS: &str = "Runs";
pub const COL_EXTRA: &str = "Extra";
pub const COL_WICKET: &str = "Wicket";
pub const COL_FIELD_X: &str = "FieldX";
pub const COL_FIELD_Y: &str = "FieldY";
pub const COL_ARRIVAL_LINE: &str = "Analyst Arrival Line";
pub const COL_ARRIVAL_HEIGHT: &str = "Analyst Arrival Height";

pub struct LoadReport {
    pub records: Vec<DeliveryRecord>,
    pub rows_read: usize,
    pub skipped_rows: usize,
}

/// Header positions of the columns we understand. Anything else in the file is ignored.
struct ColumnMap {
    batting_team: Option<usize>,
    batter: Option<usize>,
    bowler_type: Option<usize>,
    runs: usize,
    extra: Option<usize>,
    wicket: Option<usize>,
    field_x: Option<usize>,
    field_y: Option<usize>,
    arrival_line: Option<usize>,
    arrival_height: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> WwResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let runs = find(COL_RUNS).ok_or_else(|| {
            WagonError::Validation(format!("Missing required column '{}'", COL_RUNS))
        })?;

        Ok(Self {
            batting_team: find(COL_BATTING_TEAM),
            batter: find(COL_BATTER),
            bowler_type: find(COL_BOWLER_TYPE),
            runs,
            extra: find(COL_EXTRA),
            wicket: find(COL_WICKET),
            field_x: find(COL_FIELD_X),
            field_y: find(COL_FIELD_Y),
            arrival_line: find(COL_ARRIVAL_LINE),
            arrival_height: find(COL_ARRIVAL_HEIGHT),
        })
    }
}

fn text(rec: &StringRecord, idx: Option<usize>) -> Option<String> {
    let raw = rec.get(idx?)?.trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

fn number(rec: &StringRecord, idx: Option<usize>) -> Option<f64> {
    let raw = rec.get(idx?)?.trim();
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Accepts "4" as well as "4.0" (spreadsheet exports), rejects negatives and fractions.
pub fn parse_runs(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<u32>() {
        return Some(v);
    }
    let v = raw.parse::<f64>().ok()?;
    if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 {
        Some(v as u32)
    } else {
        None
    }
}

fn to_record(rec: &StringRecord, cols: &ColumnMap) -> Option<DeliveryRecord> {
    let runs = parse_runs(rec.get(cols.runs)?)?;
    let bowler_type = text(rec, cols.bowler_type).unwrap_or_default();

    Some(DeliveryRecord {
        batting_team: text(rec, cols.batting_team).unwrap_or_default(),
        batter: text(rec, cols.batter).unwrap_or_default(),
        bowling_type: bowling_type_for(&bowler_type),
        bowler_type,
        runs,
        extra: text(rec, cols.extra),
        wicket: text(rec, cols.wicket),
        field: FieldPosition::from_parts(number(rec, cols.field_x), number(rec, cols.field_y)),
        arrival: ArrivalPoint::from_parts(
            number(rec, cols.arrival_line),
            number(rec, cols.arrival_height),
        ),
    })
}

pub fn load_deliveries_from_reader<R: Read>(reader: R) -> WwResult<LoadReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let cols = ColumnMap::from_headers(rdr.headers()?)?;

    let mut records = Vec::new();
    let mut rows_read = 0;
    let mut skipped_rows = 0;

    for result in rdr.records() {
        rows_read += 1;
        match result {
            Ok(rec) => match to_record(&rec, &cols) {
                Some(delivery) => records.push(delivery),
                None => {
                    skipped_rows += 1;
                    debug!("[Row {}] Skipping delivery with invalid runs", rows_read);
                }
            },
            Err(e) => {
                skipped_rows += 1;
                debug!("[Row {}] CSV Parse Error: {}", rows_read, e);
            }
        }
    }

    if skipped_rows > 0 {
        warn!(
            "⚠️  Skipped {} of {} rows (missing or invalid '{}').",
            skipped_rows, rows_read, COL_RUNS
        );
    }

    Ok(LoadReport {
        records,
        rows_read,
        skipped_rows,
    })
}

pub fn load_deliveries<P: AsRef<Path>>(path: P) -> WwResult<LoadReport> {
    let path = path.as_ref();
    info!("📂 Loading deliveries from: {}", path.display());
    let file = File::open(path)?;
    let report = load_deliveries_from_reader(file)?;
    info!(
        "   -> Loaded {} deliveries ({} rows scanned).",
        report.records.len(),
        report.rows_read
    );
    Ok(report)
}
