use crate::dataset::{DeliveryRecord, FieldPosition};
use serde::Serialize;
use std::fmt;

/// Pixel position of the striker on the field diagram.
pub const FIELD_CENTER: f64 = 175.0;

pub const NEUTRAL_COLOR: &str = "grey";

const RUN_COLORS: [(u32, &str); 6] = [
    (1, "#00FFFF"),
    (2, "#0057FF"),
    (3, "#FF00FF"),
    (4, "#00C800"),
    (5, "#FFA500"),
    (6, "#FF0000"),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
}

/// Axis-aligned viewport a chart is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Frame {
    pub fn contains(&self, p: Point) -> bool {
        (self.x_min..=self.x_max).contains(&p.x) && (self.y_min..=self.y_max).contains(&p.y)
    }

    /// Points that would be clipped by this viewport.
    pub fn outside<'a>(&self, points: impl IntoIterator<Item = &'a Point>) -> usize {
        points.into_iter().filter(|p| !self.contains(**p)).count()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x {}..{}, y {}..{}",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

/// Wagon wheel and catch map share the centred field frame.
pub const WAGON_FRAME: Frame = Frame {
    x_min: -180.0,
    x_max: 180.0,
    y_min: -180.0,
    y_max: 180.0,
};

/// Beehive: line ±1.83 m, height up to 2 m.
pub const BEEHIVE_FRAME: Frame = Frame {
    x_min: -1.83,
    x_max: 1.83,
    y_min: 0.0,
    y_max: 2.0,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    pub runs: u32,
    pub from: Point,
    pub to: Point,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImpactSeries {
    pub fours: Vec<Point>,
    pub sixes: Vec<Point>,
    pub dismissals: Vec<Point>,
    /// Records with an arrival point, whether or not they landed in a series.
    pub arrivals: usize,
}

impl ImpactSeries {
    /// True when no record carried an arrival point.
    pub fn is_empty(&self) -> bool {
        self.arrivals == 0
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.fours.iter().chain(&self.sixes).chain(&self.dismissals)
    }
}

/// Moves the striker to the origin and flips Y so "up" on screen is positive.
pub fn center(pos: FieldPosition) -> Point {
    Point {
        x: pos.x - FIELD_CENTER,
        y: FIELD_CENTER - pos.y,
    }
}

pub fn run_color(runs: u32) -> &'static str {
    RUN_COLORS
        .iter()
        .find(|(r, _)| *r == runs)
        .map(|(_, c)| *c)
        .unwrap_or(NEUTRAL_COLOR)
}

pub fn run_legend() -> Vec<LegendEntry> {
    RUN_COLORS
        .iter()
        .map(|&(runs, color)| LegendEntry {
            label: format!("{} Run", runs),
            color,
        })
        .collect()
}

/// Scoring shots (1-6 runs) in `runs_to_display` that have a landing position.
pub fn shot_trajectories(
    subset: &[&DeliveryRecord],
    runs_to_display: &[u32],
) -> Vec<Trajectory> {
    subset
        .iter()
        .filter(|r| (1..=6).contains(&r.runs) && runs_to_display.contains(&r.runs))
        .filter_map(|r| {
            r.field.map(|pos| Trajectory {
                runs: r.runs,
                from: Point::ORIGIN,
                to: center(pos),
                color: run_color(r.runs),
            })
        })
        .collect()
}

pub fn catch_points(subset: &[&DeliveryRecord]) -> Vec<Point> {
    subset
        .iter()
        .filter(|r| r.wicket.as_deref() == Some("Caught"))
        .filter_map(|r| r.field.map(center))
        .collect()
}

/// Arrival points split into fours, sixes and wicket balls.
/// A record may sit in more than one series.
pub fn impact_series(subset: &[&DeliveryRecord]) -> ImpactSeries {
    let mut series = ImpactSeries::default();
    for r in subset {
        let Some(arrival) = r.arrival else {
            continue;
        };
        series.arrivals += 1;
        let p = Point {
            x: arrival.line,
            y: arrival.height,
        };
        if r.runs == 4 {
            series.fours.push(p);
        }
        if r.runs == 6 {
            series.sixes.push(p);
        }
        if r.wicket.is_some() {
            series.dismissals.push(p);
        }
    }
    series
}
