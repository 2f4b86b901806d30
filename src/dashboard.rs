use crate::config::DisplayParams;
use crate::dataset::Dataset;
use crate::filter::{self, FilterSelection};
use crate::metrics::{self, AggregateMetrics, DismissalSlice};
use crate::spatial::{
    self, Frame, ImpactSeries, LegendEntry, Point, Trajectory, BEEHIVE_FRAME, WAGON_FRAME,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const NO_SCORING_SHOTS: &str = "No scoring shots available.";
pub const NO_DISMISSALS: &str = "No dismissals recorded.";
pub const NO_CATCHES: &str = "No caught dismissals.";
pub const NO_DELIVERY_DATA: &str = "No delivery data available.";

/// Decorative background image stretched over a chart frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Backdrop {
    pub path: PathBuf,
    pub placement: Frame,
}

impl Backdrop {
    /// `None` when the file is missing; charts are drawn without it.
    pub fn probe<P: AsRef<Path>>(path: P, placement: Frame) -> Option<Self> {
        let path = path.as_ref();
        if path.is_file() {
            Some(Self {
                path: path.to_path_buf(),
                placement,
            })
        } else {
            debug!("Backdrop '{}' not found, skipping", path.display());
            None
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WagonWheel {
    pub trajectories: Vec<Trajectory>,
    pub legend: Vec<LegendEntry>,
    pub frame: Frame,
    pub backdrop: Option<Backdrop>,
}

impl WagonWheel {
    pub fn placeholder(&self) -> Option<&'static str> {
        self.trajectories.is_empty().then_some(NO_SCORING_SHOTS)
    }

    /// Landing spots beyond the drawn field.
    pub fn off_frame(&self) -> usize {
        self.frame.outside(self.trajectories.iter().map(|t| &t.to))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatchMap {
    pub points: Vec<Point>,
    pub frame: Frame,
    pub backdrop: Option<Backdrop>,
}

impl CatchMap {
    pub fn placeholder(&self) -> Option<&'static str> {
        self.points.is_empty().then_some(NO_CATCHES)
    }

    pub fn off_frame(&self) -> usize {
        self.frame.outside(&self.points)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Beehive {
    pub series: ImpactSeries,
    pub frame: Frame,
    pub backdrop: Option<Backdrop>,
}

impl Beehive {
    pub fn placeholder(&self) -> Option<&'static str> {
        (self.series.arrivals == 0).then_some(NO_DELIVERY_DATA)
    }

    pub fn off_frame(&self) -> usize {
        self.frame.outside(self.series.points())
    }
}

/// Everything the presentation layer needs for one filter state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub selection: FilterSelection,
    pub deliveries: usize,
    pub metrics: AggregateMetrics,
    pub dismissals: Vec<DismissalSlice>,
    pub wagon_wheel: WagonWheel,
    pub catch_map: CatchMap,
    pub beehive: Beehive,
}

impl DashboardView {
    pub fn dismissals_placeholder(&self) -> Option<&'static str> {
        self.dismissals.is_empty().then_some(NO_DISMISSALS)
    }
}

pub struct Dashboard<'a> {
    dataset: &'a Dataset,
    display: DisplayParams,
}

impl<'a> Dashboard<'a> {
    pub fn new(dataset: &'a Dataset, display: DisplayParams) -> Self {
        Self { dataset, display }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Full recomputation for one selection: filter, aggregate, map.
    pub fn render(&self, selection: &FilterSelection) -> DashboardView {
        let subset = filter::apply(self.dataset.records(), selection);
        debug!(
            "Filter pass kept {} of {} deliveries",
            subset.len(),
            self.dataset.len()
        );

        let wagon_backdrop = Backdrop::probe(&self.display.wagon_background, WAGON_FRAME);

        DashboardView {
            selection: selection.clone(),
            deliveries: subset.len(),
            metrics: metrics::compute(&subset),
            dismissals: metrics::dismissal_breakdown(&subset),
            wagon_wheel: WagonWheel {
                trajectories: spatial::shot_trajectories(&subset, &selection.runs),
                legend: spatial::run_legend(),
                frame: WAGON_FRAME,
                backdrop: wagon_backdrop.clone(),
            },
            catch_map: CatchMap {
                points: spatial::catch_points(&subset),
                frame: WAGON_FRAME,
                backdrop: wagon_backdrop,
            },
            beehive: Beehive {
                series: spatial::impact_series(&subset),
                frame: BEEHIVE_FRAME,
                backdrop: Backdrop::probe(&self.display.beehive_background, BEEHIVE_FRAME),
            },
        }
    }
}
