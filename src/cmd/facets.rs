use crate::reports;
use wagonwheel::dataset::Dataset;

pub fn run(data: &Dataset) {
    reports::print_facets(&data.teams(), &data.batters());
}
