mod common;

use common::DeliveryBuilder;
use rstest::rstest;
use wagonwheel::dataset::DeliveryRecord;
use wagonwheel::metrics::{compute, dismissal_breakdown, is_dismissal, BattingAverage, DismissalSlice};

fn refs(recs: &[DeliveryRecord]) -> Vec<&DeliveryRecord> {
    recs.iter().collect()
}

#[test]
fn test_empty_subset_degrades_to_zero() {
    let m = compute(&[]);
    assert_eq!(m.total_runs, 0);
    assert_eq!(m.balls_faced, 0);
    assert_eq!(m.dismissals, 0);
    assert_eq!(m.batting_average, BattingAverage::Unbounded);
    assert_eq!(m.strike_rate, 0.0);
    assert_eq!(m.boundary_percentage, 0.0);
}

#[test]
fn test_basic_innings() {
    let recs = vec![
        DeliveryBuilder::new(4).build(),
        DeliveryBuilder::new(6).build(),
        DeliveryBuilder::new(0).wicket("Caught").build(),
    ];
    let m = compute(&refs(&recs));
    assert_eq!(m.total_runs, 10);
    assert_eq!(m.balls_faced, 3);
    assert_eq!(m.dismissals, 1);
    assert_eq!(m.batting_average, BattingAverage::Finite(10.0));
    assert_eq!(m.strike_rate, 333.33);
    assert_eq!(m.boundary_percentage, 100.0);
}

#[rstest]
#[case("Wide", false)]
#[case("wide", false)]
#[case("Wides", false)]
#[case("WIDE BALL", false)]
#[case("No Ball", true)]
#[case("Leg Bye", true)]
fn test_balls_faced_excludes_wides(#[case] extra: &str, #[case] faced: bool) {
    let recs = vec![DeliveryBuilder::new(1).extra(extra).build()];
    let m = compute(&refs(&recs));
    assert_eq!(m.balls_faced, usize::from(faced));
    assert_eq!(m.total_runs, 1);
}

#[test]
fn test_wide_runs_still_count() {
    let recs = vec![
        DeliveryBuilder::new(1).extra("Wide").build(),
        DeliveryBuilder::new(2).build(),
    ];
    let m = compute(&refs(&recs));
    assert_eq!(m.total_runs, 3);
    assert_eq!(m.balls_faced, 1);
    assert_eq!(m.strike_rate, 300.0);
}

#[rstest]
#[case("Caught", true)]
#[case("Bowled", true)]
#[case("Run Out", true)]
#[case("Retired Hurt", false)]
#[case("Retired - Not Out", false)]
#[case("Absent", false)]
fn test_pseudo_dismissals(#[case] wicket: &str, #[case] counts: bool) {
    let rec = DeliveryBuilder::new(0).wicket(wicket).build();
    assert_eq!(is_dismissal(&rec), counts);
}

#[test]
fn test_not_out_average_is_unbounded() {
    let recs = vec![
        DeliveryBuilder::new(4).build(),
        DeliveryBuilder::new(0).wicket("Retired Hurt").build(),
    ];
    let m = compute(&refs(&recs));
    assert_eq!(m.dismissals, 0);
    assert_eq!(m.batting_average, BattingAverage::Unbounded);
    assert_eq!(m.batting_average.to_string(), "∞");
}

#[test]
fn test_rounding_to_two_decimals() {
    let recs = vec![
        DeliveryBuilder::new(1).build(),
        DeliveryBuilder::new(1).build(),
        DeliveryBuilder::new(0).wicket("Bowled").build(),
        DeliveryBuilder::new(0).wicket("Bowled").build(),
        DeliveryBuilder::new(0).wicket("Bowled").build(),
        DeliveryBuilder::new(4).build(),
    ];
    let m = compute(&refs(&recs));
    // 6 runs / 3 dismissals, 6 / 6 balls, 4 of 6 runs in boundaries
    assert_eq!(m.batting_average, BattingAverage::Finite(2.0));
    assert_eq!(m.strike_rate, 100.0);
    assert_eq!(m.boundary_percentage, 66.67);
}

#[test]
fn test_exact_half_rounds_to_even() {
    let mut recs = vec![DeliveryBuilder::new(1).build()];
    recs.extend((0..8).map(|_| DeliveryBuilder::new(0).wicket("Bowled").build()));
    let m = compute(&refs(&recs));
    // 1 / 8 = 0.125
    assert_eq!(m.batting_average, BattingAverage::Finite(0.12));
    assert_eq!(m.batting_average.to_string(), "0.12");
}

#[test]
fn test_only_wides_gives_zero_strike_rate() {
    let recs = vec![DeliveryBuilder::new(1).extra("Wide").build()];
    let m = compute(&refs(&recs));
    assert_eq!(m.balls_faced, 0);
    assert_eq!(m.strike_rate, 0.0);
}

#[test]
fn test_dismissal_breakdown_orders_by_count() {
    let recs = vec![
        DeliveryBuilder::new(0).wicket("Bowled").build(),
        DeliveryBuilder::new(0).wicket("Caught").build(),
        DeliveryBuilder::new(0).wicket("Caught").build(),
        DeliveryBuilder::new(0).wicket("Retired Hurt").build(),
        DeliveryBuilder::new(2).build(),
    ];
    let slices = dismissal_breakdown(&refs(&recs));
    assert_eq!(
        slices,
        vec![
            DismissalSlice { kind: "Caught".to_string(), count: 2 },
            DismissalSlice { kind: "Bowled".to_string(), count: 1 },
            DismissalSlice { kind: "Retired Hurt".to_string(), count: 1 },
        ]
    );
}

#[test]
fn test_dismissal_breakdown_empty() {
    let recs = vec![DeliveryBuilder::new(1).build()];
    assert!(dismissal_breakdown(&refs(&recs)).is_empty());
}
