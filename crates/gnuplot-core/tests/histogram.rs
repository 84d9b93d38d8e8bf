// File: crates/gnuplot-core/tests/histogram.rs
// Purpose: Histogram ingestion through the session, including edge cases.

mod common;

use common::{capture_session, datablock_rows};
use gnuplot_core::{Error, LineStyle};

#[test]
fn five_values_two_bins_places_the_boundary_value_in_the_last_bin() {
    let (mut session, buf) = capture_session();
    session
        .histogram(&[1.0, 2.0, 3.0, 4.0, 5.0], 2, "Histogram", LineStyle::Boxes)
        .unwrap();
    session.show(false).unwrap();

    let script = buf.after_init();
    // bin width 2, centers 2 and 4; 5.0 lands on the upper edge of the last bin
    assert_eq!(datablock_rows(&script, 0), vec!["2 2", "4 3"]);
    assert!(script.contains("using 1:2 with boxes title 'Histogram'"));
}

#[test]
fn counts_sum_to_the_number_of_values() {
    let values: Vec<f64> = (0..100).map(|i| (i as f64 * 0.37).sin() * 10.0).collect();
    let (mut session, buf) = capture_session();
    session.histogram(&values, 7, "", LineStyle::Boxes).unwrap();
    session.show(false).unwrap();

    let rows = datablock_rows(&buf.after_init(), 0);
    assert_eq!(rows.len(), 7);
    let total: f64 = rows
        .iter()
        .map(|r| r.split_whitespace().nth(1).unwrap().parse::<f64>().unwrap())
        .sum();
    assert_eq!(total, 100.0);
}

#[test]
fn zero_bins_is_an_error_even_for_empty_input() {
    let (mut session, _buf) = capture_session();
    let err = session.histogram::<f64>(&[], 0, "", LineStyle::Boxes).unwrap_err();
    assert!(matches!(err, Error::InvalidBinCount));
}

#[test]
fn empty_values_are_a_silent_no_op() {
    let (mut session, buf) = capture_session();
    session.histogram::<f64>(&[], 3, "", LineStyle::Boxes).unwrap();
    session.show(false).unwrap();
    assert_eq!(buf.after_init(), "");
}

#[test]
fn constant_values_collapse_to_a_single_bin() {
    let (mut session, buf) = capture_session();
    session
        .histogram(&[3.0, 3.0, 3.0, 3.0], 5, "", LineStyle::Boxes)
        .unwrap();
    session.show(false).unwrap();
    assert_eq!(datablock_rows(&buf.after_init(), 0), vec!["3 4"]);
}

#[test]
fn histogram_counts_as_a_2d_series_for_mode_checks() {
    let v = [1.0, 2.0];
    let (mut session, _buf) = capture_session();
    session.plot3d(&v, &v, &v, "", LineStyle::Lines).unwrap();
    let err = session
        .histogram(&[1.0, 2.0, 3.0], 2, "", LineStyle::Boxes)
        .unwrap_err();
    assert!(matches!(err, Error::ModeMismatch));
}
