use std::time::Duration;

use scatter_rs::core::Point;
use scatter_rs::render::{PointKey, diff_points};

const ENTER_DELAY: Duration = Duration::from_millis(250);

#[test]
fn first_draw_enters_everything_immediately() {
    let next = vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
    let plan = diff_points(&[], &next, true, ENTER_DELAY);

    assert_eq!(plan.entered, next);
    assert!(plan.updated.is_empty());
    assert!(plan.exited.is_empty());
    // Nothing was on screen, so the staggered-append delay does not apply.
    assert_eq!(plan.enter_delay, None);
}

#[test]
fn shared_coordinates_update_and_the_rest_enter_and_exit() {
    let prev = vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
    let next = vec![Point::new(2.0, 2.0), Point::new(3.0, 3.0)];

    let plan = diff_points(&prev, &next, false, ENTER_DELAY);
    assert_eq!(plan.updated, vec![Point::new(2.0, 2.0)]);
    assert_eq!(plan.entered, vec![Point::new(3.0, 3.0)]);
    assert_eq!(plan.exited, vec![Point::new(1.0, 1.0)]);
}

#[test]
fn transition_mode_staggers_enters_over_existing_content() {
    let prev = vec![Point::new(1.0, 1.0)];
    let next = vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)];

    let plan = diff_points(&prev, &next, true, ENTER_DELAY);
    assert_eq!(plan.enter_delay, Some(ENTER_DELAY));

    let immediate = diff_points(&prev, &next, false, ENTER_DELAY);
    assert_eq!(immediate.enter_delay, None);
}

#[test]
fn near_identical_coordinates_are_distinct_entities() {
    let prev = vec![Point::new(1.0, 1.0)];
    let next = vec![Point::new(1.0 + f64::EPSILON, 1.0)];

    let plan = diff_points(&prev, &next, false, ENTER_DELAY);
    // Bit-identity: the nudged point re-enters instead of moving.
    assert_eq!(plan.entered.len(), 1);
    assert_eq!(plan.exited.len(), 1);
    assert!(plan.updated.is_empty());
}

#[test]
fn coincident_duplicates_share_one_identity() {
    let point = Point::new(4.0, 4.0);
    assert_eq!(PointKey::of(point), PointKey::of(point));

    let prev = vec![point];
    let next = vec![point, point];
    let plan = diff_points(&prev, &next, false, ENTER_DELAY);
    // Both duplicates match the previously rendered key.
    assert_eq!(plan.updated.len(), 2);
    assert!(plan.entered.is_empty());
    assert!(plan.exited.is_empty());
}

#[test]
fn unchanged_sets_reconcile_to_updates_only() {
    let points = vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
    let plan = diff_points(&points, &points, true, ENTER_DELAY);

    assert_eq!(plan.updated, points);
    assert!(plan.entered.is_empty());
    assert!(plan.exited.is_empty());
    assert!(!plan.is_noop());
}
