#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Bounds, Point};
use crate::data::RawRecord;

/// Projects raw records into plot-ready points.
///
/// Records lacking either configured field, or carrying a non-finite value,
/// are silently dropped: absent data is expected in sparse signal sets and
/// is not an error.
#[must_use]
pub fn project_records(records: &[RawRecord], x_field_id: &str, y_field_id: &str) -> Vec<Point> {
    // For large result sets, optional parallel projection keeps behavior
    // stable while reducing wall-clock projection time.
    #[cfg(feature = "parallel-projection")]
    {
        records
            .par_iter()
            .filter_map(|record| project_single_record(record, x_field_id, y_field_id))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        records
            .iter()
            .filter_map(|record| project_single_record(record, x_field_id, y_field_id))
            .collect()
    }
}

fn project_single_record(record: &RawRecord, x_field_id: &str, y_field_id: &str) -> Option<Point> {
    let x = record.value(x_field_id)?;
    let y = record.value(y_field_id)?;
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(Point::new(x, y))
}

/// Applies the inclusive bounds rectangle over already projected points.
///
/// Runs locally on every render and never implies a re-fetch. Filtering is
/// all-or-nothing: unless `bounds.active()` resolves (all four limits
/// present and ordered), the point set passes through unfiltered.
#[must_use]
pub fn filter_points(points: Vec<Point>, bounds: Bounds) -> Vec<Point> {
    match bounds.active() {
        Some(active) => points
            .into_iter()
            .filter(|point| active.contains(*point))
            .collect(),
        None => points,
    }
}
