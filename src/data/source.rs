use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ActiveBounds;
use crate::data::RawRecord;
use crate::error::PlotResult;

/// Inclusive range predicate over one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangePredicate {
    pub field_id: String,
    pub gte: f64,
    pub lte: f64,
}

/// Logical AND of inclusive range predicates, one per filtered field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RangeFilter {
    pub predicates: SmallVec<[RangePredicate; 2]>,
}

impl RangeFilter {
    /// Builds the two-predicate filter the engine attaches to fetches when
    /// all four bounds are active.
    #[must_use]
    pub fn from_bounds(x_field_id: &str, y_field_id: &str, bounds: ActiveBounds) -> Self {
        let mut predicates = SmallVec::new();
        predicates.push(RangePredicate {
            field_id: x_field_id.to_owned(),
            gte: bounds.x_min,
            lte: bounds.x_max,
        });
        predicates.push(RangePredicate {
            field_id: y_field_id.to_owned(),
            gte: bounds.y_min,
            lte: bounds.y_max,
        });
        Self { predicates }
    }

    /// Evaluates the filter against a record, used by in-memory sources.
    /// A record missing a filtered field does not match.
    #[must_use]
    pub fn matches(&self, record: &RawRecord) -> bool {
        self.predicates.iter().all(|predicate| {
            record
                .value(&predicate.field_id)
                .is_some_and(|value| value >= predicate.gte && value <= predicate.lte)
        })
    }
}

/// The single query shape the engine issues.
#[derive(Debug, Clone, PartialEq)]
pub struct DataQuery {
    pub dataset_id: String,
    pub field_ids: SmallVec<[String; 2]>,
    pub filter: Option<RangeFilter>,
}

/// Result of one fetch.
///
/// Stale-response suppression is the data source's responsibility: when a
/// newer request for the same logical query was issued before this one
/// resolved, the source answers `Superseded` and the engine discards the
/// completion silently.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Records(Vec<RawRecord>),
    Superseded,
}

/// Abstraction over the dashboard's record store.
///
/// Given a dataset identifier, the configured field identifiers, and an
/// optional range filter, returns the most recent matching result set.
/// Retry and backoff policy, if any, lives behind this trait, not in the
/// engine.
pub trait DataSource {
    fn fetch_latest(&mut self, query: &DataQuery) -> PlotResult<FetchOutcome>;
}
