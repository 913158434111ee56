mod record;
mod source;

pub use record::{RawRecord, record_of};
pub use source::{DataQuery, DataSource, FetchOutcome, RangeFilter, RangePredicate};
