pub mod label;
pub mod option;
pub mod query;
pub mod time_point;
pub mod time_series;

pub mod test_utils;

pub use label::{Label, Labels};
pub use query::{CompiledMatcher, LabelMatcher, MatchType, Query, QueryResult, ReadQuery, ReadResult};
pub use time_point::{TimePoint, Timestamp, Value};
pub use time_series::{TimeSeries, WriteBatch};
