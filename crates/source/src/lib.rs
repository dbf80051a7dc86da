//! Data source abstractions for the report pipeline.
//!
//! A report definition hands the pipeline a [`QuerySource`]. The pipeline
//! needs to tell three shapes apart so it can count records without
//! materializing them when the backend allows it:
//!
//! - [`QuerySource::Queryable`]: an unevaluated query that can count and fetch
//! - [`QuerySource::Materialized`]: records that are already in memory
//! - [`QuerySource::Countable`]: an opaque value that may expose a count
//!
//! ## Example
//!
//! ```ignore
//! use quire_source::{InMemoryQuery, QuerySource};
//! use serde_json::json;
//!
//! let query = InMemoryQuery::new(vec![json!({"status": "paid"}), json!({"status": "pending"})])
//!     .where_eq("status", json!("paid"));
//! let source = QuerySource::query(query);
//! ```

mod error;
mod memory;

pub use error::SourceError;
pub use memory::InMemoryQuery;

use serde_json::Value;
use std::borrow::Cow;

/// A single row handed to the view.
pub type Record = Value;

/// An unevaluated query that the pipeline may count and then execute.
///
/// Implementations wrap whatever the backing store offers (an SQL builder, a
/// remote API cursor, ...). Neither method is called more than once per
/// processing request.
pub trait Queryable: Send {
    /// The optimized count used for pagination.
    ///
    /// Backends that cannot provide it should return an error; the pipeline
    /// then falls back to [`Queryable::count`].
    fn count_for_pagination(&self) -> Result<usize, SourceError>;

    /// A full count of the records this query would return.
    fn count(&self) -> Result<usize, SourceError>;

    /// Execute the query and collect its records.
    fn fetch(&self) -> Result<Vec<Record>, SourceError>;
}

/// An opaque report source that is rendered as a single record.
pub trait Countable: Send {
    /// The number of records this value stands for, if it can tell.
    ///
    /// Returns `None` when the value has no notion of a count.
    fn count(&self) -> Option<usize> {
        None
    }

    /// The value handed to the view as `data`.
    fn to_record(&self) -> Record;
}

/// The data source returned by a report definition.
pub enum QuerySource {
    Queryable(Box<dyn Queryable>),
    Materialized(Vec<Record>),
    Countable(Box<dyn Countable>),
}

impl QuerySource {
    /// Wrap an unevaluated query.
    pub fn query<Q: Queryable + 'static>(query: Q) -> Self {
        QuerySource::Queryable(Box::new(query))
    }

    /// Wrap records that are already in memory.
    pub fn records(records: Vec<Record>) -> Self {
        QuerySource::Materialized(records)
    }

    /// Wrap an opaque countable value.
    pub fn countable<C: Countable + 'static>(value: C) -> Self {
        QuerySource::Countable(Box::new(value))
    }

    /// A short name for the variant, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            QuerySource::Queryable(_) => "queryable",
            QuerySource::Materialized(_) => "materialized",
            QuerySource::Countable(_) => "countable",
        }
    }

    /// Turn the source into concrete data.
    ///
    /// Queries are executed, in-memory records are moved as-is and opaque
    /// values become a lone record.
    pub fn materialize(self) -> Result<Materialized, SourceError> {
        match self {
            QuerySource::Queryable(query) => Ok(Materialized::Records(query.fetch()?)),
            QuerySource::Materialized(records) => Ok(Materialized::Records(records)),
            QuerySource::Countable(value) => Ok(Materialized::Single(value.to_record())),
        }
    }
}

impl From<Vec<Record>> for QuerySource {
    fn from(records: Vec<Record>) -> Self {
        QuerySource::Materialized(records)
    }
}

/// Data produced by [`QuerySource::materialize`].
#[derive(Debug, Clone, PartialEq)]
pub enum Materialized {
    Records(Vec<Record>),
    Single(Record),
}

impl Materialized {
    /// Number of records, counting a lone value as one.
    pub fn len(&self) -> usize {
        match self {
            Materialized::Records(records) => records.len(),
            Materialized::Single(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The data as a sequence; a lone value is wrapped in a one-element slice.
    pub fn as_records(&self) -> Cow<'_, [Record]> {
        match self {
            Materialized::Records(records) => Cow::Borrowed(records.as_slice()),
            Materialized::Single(record) => Cow::Owned(vec![record.clone()]),
        }
    }

    /// The value placed under the `data` key of a render payload.
    pub fn into_value(self) -> Value {
        match self {
            Materialized::Records(records) => Value::Array(records),
            Materialized::Single(record) => record,
        }
    }
}
