use crate::{Queryable, Record, SourceError};
use serde_json::Value;

type Predicate = Box<dyn Fn(&Record) -> bool + Send + Sync>;

/// A query over an in-memory vector of records.
///
/// Filters are applied lazily, when the query is counted or fetched. Useful
/// for JSON-backed reports and for tests.
pub struct InMemoryQuery {
    records: Vec<Record>,
    predicates: Vec<Predicate>,
    pagination_count: bool,
}

impl InMemoryQuery {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            predicates: Vec::new(),
            pagination_count: true,
        }
    }

    /// Keep only the records matching `predicate`.
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Record) -> bool + Send + Sync + 'static,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Keep only the records whose `field` equals `value`.
    ///
    /// A string filter also matches a number or boolean with the same textual
    /// form, since request parameters always arrive as strings.
    pub fn where_eq(self, field: impl Into<String>, value: Value) -> Self {
        let field = field.into();
        self.filter(move |record| match record.get(&field) {
            Some(found) => loosely_equal(found, &value),
            None => false,
        })
    }

    /// Apply `f` only when `condition` holds.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Make [`Queryable::count_for_pagination`] fail, as backends without an
    /// optimized count do.
    pub fn without_pagination_count(mut self) -> Self {
        self.pagination_count = false;
        self
    }

    /// Number of records before any filter is applied.
    pub fn len_unfiltered(&self) -> usize {
        self.records.len()
    }

    fn matches(&self, record: &Record) -> bool {
        self.predicates.iter().all(|p| p(record))
    }
}

fn loosely_equal(found: &Value, expected: &Value) -> bool {
    if found == expected {
        return true;
    }
    match (found, expected) {
        (Value::Number(n), Value::String(s)) => n.to_string() == *s,
        (Value::Bool(b), Value::String(s)) => b.to_string() == *s,
        _ => false,
    }
}

impl Queryable for InMemoryQuery {
    fn count_for_pagination(&self) -> Result<usize, SourceError> {
        if !self.pagination_count {
            return Err(SourceError::Unsupported("count_for_pagination"));
        }
        self.count()
    }

    fn count(&self) -> Result<usize, SourceError> {
        Ok(self.records.iter().filter(|r| self.matches(r)).count())
    }

    fn fetch(&self) -> Result<Vec<Record>, SourceError> {
        Ok(self
            .records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect())
    }
}
