//! Record counting and the result-size checks run before rendering.

use crate::error::{PipelineError, ReportError};
use crate::source::{QuerySource, SourceError};

/// Count the records a source would produce without materializing it.
///
/// Queries try their pagination count first and fall back to a full count
/// if that fails. Opaque values without a count operation count as zero.
pub fn count_records(source: &QuerySource) -> Result<usize, SourceError> {
    match source {
        QuerySource::Queryable(query) => match query.count_for_pagination() {
            Ok(count) => Ok(count),
            Err(e) => {
                log::warn!("Pagination count failed ({}), falling back to a full count", e);
                query.count()
            }
        },
        QuerySource::Materialized(records) => Ok(records.len()),
        QuerySource::Countable(value) => Ok(value.count().unwrap_or_else(|| {
            log::debug!("Source exposes no count operation; treating it as empty");
            0
        })),
    }
}

/// Check a record count against `limit`.
pub fn check_count(count: usize, limit: usize) -> Result<(), ReportError> {
    if count == 0 {
        return Err(ReportError::EmptyResult);
    }
    if count > limit {
        return Err(ReportError::OverLimit { limit });
    }
    Ok(())
}

/// Validate the size of a report's result set.
///
/// Fails with [`ReportError::EmptyResult`] or [`ReportError::OverLimit`];
/// a failing count propagates as the source's own error.
pub fn validate_query(source: &QuerySource, limit: usize) -> Result<(), PipelineError> {
    let count = count_records(source)?;
    log::debug!(
        "Validating {} source with {} record(s) against limit {}",
        source.kind(),
        count,
        limit
    );
    check_count(count, limit).inspect_err(|e| {
        log::info!("Report rejected ({}): {} record(s), limit {}", e.reason(), count, limit);
    })?;
    Ok(())
}

/// Format an integer with a comma every three digits, e.g. `1,000`.
pub fn format_grouped(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
