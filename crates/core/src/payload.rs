//! Assembly of the data bag handed to the renderer.
//!
//! Precedence, lowest first:
//!
//! 1. `data`, `filters` and `title`
//! 2. `summary` and `totals`
//! 3. keys from [`ReportDefinition::extra_view_data`], which may replace any of the above
//! 4. keys from [`ReportDefinition::extra_request_data`], added only when absent

use crate::definition::ReportDefinition;
use crate::render::ViewData;
use crate::request::ReportRequest;
use crate::source::Materialized;
use serde_json::Value;

pub const DATA_KEY: &str = "data";
pub const FILTERS_KEY: &str = "filters";
pub const TITLE_KEY: &str = "title";
pub const SUMMARY_KEY: &str = "summary";
pub const TOTALS_KEY: &str = "totals";

/// Build the render payload for `definition` from already materialized data.
pub fn build_payload<D>(
    definition: &D,
    request: &ReportRequest,
    data: Materialized,
    title: &str,
) -> ViewData
where
    D: ReportDefinition + ?Sized,
{
    let (summary, view_data) = {
        let records = data.as_records();
        (definition.summary(&records), definition.extra_view_data(&records))
    };

    let mut payload = ViewData::new();
    payload.insert(DATA_KEY.to_string(), data.into_value());
    payload.insert(FILTERS_KEY.to_string(), Value::Object(request.query().clone()));
    payload.insert(TITLE_KEY.to_string(), Value::String(title.to_string()));

    if let Some(summary) = summary {
        payload.insert(SUMMARY_KEY.to_string(), Value::Object(summary.clone()));
        payload.insert(TOTALS_KEY.to_string(), Value::Object(summary));
    }

    if let Some(view_data) = view_data {
        payload.extend(view_data);
    }

    if let Some(extra) = definition.extra_request_data(request) {
        for (key, value) in extra {
            if payload.contains_key(&key) {
                log::debug!("Ignoring request data key '{}': already set by the view data", key);
                continue;
            }
            payload.insert(key, value);
        }
    }

    payload
}
