use crate::render::{Orientation, PaperSize, ViewData};
use crate::request::ReportRequest;
use crate::source::{QuerySource, Record, SourceError};

/// Describes one report: where its data comes from and how it is rendered.
///
/// Only the first four methods are required. The rest are optional
/// capabilities with default implementations: Letter paper in portrait, no
/// summary, and no extra view or request data.
///
/// ```ignore
/// struct PaidPurchases;
///
/// impl ReportDefinition for PaidPurchases {
///     fn source(&self, request: &ReportRequest) -> Result<QuerySource, SourceError> {
///         Ok(QuerySource::query(purchases().where_eq("status", json!("paid"))))
///     }
///     fn view_name(&self) -> &str { "reports.purchases" }
///     fn output_filename(&self) -> &str { "purchases.pdf" }
///     fn requires_limit_check(&self) -> bool { true }
/// }
/// ```
pub trait ReportDefinition {
    /// The data source for this request.
    ///
    /// Called at most once per processing request.
    fn source(&self, request: &ReportRequest) -> Result<QuerySource, SourceError>;

    /// Name of the view handed to the renderer.
    fn view_name(&self) -> &str;

    fn output_filename(&self) -> &str;

    /// Whether the record count is checked against the configured limit.
    fn requires_limit_check(&self) -> bool;

    fn paper(&self) -> PaperSize {
        PaperSize::default()
    }

    fn orientation(&self) -> Orientation {
        Orientation::default()
    }

    /// Summary values, exposed to the view as both `summary` and `totals`.
    fn summary(&self, _records: &[Record]) -> Option<ViewData> {
        None
    }

    /// Extra view data. Its keys override the defaults, `data` included.
    fn extra_view_data(&self, _records: &[Record]) -> Option<ViewData> {
        None
    }

    /// Extra data derived from the request. Keys already present in the
    /// payload are kept; only new keys are added.
    fn extra_request_data(&self, _request: &ReportRequest) -> Option<ViewData> {
        None
    }
}
