//! The inbound report request.
//!
//! Query-string parameters and form/body input are kept apart: only the query
//! string is ever exposed to views as `filters`.

use crate::render::{Disposition, ViewData};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Query parameter asking for an inline preview.
pub const PREVIEW_PARAM: &str = "preview";
/// Query parameter asking for an inline stream.
pub const STREAM_PARAM: &str = "stream";

/// A bound route value that knows its own route key, like a model resolved
/// from `/tenants/{tenant}`.
pub trait RouteKey: Send + Sync {
    fn route_key(&self) -> Value;
}

/// A single route parameter.
#[derive(Clone)]
pub enum RouteParam {
    /// A plain value as captured from the route.
    Value(Value),
    /// A value resolved from the route that exposes a route key.
    Bound(Arc<dyn RouteKey>),
}

impl RouteParam {
    pub fn bound<K: RouteKey + 'static>(key: K) -> Self {
        RouteParam::Bound(Arc::new(key))
    }

    /// The value that may be forwarded into a follow-up request.
    ///
    /// Scalars and null pass through, bound values contribute their route
    /// key, and arrays or objects are dropped.
    pub fn safe_value(&self) -> Option<Value> {
        match self {
            RouteParam::Value(v @ (Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_))) => {
                Some(v.clone())
            }
            RouteParam::Value(_) => None,
            RouteParam::Bound(key) => Some(key.route_key()),
        }
    }
}

impl fmt::Debug for RouteParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteParam::Value(v) => f.debug_tuple("Value").field(v).finish(),
            RouteParam::Bound(key) => f.debug_tuple("Bound").field(&key.route_key()).finish(),
        }
    }
}

macro_rules! route_param_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RouteParam {
                fn from(value: $t) -> Self {
                    RouteParam::Value(value.into())
                }
            }
        )*
    };
}

route_param_from!(Value, &str, String, bool, i32, i64, u32, u64);

/// How the rendered document is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Stream,
    Download,
}

impl RenderMode {
    /// Stream when the request carries a preview or stream marker, whatever
    /// its value; download otherwise.
    pub fn for_request(request: &ReportRequest) -> Self {
        if request.wants_stream() {
            RenderMode::Stream
        } else {
            RenderMode::Download
        }
    }

    pub fn disposition(&self) -> Disposition {
        match self {
            RenderMode::Stream => Disposition::Inline,
            RenderMode::Download => Disposition::Attachment,
        }
    }
}

/// A read-only view of an inbound report request.
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    query: ViewData,
    body: ViewData,
    route_params: Option<Vec<(String, RouteParam)>>,
}

impl ReportRequest {
    pub fn new() -> Self {
        Default::default()
    }

    /// A request carrying only query-string parameters.
    pub fn from_query(query: ViewData) -> Self {
        Self {
            query,
            ..Default::default()
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Adds a form/body field. Body fields are never exposed as filters.
    pub fn with_body(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body.insert(key.into(), value.into());
        self
    }

    pub fn with_route_param(mut self, key: impl Into<String>, param: impl Into<RouteParam>) -> Self {
        self.route_params
            .get_or_insert_with(Vec::new)
            .push((key.into(), param.into()));
        self
    }

    /// Whether `key` is present in the query string or the body.
    pub fn has(&self, key: &str) -> bool {
        self.query.contains_key(key) || self.body.contains_key(key)
    }

    /// A request input value; body fields shadow query parameters.
    pub fn input(&self, key: &str) -> Option<&Value> {
        self.body.get(key).or_else(|| self.query.get(key))
    }

    /// Query-string parameters only.
    pub fn query(&self) -> &ViewData {
        &self.query
    }

    pub fn body(&self) -> &ViewData {
        &self.body
    }

    /// Route parameters, or `None` when the request was not routed.
    pub fn route_params(&self) -> Option<&[(String, RouteParam)]> {
        self.route_params.as_deref()
    }

    /// Whether the request carries a `preview` or `stream` marker, in the
    /// query string or the body.
    pub fn wants_stream(&self) -> bool {
        self.has(PREVIEW_PARAM) || self.has(STREAM_PARAM)
    }
}
