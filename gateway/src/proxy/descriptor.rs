//! Static route descriptors for the upstream proxy.
//!
//! Each exposed route is described by one `RouteDescriptor`: the upstream
//! path template, the query-parameter allowlist with its defaults, the
//! list-coercion flag, and the per-route success/failure strings. The
//! descriptor table is the single source of truth for request mapping and
//! the unit of testing for it.

use axum::http::{Method, StatusCode};
use serde_json::Value;
use std::collections::HashMap;

/// One allowlisted query parameter: inbound name, upstream name, default.
///
/// Parameters not in a route's allowlist are never forwarded. A parameter
/// with no inbound value and no default is skipped entirely.
#[derive(Debug, Clone, Copy)]
pub struct QueryParam {
    pub inbound: &'static str,
    pub upstream: &'static str,
    pub default: Option<&'static str>,
}

impl QueryParam {
    /// Forward the parameter under the same name, only when present.
    pub const fn passthrough(name: &'static str) -> Self {
        QueryParam {
            inbound: name,
            upstream: name,
            default: None,
        }
    }

    /// Forward the parameter under the same name, with a default when absent.
    pub const fn with_default(name: &'static str, default: &'static str) -> Self {
        QueryParam {
            inbound: name,
            upstream: name,
            default: Some(default),
        }
    }

    /// Forward the parameter under a different upstream name, only when present.
    pub const fn renamed(inbound: &'static str, upstream: &'static str) -> Self {
        QueryParam {
            inbound,
            upstream,
            default: None,
        }
    }
}

/// Describes how one exposed route maps onto the upstream backend.
#[derive(Debug)]
pub struct RouteDescriptor {
    /// Route identifier used in server-side logs.
    pub name: &'static str,
    /// HTTP method of the upstream call.
    pub method: Method,
    /// Upstream path template, relative to the configured base URL.
    /// A `{id}` placeholder is substituted with the inbound path parameter.
    pub upstream_path: &'static str,
    /// Query-parameter allowlist.
    pub query: &'static [QueryParam],
    /// Whether the caller expects `data` to be an array.
    pub expect_list: bool,
    /// Status returned to the browser on upstream success.
    pub success_status: StatusCode,
    /// Static message included in the success envelope.
    pub success_message: Option<&'static str>,
    /// Fallback error string when the upstream body carries no `detail`.
    pub failure_message: &'static str,
}

impl RouteDescriptor {
    /// Resolves the upstream path by substituting the `{id}` placeholder.
    pub fn upstream_path(&self, path_param: Option<&str>) -> String {
        match path_param {
            Some(id) => self.upstream_path.replace("{id}", id),
            None => self.upstream_path.to_string(),
        }
    }

    /// Builds the outbound query string pairs from the inbound parameters.
    ///
    /// Allowlisted parameters take the inbound value when present, the
    /// documented default otherwise. Parameters with neither are skipped,
    /// as is anything outside the allowlist.
    pub fn upstream_query(&self, inbound: &HashMap<String, String>) -> Vec<(&'static str, String)> {
        self.query
            .iter()
            .filter_map(|param| {
                inbound
                    .get(param.inbound)
                    .filter(|value| !value.is_empty())
                    .map(String::as_str)
                    .or(param.default)
                    .map(|value| (param.upstream, value.to_string()))
            })
            .collect()
    }

    /// Applies list coercion: a route that expects a list wraps a single
    /// upstream object into a one-element array.
    pub fn coerce(&self, body: Value) -> Value {
        if self.expect_list && !body.is_array() {
            Value::Array(vec![body])
        } else {
            body
        }
    }
}
