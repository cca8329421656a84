//! GetMap to GetCoverage parameter mapping.

use std::collections::BTreeMap;

use super::request::IncomingRequest;

/// Upstream (WCS) parameter name → caller (WMS) parameter name.
pub const PARAMETER_MAPPING: [(&str, &str); 6] = [
    ("COVERAGE", "LAYERS"),
    ("CRS", "SRS"),
    ("BBOX", "BBOX"),
    ("FORMAT", "FORMAT"),
    ("WIDTH", "WIDTH"),
    ("HEIGHT", "HEIGHT"),
];

/// Identity of the upstream dialect. Always sent, never taken from the caller.
pub const DEFAULT_PARAMETERS: [(&str, &str); 3] =
    [("REQUEST", "GetCoverage"), ("SERVICE", "WCS"), ("VERSION", "1.0.0")];

/// Upstream name of the output format parameter.
pub const FORMAT_PARAM: &str = "FORMAT";

/// Exact parameter set sent upstream.
///
/// `None` marks a parameter the caller did not send. It is kept in the map
/// so the full GetCoverage shape is visible, and skipped on serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingQuery {
    params: BTreeMap<&'static str, Option<String>>,
}

impl OutgoingQuery {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).and_then(|v| v.as_deref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// The caller's FORMAT, passed through untouched.
    pub fn format(&self) -> Option<&str> {
        self.get(FORMAT_PARAM)
    }

    /// Name/value pairs that go on the wire; absent parameters are skipped.
    pub fn present_pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.params.iter().filter_map(|(name, value)| value.as_deref().map(|v| (*name, v)))
    }
}

/// Translate a caller request into the upstream query. Cannot fail.
pub fn map_request(incoming: &IncomingRequest) -> OutgoingQuery {
    let mut params: BTreeMap<&'static str, Option<String>> = PARAMETER_MAPPING
        .into_iter()
        .map(|(upstream, caller)| (upstream, incoming.get(caller).map(str::to_owned)))
        .collect();

    for (name, value) in DEFAULT_PARAMETERS {
        params.insert(name, Some(value.to_owned()));
    }

    OutgoingQuery { params }
}
