use std::collections::HashMap;

/// Query parameter carrying the request type.
pub const REQUEST_PARAM: &str = "REQUEST";

/// Inbound request reduced to what the bridge looks at.
///
/// Parameter names keep the case they arrived with. When a name repeats,
/// the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomingRequest {
    path: String,
    params: HashMap<String, String>,
}

impl IncomingRequest {
    pub fn new(path: impl Into<String>, params: HashMap<String, String>) -> Self {
        Self { path: path.into(), params }
    }

    /// Build from a path and a raw (still percent-encoded) query string.
    pub fn from_query(path: impl Into<String>, query: Option<&str>) -> Self {
        let mut params = HashMap::new();
        if let Some(query) = query {
            for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
                params.entry(name.into_owned()).or_insert_with(|| value.into_owned());
            }
        }
        Self { path: path.into(), params }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Value of `REQUEST`, if present.
    pub fn request_type(&self) -> Option<&str> {
        self.get(REQUEST_PARAM)
    }

    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }
}
