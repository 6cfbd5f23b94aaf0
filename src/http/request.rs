use std::collections::HashMap;

/// Per-request header store.
///
/// Maps header names to header values. Lookups are exact and
/// case-sensitive; inserting a name that is already present overwrites the
/// previous value (last write wins).
#[derive(Debug, Clone, Default)]
pub struct Headers {
    entries: HashMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Stores a copy of `name` and `value`, replacing any existing entry
    /// with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Returns the stored value for an exact, case-sensitive match.
    ///
    /// # Example
    ///
    /// ```
    /// # use elserve::http::request::Headers;
    /// let mut headers = Headers::new();
    /// headers.insert("Host", "example.com");
    /// assert_eq!(headers.get("Host"), Some("example.com"));
    /// assert_eq!(headers.get("host"), None);
    /// ```
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|v| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Represents a decoded HTTP request for the lifetime of one connection.
///
/// Either every field is populated by the decoder or no `Request` exists at
/// all; later stages never see a partially decoded request.
#[derive(Debug, Clone)]
pub struct Request {
    /// The method token exactly as received (e.g. "GET"). Any verb is
    /// accepted; the server treats them all alike.
    pub method: String,
    /// The requested resource path (e.g. "/index.html"). Rewritten once by
    /// the worker when the configured default page stands in for `/`.
    pub target: String,
    /// Protocol version token (typically "HTTP/1.1").
    pub version: String,
    /// Request headers, owned exclusively by this request.
    pub headers: Headers,
}

impl Request {
    /// Retrieves a header value by exact name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key)
    }
}
