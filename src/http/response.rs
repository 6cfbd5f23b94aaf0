use tokio::fs::File;

/// Body source of a response.
///
/// Either there is no body, an in-memory byte sequence, or an open file
/// that is streamed to the connection in bounded chunks. Attaching a file
/// transfers its ownership to the response; streaming moves it back out,
/// so whichever side finishes with it drops it exactly once.
#[derive(Debug)]
pub enum Body {
    Empty,
    Bytes(Vec<u8>),
    File(File),
}

/// An outbound message being assembled for one request.
///
/// The header block is an ordered list of (name, value) pairs: duplicates
/// are allowed and emission order is insertion order. A `Response` is
/// immutable once built, so no header can be added after the header block
/// has been transmitted.
#[derive(Debug)]
pub struct Response {
    status: String,
    headers: Vec<(String, String)>,
    body: Body,
}

/// Builder for constructing responses in a fluent style.
///
/// # Example
///
/// ```
/// # use elserve::http::response::{Body, ResponseBuilder};
/// let response = ResponseBuilder::new("200 OK")
///     .header("content-type", "text/html")
///     .body(Body::Bytes(b"<html></html>".to_vec()))
///     .build();
/// assert_eq!(response.status(), "200 OK");
/// ```
pub struct ResponseBuilder {
    status: String,
    headers: Vec<(String, String)>,
    body: Body,
}

impl ResponseBuilder {
    /// Creates a builder with the given status line (code and reason
    /// phrase, e.g. `"200 OK"`).
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            headers: Vec::new(),
            body: Body::Empty,
        }
    }

    /// Replaces the status line.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Appends a header. Headers keep their insertion order and a repeated
    /// name is emitted once per call.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attaches the body source, taking ownership of it.
    pub fn body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Moves the body source out of the response, leaving `Body::Empty`
    /// behind. The caller becomes the sole owner of any attached file.
    pub fn take_body(&mut self) -> Body {
        std::mem::replace(&mut self.body, Body::Empty)
    }
}
