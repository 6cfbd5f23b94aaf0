use std::collections::HashMap;

/// Content-type label used when the target's suffix is unknown or absent.
pub const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

/// Suffix to content-type lookup table.
///
/// Built once before the dispatcher starts and shared read-only by every
/// worker.
#[derive(Debug, Clone)]
pub struct MediaTypes {
    by_suffix: HashMap<&'static str, &'static str>,
}

impl MediaTypes {
    pub fn new() -> Self {
        let by_suffix = HashMap::from([
            ("html", "text/html"),
            ("htm", "text/html"),
            ("css", "text/css"),
            ("js", "text/javascript"),
            ("json", "application/json"),
            ("png", "image/png"),
            ("jpg", "image/jpeg"),
            ("jpeg", "image/jpeg"),
            ("gif", "image/gif"),
            ("svg", "image/svg+xml"),
            ("ico", "image/x-icon"),
            ("txt", "text/plain"),
            ("pdf", "application/pdf"),
        ]);

        Self { by_suffix }
    }

    /// Returns the content-type label for the suffix after the target's
    /// last `.`, or [`DEFAULT_MEDIA_TYPE`].
    pub fn lookup(&self, target: &str) -> &'static str {
        target
            .rsplit_once('.')
            .and_then(|(_, suffix)| self.by_suffix.get(suffix).copied())
            .unwrap_or(DEFAULT_MEDIA_TYPE)
    }
}

impl Default for MediaTypes {
    fn default() -> Self {
        Self::new()
    }
}
