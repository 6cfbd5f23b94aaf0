use crate::config::Config;
use crate::http::media_type::MediaTypes;

/// Read-only state shared by every worker.
///
/// Built once before the dispatcher starts and never mutated afterwards,
/// so workers read it without synchronization.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub media_types: MediaTypes,
}

impl Context {
    pub fn new(config: Config, media_types: MediaTypes) -> Self {
        Self {
            config,
            media_types,
        }
    }
}
