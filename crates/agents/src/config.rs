use std::env;

use nuvemite_core::{HubCanvas, Viewport};

pub const VIEWPORT_ENV: &str = "NUVEMITE_VIEWPORT";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AssistantConfig {
    pub viewport: Viewport,
    pub canvas: HubCanvas,
}

impl AssistantConfig {
    /// Reads `NUVEMITE_VIEWPORT` (`desktop` or `mobile`). Missing or
    /// unrecognised values keep the desktop default.
    pub fn from_env() -> Self {
        let viewport = env::var(VIEWPORT_ENV)
            .ok()
            .and_then(|value| Viewport::parse(&value))
            .unwrap_or_default();

        Self {
            viewport,
            canvas: HubCanvas::default(),
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }
}
