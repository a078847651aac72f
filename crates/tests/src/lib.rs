use std::sync::Arc;

use nuvemite_agents::{AssistantConfig, FixedJitter, SiteAssistant};
use nuvemite_observability::AppMetrics;

pub const FIXED_ANIMATION_SECS: f64 = 3.25;

/// Assistant with deterministic decorations, for asserting on whole hubs.
pub fn fixed_assistant(config: AssistantConfig) -> SiteAssistant {
    SiteAssistant::with_jitter(
        config,
        Arc::new(FixedJitter(FIXED_ANIMATION_SECS)),
        AppMetrics::shared(),
    )
}
