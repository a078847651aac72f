mod config;
mod jitter;

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use nuvemite_core::{
    compute_layout, compute_layout_tagged, default_radii, infer_variant, match_rule,
    product_or_default, HubCanvas, Layout, LayoutVariant, Point, RuleMatch, Theme, Topic,
    Transcript, Viewport,
};
use nuvemite_observability::{AppMetrics, MetricsSnapshot};
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

pub use config::{AssistantConfig, VIEWPORT_ENV};
pub use jitter::{FixedJitter, JitterSource, RandomJitter};

pub type ConversationId = Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct AssistantReply {
    pub conversation_id: Option<ConversationId>,
    pub topic: Topic,
    pub reply_text: String,
    pub turn: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeDecoration {
    pub label: String,
    pub animation_secs: f64,
}

/// A product hub ready for rendering: pure geometry plus the decorative
/// timings that are allowed to differ between calls.
#[derive(Debug, Clone, Serialize)]
pub struct HubLayout {
    pub product_key: &'static str,
    pub product_name: &'static str,
    pub theme: Theme,
    pub stroke: &'static str,
    pub viewport: Viewport,
    pub canvas: HubCanvas,
    pub layout: Layout,
    pub decorations: Vec<NodeDecoration>,
}

/// Caller-supplied replacements for what a product hub would otherwise
/// derive from the catalog, the viewport and the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HubOverrides {
    pub variant: Option<LayoutVariant>,
    pub theme: Option<Theme>,
    pub center: Option<Point>,
    pub radius_x: Option<f64>,
    pub radius_y: Option<f64>,
}

#[derive(Clone)]
pub struct SiteAssistant {
    config: AssistantConfig,
    conversations: Arc<RwLock<HashMap<ConversationId, Transcript>>>,
    jitter: Arc<dyn JitterSource>,
    metrics: Arc<AppMetrics>,
}

impl SiteAssistant {
    pub fn new(config: AssistantConfig, metrics: Arc<AppMetrics>) -> Self {
        Self::with_jitter(config, Arc::new(RandomJitter), metrics)
    }

    pub fn with_jitter(
        config: AssistantConfig,
        jitter: Arc<dyn JitterSource>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            config,
            conversations: Arc::new(RwLock::new(HashMap::new())),
            jitter,
            metrics,
        }
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    pub fn start_conversation(&self) -> ConversationId {
        let id = Uuid::new_v4();
        self.conversations.write().insert(id, Transcript::new());
        info!(conversation_id = %id, "conversation started");
        id
    }

    #[instrument(skip(self, text))]
    pub fn ask(&self, conversation_id: ConversationId, text: &str) -> Result<AssistantReply> {
        if text.trim().is_empty() {
            bail!("message is empty");
        }

        let mut conversations = self.conversations.write();
        let transcript = conversations
            .get_mut(&conversation_id)
            .with_context(|| format!("unknown conversation {conversation_id}"))?;

        self.metrics.inc_request();
        let matched = match_rule(text);
        self.record_match(matched);
        transcript.push(text, matched);

        info!(
            conversation_id = %conversation_id,
            topic = matched.topic.as_code(),
            turn = transcript.len(),
            "message answered"
        );

        Ok(AssistantReply {
            conversation_id: Some(conversation_id),
            topic: matched.topic,
            reply_text: matched.response.to_string(),
            turn: transcript.len(),
        })
    }

    /// Answers without opening a conversation.
    pub fn ask_once(&self, text: &str) -> AssistantReply {
        self.metrics.inc_request();
        let matched = match_rule(text);
        self.record_match(matched);

        AssistantReply {
            conversation_id: None,
            topic: matched.topic,
            reply_text: matched.response.to_string(),
            turn: 0,
        }
    }

    pub fn transcript(&self, conversation_id: ConversationId) -> Option<Transcript> {
        self.conversations.read().get(&conversation_id).cloned()
    }

    pub fn end_conversation(&self, conversation_id: ConversationId) -> Option<Transcript> {
        let removed = self.conversations.write().remove(&conversation_id);
        if let Some(transcript) = &removed {
            info!(
                conversation_id = %conversation_id,
                turns = transcript.len(),
                "conversation ended"
            );
        }
        removed
    }

    pub fn open_conversations(&self) -> usize {
        self.conversations.read().len()
    }

    /// Lays out a product's features around the hub center. Unknown product
    /// keys fall back to the default product.
    pub fn hub_layout(&self, product_key: &str, viewport: Option<Viewport>) -> Result<HubLayout> {
        self.hub_layout_with(product_key, viewport, HubOverrides::default())
    }

    #[instrument(skip(self))]
    pub fn hub_layout_with(
        &self,
        product_key: &str,
        viewport: Option<Viewport>,
        overrides: HubOverrides,
    ) -> Result<HubLayout> {
        self.metrics.inc_request();

        let product = product_or_default(product_key);
        if product.key != product_key.trim().to_lowercase() {
            warn!(requested = product_key, resolved = product.key, "unknown product key");
        }

        let viewport = viewport.unwrap_or(self.config.viewport);
        let variant = infer_variant(overrides.variant, product.name);
        let (default_rx, default_ry) = default_radii(variant, viewport);
        let canvas = self.config.canvas;
        let theme = overrides.theme.unwrap_or(product.theme);

        let layout = self
            .track_layout(compute_layout(
                product.features,
                variant,
                overrides.center.unwrap_or(canvas.center()),
                overrides.radius_x.unwrap_or(default_rx),
                overrides.radius_y.unwrap_or(default_ry),
            ))
            .with_context(|| format!("failed laying out product hub {}", product.key))?;

        let decorations = layout
            .nodes
            .iter()
            .map(|node| NodeDecoration {
                label: node.label.clone(),
                animation_secs: self.jitter.animation_secs(),
            })
            .collect();

        info!(
            product = product.key,
            variant = %variant,
            nodes = layout.nodes.len(),
            "hub layout computed"
        );

        Ok(HubLayout {
            product_key: product.key,
            product_name: product.name,
            theme,
            stroke: theme.stroke(),
            viewport,
            canvas,
            layout,
            decorations,
        })
    }

    pub fn custom_layout<S: AsRef<str>>(
        &self,
        features: &[S],
        variant_tag: &str,
        center: Point,
        radius_x: f64,
        radius_y: f64,
    ) -> Result<Layout> {
        self.metrics.inc_request();
        let layout = self.track_layout(compute_layout_tagged(
            features, variant_tag, center, radius_x, radius_y,
        ))?;
        Ok(layout)
    }

    pub fn variant_for(&self, product_key: &str) -> LayoutVariant {
        infer_variant(None, product_or_default(product_key).name)
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    fn record_match(&self, matched: RuleMatch) {
        if matched.is_fallback() {
            self.metrics.inc_fallback();
        } else {
            self.metrics.inc_matched();
        }
    }

    fn track_layout<E: std::fmt::Display>(
        &self,
        result: std::result::Result<Layout, E>,
    ) -> std::result::Result<Layout, E> {
        match &result {
            Ok(_) => self.metrics.inc_layout(),
            Err(err) => {
                self.metrics.inc_layout_error();
                warn!(error = %err, "layout rejected");
            }
        }
        result
    }
}
