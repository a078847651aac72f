use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    requests_total: AtomicU64,
    matched_total: AtomicU64,
    fallback_total: AtomicU64,
    layouts_total: AtomicU64,
    layout_errors_total: AtomicU64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub matched_total: u64,
    pub fallback_total: u64,
    pub layouts_total: u64,
    pub layout_errors_total: u64,
    pub fallback_ratio: f64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_matched(&self) {
        self.matched_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_fallback(&self) {
        self.fallback_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_layout(&self) {
        self.layouts_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_layout_error(&self) {
        self.layout_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let matched = self.matched_total.load(Ordering::Relaxed);
        let fallback = self.fallback_total.load(Ordering::Relaxed);
        let answered = matched + fallback;

        MetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            matched_total: matched,
            fallback_total: fallback,
            layouts_total: self.layouts_total.load(Ordering::Relaxed),
            layout_errors_total: self.layout_errors_total.load(Ordering::Relaxed),
            fallback_ratio: if answered == 0 {
                0.0
            } else {
                fallback as f64 / answered as f64
            },
        }
    }

    pub fn snapshot_json(&self) -> serde_json::Value {
        serde_json::to_value(self.snapshot()).unwrap_or(serde_json::Value::Null)
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,nuvemite_agents=info",
                service_name
            ))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(std::io::stderr)
            .init();
    });
}
