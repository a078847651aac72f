pub mod catalog;
pub mod layout;
pub mod models;
pub mod responder;

pub use catalog::{catalog, product, product_or_default, DEFAULT_PRODUCT_KEY};
pub use layout::{
    compute_layout, compute_layout_tagged, default_radii, infer_variant, LayoutError,
};
pub use models::*;
pub use responder::{match_rule, respond, rules, FALLBACK_RESPONSE, SUGGESTED_PROMPTS, WELCOME_MESSAGE};
