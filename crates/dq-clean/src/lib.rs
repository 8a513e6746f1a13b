//! Cleaning engine for the retail data-quality pipeline.
//!
//! Each entity is cleaned by an ordered rule table ([`rules::Rule`])
//! executed by a single engine ([`engine::apply_rules`]); the
//! [`pipeline::run_pipeline`] orchestrator runs the four cleaners in
//! dependency order and merges their audit entries into one report.

pub mod cleaners;
pub mod context;
pub mod engine;
pub mod pipeline;
pub mod rules;

pub use cleaners::{
    clean_customers, clean_order_items, clean_orders, clean_products, customer_rules,
    order_item_rules, order_rules, product_rules,
};
pub use context::CleanContext;
pub use engine::{apply_rules, ParentTables};
pub use pipeline::{run_pipeline, PipelineOutcome, Stage};
pub use rules::{FieldCheck, Rule};
