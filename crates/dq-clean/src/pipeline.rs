//! Pipeline orchestration.
//!
//! Drives the four cleaners strictly in dependency order so foreign-key
//! rules always see already-cleaned parents. Customers and products have no
//! inter-dependency, but the order is fixed anyway so the cleaning log is
//! deterministic.

use std::fmt;

use tracing::{debug, info_span};

use dq_model::{
    AuditLog, CleanedBundle, Dataset, DatasetSummary, PipelineReport, RawBundle,
};

use crate::cleaners::{clean_customers, clean_order_items, clean_orders, clean_products};
use crate::context::CleanContext;

/// Run progression. Load failures abort in front of the orchestrator (a
/// [`RawBundle`] cannot exist with a missing dataset), so by the time
/// `run_pipeline` is entered the run is past `Loaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Loaded,
    Cleaning,
    Reported,
    Done,
}

impl Stage {
    fn as_str(self) -> &'static str {
        match self {
            Self::Loaded => "loaded",
            Self::Cleaning => "cleaning",
            Self::Reported => "reported",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything one run produces: cleaned tables, the final report and the
/// full audit trail.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub cleaned: CleanedBundle,
    pub report: PipelineReport,
    pub audit: AuditLog,
}

/// Clean all four datasets and assemble the final report.
///
/// Never fails: every cleaner returns a complete table even when all of its
/// rows are dropped.
pub fn run_pipeline(raw: &RawBundle, ctx: &CleanContext) -> PipelineOutcome {
    let span = info_span!("pipeline");
    let _guard = span.enter();
    let mut log = AuditLog::new();

    debug!(stage = %Stage::Cleaning, "cleaning datasets in dependency order");
    let customers = clean_customers(&raw.customers, ctx, &mut log);
    let products = clean_products(&raw.products, ctx, &mut log);
    let orders = clean_orders(&raw.orders, &customers, ctx, &mut log);
    let order_items = clean_order_items(&raw.order_items, &orders, &products, ctx, &mut log);

    let cleaned = CleanedBundle {
        customers,
        products,
        orders,
        order_items,
    };

    debug!(stage = %Stage::Reported, "assembling final report");
    let summaries: Vec<DatasetSummary> = Dataset::ALL
        .into_iter()
        .map(|dataset| {
            DatasetSummary::new(dataset, raw.get(dataset).len(), cleaned.get(dataset).len())
        })
        .collect();

    let report = PipelineReport {
        summaries,
        cleaning_log: log.cleaning_entries().to_vec(),
        validation_errors: log.validation_errors().to_vec(),
        error_summary: log.error_summary(),
    };

    debug!(stage = %Stage::Done, "pipeline complete");
    PipelineOutcome {
        cleaned,
        report,
        audit: log,
    }
}
