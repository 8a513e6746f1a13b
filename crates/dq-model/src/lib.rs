pub mod audit;
pub mod enums;
pub mod error;
pub mod processing;
pub mod schema;
pub mod table;

pub use audit::{
    ActionKind, AuditLog, CleaningAction, CleaningLogEntry, IssueKind, IssueSummary,
    ValidationErrorEntry, VALUE_SNIPPET_MAX,
};
pub use enums::{Dataset, OrderStatus};
pub use error::{ModelError, Result};
pub use processing::{CleanedBundle, DatasetSummary, PipelineReport, RawBundle, TableBundle};
pub use table::{CellValue, Row, Table};
