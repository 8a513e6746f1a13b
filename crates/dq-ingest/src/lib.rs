//! Loader collaborator: CSV files in, schema-checked raw tables out.

pub mod csv_table;
pub mod error;
pub mod loader;

pub use csv_table::read_table;
pub use error::{IngestError, Result};
pub use loader::{load_dataset, load_raw_bundle};
