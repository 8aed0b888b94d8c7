//! Export module for comparison reports.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a
//! new format is a new file and existing ones stay untouched.
//!
//! | Format  | Module   |
//! |---------|----------|
//! | CSV     | [`csv`]  |
//!
//! # Usage example
//!
//! ```rust,no_run
//! use euler_rs::analysis::ComparisonReport;
//! use euler_rs::equation::EquationParameters;
//! use euler_rs::output::export::{CsvExporter, Exporter};
//!
//! let report = ComparisonReport::run(&EquationParameters::default())?;
//! CsvExporter::default().export(&report, "resultados_comparacion.csv")?;
//! # Ok::<(), euler_rs::Error>(())
//! ```

pub mod csv;

pub use csv::{export_report_csv, write_report_csv, CsvConfig, CsvError, CsvExporter, CsvMetadata, CSV_HEADERS};

use std::path::Path;

use crate::analysis::ComparisonReport;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, so callers
/// can react to the precise failure without downcasting.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Write one row per trajectory point to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the path is invalid or the directory does not exist
    /// - `report` contains no data
    fn export<P: AsRef<Path>>(&self, report: &ComparisonReport, path: P) -> Result<(), Self::Error>;
}
