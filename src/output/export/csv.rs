//! CSV export of comparison reports
//!
//! One row per trajectory point, five columns:
//!
//! ```csv
//! Tiempo,y_Euler,y_Exacta,Error_Absoluto,Error_Relativo
//! 0.00000000,2.00000000,2.00000000,0.00000000,0.00000000
//! 0.20000000,1.80000000,1.80967484,0.00967484,0.00534617
//! ...
//! ```
//!
//! Values use fixed 8-decimal notation and the relative error is a fraction
//! (not percent). This default layout is what downstream scripts read, so
//! [`CsvConfig::default`] must keep producing it byte for byte.
//!
//! # With Metadata
//!
//! ```rust,ignore
//! use euler_rs::output::export::{CsvConfig, CsvExporter, CsvMetadata, Exporter};
//!
//! let metadata = CsvMetadata::from_report(&report);
//! let exporter = CsvExporter::new(CsvConfig::default().with_metadata(metadata));
//! exporter.export(&report, "results.csv")?;
//! ```
//!
//! **Output**:
//! ```csv
//! # Euler vs Exact Comparison
//! # Generated: 2026-10-19T09:30:00+00:00
//! # Equation: Linear Decay
//! # Solver: Forward Euler
//! # Decay Rate: 0.5
//! # Initial Condition: y(0) = 2
//! # Interval: [0, 1]
//! # Step: 0.2
//! #
//! Tiempo,y_Euler,y_Exacta,Error_Absoluto,Error_Relativo
//! ...
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::analysis::ComparisonReport;
use crate::output::export::Exporter;

/// Column headers of the result table, in order
pub const CSV_HEADERS: [&str; 5] = ["Tiempo", "y_Euler", "y_Exacta", "Error_Absoluto", "Error_Relativo"];

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("I/O error while writing CSV: {0}")]
    Io(#[from] io::Error),

    #[error("Empty data: report has no rows")]
    Empty,

    #[error("Data length mismatch: {times} time points versus {values} values in column {column}")]
    LengthMismatch {
        column: &'static str,
        times: usize,
        values: usize,
    },

    #[error("Invalid data: NaN or Inf detected in column {column} at row {row}")]
    NonFinite { column: &'static str, row: usize },
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use euler_rs::output::export::CsvConfig;
///
/// let config = CsvConfig::default().delimiter(';').precision(12);
/// assert_eq!(config.delimiter, ';');
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places (default: 8)
    pub precision: usize,

    /// Include `#` metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 8,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Semicolon delimiter and comma decimal separator
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only fields that are set are written.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    pub equation: Option<String>,
    pub solver: Option<String>,
    pub decay_rate: Option<f64>,
    pub t0: Option<f64>,
    pub y0: Option<f64>,
    pub t_final: Option<f64>,
    pub step: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Fill every field from a report
    pub fn from_report(report: &ComparisonReport) -> Self {
        let parameters = &report.parameters;

        Self {
            equation: report.trajectory.metadata.get("equation").cloned(),
            solver: report.trajectory.metadata.get("solver").cloned(),
            decay_rate: Some(parameters.decay_rate()),
            t0: Some(parameters.t0()),
            y0: Some(parameters.y0()),
            t_final: Some(parameters.t_final()),
            step: Some(parameters.step()),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn write_metadata_header<W: Write>(writer: &mut W, metadata: &CsvMetadata) -> Result<(), CsvError> {
    writeln!(writer, "# Euler vs Exact Comparison")?;
    writeln!(writer, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(equation) = &metadata.equation {
        writeln!(writer, "# Equation: {}", equation)?;
    }
    if let Some(solver) = &metadata.solver {
        writeln!(writer, "# Solver: {}", solver)?;
    }
    if let Some(k) = metadata.decay_rate {
        writeln!(writer, "# Decay Rate: {}", k)?;
    }
    if let (Some(t0), Some(y0)) = (metadata.t0, metadata.y0) {
        writeln!(writer, "# Initial Condition: y({}) = {}", t0, y0)?;
    }
    if let (Some(t0), Some(t_final)) = (metadata.t0, metadata.t_final) {
        writeln!(writer, "# Interval: [{}, {}]", t0, t_final)?;
    }
    if let Some(step) = metadata.step {
        writeln!(writer, "# Step: {}", step)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(writer, "# {}: {}", key, value)?;
    }

    writeln!(writer, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Columns of a report in header order
fn report_columns(report: &ComparisonReport) -> [&[f64]; 5] {
    [
        report.trajectory.times(),
        report.trajectory.values(),
        &report.exact_values,
        report.metrics.absolute_error(),
        report.metrics.relative_error(),
    ]
}

// =============================================================================
// Export Functions
// =============================================================================

/// Write a report as CSV into any writer
///
/// # Errors
///
/// - [`CsvError::Empty`] if the report has no rows
/// - [`CsvError::LengthMismatch`] if a column is shorter or longer than the time column
/// - [`CsvError::NonFinite`] if a value is NaN or infinite
/// - [`CsvError::Io`] if writing fails
pub fn write_report_csv<W: Write>(
    writer: &mut W,
    report: &ComparisonReport,
    configuration: &CsvConfig,
) -> Result<(), CsvError> {
    // ============================= Validation =============================

    let columns = report_columns(report);
    let rows = columns[0].len();

    if rows == 0 {
        return Err(CsvError::Empty);
    }

    for (column, values) in CSV_HEADERS.iter().zip(columns.iter()) {
        if values.len() != rows {
            return Err(CsvError::LengthMismatch {
                column: *column,
                times: rows,
                values: values.len(),
            });
        }

        if let Some(row) = values.iter().position(|v| !v.is_finite()) {
            return Err(CsvError::NonFinite { column: *column, row });
        }
    }

    // ============================= Write Metadata =========================

    if configuration.include_metadata
        && let Some(metadata) = &configuration.metadata
    {
        write_metadata_header(writer, metadata)?;
    }

    // ============================= Write Header ===========================

    let delimiter = configuration.delimiter.to_string();
    writeln!(writer, "{}", CSV_HEADERS.join(&delimiter))?;

    // ============================= Write Data =============================

    for row in 0..rows {
        let line: Vec<String> = columns
            .iter()
            .map(|column| format_number(column[row], configuration))
            .collect();

        writeln!(writer, "{}", line.join(&delimiter))?;
    }

    Ok(())
}

/// Export a report to a CSV file
///
/// Uses [`CsvConfig::default`] when `configuration` is `None`.
pub fn export_report_csv<P: AsRef<Path>>(
    report: &ComparisonReport,
    output_path: P,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let mut writer = BufWriter::new(File::create(output_path.as_ref())?);
    write_report_csv(&mut writer, report, configuration)?;
    writer.flush()?;

    debug!("wrote {} CSV rows to {}", report.len(), output_path.as_ref().display());

    Ok(())
}

// =============================================================================
// Exporter
// =============================================================================

/// [`Exporter`] writing the five-column CSV table
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export<P: AsRef<Path>>(&self, report: &ComparisonReport, path: P) -> Result<(), Self::Error> {
        export_report_csv(report, path, Some(&self.config))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
