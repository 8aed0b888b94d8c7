//! Crate-level error type
//!
//! Each layer keeps its own error enum; [`Error`] gathers them for callers
//! that run the whole pipeline.

use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::output::export::CsvError;
use crate::solver::SolverError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Export(#[from] CsvError),
}

pub type Result<T> = std::result::Result<T, Error>;
