//! Fixed-width console rendering
//!
//! Renders reports as 90-column text blocks. Functions return `String` so the
//! caller decides where the text goes (stdout, a log, a test assertion).
//!
//! ```text
//! ==========================================================================================
//!                              TABLA COMPARATIVA DE RESULTADOS
//! ==========================================================================================
//!          t |     y(t) Exacta |      y(t) Euler |      Error Abs. |  Error Rel. (%)
//! ------------------------------------------------------------------------------------------
//!       0.00 |        2.000000 |        2.000000 |        0.000000 |          0.0000
//!       0.20 |        1.809675 |        1.800000 |        0.009675 |          0.5346
//! ...
//! ```

use std::fmt::Write;

use crate::analysis::{ComparisonReport, ConvergenceStudy};
use crate::equation::EquationParameters;

/// Table width in characters
pub const TABLE_WIDTH: usize = 90;

fn rule(c: char) -> String {
    c.to_string().repeat(TABLE_WIDTH)
}

/// Problem statement and the closed-form derivation
pub fn render_problem(parameters: &EquationParameters) -> String {
    let k = parameters.decay_rate();
    let t0 = parameters.t0();
    let y0 = parameters.y0();

    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "\n{:^width$}", "DEFINICIÓN DEL PROBLEMA", width = TABLE_WIDTH);
    let _ = writeln!(out, "{}", rule('-'));
    let _ = writeln!(out, "  Ecuación diferencial: dy/dt = -{}y", k);
    let _ = writeln!(out, "  Condición inicial:    y({}) = {}", t0, y0);
    let _ = writeln!(out, "  Intervalo de tiempo:  t ∈ [{}, {}]", t0, parameters.t_final());
    let _ = writeln!(out, "  Tamaño de paso:       h = {}", parameters.step());
    let _ = writeln!(out, "  Número de pasos:      {}", parameters.step_count());

    let _ = writeln!(out, "\n{:^width$}", "SOLUCIÓN ANALÍTICA (Separación de Variables)", width = TABLE_WIDTH);
    let _ = writeln!(out, "{}", rule('-'));
    let _ = writeln!(out, "    1. dy/dt = -{}y", k);
    let _ = writeln!(out, "    2. dy/y = -{} dt", k);
    let _ = writeln!(out, "    3. ln|y| = -{}t + C", k);
    let _ = writeln!(out, "    4. y = A·e^(-{}t)", k);
    let _ = writeln!(out, "    5. Aplicando y({}) = {}: y(t) = {}·e^(-{}(t - {}))", t0, y0, y0, k, t0);

    out
}

/// Row-by-row comparison followed by the four summary metrics
pub fn render_report(report: &ComparisonReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", rule('='));
    let _ = writeln!(out, "{:^width$}", "TABLA COMPARATIVA DE RESULTADOS", width = TABLE_WIDTH);
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(
        out,
        "{:>10} | {:>15} | {:>15} | {:>15} | {:>15}",
        "t", "y(t) Exacta", "y(t) Euler", "Error Abs.", "Error Rel. (%)"
    );
    let _ = writeln!(out, "{}", rule('-'));

    for row in report.rows() {
        let _ = writeln!(
            out,
            "{:>10.2} | {:>15.6} | {:>15.6} | {:>15.6} | {:>15.4}",
            row.time,
            row.exact,
            row.euler,
            row.absolute_error,
            row.relative_error * 100.0
        );
    }

    let metrics = &report.metrics;

    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "\n{:^width$}", "MÉTRICAS DE ERROR", width = TABLE_WIDTH);
    let _ = writeln!(out, "{}", rule('-'));
    let _ = writeln!(out, "  • Error Absoluto Máximo:    {:.6}", metrics.max_absolute());
    let _ = writeln!(out, "  • Error Absoluto Medio:     {:.6}", metrics.mean_absolute());
    let _ = writeln!(out, "  • Error Relativo Máximo:    {:.4}%", metrics.max_relative_percent());
    let _ = writeln!(out, "  • Error Relativo Medio:     {:.4}%", metrics.mean_relative_percent());
    let _ = writeln!(out, "{}", rule('='));

    out
}

/// Step-halving study with observed orders
pub fn render_convergence(study: &ConvergenceStudy) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{:^width$}", "ANÁLISIS DE CONVERGENCIA", width = TABLE_WIDTH);
    let _ = writeln!(out, "{}", rule('-'));

    if let Some(base) = study.levels.first() {
        let _ = writeln!(out, "  El método de Euler tiene:");
        let _ = writeln!(out, "    • Error local:  O(h²) = O({:.4})", base.step * base.step);
        let _ = writeln!(out, "    • Error global: O(h)  = O({:.4})", base.step);
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{:>12} | {:>8} | {:>15} | {:>10} | {:>8}", "h", "pasos", "Error Abs. Máx.", "razón", "orden");

    for level in &study.levels {
        let ratio = level.ratio.map_or_else(|| "-".to_string(), |r| format!("{:.4}", r));
        let order = level.observed_order().map_or_else(|| "-".to_string(), |p| format!("{:.4}", p));

        let _ = writeln!(
            out,
            "{:>12.6} | {:>8} | {:>15.6} | {:>10} | {:>8}",
            level.step, level.step_count, level.max_absolute_error, ratio, order
        );
    }

    let _ = writeln!(out, "{}", rule('='));

    out
}

// =================================================================================================
// Tests
// =================================================================================================
