//! euler-rs: Euler vs exact solution for dy/dt = -k·y
//!
//! Usage: `euler-rs [OUTPUT_DIR]`
//!
//! Runs the reference case (k = 0.5, y(0) = 2, t ∈ [0, 1], h = 0.2), prints
//! the problem, the comparison table and a step-halving study, then writes
//! the comparison plot and the CSV into `OUTPUT_DIR` (current dir if absent).
//!
//! Set `RUST_LOG=debug` to see solver and export traces on stderr.

use std::path::PathBuf;

use log::info;

use euler_rs::analysis::{ComparisonReport, ConvergenceStudy};
use euler_rs::equation::EquationParameters;
use euler_rs::output::export::{CsvExporter, Exporter};
use euler_rs::output::{plot_comparison, render_convergence, render_problem, render_report};

const PLOT_FILE: &str = "comparacion_euler_analitica.png";
const CSV_FILE: &str = "resultados_comparacion.csv";

/// Halvings shown in the convergence section (h, h/2, h/4)
const HALVINGS: usize = 2;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

    println!("══════════════════════════════════════════════════════════════════════════════════════════");
    println!("  Ecuación Diferencial Separable: Método de Euler vs Solución Analítica");
    println!("══════════════════════════════════════════════════════════════════════════════════════════");

    // ====== Problem ======

    let parameters = EquationParameters::default();
    print!("{}", render_problem(&parameters));

    // ====== Comparison ======

    let report = ComparisonReport::run(&parameters)?;
    info!(
        "{} points, max absolute error {:.6}",
        report.len(),
        report.metrics.max_absolute()
    );
    print!("{}", render_report(&report));

    // ====== Convergence ======

    let study = ConvergenceStudy::run(&parameters, HALVINGS)?;
    if let Some(order) = study.mean_order() {
        info!("mean observed order {:.4}", order);
    }
    println!();
    print!("{}", render_convergence(&study));

    // ====== Files ======

    std::fs::create_dir_all(&output_dir)?;

    let plot_path = output_dir.join(PLOT_FILE);
    let plot_path = plot_path.to_str().ok_or("output path is not valid UTF-8")?;
    plot_comparison(&report, plot_path, None)?;
    info!("plot written to {}", plot_path);

    let csv_path = output_dir.join(CSV_FILE);
    CsvExporter::default().export(&report, &csv_path)?;
    info!("csv written to {}", csv_path.display());

    println!("\n  ✓ Gráfica guardada: {}", plot_path);
    println!("  ✓ Datos guardados:  {}", csv_path.display());

    Ok(())
}
