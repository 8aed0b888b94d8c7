//! Two-panel comparison figure
//!
//! - **Top**: exact solution on a dense grid, Euler points joined by
//!   segments, and an annotation at the largest absolute error
//! - **Bottom**: absolute and relative error at each Euler point
//!
//! The backend is picked from the file extension: `.svg` for vector output,
//! anything else goes through the bitmap backend (PNG).

use std::error::Error;

use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::analysis::ComparisonReport;
use crate::equation::dense_grid;
use crate::output::visualization::PlotConfig;

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Min and max of the given series, widened by 10% of the span
fn padded_range<'a>(series: impl IntoIterator<Item = &'a f64>) -> (f64, f64) {
    let (min, max) = series
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    let span = max - min;
    if span > 0.0 {
        (min - 0.1 * span, max + 0.1 * span)
    } else {
        (min - 0.5, max + 0.5)
    }
}

fn draw_solution_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    report: &ComparisonReport,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let parameters = &report.parameters;
    let trajectory = &report.trajectory;

    let dense_times = dense_grid(parameters.t0(), parameters.t_final(), config.dense_points);
    let dense_exact = parameters.exact_solution().evaluate_all(&dense_times);

    let title = config.solution_title.clone().unwrap_or_else(|| {
        format!(
            "Solución Analítica vs Método de Euler: dy/dt = -{}y, y({}) = {}",
            parameters.decay_rate(),
            parameters.t0(),
            parameters.y0()
        )
    });

    let (y_min, y_max) = padded_range(dense_exact.iter().chain(trajectory.values()));

    let mut chart = ChartBuilder::on(area)
        .caption(&title, ("sans-serif", 24).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(parameters.t0()..parameters.t_final(), y_min..y_max)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(config.xlabel.as_str()).y_desc(config.solution_ylabel.as_str());

    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    // Exact curve
    let exact_style = config.exact_color.stroke_width(config.line_width);
    chart
        .draw_series(LineSeries::new(
            dense_times.iter().copied().zip(dense_exact.iter().copied()),
            exact_style,
        ))?
        .label(format!(
            "Solución Analítica: y(t) = {}e^(-{}(t - {}))",
            parameters.y0(),
            parameters.decay_rate(),
            parameters.t0()
        ))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], exact_style));

    // Euler segments and markers
    let euler_style = config.euler_color.stroke_width(config.line_width);
    chart
        .draw_series(LineSeries::new(trajectory.points(), euler_style))?
        .label(format!("Método de Euler (h = {})", parameters.step()))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], euler_style));

    chart.draw_series(
        trajectory
            .points()
            .map(|point| Circle::new(point, config.marker_size, config.euler_color.filled())),
    )?;

    // Largest error annotation
    let index = report.metrics.max_absolute_index();
    let anchor = (trajectory.times()[index], trajectory.values()[index]);

    chart.draw_series(std::iter::once(Circle::new(
        anchor,
        config.marker_size * 2,
        config.euler_color.stroke_width(config.line_width),
    )))?;

    chart.draw_series(std::iter::once(Text::new(
        format!("Error máximo: {:.4}", report.metrics.max_absolute()),
        anchor,
        ("sans-serif", 18).into_font().color(&config.euler_color),
    )))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn draw_error_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    report: &ComparisonReport,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let parameters = &report.parameters;
    let metrics = &report.metrics;
    let times = report.trajectory.times();

    let title = config.error_title.clone().unwrap_or_else(|| {
        format!(
            "Análisis de Error: Error Absoluto Máximo {:.4} | Error Relativo Máximo {:.2}%",
            metrics.max_absolute(),
            metrics.max_relative_percent()
        )
    });

    let (_, y_max) = padded_range(metrics.absolute_error().iter().chain(metrics.relative_error()));

    let mut chart = ChartBuilder::on(area)
        .caption(&title, ("sans-serif", 24).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(parameters.t0()..parameters.t_final(), 0.0..y_max)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(config.xlabel.as_str()).y_desc(config.error_ylabel.as_str());

    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    let series = [
        ("Error Absoluto |y_exacta - y_euler|", metrics.absolute_error(), config.absolute_color),
        ("Error Relativo", metrics.relative_error(), config.relative_color),
    ];

    for (label, values, color) in series {
        let style = color.stroke_width(config.line_width);

        chart
            .draw_series(LineSeries::new(times.iter().copied().zip(values.iter().copied()), style))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

        chart.draw_series(
            times
                .iter()
                .zip(values)
                .map(|(&t, &e)| Circle::new((t, e), config.marker_size, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn draw_comparison_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    report: &ComparisonReport,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    root.fill(&config.background)?;

    let panels = root.split_evenly((2, 1));
    draw_solution_panel(&panels[0], report, config)?;
    draw_error_panel(&panels[1], report, config)?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Plotting Function
// =================================================================================================

/// Plot the exact vs Euler comparison and its errors
///
/// # Arguments
///
/// * `report` - Output of [`ComparisonReport::run`]
/// * `output_path` - Output file path (PNG/SVG based on extension)
/// * `configuration` - Optional PlotConfig (uses defaults if None)
///
/// # Example
///
/// ```rust,ignore
/// use euler_rs::output::visualization::plot_comparison;
///
/// let report = ComparisonReport::run(&EquationParameters::default())?;
/// plot_comparison(&report, "comparacion_euler_analitica.png", None)?;
/// ```
///
/// # Errors
///
/// Returns error if:
/// - the report is empty
/// - the file cannot be written
/// - plotting fails
pub fn plot_comparison(
    report: &ComparisonReport,
    output_path: &str,
    configuration: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if report.is_empty() {
        return Err("Empty data: nothing to plot".into());
    }

    let owned_config = configuration.cloned().unwrap_or_default();
    let config = &owned_config;

    if output_path.ends_with(".svg") {
        let root = SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_comparison_on_area(&root, report, config)?;
    } else {
        let root = BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_comparison_on_area(&root, report, config)?;
    }

    debug!("comparison plot written to {}", output_path);

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
