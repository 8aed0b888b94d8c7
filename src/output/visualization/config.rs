//! Plot configuration for the comparison figure

use plotters::prelude::*;

/// Configuration for customizing the two-panel comparison plot
///
/// # Example
///
/// ```rust,ignore
/// use euler_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::default();
/// config.euler_color = BLACK;
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1200)
    pub width: u32,

    /// Image height in pixels (default: 1000)
    pub height: u32,

    /// Caption of the top panel; `None` derives it from the parameters
    pub solution_title: Option<String>,

    /// Caption of the bottom panel; `None` derives it from the metrics
    pub error_title: Option<String>,

    /// X-axis label shared by both panels (default: "Tiempo t")
    pub xlabel: String,

    /// Y-axis label of the top panel (default: "y(t)")
    pub solution_ylabel: String,

    /// Y-axis label of the bottom panel (default: "Error")
    pub error_ylabel: String,

    /// Exact solution curve (default: BLUE)
    pub exact_color: RGBColor,

    /// Euler points and segments (default: RED)
    pub euler_color: RGBColor,

    /// Absolute error curve (default: GREEN)
    pub absolute_color: RGBColor,

    /// Relative error curve (default: MAGENTA)
    pub relative_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Marker radius in pixels (default: 5)
    pub marker_size: u32,

    /// Samples of the exact curve (default: 200)
    pub dense_points: usize,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 1000,
            solution_title: None,
            error_title: None,
            xlabel: "Tiempo t".to_string(),
            solution_ylabel: "y(t)".to_string(),
            error_ylabel: "Error".to_string(),
            exact_color: BLUE,
            euler_color: RED,
            absolute_color: GREEN,
            relative_color: MAGENTA,
            background: WHITE,
            line_width: 2,
            marker_size: 5,
            dense_points: 200,
            show_grid: true,
        }
    }
}

impl PlotConfig {
    /// Builder pattern: set image size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder pattern: set both panel captions
    pub fn titles(mut self, solution: impl Into<String>, error: impl Into<String>) -> Self {
        self.solution_title = Some(solution.into());
        self.error_title = Some(error.into());
        self
    }
}

// =================================================================================================
// Tests
// =================================================================================================
