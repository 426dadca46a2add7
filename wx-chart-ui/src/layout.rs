//! Static layout for the scatterplot frame.
//!
//! Everything that was an ambient constant in a hand-grown chart lives here
//! as one injectable value: plot dimensions, margins, offsets, palette and
//! tick formats. `Default` is the stock 960x500 layout.

/// Margins around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Placement of the color legend, relative to the plot area's top-right.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendLayout {
    /// Horizontal shift from the plot area's right edge
    pub x_offset: f64,
    /// Vertical shift from the plot area's top edge
    pub y_offset: f64,
    /// Vertical distance between legend rows
    pub tick_spacing: f64,
    /// Horizontal distance from swatch center to label
    pub tick_text_offset: f64,
    pub title: String,
    /// Title anchor, relative to the legend origin
    pub title_x: f64,
    pub title_y: f64,
}

/// The full chart layout: one value carries every constant a frame needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    /// Vertical distance from the plot area to the X-axis label slot
    pub x_axis_label_offset: f64,
    /// Horizontal distance from the plot area to the rotated Y-axis label
    pub y_axis_label_offset: f64,
    /// The X-axis label text; empty in the stock layout
    pub x_axis_label: String,
    pub circle_radius: f64,
    /// Gap between the plot area and axis tick labels
    pub tick_offset: f64,
    /// Opacity of the base mark layer while a legend hover is active
    pub fade_opacity: f64,
    /// Target tick count for both axes
    pub tick_count: usize,
    /// Mark colors, cycled when categories outnumber them. An empty
    /// palette paints nothing: every mark and legend row is dropped.
    pub palette: Vec<String>,
    /// chrono format string for X-axis tick labels
    pub x_tick_format: String,
    pub legend: LegendLayout,
}

impl ChartLayout {
    /// Plot area width, inside the margins.
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Plot area height, inside the margins.
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        ChartLayout {
            width: 960.0,
            height: 500.0,
            margin: Margin {
                top: 20.0,
                right: 200.0,
                bottom: 85.0,
                left: 110.0,
            },
            x_axis_label_offset: 65.0,
            y_axis_label_offset: 52.0,
            x_axis_label: String::new(),
            circle_radius: 5.0,
            tick_offset: 7.0,
            fade_opacity: 0.2,
            tick_count: 10,
            palette: vec!["#137B80".to_string()],
            x_tick_format: "%Y".to_string(),
            legend: LegendLayout {
                x_offset: 60.0,
                y_offset: 60.0,
                tick_spacing: 25.0,
                tick_text_offset: 20.0,
                title: "Station".to_string(),
                title_x: 35.0,
                title_y: -25.0,
            },
        }
    }
}
