//! Color legend rows and their hover dimming.

use crate::layout::ChartLayout;
use crate::scale::OrdinalScale;

/// One legend row: swatch paint, vertical offset, and current opacity.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub station_name: String,
    pub fill: String,
    /// Vertical offset from the legend origin, one row per category.
    pub y: f64,
    pub opacity: f64,
}

/// Lays out one row per color-domain category, in domain order.
///
/// While a hover is active every other row dims to the layout's fade
/// opacity; the hovered row, and all rows when nothing is hovered, stay
/// fully opaque.
pub fn legend_entries(
    color: &OrdinalScale,
    hovered: Option<&str>,
    layout: &ChartLayout,
) -> Vec<LegendEntry> {
    color
        .domain()
        .iter()
        .enumerate()
        .filter_map(|(index, name)| {
            let fill = color.paint(name)?;
            let opacity = match hovered {
                Some(target) if target != name => layout.fade_opacity,
                _ => 1.0,
            };
            Some(LegendEntry {
                station_name: name.clone(),
                fill: fill.to_string(),
                y: index as f64 * layout.legend.tick_spacing,
                opacity,
            })
        })
        .collect()
}
