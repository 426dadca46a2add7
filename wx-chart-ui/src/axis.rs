//! Axis tick geometry: positioned, labelled ticks for both axes.

use crate::scale::{LinearScale, TimeScale};

/// One axis tick, positioned along its axis in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Offset along the axis, in the scale's range units.
    pub position: f64,
    pub label: String,
}

/// Bottom-axis ticks with date labels rendered through `format`
/// (strftime syntax, "%Y" for year-only labels).
pub fn x_ticks(scale: &TimeScale, format: &str) -> Vec<Tick> {
    scale
        .ticks()
        .into_iter()
        .map(|date| Tick {
            position: scale.map(date),
            label: date.format(format).to_string(),
        })
        .collect()
}

/// Left-axis ticks with numeric labels.
///
/// Tick values come out of the scale exact, so plain formatting is enough;
/// no trailing-zero padding is added.
pub fn y_ticks(scale: &LinearScale) -> Vec<Tick> {
    scale
        .ticks()
        .into_iter()
        .map(|value| Tick {
            position: scale.map(value),
            label: value.to_string(),
        })
        .collect()
}
