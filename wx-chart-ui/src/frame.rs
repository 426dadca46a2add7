//! Frame composition.
//!
//! A [`Frame`] is one complete, immutable description of the chart: ticks,
//! labels, marks, highlight overlay, and legend rows. Composing it is a pure
//! function of the loaded records, the interaction state, and the layout, so
//! the view layer only ever walks a frame and writes elements.

use crate::axis::{self, Tick};
use crate::layout::ChartLayout;
use crate::legend::{legend_entries, LegendEntry};
use crate::marks::{project_marks, Mark};
use crate::scale::Scales;
use crate::state::InteractionState;
use wx_lcd::observation::DailyObservation;

/// Everything one render pass draws.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub x_axis_label: String,
    pub y_axis_label: String,
    /// Every plottable record, drawn first.
    pub marks: Vec<Mark>,
    /// Marks of the hovered station, drawn over the base layer at full
    /// opacity. Empty when no hover is active.
    pub highlighted: Vec<Mark>,
    /// Opacity of the base mark layer; drops to the fade opacity while a
    /// hover is active.
    pub base_opacity: f64,
    pub legend: Vec<LegendEntry>,
    pub legend_title: String,
}

impl Frame {
    /// Composes the frame for the current records and interaction state.
    ///
    /// `None` when there is nothing to draw: no records, or no finite value
    /// under the selected attribute. Hover never feeds back into the scales,
    /// so highlighting leaves every axis and position untouched.
    pub fn compose(
        records: &[DailyObservation],
        state: &InteractionState,
        layout: &ChartLayout,
    ) -> Option<Frame> {
        let scales = Scales::build(records, state.selected(), layout)?;
        let marks = project_marks(records, &scales, state.selected(), layout.circle_radius);
        let highlighted = project_marks(
            state.filtered(records),
            &scales,
            state.selected(),
            layout.circle_radius,
        );
        Some(Frame {
            x_ticks: axis::x_ticks(&scales.x, &layout.x_tick_format),
            y_ticks: axis::y_ticks(&scales.y),
            x_axis_label: layout.x_axis_label.clone(),
            y_axis_label: state.selected().label().to_string(),
            marks,
            highlighted,
            base_opacity: if state.hovered().is_some() {
                layout.fade_opacity
            } else {
                1.0
            },
            legend: legend_entries(&scales.color, state.hovered(), layout),
            legend_title: layout.legend.title.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wx_lcd::attribute::DailyAttribute;

    fn observation(
        y: i32,
        m: u32,
        d: u32,
        station: &str,
        wind: f64,
        humidity: f64,
    ) -> DailyObservation {
        DailyObservation {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            station_name: station.to_string(),
            peak_wind_speed: f64::NAN,
            average_wind_speed: wind,
            average_station_pressure: f64::NAN,
            peak_wind_direction: f64::NAN,
            sustained_wind_direction: f64::NAN,
            sustained_wind_speed: f64::NAN,
            departure_from_normal_average_temperature: f64::NAN,
            average_relative_humidity: humidity,
        }
    }

    fn records() -> Vec<DailyObservation> {
        vec![
            observation(2015, 1, 1, "SFO", 8.5, 61.0),
            observation(2016, 7, 1, "SFO", 12.1, f64::NAN),
            observation(2018, 3, 10, "OAK", 6.3, 70.0),
            observation(2020, 12, 29, "SFO", 9.9, 55.0),
        ]
    }

    #[test]
    fn default_frame_draws_everything_opaque() {
        let layout = ChartLayout::default();
        let frame = Frame::compose(&records(), &InteractionState::default(), &layout).unwrap();

        assert_eq!(frame.y_axis_label, "Daily Average Wind Speed");
        assert_eq!(frame.x_axis_label, "");
        assert_eq!(frame.legend_title, "Station");
        assert_eq!(frame.marks.len(), 4);
        assert!(frame.highlighted.is_empty());
        assert_eq!(frame.base_opacity, 1.0);
        assert_eq!(frame.legend.len(), 2);
    }

    #[test]
    fn attribute_switch_rescales_y_only() {
        let layout = ChartLayout::default();
        let records = records();
        let wind = Frame::compose(&records, &InteractionState::default(), &layout).unwrap();

        let mut state = InteractionState::default();
        state.select_attribute("DailyAverageRelativeHumidity");
        let humidity = Frame::compose(&records, &state, &layout).unwrap();

        assert_eq!(humidity.y_axis_label, "Daily Average Relative Humidity");
        assert_ne!(humidity.y_ticks, wind.y_ticks);
        assert_eq!(humidity.x_ticks, wind.x_ticks, "time axis must not move");
        assert_eq!(humidity.legend, wind.legend, "legend must not change");
        // the NaN humidity record drops out of the mark set
        assert_eq!(humidity.marks.len(), 3);
    }

    #[test]
    fn hover_overlays_without_rescaling() {
        let layout = ChartLayout::default();
        let records = records();
        let resting = Frame::compose(&records, &InteractionState::default(), &layout).unwrap();

        let mut state = InteractionState::default();
        state.hover_station("SFO");
        let hovered = Frame::compose(&records, &state, &layout).unwrap();

        assert_eq!(hovered.base_opacity, layout.fade_opacity);
        assert_eq!(hovered.marks, resting.marks, "base layer keeps its geometry");
        assert_eq!(hovered.x_ticks, resting.x_ticks);
        assert_eq!(hovered.y_ticks, resting.y_ticks);
        assert_eq!(hovered.highlighted.len(), 3);
        for mark in &hovered.highlighted {
            assert!(
                resting.marks.contains(mark),
                "overlay marks must align with base marks"
            );
        }

        let sfo_row = hovered
            .legend
            .iter()
            .find(|e| e.station_name == "SFO")
            .unwrap();
        let oak_row = hovered
            .legend
            .iter()
            .find(|e| e.station_name == "OAK")
            .unwrap();
        assert_eq!(sfo_row.opacity, 1.0);
        assert_eq!(oak_row.opacity, layout.fade_opacity);
    }

    #[test]
    fn clearing_hover_restores_the_resting_frame() {
        let layout = ChartLayout::default();
        let records = records();
        let resting = Frame::compose(&records, &InteractionState::default(), &layout).unwrap();

        let mut state = InteractionState::default();
        state.hover_station("SFO");
        state.clear_hover();
        let restored = Frame::compose(&records, &state, &layout).unwrap();
        assert_eq!(restored, resting);
    }

    #[test]
    fn no_records_means_no_frame() {
        let layout = ChartLayout::default();
        assert!(Frame::compose(&[], &InteractionState::default(), &layout).is_none());
    }

    #[test]
    fn empty_palette_composes_a_bare_frame() {
        let mut layout = ChartLayout::default();
        layout.palette.clear();
        let frame = Frame::compose(&records(), &InteractionState::default(), &layout).unwrap();
        assert!(frame.marks.is_empty(), "unpainted marks are dropped");
        assert!(frame.legend.is_empty(), "unpainted legend rows are dropped");
        assert!(!frame.x_ticks.is_empty(), "axes still render");
        assert!(!frame.y_ticks.is_empty());
    }

    #[test]
    fn all_nan_attribute_means_no_frame() {
        let layout = ChartLayout::default();
        let records = records();
        let mut state = InteractionState::default();
        state.select_attribute(DailyAttribute::PeakWindSpeed.key());
        // peak_wind_speed is NaN on every fixture record
        assert!(Frame::compose(&records, &state, &layout).is_none());
    }

    #[test]
    fn x_ticks_span_whole_years() {
        let layout = ChartLayout::default();
        let frame = Frame::compose(&records(), &InteractionState::default(), &layout).unwrap();
        let labels: Vec<&str> = frame.x_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            ["2015", "2016", "2017", "2018", "2019", "2020", "2021"]
        );
    }
}
