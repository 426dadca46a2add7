//! Projection of observations into scatterplot circles.

use crate::scale::Scales;
use wx_lcd::attribute::DailyAttribute;
use wx_lcd::observation::DailyObservation;

/// One plotted circle, in inner-plot pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub x: f64,
    pub y: f64,
    pub fill: String,
    pub radius: f64,
    /// Hover tooltip text, the Y value as displayed.
    pub tooltip: String,
}

/// Projects records through the scales into marks, in record order.
///
/// A record whose selected value is not finite gets no mark at all. NaN has
/// no position on the Y scale, and the domain already excluded it, so every
/// emitted circle sits at a real coordinate.
pub fn project_marks<'a, I>(
    records: I,
    scales: &Scales,
    attribute: DailyAttribute,
    radius: f64,
) -> Vec<Mark>
where
    I: IntoIterator<Item = &'a DailyObservation>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let value = attribute.value_of(record);
            if !value.is_finite() {
                return None;
            }
            let fill = scales.color.paint(&record.station_name)?;
            Some(Mark {
                x: scales.x.map(record.date),
                y: scales.y.map(value),
                fill: fill.to_string(),
                radius,
                tooltip: value.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ChartLayout;
    use chrono::NaiveDate;

    fn observation(y: i32, m: u32, d: u32, station: &str, wind: f64) -> DailyObservation {
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
            average_relative_humidity: f64::NAN,
        }
    }

    fn fixture() -> (Vec<DailyObservation>, Scales, ChartLayout) {
        let layout = ChartLayout::default();
        let records = vec![
            observation(2015, 1, 1, "SFO", 8.5),
            observation(2016, 7, 1, "SFO", f64::NAN),
            observation(2020, 12, 29, "SFO", 6.3),
        ];
        let scales = Scales::build(&records, DailyAttribute::AverageWindSpeed, &layout).unwrap();
        (records, scales, layout)
    }

    #[test]
    fn marks_skip_records_without_a_finite_value() {
        let (records, scales, layout) = fixture();
        let marks = project_marks(
            &records,
            &scales,
            DailyAttribute::AverageWindSpeed,
            layout.circle_radius,
        );
        assert_eq!(marks.len(), 2, "the NaN record should get no mark");
    }

    #[test]
    fn marks_carry_scaled_positions_and_paint() {
        let (records, scales, layout) = fixture();
        let marks = project_marks(
            &records,
            &scales,
            DailyAttribute::AverageWindSpeed,
            layout.circle_radius,
        );

        let first = &marks[0];
        assert_eq!(first.x, scales.x.map(records[0].date));
        assert_eq!(first.y, scales.y.map(8.5));
        assert_eq!(first.fill, "#137B80");
        assert_eq!(first.radius, 5.0);
        assert_eq!(first.tooltip, "8.5");

        // all marks land inside the inner plot
        for mark in &marks {
            assert!(mark.x >= 0.0 && mark.x <= layout.inner_width());
            assert!(mark.y >= 0.0 && mark.y <= layout.inner_height());
        }
    }

    #[test]
    fn subset_projection_reuses_the_same_positions() {
        let (records, scales, layout) = fixture();
        let all = project_marks(
            &records,
            &scales,
            DailyAttribute::AverageWindSpeed,
            layout.circle_radius,
        );
        let subset: Vec<&DailyObservation> =
            records.iter().filter(|r| r.station_name == "SFO").collect();
        let highlighted = project_marks(
            subset,
            &scales,
            DailyAttribute::AverageWindSpeed,
            layout.circle_radius,
        );
        // same scales, same records: the overlay aligns with the base layer
        assert_eq!(all, highlighted);
    }
}
