//! The catalog of plottable daily attributes.

use crate::observation::DailyObservation;

/// A measured attribute that can be plotted on the Y axis.
///
/// Variants are listed in selector display order. Each pairs an LCD CSV
/// column key with its human-readable axis label and the corresponding
/// [`DailyObservation`] field. `average_station_pressure` deliberately has
/// no entry here: it is parsed and stored for future axes only.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DailyAttribute {
    AverageRelativeHumidity,
    AverageWindSpeed,
    PeakWindDirection,
    PeakWindSpeed,
    SustainedWindDirection,
    SustainedWindSpeed,
    DepartureFromNormalAverageTemperature,
}

impl DailyAttribute {
    /// All catalog entries, in display order.
    pub const ALL: [DailyAttribute; 7] = [
        DailyAttribute::AverageRelativeHumidity,
        DailyAttribute::AverageWindSpeed,
        DailyAttribute::PeakWindDirection,
        DailyAttribute::PeakWindSpeed,
        DailyAttribute::SustainedWindDirection,
        DailyAttribute::SustainedWindSpeed,
        DailyAttribute::DepartureFromNormalAverageTemperature,
    ];

    /// The CSV column key for this attribute.
    pub fn key(self) -> &'static str {
        match self {
            DailyAttribute::AverageRelativeHumidity => "DailyAverageRelativeHumidity",
            DailyAttribute::AverageWindSpeed => "DailyAverageWindSpeed",
            DailyAttribute::PeakWindDirection => "DailyPeakWindDirection",
            DailyAttribute::PeakWindSpeed => "DailyPeakWindSpeed",
            DailyAttribute::SustainedWindDirection => "DailySustainedWindDirection",
            DailyAttribute::SustainedWindSpeed => "DailySustainedWindSpeed",
            DailyAttribute::DepartureFromNormalAverageTemperature => {
                "DailyDepartureFromNormalAverageTemperature"
            }
        }
    }

    /// The human-readable axis label.
    pub fn label(self) -> &'static str {
        match self {
            DailyAttribute::AverageRelativeHumidity => "Daily Average Relative Humidity",
            DailyAttribute::AverageWindSpeed => "Daily Average Wind Speed",
            DailyAttribute::PeakWindDirection => "Daily Peak Wind Direction",
            DailyAttribute::PeakWindSpeed => "Daily Peak Wind Speed",
            DailyAttribute::SustainedWindDirection => "Daily Sustained Wind Direction",
            DailyAttribute::SustainedWindSpeed => "Daily Sustained Wind Speed",
            DailyAttribute::DepartureFromNormalAverageTemperature => {
                "Daily Departure From Normal Average Temperature"
            }
        }
    }

    /// Looks up a catalog entry by its CSV column key.
    pub fn from_key(key: &str) -> Option<DailyAttribute> {
        Self::ALL.into_iter().find(|attribute| attribute.key() == key)
    }

    /// The value of this attribute on one observation.
    pub fn value_of(self, observation: &DailyObservation) -> f64 {
        match self {
            DailyAttribute::AverageRelativeHumidity => observation.average_relative_humidity,
            DailyAttribute::AverageWindSpeed => observation.average_wind_speed,
            DailyAttribute::PeakWindDirection => observation.peak_wind_direction,
            DailyAttribute::PeakWindSpeed => observation.peak_wind_speed,
            DailyAttribute::SustainedWindDirection => observation.sustained_wind_direction,
            DailyAttribute::SustainedWindSpeed => observation.sustained_wind_speed,
            DailyAttribute::DepartureFromNormalAverageTemperature => {
                observation.departure_from_normal_average_temperature
            }
        }
    }
}

impl Default for DailyAttribute {
    /// The selector's initial choice.
    fn default() -> Self {
        DailyAttribute::AverageWindSpeed
    }
}
