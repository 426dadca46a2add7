//! Daily climate observation records parsed from NOAA LCD CSV exports.
//!
//! # CSV Format
//!
//! One header row, then one row per day. Column lookup is header-driven;
//! the export may carry more columns than the ones read here and they are
//! ignored. The columns consumed:
//!
//! ```text
//! DATE,NAME,DailyPeakWindSpeed,DailyAverageWindSpeed,DailyAverageStationPressure,
//! DailyPeakWindDirection,DailySustainedWindDirection,DailySustainedWindSpeed,
//! DailyDepartureFromNormalAverageTemperature,DailyAverageRelativeHumidity
//! ```
//!
//! Numeric fields use weak coercion: anything that does not parse as a float
//! becomes NaN and never fails the batch. A row whose `DATE` does not parse
//! is skipped with a warning so that every surviving record carries a valid
//! calendar date.

use crate::error::{LcdError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use serde::Deserialize;

/// Date format for daily rows: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fallback date format for timestamped exports: "YYYY-MM-DDTHH:MM:SS"
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Header columns that must be present for a load to proceed at all.
const REQUIRED_COLUMNS: [&str; 2] = ["DATE", "NAME"];

/// A single daily observation from an LCD station.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyObservation {
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Station name (e.g., "SFO")
    pub station_name: String,
    pub peak_wind_speed: f64,
    pub average_wind_speed: f64,
    /// Parsed and stored, though no selector entry reads it yet
    pub average_station_pressure: f64,
    pub peak_wind_direction: f64,
    pub sustained_wind_direction: f64,
    pub sustained_wind_speed: f64,
    pub departure_from_normal_average_temperature: f64,
    pub average_relative_humidity: f64,
}

/// One raw string-keyed CSV row, before any coercion.
///
/// Every field is optional so rows shorter than the header never fail at
/// the deserialization layer; a missing field coerces exactly like an
/// empty one.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "DATE")]
    date: Option<String>,
    #[serde(rename = "NAME")]
    name: Option<String>,
    #[serde(rename = "DailyPeakWindSpeed")]
    peak_wind_speed: Option<String>,
    #[serde(rename = "DailyAverageWindSpeed")]
    average_wind_speed: Option<String>,
    #[serde(rename = "DailyAverageStationPressure")]
    average_station_pressure: Option<String>,
    #[serde(rename = "DailyPeakWindDirection")]
    peak_wind_direction: Option<String>,
    #[serde(rename = "DailySustainedWindDirection")]
    sustained_wind_direction: Option<String>,
    #[serde(rename = "DailySustainedWindSpeed")]
    sustained_wind_speed: Option<String>,
    #[serde(rename = "DailyDepartureFromNormalAverageTemperature")]
    departure_from_normal_average_temperature: Option<String>,
    #[serde(rename = "DailyAverageRelativeHumidity")]
    average_relative_humidity: Option<String>,
}

/// Coerces a raw CSV field to a number.
///
/// Whitespace is trimmed; anything that does not parse as a float, including
/// the empty string, becomes NaN. This never errors: a NaN measurement means
/// "no position" downstream, not a failed load.
pub fn parse_numeric_field(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Coerces a field that a short row may have dropped; missing counts as
/// empty.
fn parse_numeric_option(raw: Option<String>) -> f64 {
    parse_numeric_field(raw.as_deref().unwrap_or(""))
}

/// Parses a DATE field, accepting daily and timestamped forms.
fn parse_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT).map(|stamp| stamp.date())
        })
        .map_err(|e| LcdError::DateParse(format!("{}: {}", trimmed, e)))
}

impl TryFrom<RawRow> for DailyObservation {
    type Error = LcdError;

    fn try_from(raw: RawRow) -> Result<Self> {
        Ok(DailyObservation {
            date: parse_date(raw.date.as_deref().unwrap_or(""))?,
            station_name: raw.name.unwrap_or_default(),
            peak_wind_speed: parse_numeric_option(raw.peak_wind_speed),
            average_wind_speed: parse_numeric_option(raw.average_wind_speed),
            average_station_pressure: parse_numeric_option(raw.average_station_pressure),
            peak_wind_direction: parse_numeric_option(raw.peak_wind_direction),
            sustained_wind_direction: parse_numeric_option(raw.sustained_wind_direction),
            sustained_wind_speed: parse_numeric_option(raw.sustained_wind_speed),
            departure_from_normal_average_temperature: parse_numeric_option(
                raw.departure_from_normal_average_temperature,
            ),
            average_relative_humidity: parse_numeric_option(raw.average_relative_humidity),
        })
    }
}

/// Parses an LCD CSV export into daily observations, in row order.
///
/// Reader-level CSV errors and a header row missing `DATE` or `NAME` fail
/// the whole load. Rows with an unparseable date are skipped with a warning;
/// numeric coercion failures and fields dropped by short rows degrade to
/// NaN and never fail.
pub fn parse_daily_climate(csv_text: &str) -> Result<Vec<DailyObservation>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|column| column == required) {
            return Err(LcdError::MissingColumn(required.to_string()));
        }
    }

    let mut observations = Vec::new();
    let mut skipped = 0u32;
    for row in reader.deserialize::<RawRow>() {
        let raw = row?;
        match DailyObservation::try_from(raw) {
            Ok(observation) => observations.push(observation),
            Err(e) => {
                log::warn!("skipping row: {}", e);
                skipped += 1;
            }
        }
    }
    log::info!(
        "parsed {} daily observations, skipped {} invalid rows",
        observations.len(),
        skipped
    );
    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LcdError;
    use chrono::NaiveDate;

    // Column order shuffled relative to the struct on purpose, with an extra
    // STATION column, to exercise header-driven lookup.
    const CSV_FIXTURE: &str = "\
STATION,DATE,NAME,DailyAverageRelativeHumidity,DailyAverageStationPressure,DailyAverageWindSpeed,DailyDepartureFromNormalAverageTemperature,DailyPeakWindDirection,DailyPeakWindSpeed,DailySustainedWindDirection,DailySustainedWindSpeed
72494023234,2015-01-01,SFO,61,30.01,8.5,-2.2,310,25.9,310,20.0
72494023234,2015-01-02,SFO,76,29.93,NA,1.4,170,17.0,180,12.1
";

    #[test]
    fn parse_builds_typed_records() {
        let observations = parse_daily_climate(CSV_FIXTURE).unwrap();
        assert_eq!(observations.len(), 2);

        let first = &observations[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2015, 1, 1).unwrap());
        assert_eq!(first.station_name, "SFO");
        assert_eq!(first.average_wind_speed, 8.5);
        assert_eq!(first.average_relative_humidity, 61.0);
        assert_eq!(first.average_station_pressure, 30.01);
        assert_eq!(first.peak_wind_direction, 310.0);
        assert_eq!(first.departure_from_normal_average_temperature, -2.2);
    }

    #[test]
    fn parse_coerces_non_numeric_to_nan() {
        let observations = parse_daily_climate(CSV_FIXTURE).unwrap();
        let second = &observations[1];
        assert!(
            second.average_wind_speed.is_nan(),
            "'NA' should coerce to NaN, not fail the batch"
        );
        assert_eq!(second.average_relative_humidity, 76.0);
        assert_eq!(second.date, NaiveDate::from_ymd_opt(2015, 1, 2).unwrap());
    }

    #[test]
    fn parse_skips_rows_with_invalid_dates() {
        let csv = "\
DATE,NAME,DailyAverageWindSpeed
2015-01-01,SFO,8.5
not-a-date,SFO,9.0
2015-01-03,SFO,7.2
";
        let observations = parse_daily_climate(csv).unwrap();
        assert_eq!(observations.len(), 2, "invalid-date row should be skipped");
        assert_eq!(observations[1].average_wind_speed, 7.2);
    }

    #[test]
    fn parse_accepts_timestamped_dates() {
        let csv = "\
DATE,NAME,DailyAverageWindSpeed
2015-01-01T23:59:00,SFO,8.5
";
        let observations = parse_daily_climate(csv).unwrap();
        assert_eq!(
            observations[0].date,
            NaiveDate::from_ymd_opt(2015, 1, 1).unwrap()
        );
    }

    #[test]
    fn parse_fails_on_missing_required_column() {
        let csv = "\
DATE,DailyAverageWindSpeed
2015-01-01,8.5
";
        let result = parse_daily_climate(csv);
        assert!(matches!(result, Err(LcdError::MissingColumn(ref c)) if c == "NAME"));
    }

    #[test]
    fn parse_defaults_missing_trailing_fields_to_nan() {
        let csv = "\
DATE,NAME,DailyAverageWindSpeed,DailyPeakWindSpeed
2015-01-01,SFO,8.5
2015-01-02
";
        let observations = parse_daily_climate(csv).unwrap();
        assert_eq!(observations.len(), 2, "short rows must not fail the batch");
        assert_eq!(observations[0].average_wind_speed, 8.5);
        assert!(observations[0].peak_wind_speed.is_nan());
        // a row cut down to its date keeps the date and degrades the rest
        assert_eq!(observations[1].date, NaiveDate::from_ymd_opt(2015, 1, 2).unwrap());
        assert_eq!(observations[1].station_name, "");
        assert!(observations[1].average_wind_speed.is_nan());
    }

    #[test]
    fn parse_header_only_input_yields_no_records() {
        let observations = parse_daily_climate("DATE,NAME\n").unwrap();
        assert!(observations.is_empty());
    }

    #[test]
    fn numeric_field_coercion() {
        assert_eq!(parse_numeric_field("8.5"), 8.5);
        assert_eq!(parse_numeric_field(" 8.5 "), 8.5);
        assert_eq!(parse_numeric_field("-3.2"), -3.2);
        assert_eq!(parse_numeric_field("0"), 0.0);
        assert!(parse_numeric_field("NA").is_nan());
        assert!(parse_numeric_field("").is_nan());
        assert!(parse_numeric_field("12,5").is_nan());
    }
}
