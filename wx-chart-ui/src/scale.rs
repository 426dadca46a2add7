//! Scale construction: time, linear, and ordinal-color.
//!
//! All three scales are plain values. Domains are computed from the record
//! set at build time and niced outward to round boundaries, so generated
//! ticks land on clean steps; mapping is pure interpolation afterwards.
//! Building from identical inputs always yields identical scales.

use crate::layout::ChartLayout;
use chrono::{Datelike, Duration, NaiveDate};
use wx_lcd::attribute::DailyAttribute;
use wx_lcd::observation::DailyObservation;

/// Rounds a raw step to the nearest power-of-ten multiple of 1, 2 or 5.
fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    if error >= 7.5 {
        10.0 * power
    } else if error >= 3.5 {
        5.0 * power
    } else if error >= 1.5 {
        2.0 * power
    } else {
        power
    }
}

/// Smallest and largest finite values, skipping NaN and infinities.
///
/// `None` when no finite value exists at all.
pub fn finite_extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    let mut extent: Option<(f64, f64)> = None;
    for value in values {
        if !value.is_finite() {
            continue;
        }
        extent = Some(match extent {
            None => (value, value),
            Some((lo, hi)) => (lo.min(value), hi.max(value)),
        });
    }
    extent
}

/// Maps a numeric domain onto a pixel range by linear interpolation.
///
/// The domain is niced at construction; its endpoints are exact multiples of
/// the tick step (unless the extent was a single point, which keeps a
/// zero-width domain and a single tick).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
    tick_step: f64,
}

impl LinearScale {
    /// Builds a scale over the finite values of `values`, niced outward.
    ///
    /// `None` when no finite value exists (empty input or all-NaN column).
    pub fn fit<I>(values: I, range: (f64, f64), tick_count: usize) -> Option<LinearScale>
    where
        I: IntoIterator<Item = f64>,
    {
        let extent = finite_extent(values)?;
        Some(LinearScale::with_extent(extent, range, tick_count))
    }

    /// Builds a scale from a known extent, nicing it outward.
    pub fn with_extent(extent: (f64, f64), range: (f64, f64), tick_count: usize) -> LinearScale {
        let (min, max) = extent;
        let step = nice_step((max - min) / tick_count.max(1) as f64);
        if step <= 0.0 {
            return LinearScale {
                domain: (min, max),
                range,
                tick_step: 0.0,
            };
        }
        LinearScale {
            domain: ((min / step).floor() * step, (max / step).ceil() * step),
            range,
            tick_step: step,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// The step between consecutive ticks; zero for a degenerate domain.
    pub fn tick_step(&self) -> f64 {
        self.tick_step
    }

    /// Interpolates a domain value into the range.
    ///
    /// A degenerate (zero-width) domain collapses to the range start.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        r0 + (value - d0) / denom * (r1 - r0)
    }

    /// Tick values across the domain, ends included.
    pub fn ticks(&self) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if self.tick_step <= 0.0 || d1 <= d0 {
            return vec![d0];
        }
        // Domain endpoints are exact step multiples, so rounding the
        // quotient is drift-free.
        let first = (d0 / self.tick_step).round() as i64;
        let last = (d1 / self.tick_step).round() as i64;
        if self.tick_step < 1.0 {
            // Dividing by the inverse step keeps fractional ticks exact
            // (3 / 10 is 0.3; 3 * 0.1 is not).
            let inverse = (1.0 / self.tick_step).round();
            (first..=last).map(|index| index as f64 / inverse).collect()
        } else {
            (first..=last)
                .map(|index| index as f64 * self.tick_step)
                .collect()
        }
    }
}

/// Calendar interval between consecutive time ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickInterval {
    Days(i64),
    Months(i32),
    Years(i32),
}

/// Sub-year candidate steps, finest first. Spans too coarse for all of
/// these fall through to a 1-2-5 nicing of whole years.
const SUB_YEAR_STEPS: [TickInterval; 7] = [
    TickInterval::Days(1),
    TickInterval::Days(2),
    TickInterval::Days(7),
    TickInterval::Days(14),
    TickInterval::Months(1),
    TickInterval::Months(3),
    TickInterval::Months(6),
];

impl TickInterval {
    fn approx_days(self) -> f64 {
        match self {
            TickInterval::Days(n) => n as f64,
            TickInterval::Months(n) => 30.44 * n as f64,
            TickInterval::Years(n) => 365.25 * n as f64,
        }
    }

    /// Picks the finest interval that keeps the tick count at or under the
    /// target.
    fn pick(span_days: i64, tick_count: usize) -> TickInterval {
        let target = tick_count.max(1) as f64;
        let span = span_days as f64;
        for step in SUB_YEAR_STEPS {
            if span / step.approx_days() <= target {
                return step;
            }
        }
        let per_tick_years = span / 365.25 / target;
        TickInterval::Years(nice_step(per_tick_years).max(1.0) as i32)
    }

    /// The latest boundary at or before `date`.
    fn floor(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            TickInterval::Days(n) => {
                let days = i64::from(date.num_days_from_ce());
                date.checked_sub_signed(Duration::days(days.rem_euclid(n)))
            }
            TickInterval::Months(n) => {
                let index = month_index(date);
                month_start(index - index.rem_euclid(n))
            }
            TickInterval::Years(n) => {
                let year = date.year();
                year_start(year - year.rem_euclid(n))
            }
        }
    }

    /// The earliest boundary at or after `date`.
    fn ceil(self, date: NaiveDate) -> Option<NaiveDate> {
        let floored = self.floor(date)?;
        if floored == date {
            Some(date)
        } else {
            self.advance(floored)
        }
    }

    /// The next boundary after a date that is itself a boundary.
    fn advance(self, boundary: NaiveDate) -> Option<NaiveDate> {
        match self {
            TickInterval::Days(n) => boundary.checked_add_signed(Duration::days(n)),
            TickInterval::Months(n) => month_start(month_index(boundary) + n),
            TickInterval::Years(n) => year_start(boundary.year() + n),
        }
    }
}

fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

fn month_start(index: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 1)
}

fn year_start(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
}

/// Maps calendar dates onto a horizontal pixel range.
///
/// Dates are measured in whole days. The domain is niced outward to whole
/// day, month or year boundaries, with the interval chosen so the tick
/// count stays near the target.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeScale {
    domain: (NaiveDate, NaiveDate),
    range: (f64, f64),
    interval: TickInterval,
}

impl TimeScale {
    /// Builds a scale over the dates of `dates`, niced outward. `None` for
    /// an empty iterator.
    pub fn fit<I>(dates: I, range: (f64, f64), tick_count: usize) -> Option<TimeScale>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut iter = dates.into_iter();
        let first = iter.next()?;
        let (mut min, mut max) = (first, first);
        for date in iter {
            min = min.min(date);
            max = max.max(date);
        }
        let interval = TickInterval::pick((max - min).num_days(), tick_count);
        // Nicing clamps at the calendar edge rather than failing.
        let domain = (
            interval.floor(min).unwrap_or(min),
            interval.ceil(max).unwrap_or(max),
        );
        Some(TimeScale {
            domain,
            range,
            interval,
        })
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn interval(&self) -> TickInterval {
        self.interval
    }

    /// Interpolates a date into the range.
    ///
    /// A degenerate (single-day) domain collapses to the range start.
    pub fn map(&self, date: NaiveDate) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = (d1 - d0).num_days() as f64;
        if denom == 0.0 {
            return r0;
        }
        r0 + (date - d0).num_days() as f64 / denom * (r1 - r0)
    }

    /// Tick dates on interval boundaries across the domain, ends included.
    pub fn ticks(&self) -> Vec<NaiveDate> {
        let (d0, d1) = self.domain;
        let mut out = Vec::new();
        let mut cursor = d0;
        while cursor <= d1 {
            out.push(cursor);
            match self.interval.advance(cursor) {
                Some(next) => cursor = next,
                None => break,
            }
        }
        out
    }
}

/// Assigns each category a paint from a fixed palette, in first-seen order.
///
/// When categories outnumber the palette, paints repeat cyclically.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalScale {
    domain: Vec<String>,
    palette: Vec<String>,
}

impl OrdinalScale {
    /// Collects the distinct categories of `categories` in first-seen order.
    pub fn fit<'a, I>(categories: I, palette: &[String]) -> OrdinalScale
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut domain: Vec<String> = Vec::new();
        for category in categories {
            if !domain.iter().any(|seen| seen == category) {
                domain.push(category.to_string());
            }
        }
        OrdinalScale {
            domain,
            palette: palette.to_vec(),
        }
    }

    /// Categories in first-seen order.
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Paint for a category; `None` when it was never seen (or the palette
    /// is empty).
    pub fn paint(&self, category: &str) -> Option<&str> {
        if self.palette.is_empty() {
            return None;
        }
        let index = self.domain.iter().position(|seen| seen == category)?;
        Some(self.palette[index % self.palette.len()].as_str())
    }
}

/// The three scales driving one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scales {
    pub x: TimeScale,
    pub y: LinearScale,
    pub color: OrdinalScale,
}

impl Scales {
    /// Derives all three scales from the record set and the selected Y
    /// attribute.
    ///
    /// `None` when there is nothing to scale: no records at all, or no
    /// finite value under the selected attribute. The X range runs left to
    /// right; the Y range is inverted so larger values plot higher.
    pub fn build(
        records: &[DailyObservation],
        attribute: DailyAttribute,
        layout: &ChartLayout,
    ) -> Option<Scales> {
        if layout.palette.is_empty() {
            log::warn!("layout palette is empty; no marks or legend rows will be painted");
        }
        let x = TimeScale::fit(
            records.iter().map(|record| record.date),
            (0.0, layout.inner_width()),
            layout.tick_count,
        )?;
        let y = LinearScale::fit(
            records.iter().map(|record| attribute.value_of(record)),
            (layout.inner_height(), 0.0),
            layout.tick_count,
        )?;
        let color = OrdinalScale::fit(
            records.iter().map(|record| record.station_name.as_str()),
            &layout.palette,
        );
        Some(Scales { x, y, color })
    }
}
