//! Filter → sort → extract → growth-rate pipeline.

use chrono::{DateTime, Utc};
use gdp_econ::RawObservation;
use gdp_utils::dates::{parse_timestamp, year_of, ZonePolicy};
use serde::Serialize;

/// One aligned entry of a [`NormalizedSeries`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Calendar year; `None` when the timestamp could not be parsed.
    pub year: Option<i32>,
    /// GDP in billions of USD, unrounded.
    pub value: f64,
    /// Percentage change from the previous entry; 0 for the first.
    pub growth_rate: f64,
}

/// Year, value and growth-rate columns of equal length, ordered by
/// ascending timestamp.
///
/// Built only through [`normalize`], so index `i` in every column always
/// refers to the same observation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedSeries {
    years: Vec<Option<i32>>,
    values: Vec<f64>,
    growth_rates: Vec<f64>,
}

impl NormalizedSeries {
    pub fn years(&self) -> &[Option<i32>] {
        &self.years
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn growth_rates(&self) -> &[f64] {
        &self.growth_rates
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<SeriesPoint> {
        Some(SeriesPoint {
            year: *self.years.get(index)?,
            value: *self.values.get(index)?,
            growth_rate: *self.growth_rates.get(index)?,
        })
    }

    pub fn points(&self) -> impl Iterator<Item = SeriesPoint> + '_ {
        self.years
            .iter()
            .zip(&self.values)
            .zip(&self.growth_rates)
            .map(|((year, value), growth_rate)| SeriesPoint {
                year: *year,
                value: *value,
                growth_rate: *growth_rate,
            })
    }

    /// First and last valid year, if any entry has one.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let mut valid = self.years.iter().flatten();
        let first = *valid.next()?;
        let last = valid.last().copied().unwrap_or(first);
        Some((first, last))
    }
}

/// Normalize raw observations into an ordered series.
///
/// 1. Records without a country are dropped.
/// 2. The rest are stably sorted by timestamp; unparseable timestamps sort
///    after every valid one and keep their input order.
/// 3. Years are read under `zone`; values are copied unchanged.
/// 4. Growth rates follow [`growth_rates`].
///
/// Never fails: malformed magnitudes flow through as `NaN` or infinities.
pub fn normalize(records: &[RawObservation], zone: ZonePolicy) -> NormalizedSeries {
    let mut retained: Vec<(Option<DateTime<Utc>>, f64)> = records
        .iter()
        .filter(|record| record.has_country())
        .map(|record| {
            let instant = record
                .date_time
                .as_deref()
                .and_then(|raw| parse_timestamp(raw, zone));
            (instant, record.value)
        })
        .collect();

    retained.sort_by_key(|(instant, _)| (instant.is_none(), *instant));

    let years = retained
        .iter()
        .map(|(instant, _)| instant.as_ref().map(|t| year_of(t, zone)))
        .collect();
    let values: Vec<f64> = retained.iter().map(|(_, value)| *value).collect();
    let growth_rates = growth_rates(&values);

    NormalizedSeries {
        years,
        values,
        growth_rates,
    }
}

/// Percentage change between neighbours: `((v[i] - v[i-1]) / v[i-1]) * 100`.
///
/// The first entry is 0. A zero predecessor gives IEEE-754 results
/// (`inf`, `-inf`, or `NaN` for 0 → 0) rather than an error.
pub fn growth_rates(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    std::iter::once(0.0)
        .chain(
            values
                .windows(2)
                .map(|pair| ((pair[1] - pair[0]) / pair[0]) * 100.0),
        )
        .collect()
}
