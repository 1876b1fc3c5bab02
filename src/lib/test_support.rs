use chrono::{Days, NaiveDate};

use crate::typedef::{SeriesPoint, TimeSeries};

pub(crate) fn day(offset: u64) -> NaiveDate {
	NaiveDate::from_ymd_opt(2020, 1, 1)
		.unwrap()
		.checked_add_days(Days::new(offset))
		.unwrap()
}

/// One point per day starting 2020-01-01.
pub(crate) fn daily_series(values: &[f64]) -> TimeSeries {
	TimeSeries::new(
		values
			.iter()
			.enumerate()
			.map(|(i, value)| SeriesPoint {
				date: day(i as u64),
				value: *value,
			})
			.collect(),
	)
	.unwrap()
}

pub(crate) fn ramp(length: usize) -> TimeSeries {
	daily_series(&(0..length).map(|i| 100.0 + i as f64).collect::<Vec<_>>())
}
