/*
 * Project::Tarot Dashboard, historical prices with prediction overlay
 * Copyright (C) 2025 Athaariq A. Ramadhani <foss@athaariq.my.id>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <http://www.gnu.org/licenses/>.
 */

use chrono::NaiveDate;

use super::typedef::*;
use crate::error::{DashboardError, Result};
use crate::typedef::TimeSeries;

pub fn select_window(series: &TimeSeries, start: i64, end: i64) -> Result<TimeSeries> {
	let window = Window::clamped(start, end, series.len())?;
	Ok(apply_window(series, window))
}

/// Bounds above the series length are clamped.
pub fn apply_window(series: &TimeSeries, window: Window) -> TimeSeries {
	let window = window.fit(series.len());
	series.slice(window.start, window.end)
}

/// Dates shown by the date picker for a slider position. The slider end is
/// the index of the last visible point, so both indices are clamped to the
/// last row.
pub fn picker_dates(series: &TimeSeries, window: Window) -> Option<(NaiveDate, NaiveDate)> {
	let last_index = series.len().checked_sub(1)?;
	let start_date = series.get(window.start.min(last_index))?.date;
	let end_date = series.get(window.end.min(last_index))?.date;
	Some((start_date, end_date))
}

/// Smallest window that covers every row dated within `[from, to]`.
pub fn window_from_dates(series: &TimeSeries, from: NaiveDate, to: NaiveDate) -> Result<Window> {
	if from > to {
		return Err(DashboardError::InvalidRange(format!(
			"start date {} is after end date {}",
			from, to
		)));
	}

	let points = series.points();
	let start = points.partition_point(|each| each.date < from);
	let end = points.partition_point(|each| each.date <= to);

	Ok(Window { start, end })
}
