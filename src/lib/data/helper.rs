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

use calamine::{DataType, Reader};
use chrono::NaiveDate;
use parse_datetime::parse_datetime;
use std::path::Path;
use std::str::FromStr;

use super::typedef::*;
use crate::error::{DashboardError, Result};
use crate::typedef::{SeriesPoint, TimeSeries};

pub(super) fn parse_date(cell: &str) -> Option<NaiveDate> {
	let trimmed = cell.trim();
	if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
		return Some(date);
	}

	parse_datetime(trimmed)
		.ok()
		.map(|datetime_value| datetime_value.date_naive())
}

pub(super) fn find_column(headers: &[String], name: &str) -> Option<usize> {
	headers
		.iter()
		.position(|each| each.trim().eq_ignore_ascii_case(name))
}

pub(super) fn source_kind(path: &Path) -> Result<SourceKind> {
	let extension = match path.extension().and_then(|found| found.to_str()) {
		Some(found) => found,
		None => return Err(DashboardError::data_load(path, "file has no readable extension")),
	};

	SourceKind::from_str(extension).map_err(|_| {
		DashboardError::data_load(path, format!("cannot parse \"{}\" file extension", extension))
	})
}

fn locate_columns(path: &Path, headers: &[String]) -> Result<(usize, usize)> {
	let date_index = find_column(headers, DATE_COLUMN).ok_or_else(|| {
		DashboardError::data_load(path, format!("there is no \"{}\" column", DATE_COLUMN))
	})?;
	let close_index = find_column(headers, CLOSE_COLUMN).ok_or_else(|| {
		DashboardError::data_load(path, format!("there is no \"{}\" column", CLOSE_COLUMN))
	})?;

	Ok((date_index, close_index))
}

/// Row numbers in messages are 1-based and exclude the header.
fn parse_row(
	path: &Path,
	row_index: usize,
	date_cell: Option<&str>,
	close_cell: Option<&str>,
) -> Result<SeriesPoint> {
	let date_cell = date_cell.unwrap_or_default();
	let date = parse_date(date_cell).ok_or_else(|| {
		DashboardError::data_load(
			path,
			format!("row {} has unparsable date \"{}\"", row_index + 1, date_cell),
		)
	})?;

	let close_cell = close_cell.unwrap_or_default();
	let value = close_cell
		.trim()
		.parse::<f64>()
		.ok()
		.filter(|found| found.is_finite())
		.ok_or_else(|| {
			DashboardError::data_load(
				path,
				format!("row {} has non-numeric close \"{}\"", row_index + 1, close_cell),
			)
		})?;

	Ok(SeriesPoint { date, value })
}

pub(super) fn read_csv_points(path: &Path) -> Result<Vec<SeriesPoint>> {
	let mut reader =
		csv::Reader::from_path(path).map_err(|err| DashboardError::data_load(path, err))?;

	let headers = reader
		.headers()
		.map_err(|err| DashboardError::data_load(path, err))?
		.iter()
		.map(|each| each.to_string())
		.collect::<Vec<_>>();
	let (date_index, close_index) = locate_columns(path, &headers)?;

	reader
		.records()
		.enumerate()
		.map(|(row_index, each)| {
			let row = each.map_err(|err| DashboardError::data_load(path, err))?;
			parse_row(path, row_index, row.get(date_index), row.get(close_index))
		})
		.collect()
}

pub(super) fn read_sheet_points(path: &Path) -> Result<Vec<SeriesPoint>> {
	let mut sheets =
		calamine::open_workbook_auto(path).map_err(|err| DashboardError::data_load(path, err))?;

	let tab_name = match sheets.sheet_names().first() {
		Some(found) => found.clone(),
		None => return Err(DashboardError::data_load(path, "workbook has no sheet")),
	};

	let sheet = sheets
		.worksheet_range(&tab_name)
		.map_err(|err| DashboardError::data_load(path, err))?;

	let headers = sheet
		.headers()
		.ok_or_else(|| DashboardError::data_load(path, "the selected sheet has no header"))?;
	let (date_index, close_index) = locate_columns(path, &headers)?;

	sheet
		.rows()
		.skip(1) // Skip header row
		.enumerate()
		.map(|(row_index, each_row)| {
			let date_cell = each_row.get(date_index);
			let close_cell = each_row.get(close_index);

			// Native cells first, fall back to their textual form
			let native_date = date_cell.and_then(|cell| {
				cell.as_date()
					.or_else(|| cell.as_datetime().map(|found| found.date()))
			});
			let native_close = close_cell
				.and_then(|cell| cell.as_f64())
				.filter(|found| found.is_finite());

			match (native_date, native_close) {
				(Some(date), Some(value)) => Ok(SeriesPoint { date, value }),
				_ => {
					let date_text = date_cell.map(|cell| cell.to_string());
					let close_text = close_cell.map(|cell| cell.to_string());
					parse_row(path, row_index, date_text.as_deref(), close_text.as_deref())
				}
			}
		})
		.collect()
}

pub(super) fn read_series(path: &Path, order: RowOrder) -> Result<TimeSeries> {
	let mut points = match source_kind(path)? {
		SourceKind::Csv => read_csv_points(path)?,
		SourceKind::Spreadsheet => read_sheet_points(path)?,
	};

	let row_count = points.len();
	if order == RowOrder::Descending {
		points.reverse();
	}

	TimeSeries::new(points).map_err(|index| {
		let (expected, row_number) = match order {
			RowOrder::Ascending => ("ascending", index + 1),
			RowOrder::Descending => ("descending", row_count - index),
		};

		DashboardError::data_load(
			path,
			format!("dates are not strictly {} at row {}", expected, row_number),
		)
	})
}
