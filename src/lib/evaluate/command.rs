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

use std::path::Path;
use tracing::{debug, warn};

use super::helper::*;
use super::typedef::*;
use crate::error::{DashboardError, Result};

const REPORT_HEADER: [&str; 5] = [
	"Date",
	"Actual",
	"Predicted",
	"Absolute Error",
	"Relative Error [%]",
];

/// Lines the model output up with calendar dates and actual prices.
///
/// The model consumes `block_size` points before it emits anything, so the
/// first prediction of a window starting at `window_start` belongs to the
/// absolute index `block_size + window_start`.
pub fn align_prediction(input: &AlignmentInput) -> Result<AlignedPrediction> {
	// Denormalize, so it is back in price units
	let predicted = flatten_batch(input.batch)?
		.into_iter()
		.map(|each| input.norm_factor.denormalize(each))
		.collect::<Vec<_>>();

	let offset = match input.block_size.0.checked_add(input.window_start) {
		Some(found) => found,
		None => {
			// Past the end of any series
			return Err(DashboardError::Alignment {
				predicted: predicted.len(),
				actual: 0,
			});
		}
	};
	let series_length = input.transformed.len().min(input.raw.len());
	let start = offset.min(series_length);
	let available = series_length - start;
	let end = start + predicted.len().min(available);

	let dates = input.transformed.points()[start..end]
		.iter()
		.map(|each| each.date)
		.collect::<Vec<_>>();
	let actual = input.raw.points()[start..end]
		.iter()
		.map(|each| each.value)
		.collect::<Vec<_>>();

	if actual.len() != predicted.len() {
		warn!(
			offset,
			predicted = predicted.len(),
			available,
			"prediction runs past the end of the series"
		);
	}

	let absolute_error = absolute_error(&actual, &predicted)?;
	let relative_error = relative_error(&actual, &absolute_error);

	Ok(AlignedPrediction {
		dates,
		actual,
		predicted,
		absolute_error,
		relative_error,
	})
}

pub fn evaluate_prediction(input: &AlignmentInput) -> Result<EvaluationReport> {
	let aligned = align_prediction(input)?;
	let summary = summarize(&aligned);

	if summary.undefined_points > 0 {
		warn!(
			undefined_points = summary.undefined_points,
			"relative error undefined where the actual price is zero"
		);
	}

	let [high_peak, low_peak] = find_peaks(&aligned.comparison_points());

	debug!(
		steps = aligned.len(),
		mean_absolute_error = summary.mean_absolute_error,
		"prediction evaluated"
	);

	Ok(EvaluationReport {
		aligned,
		summary,
		high_peak,
		low_peak,
	})
}

/// Writes one row per forecast step. Undefined relative errors stay empty.
pub fn save_report(report: &EvaluationReport, path: &Path) -> Result<()> {
	let export_error = |err: csv::Error| DashboardError::Export(err.to_string());

	let mut writer = csv::Writer::from_path(path).map_err(export_error)?;
	writer.write_record(REPORT_HEADER).map_err(export_error)?;

	let aligned = &report.aligned;
	for index in 0..aligned.len() {
		let relative = match aligned.relative_error[index] {
			RelativeError::Percent(found) => found.to_string(),
			RelativeError::Undefined => String::new(),
		};

		writer
			.write_record([
				aligned.dates[index].to_string(),
				aligned.actual[index].to_string(),
				aligned.predicted[index].to_string(),
				aligned.absolute_error[index].to_string(),
				relative,
			])
			.map_err(export_error)?;
	}

	writer
		.flush()
		.map_err(|err| DashboardError::Export(err.to_string()))
}
