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

use super::typedef::*;
use crate::error::{DashboardError, Result};
use crate::predict::typedef::PredictionBatch;

/// Flattens the batch from 2D into 1D in step order.
pub(super) fn flatten_batch(batch: &PredictionBatch) -> Result<Vec<f64>> {
	if batch.is_empty() {
		return Err(DashboardError::InvalidResponse(String::from(
			"prediction batch is empty",
		)));
	}

	if let Some(step_index) = batch.steps().iter().position(|each| each.is_empty()) {
		return Err(DashboardError::InvalidResponse(format!(
			"step {} has no value",
			step_index
		)));
	}

	let flat = batch.steps().iter().flatten().copied().collect::<Vec<_>>();
	if let Some(found) = flat.iter().find(|each| !each.is_finite()) {
		return Err(DashboardError::InvalidResponse(format!(
			"prediction holds non-finite value {}",
			found
		)));
	}

	Ok(flat)
}

pub(super) fn absolute_error(actual: &[f64], predicted: &[f64]) -> Result<Vec<f64>> {
	if actual.len() != predicted.len() {
		return Err(DashboardError::Alignment {
			predicted: predicted.len(),
			actual: actual.len(),
		});
	}

	Ok(actual
		.iter()
		.zip(predicted)
		.map(|(y0, y1)| (y0 - y1).abs())
		.collect())
}

/// Zero actual prices are flagged instead of divided.
pub(super) fn relative_error(actual: &[f64], absolute: &[f64]) -> Vec<RelativeError> {
	actual
		.iter()
		.zip(absolute)
		.map(|(y0, error)| {
			if *y0 == 0f64 {
				RelativeError::Undefined
			} else {
				RelativeError::Percent(error / y0 * 100f64)
			}
		})
		.collect()
}

pub(super) fn summarize(aligned: &AlignedPrediction) -> ErrorSummary {
	let count = aligned.absolute_error.len();
	let mean_absolute_error = if count == 0 {
		0f64
	} else {
		aligned.absolute_error.iter().sum::<f64>() / count as f64
	};

	let defined = aligned
		.relative_error
		.iter()
		.filter_map(|each| match each {
			RelativeError::Percent(found) => Some(found.abs()),
			RelativeError::Undefined => None,
		})
		.collect::<Vec<_>>();

	let mean_absolute_percentage_error = if defined.is_empty() {
		None
	} else {
		Some(defined.iter().sum::<f64>() / defined.len() as f64)
	};

	ErrorSummary {
		mean_absolute_error,
		mean_absolute_percentage_error,
		undefined_points: count - defined.len(),
	}
}

/// Highest and lowest predicted price, first occurrence wins on ties.
pub(super) fn find_peaks(graph: &[ComparisonPoint]) -> [Option<ComparisonPoint>; 2] {
	graph.iter().fold(
		[Option::<ComparisonPoint>::None; 2],
		|[last_max, last_min], each| {
			let last_max_y1 = last_max.map(|found| found.y1).unwrap_or(f64::MIN);
			let last_min_y1 = last_min.map(|found| found.y1).unwrap_or(f64::MAX);

			let max = if last_max.is_none() || each.y1 > last_max_y1 {
				Some(*each)
			} else {
				last_max
			};

			let min = if last_min.is_none() || each.y1 < last_min_y1 {
				Some(*each)
			} else {
				last_min
			};

			[max, min]
		},
	)
}
