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
use serde::Serialize;

use crate::error::{DashboardError, Result};
use crate::predict::typedef::PredictionBatch;
use crate::typedef::{BlockSize, NormalizationFactor, TimeSeries};

/// Relative error in percent. `Undefined` marks a zero actual price and
/// serializes as `null`.
#[derive(PartialEq, Serialize, Clone, Copy, Debug)]
#[serde(into = "Option<f64>")]
pub enum RelativeError {
	Percent(f64),
	Undefined,
}

impl From<RelativeError> for Option<f64> {
	fn from(value: RelativeError) -> Self {
		match value {
			RelativeError::Percent(found) => Some(found),
			RelativeError::Undefined => None,
		}
	}
}

impl RelativeError {
	pub fn is_undefined(&self) -> bool {
		matches!(self, RelativeError::Undefined)
	}

	/// `date` is only used to describe an undefined point.
	pub fn percent(&self, date: NaiveDate) -> Result<f64> {
		match self {
			RelativeError::Percent(found) => Ok(*found),
			RelativeError::Undefined => Err(DashboardError::DivisionEdgeCase { date }),
		}
	}
}

#[derive(PartialEq, Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonPoint {
	pub x: NaiveDate,
	/// Actual price
	pub y0: f64,
	/// Predicted price
	pub y1: f64,
}

#[derive(PartialEq, Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPoint {
	pub x: NaiveDate,
	pub y: RelativeError,
}

/// Everything the charts need, index `i` of each field refers to the same
/// forecast step.
#[derive(Default, PartialEq, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AlignedPrediction {
	pub dates: Vec<NaiveDate>,
	pub actual: Vec<f64>,
	pub predicted: Vec<f64>,
	pub absolute_error: Vec<f64>,
	pub relative_error: Vec<RelativeError>,
}

impl AlignedPrediction {
	pub fn len(&self) -> usize {
		self.dates.len()
	}

	pub fn is_empty(&self) -> bool {
		self.dates.is_empty()
	}

	pub fn comparison_points(&self) -> Vec<ComparisonPoint> {
		self.dates
			.iter()
			.zip(&self.actual)
			.zip(&self.predicted)
			.map(|((x, y0), y1)| ComparisonPoint {
				x: *x,
				y0: *y0,
				y1: *y1,
			})
			.collect()
	}

	pub fn error_points(&self) -> Vec<ErrorPoint> {
		self.dates
			.iter()
			.zip(&self.relative_error)
			.map(|(x, y)| ErrorPoint { x: *x, y: *y })
			.collect()
	}

	/// Fails on the first step whose actual price is zero.
	pub fn relative_error_percent(&self) -> Result<Vec<f64>> {
		self.dates
			.iter()
			.zip(&self.relative_error)
			.map(|(date, each)| each.percent(*date))
			.collect()
	}
}

#[derive(Default, PartialEq, Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ErrorSummary {
	pub mean_absolute_error: f64,
	/// Over the steps with a defined relative error only.
	pub mean_absolute_percentage_error: Option<f64>,
	pub undefined_points: usize,
}

#[derive(Default, PartialEq, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
	pub aligned: AlignedPrediction,
	pub summary: ErrorSummary,
	pub high_peak: Option<ComparisonPoint>,
	pub low_peak: Option<ComparisonPoint>,
}

pub struct AlignmentInput<'a> {
	pub transformed: &'a TimeSeries,
	pub raw: &'a TimeSeries,
	pub norm_factor: NormalizationFactor,
	pub block_size: BlockSize,
	pub window_start: usize,
	pub batch: &'a PredictionBatch,
}
