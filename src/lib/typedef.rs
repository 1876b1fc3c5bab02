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
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::error::DashboardError;

#[derive(Default, Serialize, Clone, Debug)]
pub struct ErrorInfo {
	pub title: Cow<'static, str>,
	pub message: String,
}

impl From<&DashboardError> for ErrorInfo {
	fn from(err: &DashboardError) -> Self {
		let title = match err {
			DashboardError::DataLoad { .. } => "Failed to Load Data",
			DashboardError::InvalidRange(_) => "Invalid Date Range",
			DashboardError::InvalidResponse(_) => "Unexpected Prediction Response",
			DashboardError::Alignment { .. } => "Prediction Misaligned",
			DashboardError::DivisionEdgeCase { .. } => "Relative Error Undefined",
			DashboardError::PredictionService(_) => "Prediction Failed",
			DashboardError::PredictionTimeout(_) => "Prediction Timed Out",
			DashboardError::Config(_) => "Invalid Configuration",
			DashboardError::Export(_) => "Cannot Save File",
		};

		ErrorInfo {
			title: Cow::Borrowed(title),
			message: err.to_string(),
		}
	}
}

/// Lookback length the model consumes before it emits the first prediction.
#[derive(PartialEq, Eq, Deserialize, Serialize, Clone, Copy, Debug)]
#[serde(transparent)]
pub struct BlockSize(pub usize);

impl Default for BlockSize {
	fn default() -> Self {
		BlockSize(60)
	}
}

impl std::fmt::Display for BlockSize {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[derive(PartialEq, Deserialize, Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
	pub date: NaiveDate,
	pub value: f64,
}

/// Close prices keyed by calendar date, strictly ascending.
#[derive(Default, PartialEq, Serialize, Clone, Debug)]
pub struct TimeSeries {
	points: Vec<SeriesPoint>,
}

impl TimeSeries {
	/// Fails with the index of the first point that breaks ascending order.
	pub fn new(points: Vec<SeriesPoint>) -> Result<Self, usize> {
		let broken = points
			.iter()
			.zip(points.iter().skip(1))
			.position(|(now, next)| next.date <= now.date);

		match broken {
			Some(index) => Err(index + 1),
			None => Ok(Self { points }),
		}
	}

	pub fn len(&self) -> usize {
		self.points.len()
	}

	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	pub fn points(&self) -> &[SeriesPoint] {
		&self.points
	}

	pub fn get(&self, index: usize) -> Option<&SeriesPoint> {
		self.points.get(index)
	}

	pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
		self.points.iter().map(|each| each.date)
	}

	pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
		self.points.iter().map(|each| each.value)
	}

	/// Caller guarantees `start <= end <= len`.
	pub(crate) fn slice(&self, start: usize, end: usize) -> TimeSeries {
		TimeSeries {
			points: self.points[start..end].to_vec(),
		}
	}
}

/// Scale between model space and price units. Always finite and positive.
#[derive(PartialEq, Serialize, Clone, Copy, Debug)]
#[serde(transparent)]
pub struct NormalizationFactor(f64);

impl NormalizationFactor {
	pub fn new(factor: f64) -> Option<Self> {
		if factor.is_finite() && factor > 0f64 {
			Some(Self(factor))
		} else {
			None
		}
	}

	/// Euclidean norm of the given closes.
	pub fn from_closes(closes: impl Iterator<Item = f64>) -> Option<Self> {
		let sum_of_squares = closes.fold(0f64, |last_value, each| last_value + each * each);
		Self::new(sum_of_squares.sqrt())
	}

	pub fn get(&self) -> f64 {
		self.0
	}

	pub fn normalize(&self, price: f64) -> f64 {
		price / self.0
	}

	pub fn denormalize(&self, value: f64) -> f64 {
		value * self.0
	}
}
