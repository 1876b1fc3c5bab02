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
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
	#[error("Cannot load \"{}\": {message}", .path.display())]
	DataLoad { path: PathBuf, message: String },
	#[error("Invalid range: {0}")]
	InvalidRange(String),
	#[error("Malformed prediction payload: {0}")]
	InvalidResponse(String),
	#[error("Cannot align {predicted} predictions with {actual} actual prices")]
	Alignment { predicted: usize, actual: usize },
	#[error("Actual price on {date} is zero, relative error is undefined")]
	DivisionEdgeCase { date: NaiveDate },
	#[error("Prediction service error: {0}")]
	PredictionService(String),
	#[error("Prediction service did not answer within {0:?}")]
	PredictionTimeout(Duration),
	#[error("Configuration error: {0}")]
	Config(String),
	#[error("Cannot export report: {0}")]
	Export(String),
}

impl DashboardError {
	pub(crate) fn data_load(path: impl Into<PathBuf>, message: impl ToString) -> Self {
		DashboardError::DataLoad {
			path: path.into(),
			message: message.to_string(),
		}
	}
}

pub type Result<T> = std::result::Result<T, DashboardError>;
