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

use serde_json::Value;

use super::typedef::*;
use crate::error::{DashboardError, Result};

/// Accepts only `{"predictions": [[number, ...], ...]}` with at least one
/// number per step.
pub fn parse_prediction_payload(payload: &Value) -> Result<PredictionBatch> {
	let object = payload.as_object().ok_or_else(|| {
		DashboardError::InvalidResponse(String::from("response body is not a JSON object"))
	})?;

	let steps = match object.get(PREDICTIONS_FIELD) {
		Some(Value::Array(found)) => found,
		Some(_) => {
			return Err(DashboardError::InvalidResponse(format!(
				"\"{}\" is not a list",
				PREDICTIONS_FIELD
			)))
		}
		None => {
			return Err(DashboardError::InvalidResponse(format!(
				"missing \"{}\" field",
				PREDICTIONS_FIELD
			)))
		}
	};

	steps
		.iter()
		.enumerate()
		.map(|(step_index, each_step)| {
			let values = each_step.as_array().ok_or_else(|| {
				DashboardError::InvalidResponse(format!("step {} is not a list", step_index))
			})?;

			if values.is_empty() {
				return Err(DashboardError::InvalidResponse(format!(
					"step {} has no value",
					step_index
				)));
			}

			values
				.iter()
				.map(|each| {
					each.as_f64().ok_or_else(|| {
						DashboardError::InvalidResponse(format!(
							"step {} holds non-numeric value {}",
							step_index, each
						))
					})
				})
				.collect::<Result<Vec<_>>>()
		})
		.collect::<Result<Vec<_>>>()
		.map(PredictionBatch)
}
