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

use serde::{Deserialize, Serialize};

pub(super) const PREDICTIONS_FIELD: &str = "predictions";

/// Model output in normalized space, one inner sequence per forecast step.
#[derive(Default, PartialEq, Deserialize, Serialize, Clone, Debug)]
#[serde(transparent)]
pub struct PredictionBatch(pub Vec<Vec<f64>>);

impl PredictionBatch {
	pub fn steps(&self) -> &[Vec<f64>] {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<Vec<f64>>> for PredictionBatch {
	fn from(steps: Vec<Vec<f64>>) -> Self {
		PredictionBatch(steps)
	}
}
