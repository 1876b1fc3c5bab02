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

use crate::error::{DashboardError, Result};

/// Half-open index range `[start, end)` over a series.
#[derive(Default, PartialEq, Eq, Deserialize, Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Window {
	pub start: usize,
	pub end: usize,
}

impl Window {
	/// Selection before the user touched the slider.
	pub fn full(length: usize) -> Self {
		Self {
			start: 0,
			end: length,
		}
	}

	/// Clamps both bounds into `[0, length]`. A reversed request is rejected
	/// before clamping.
	pub fn clamped(start: i64, end: i64, length: usize) -> Result<Self> {
		if start > end {
			return Err(DashboardError::InvalidRange(format!(
				"start {} is after end {}",
				start, end
			)));
		}

		let clamp = |bound: i64| bound.clamp(0, length as i64) as usize;

		Ok(Self {
			start: clamp(start),
			end: clamp(end),
		})
	}

	/// Pulls both bounds into `[0, length]`, keeping `start <= end`.
	pub fn fit(self, length: usize) -> Self {
		let end = self.end.min(length);
		Self {
			start: self.start.min(end),
			end,
		}
	}

	/// Zero for a reversed window.
	pub fn len(&self) -> usize {
		self.end.saturating_sub(self.start)
	}

	pub fn is_empty(&self) -> bool {
		self.start >= self.end
	}
}
