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

use tracing::{debug, info};

use super::helper::*;
use super::typedef::*;
use crate::error::{DashboardError, Result};
use crate::typedef::NormalizationFactor;

/// Reads both series of a ticker and derives the normalization factor from
/// the raw closes.
///
/// The raw file is stored newest row first and gets reversed here, so every
/// index in the returned dataset points at the same date in both series.
pub fn load_dataset(paths: &DatasetPaths) -> Result<LoadedDataset> {
	let transformed = read_series(&paths.transformed, RowOrder::Ascending)?;
	debug!(
		path = %paths.transformed.display(),
		rows = transformed.len(),
		"read transformed series"
	);

	let raw = read_series(&paths.raw, RowOrder::Descending)?;
	debug!(path = %paths.raw.display(), rows = raw.len(), "read raw series");

	if transformed.len() != raw.len() {
		return Err(DashboardError::data_load(
			&paths.raw,
			format!(
				"has {} rows while the transformed series has {}",
				raw.len(),
				transformed.len()
			),
		));
	}

	let mismatch = transformed
		.points()
		.iter()
		.zip(raw.points())
		.position(|(left, right)| left.date != right.date);
	if let Some(index) = mismatch {
		return Err(DashboardError::data_load(
			&paths.raw,
			format!(
				"date {} does not match transformed date {} at index {}",
				raw.points()[index].date,
				transformed.points()[index].date,
				index
			),
		));
	}

	let norm_factor = match NormalizationFactor::from_closes(raw.values()) {
		Some(found) => found,
		None => {
			return Err(DashboardError::data_load(
				&paths.raw,
				"close column has no positive finite norm",
			))
		}
	};

	info!(
		rows = raw.len(),
		norm_factor = norm_factor.get(),
		"dataset loaded"
	);

	Ok(LoadedDataset {
		transformed,
		raw,
		norm_factor,
	})
}
