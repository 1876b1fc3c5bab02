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

use std::path::PathBuf;
use strum_macros::{Display, EnumString};

use crate::typedef::{NormalizationFactor, TimeSeries};

pub(super) const DATE_COLUMN: &str = "date";
pub(super) const CLOSE_COLUMN: &str = "close";

#[derive(PartialEq, Eq, EnumString, Display, Clone, Copy, Debug)]
#[strum(ascii_case_insensitive)]
pub(super) enum SourceKind {
	#[strum(serialize = "csv")]
	Csv,
	#[strum(serialize = "xlsx", serialize = "xls", serialize = "xlsb", serialize = "ods")]
	Spreadsheet,
}

/// Row order a source file is stored in.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub(super) enum RowOrder {
	Ascending,
	Descending,
}

#[derive(Clone, Debug)]
pub struct DatasetPaths {
	/// Normalized closes, oldest row first.
	pub transformed: PathBuf,
	/// Closes in price units, newest row first.
	pub raw: PathBuf,
}

#[derive(Clone, Debug)]
pub struct LoadedDataset {
	pub transformed: TimeSeries,
	pub raw: TimeSeries,
	pub norm_factor: NormalizationFactor,
}
