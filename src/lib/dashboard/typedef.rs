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

use crate::evaluate::typedef::EvaluationReport;
use crate::window::typedef::Window;

/// Price chart content for one window.
#[derive(Default, PartialEq, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PriceOverview {
	/// Window after clamping to the series.
	pub window: Window,
	pub dates: Vec<NaiveDate>,
	/// Raw closes, in price units
	pub closes: Vec<f64>,
	pub picker_dates: Option<(NaiveDate, NaiveDate)>,
}

#[derive(PartialEq, Serialize, Clone, Debug)]
#[serde(tag = "state", content = "report", rename_all = "camelCase")]
pub enum PredictionView {
	/// Predict was never clicked, charts stay empty.
	NotRequested,
	Ready(EvaluationReport),
}

#[derive(PartialEq, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
	pub overview: PriceOverview,
	pub prediction: PredictionView,
}
