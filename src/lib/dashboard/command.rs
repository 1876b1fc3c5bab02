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

use std::sync::Arc;
use tracing::{info, warn};

use super::typedef::*;
use crate::config::{DashboardConfig, TickerConfig};
use crate::data::command::load_dataset;
use crate::data::typedef::LoadedDataset;
use crate::error::{DashboardError, Result};
use crate::evaluate::command::evaluate_prediction;
use crate::evaluate::typedef::{AlignmentInput, EvaluationReport};
use crate::predict::command::{HttpPredictionService, PredictionService};
use crate::typedef::BlockSize;
use crate::window::command::{apply_window, picker_dates};
use crate::window::typedef::Window;

/// One ticker's page. Immutable after construction, so concurrent requests
/// share it through `Arc` without locking.
pub struct TickerDashboard {
	name: String,
	dataset: Arc<LoadedDataset>,
	block_size: BlockSize,
	service: Arc<dyn PredictionService>,
}

impl TickerDashboard {
	pub fn new(
		name: impl Into<String>,
		dataset: Arc<LoadedDataset>,
		block_size: BlockSize,
		service: Arc<dyn PredictionService>,
	) -> Self {
		Self {
			name: name.into(),
			dataset,
			block_size,
			service,
		}
	}

	/// Loads the ticker's files and points it at its HTTP endpoint.
	pub fn load(config: &DashboardConfig, ticker: &TickerConfig) -> Result<Self> {
		let dataset = load_dataset(&ticker.dataset_paths())?;
		let endpoint = config.endpoint_for(ticker);
		let service = HttpPredictionService::new(endpoint, config.request_timeout())?;

		info!(
			ticker = %ticker.name,
			rows = dataset.transformed.len(),
			endpoint = service.endpoint(),
			"dashboard ready"
		);

		Ok(Self::new(
			ticker.name.clone(),
			Arc::new(dataset),
			config.block_size,
			Arc::new(service),
		))
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn dataset(&self) -> &LoadedDataset {
		&self.dataset
	}

	pub fn block_size(&self) -> BlockSize {
		self.block_size
	}

	pub fn full_window(&self) -> Window {
		Window::full(self.dataset.transformed.len())
	}

	pub fn overview(&self, window: Window) -> PriceOverview {
		let window = window.fit(self.dataset.transformed.len());
		let transformed = apply_window(&self.dataset.transformed, window);
		let raw = apply_window(&self.dataset.raw, window);

		PriceOverview {
			window,
			dates: transformed.dates().collect(),
			closes: raw.values().collect(),
			picker_dates: picker_dates(&self.dataset.transformed, window),
		}
	}

	pub async fn predict(&self, window: Window) -> Result<EvaluationReport> {
		let window = window.fit(self.dataset.transformed.len());
		if window.is_empty() {
			return Err(DashboardError::InvalidRange(format!(
				"window [{}, {}) holds no data",
				window.start, window.end
			)));
		}

		if window.len() < self.block_size.0 {
			warn!(
				ticker = %self.name,
				points = window.len(),
				block_size = %self.block_size,
				"window is shorter than the model lookback"
			);
		}

		let request = apply_window(&self.dataset.transformed, window)
			.values()
			.collect::<Vec<_>>();
		let batch = self.service.predict(&request).await?;

		let report = evaluate_prediction(&AlignmentInput {
			transformed: &self.dataset.transformed,
			raw: &self.dataset.raw,
			norm_factor: self.dataset.norm_factor,
			block_size: self.block_size,
			window_start: window.start,
			batch: &batch,
		})?;

		info!(
			ticker = %self.name,
			steps = report.aligned.len(),
			mean_absolute_error = report.summary.mean_absolute_error,
			"prediction finished"
		);

		Ok(report)
	}

	/// Everything the page shows after any input changed. Nothing is
	/// predicted until the predict button was clicked at least once.
	pub async fn refresh(&self, window: Window, predict_clicks: u32) -> Result<DashboardView> {
		let overview = self.overview(window);

		let prediction = match predict_clicks {
			0 => PredictionView::NotRequested,
			_ => PredictionView::Ready(self.predict(overview.window).await?),
		};

		Ok(DashboardView {
			overview,
			prediction,
		})
	}
}
