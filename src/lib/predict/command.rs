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

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::helper::*;
use super::typedef::*;
use crate::error::{DashboardError, Result};

/// Anything that turns a normalized window into model output.
#[async_trait]
pub trait PredictionService: Send + Sync {
	async fn predict(&self, window: &[f64]) -> Result<PredictionBatch>;
}

/// Posts the window as a JSON array of floats. Dropping the returned future
/// aborts the request.
pub struct HttpPredictionService {
	client: Client,
	endpoint: String,
	timeout: Duration,
}

impl HttpPredictionService {
	pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
		let client = Client::builder()
			.connect_timeout(timeout)
			.build()
			.map_err(|err| DashboardError::Config(err.to_string()))?;

		Ok(Self {
			client,
			endpoint: endpoint.into(),
			timeout,
		})
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	async fn exchange(&self, window: &[f64]) -> Result<PredictionBatch> {
		let response = self
			.client
			.post(&self.endpoint)
			.json(window)
			.send()
			.await
			.map_err(|err| DashboardError::PredictionService(err.to_string()))?;

		let status = response.status();
		if !status.is_success() {
			let error_text = response.text().await.unwrap_or_default();
			warn!(endpoint = %self.endpoint, %status, "prediction service rejected request");
			return Err(DashboardError::PredictionService(format!(
				"{} - {}",
				status, error_text
			)));
		}

		let payload: Value = response
			.json()
			.await
			.map_err(|err| DashboardError::InvalidResponse(err.to_string()))?;

		parse_prediction_payload(&payload)
	}
}

#[async_trait]
impl PredictionService for HttpPredictionService {
	async fn predict(&self, window: &[f64]) -> Result<PredictionBatch> {
		debug!(endpoint = %self.endpoint, points = window.len(), "requesting prediction");

		match tokio::time::timeout(self.timeout, self.exchange(window)).await {
			Ok(result) => result,
			Err(_) => Err(DashboardError::PredictionTimeout(self.timeout)),
		}
	}
}

/// Wraps a plain function from request window to response body, for offline
/// use and tests.
pub struct FnPredictionService<F>(pub F);

#[async_trait]
impl<F> PredictionService for FnPredictionService<F>
where
	F: Fn(&[f64]) -> Result<Value> + Send + Sync,
{
	async fn predict(&self, window: &[f64]) -> Result<PredictionBatch> {
		let payload = (self.0)(window)?;
		parse_prediction_payload(&payload)
	}
}
