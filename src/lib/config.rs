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

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::data::typedef::DatasetPaths;
use crate::error::{DashboardError, Result};
use crate::typedef::BlockSize;

const ENV_BLOCK_SIZE: &str = "DASHBOARD_BLOCK_SIZE";
const ENV_TIMEOUT_SECONDS: &str = "DASHBOARD_TIMEOUT_SECONDS";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
	/// Shared by every ticker, the models are trained with the same lookback.
	#[serde(default)]
	pub block_size: BlockSize,
	#[serde(default = "default_request_timeout_secs")]
	pub request_timeout_secs: u64,
	#[serde(default = "default_base_url")]
	pub base_url: String,
	#[serde(default, rename = "ticker")]
	pub tickers: Vec<TickerConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TickerConfig {
	pub name: String,
	pub transformed: PathBuf,
	pub raw: PathBuf,
	/// Defaults to `{base_url}/predict_{name}`
	#[serde(default)]
	pub endpoint: Option<String>,
}

impl TickerConfig {
	pub fn dataset_paths(&self) -> DatasetPaths {
		DatasetPaths {
			transformed: self.transformed.clone(),
			raw: self.raw.clone(),
		}
	}
}

fn default_request_timeout_secs() -> u64 {
	30
}

fn default_base_url() -> String {
	"http://127.0.0.1:5000".to_string()
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			block_size: BlockSize::default(),
			request_timeout_secs: default_request_timeout_secs(),
			base_url: default_base_url(),
			tickers: Vec::new(),
		}
	}
}

impl DashboardConfig {
	pub fn from_path(path: &Path) -> Result<Self> {
		let content = fs::read_to_string(path).map_err(|err| {
			DashboardError::Config(format!("cannot read {}: {}", path.display(), err))
		})?;

		let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
		Self::parse(&content, base_dir)
	}

	/// Relative data paths are resolved against `base_dir`.
	pub fn parse(content: &str, base_dir: &Path) -> Result<Self> {
		let mut config: DashboardConfig =
			toml::from_str(content).map_err(|err| DashboardError::Config(err.to_string()))?;

		for ticker in config.tickers.iter_mut() {
			if ticker.transformed.is_relative() {
				ticker.transformed = base_dir.join(&ticker.transformed);
			}
			if ticker.raw.is_relative() {
				ticker.raw = base_dir.join(&ticker.raw);
			}
		}

		config.validate()?;
		Ok(config)
	}

	pub fn with_env_overrides(self) -> Result<Self> {
		self.apply_overrides(|key| std::env::var(key).ok())
	}

	pub(crate) fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		if let Some(found) = lookup(ENV_BLOCK_SIZE) {
			let parsed = found.trim().parse::<usize>().map_err(|err| {
				DashboardError::Config(format!("{}=\"{}\": {}", ENV_BLOCK_SIZE, found, err))
			})?;
			self.block_size = BlockSize(parsed);
		}

		if let Some(found) = lookup(ENV_TIMEOUT_SECONDS) {
			self.request_timeout_secs = found.trim().parse::<u64>().map_err(|err| {
				DashboardError::Config(format!("{}=\"{}\": {}", ENV_TIMEOUT_SECONDS, found, err))
			})?;
		}

		self.validate()?;
		Ok(self)
	}

	fn validate(&self) -> Result<()> {
		if self.block_size.0 == 0 {
			return Err(DashboardError::Config(String::from(
				"block_size must be at least 1",
			)));
		}

		if self.request_timeout_secs == 0 {
			return Err(DashboardError::Config(String::from(
				"request_timeout_secs must be at least 1",
			)));
		}

		let mut seen = HashSet::new();
		if let Some(duplicate) = self.tickers.iter().find(|each| !seen.insert(each.name.as_str())) {
			return Err(DashboardError::Config(format!(
				"ticker \"{}\" is configured twice",
				duplicate.name
			)));
		}

		Ok(())
	}

	pub fn request_timeout(&self) -> Duration {
		Duration::from_secs(self.request_timeout_secs)
	}

	pub fn ticker(&self, name: &str) -> Result<&TickerConfig> {
		self.tickers
			.iter()
			.find(|each| each.name.eq_ignore_ascii_case(name))
			.ok_or_else(|| DashboardError::Config(format!("unknown ticker \"{}\"", name)))
	}

	pub fn endpoint_for(&self, ticker: &TickerConfig) -> String {
		match &ticker.endpoint {
			Some(found) => found.clone(),
			None => format!(
				"{}/predict_{}",
				self.base_url.trim_end_matches('/'),
				ticker.name.to_lowercase()
			),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	const SAMPLE: &str = r#"
block_size = 30

[[ticker]]
name = "apple"
transformed = "Data/Transformed/apple_stocks_transformed.csv"
raw = "Data/API Gathered/apple_stocks.csv"

[[ticker]]
name = "tesla"
transformed = "/srv/data/tesla_transformed.csv"
raw = "/srv/data/tesla.csv"
endpoint = "http://models.local/tesla"
"#;

	#[test]
	fn test_parse_sample() {
		let config = DashboardConfig::parse(SAMPLE, Path::new("/opt/dashboard")).unwrap();

		assert_eq!(config.block_size, BlockSize(30));
		assert_eq!(config.request_timeout_secs, 30);
		assert_eq!(config.tickers.len(), 2);

		let apple = config.ticker("Apple").unwrap();
		assert_eq!(
			apple.transformed,
			PathBuf::from("/opt/dashboard/Data/Transformed/apple_stocks_transformed.csv")
		);
		assert_eq!(config.endpoint_for(apple), "http://127.0.0.1:5000/predict_apple");

		let tesla = config.ticker("tesla").unwrap();
		assert_eq!(tesla.raw, PathBuf::from("/srv/data/tesla.csv"));
		assert_eq!(config.endpoint_for(tesla), "http://models.local/tesla");
	}

	#[test]
	fn test_defaults() {
		let config = DashboardConfig::parse("", Path::new("")).unwrap();
		assert_eq!(config.block_size, BlockSize(60));
		assert_eq!(config.request_timeout(), Duration::from_secs(30));
		assert!(config.tickers.is_empty());
	}

	#[test]
	fn test_unknown_ticker() {
		let config = DashboardConfig::parse(SAMPLE, Path::new("")).unwrap();
		assert!(matches!(config.ticker("amazon"), Err(DashboardError::Config(_))));
	}

	#[test]
	fn test_rejects_invalid_values() {
		assert!(DashboardConfig::parse("block_size = 0", Path::new("")).is_err());
		assert!(DashboardConfig::parse("request_timeout_secs = 0", Path::new("")).is_err());
		assert!(DashboardConfig::parse("block_size = \"sixty\"", Path::new("")).is_err());

		let duplicated = r#"
[[ticker]]
name = "apple"
transformed = "a.csv"
raw = "b.csv"

[[ticker]]
name = "apple"
transformed = "c.csv"
raw = "d.csv"
"#;
		assert!(DashboardConfig::parse(duplicated, Path::new("")).is_err());
	}

	#[test]
	fn test_env_overrides() {
		let env = HashMap::from([
			(ENV_BLOCK_SIZE, "90"),
			(ENV_TIMEOUT_SECONDS, "5"),
		]);
		let config = DashboardConfig::default()
			.apply_overrides(|key| env.get(key).map(|found| found.to_string()))
			.unwrap();

		assert_eq!(config.block_size, BlockSize(90));
		assert_eq!(config.request_timeout(), Duration::from_secs(5));

		let broken = DashboardConfig::default()
			.apply_overrides(|key| (key == ENV_BLOCK_SIZE).then(|| "many".to_string()));
		assert!(matches!(broken, Err(DashboardError::Config(_))));
	}

	#[test]
	fn test_missing_config_file() {
		let result = DashboardConfig::from_path(Path::new("/definitely/not/here.toml"));
		assert!(matches!(result, Err(DashboardError::Config(_))));
	}
}
