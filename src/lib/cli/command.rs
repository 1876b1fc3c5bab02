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

use tracing::info;

use super::typedef::*;
use crate::config::DashboardConfig;
use crate::dashboard::command::TickerDashboard;
use crate::dashboard::typedef::PriceOverview;
use crate::error::{DashboardError, Result};
use crate::evaluate::command::save_report;
use crate::evaluate::typedef::{EvaluationReport, RelativeError};
use crate::window::command::window_from_dates;
use crate::window::typedef::Window;

pub async fn execute(cli: Cli) -> Result<()> {
	let config = DashboardConfig::from_path(&cli.config)?.with_env_overrides()?;

	match cli.command {
		Commands::Tickers => {
			print_tickers(&config);
			Ok(())
		}
		Commands::Show(args) => {
			let dashboard = open_dashboard(&config, &args.selection.ticker)?;
			let window = resolve_window(&dashboard, &args.selection)?;
			print_overview(dashboard.name(), &dashboard.overview(window));
			Ok(())
		}
		Commands::Predict(args) => {
			let dashboard = open_dashboard(&config, &args.selection.ticker)?;
			let window = resolve_window(&dashboard, &args.selection)?;
			let report = dashboard.predict(window).await?;

			if args.json {
				let rendered = serde_json::to_string_pretty(&report)
					.map_err(|err| DashboardError::Export(err.to_string()))?;
				println!("{}", rendered);
			} else {
				print_report(&report);
			}

			if let Some(path) = args.output {
				save_report(&report, &path)?;
				info!(path = %path.display(), "prediction saved");
			}

			Ok(())
		}
	}
}

fn open_dashboard(config: &DashboardConfig, name: &str) -> Result<TickerDashboard> {
	let ticker = config.ticker(name)?;
	TickerDashboard::load(config, ticker)
}

/// Dates win over indices. Missing indices default to the whole series.
pub(super) fn resolve_window(dashboard: &TickerDashboard, selection: &Selection) -> Result<Window> {
	let series = &dashboard.dataset().transformed;

	match (selection.from, selection.to) {
		(Some(from), Some(to)) => window_from_dates(series, from, to),
		(Some(_), None) | (None, Some(_)) => Err(DashboardError::InvalidRange(String::from(
			"both --from and --to are required",
		))),
		(None, None) => {
			let length = series.len();
			Window::clamped(
				selection.start.unwrap_or(0),
				selection.end.unwrap_or(length as i64),
				length,
			)
		}
	}
}

fn print_tickers(config: &DashboardConfig) {
	if config.tickers.is_empty() {
		println!("No ticker configured");
		return;
	}

	for ticker in config.tickers.iter() {
		println!("{}\t{}", ticker.name, config.endpoint_for(ticker));
	}
}

fn print_overview(name: &str, overview: &PriceOverview) {
	match overview.picker_dates {
		Some((from, to)) => println!(
			"{} rows {}..{} ({} to {})",
			name, overview.window.start, overview.window.end, from, to
		),
		None => println!("{} has no data", name),
	}

	for (date, close) in overview.dates.iter().zip(&overview.closes) {
		println!("{}\t{:.4}", date, close);
	}
}

fn print_report(report: &EvaluationReport) {
	let aligned = &report.aligned;

	println!("Date\tActual\tPredicted\tAbs Error\tRel Error [%]");
	for index in 0..aligned.len() {
		let relative = match aligned.relative_error[index] {
			RelativeError::Percent(found) => format!("{:.4}", found),
			RelativeError::Undefined => String::from("-"),
		};

		println!(
			"{}\t{:.4}\t{:.4}\t{:.4}\t{}",
			aligned.dates[index],
			aligned.actual[index],
			aligned.predicted[index],
			aligned.absolute_error[index],
			relative
		);
	}

	println!();
	println!("Mean absolute error: {:.4}", report.summary.mean_absolute_error);
	match report.summary.mean_absolute_percentage_error {
		Some(found) => println!("Mean absolute percentage error: {:.4}%", found),
		None => println!("Mean absolute percentage error: undefined"),
	}

	if let (Some(high), Some(low)) = (report.high_peak, report.low_peak) {
		println!("Highest prediction: {:.4} on {}", high.y1, high.x);
		println!("Lowest prediction: {:.4} on {}", low.y1, low.x);
	}
}
