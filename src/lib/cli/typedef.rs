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
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tarot-dashboard")]
#[command(about = "Historical stock prices with model prediction overlay")]
#[command(version)]
pub struct Cli {
	/// Dashboard configuration file
	#[arg(short, long, global = true, default_value = "dashboard.toml")]
	pub config: PathBuf,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// List the configured tickers
	Tickers,
	/// Print the real prices inside a window
	Show(ShowArgs),
	/// Request a prediction for a window and evaluate it
	Predict(PredictArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
	#[command(flatten)]
	pub selection: Selection,
}

#[derive(Args, Debug)]
pub struct PredictArgs {
	#[command(flatten)]
	pub selection: Selection,

	/// Also write the evaluation to this CSV file
	#[arg(short, long)]
	pub output: Option<PathBuf>,

	/// Print the evaluation as JSON instead of a table
	#[arg(long)]
	pub json: bool,
}

/// Window by slider index or by calendar date, never both.
#[derive(Args, Debug)]
pub struct Selection {
	#[arg(short, long)]
	pub ticker: String,

	/// First row index, inclusive
	#[arg(long, allow_hyphen_values = true)]
	pub start: Option<i64>,

	/// Last row index, exclusive
	#[arg(long, allow_hyphen_values = true)]
	pub end: Option<i64>,

	/// First date, inclusive
	#[arg(long, requires = "to", conflicts_with_all = ["start", "end"])]
	pub from: Option<NaiveDate>,

	/// Last date, inclusive
	#[arg(long, requires = "from", conflicts_with_all = ["start", "end"])]
	pub to: Option<NaiveDate>,
}
