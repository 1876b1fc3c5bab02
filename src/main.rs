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

use clap::Parser;
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tarot_dashboard_lib::{Cli, ErrorInfo};

#[tokio::main]
async fn main() {
	// Logs go to stderr, stdout is for the tables
	tracing_subscriber::registry()
		.with(fmt::layer().with_writer(std::io::stderr))
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let cli = Cli::parse();

	if let Err(err) = tarot_dashboard_lib::run(cli).await {
		let info = ErrorInfo::from(&err);
		eprintln!("{}: {}", info.title, info.message);
		process::exit(1);
	}
}
