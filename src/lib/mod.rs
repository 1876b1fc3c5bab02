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

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod evaluate;
pub mod predict;
pub mod typedef;
pub mod window;

#[cfg(test)]
mod test_support;

pub use cli::typedef::Cli;
pub use error::{DashboardError, Result};
pub use typedef::ErrorInfo;

pub async fn run(cli: Cli) -> Result<()> {
	cli::command::execute(cli).await
}
