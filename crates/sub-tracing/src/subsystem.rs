// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_type::Result;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, registry, util::SubscriberInitExt};

use crate::{
	builder::{TracingBuilder, TracingFormat},
	error::TracingError,
};

/// Installs the global subscriber described by a [`TracingBuilder`]
pub struct TracingSubsystem {
	config: TracingBuilder,
	running: bool,
}

impl TracingSubsystem {
	pub(crate) fn new(config: TracingBuilder) -> Self {
		Self {
			config,
			running: false,
		}
	}

	pub fn name(&self) -> &'static str {
		"sub-tracing"
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	/// `RUST_LOG` when present and valid, the configured level otherwise
	pub fn filter(&self) -> Result<EnvFilter> {
		if self.config.from_env {
			if let Ok(filter) = EnvFilter::try_from_default_env() {
				return Ok(filter);
			}
		}
		EnvFilter::try_new(&self.config.level).map_err(|err| {
			TracingError::InvalidDirective {
				directive: self.config.level.clone(),
				reason: err.to_string(),
			}
			.into()
		})
	}

	pub fn start(&mut self) -> Result<()> {
		if self.running {
			return Ok(());
		}

		let filter = self.filter()?;
		let config = &self.config;
		let registry = registry().with(filter);

		let installed = match (config.format, config.test_writer) {
			(TracingFormat::Json, true) => {
				registry.with(fmt::layer().json().with_target(config.target).with_test_writer()).try_init()
			}
			(TracingFormat::Json, false) => registry.with(fmt::layer().json().with_target(config.target)).try_init(),
			(TracingFormat::Pretty, true) => registry
				.with(fmt::layer().pretty().with_ansi(config.ansi).with_target(config.target).with_test_writer())
				.try_init(),
			(TracingFormat::Pretty, false) => registry
				.with(fmt::layer().pretty().with_ansi(config.ansi).with_target(config.target))
				.try_init(),
			(TracingFormat::Compact, true) => registry
				.with(fmt::layer().compact().with_ansi(config.ansi).with_target(config.target).with_test_writer())
				.try_init(),
			(TracingFormat::Compact, false) => registry
				.with(fmt::layer().compact().with_ansi(config.ansi).with_target(config.target))
				.try_init(),
		};

		installed.map_err(|_| TracingError::AlreadyInstalled)?;
		self.running = true;
		debug!(level = %self.config.level, format = ?self.config.format, "tracing subsystem started");
		Ok(())
	}
}
