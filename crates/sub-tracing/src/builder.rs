// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::subsystem::TracingSubsystem;

/// Output format of the installed subscriber
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TracingFormat {
	#[default]
	Compact,
	Pretty,
	Json,
}

/// Builder for the tracing subsystem
#[derive(Clone, Debug, PartialEq)]
pub struct TracingBuilder {
	pub(crate) level: String,
	pub(crate) format: TracingFormat,
	pub(crate) ansi: bool,
	pub(crate) target: bool,
	pub(crate) test_writer: bool,
	pub(crate) from_env: bool,
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self {
			level: "info".to_string(),
			format: TracingFormat::default(),
			ansi: true,
			target: true,
			test_writer: false,
			from_env: true,
		}
	}

	/// Directive used when `RUST_LOG` is unset or invalid, e.g. `debug` or
	/// `ranger_function=trace`
	pub fn with_level(mut self, level: impl Into<String>) -> Self {
		self.level = level.into();
		self
	}

	pub fn with_format(mut self, format: TracingFormat) -> Self {
		self.format = format;
		self
	}

	pub fn with_ansi(mut self, ansi: bool) -> Self {
		self.ansi = ansi;
		self
	}

	pub fn with_target(mut self, target: bool) -> Self {
		self.target = target;
		self
	}

	/// Ignore `RUST_LOG` and always use the configured level
	pub fn without_env(mut self) -> Self {
		self.from_env = false;
		self
	}

	/// Routes output through the libtest capture
	pub fn for_tests(mut self) -> Self {
		self.test_writer = true;
		self
	}

	pub fn build(self) -> TracingSubsystem {
		TracingSubsystem::new(self)
	}
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::{TracingBuilder, TracingFormat};

	#[test]
	fn test_defaults() {
		let builder = TracingBuilder::default();
		assert_eq!(builder.level, "info");
		assert_eq!(builder.format, TracingFormat::Compact);
		assert!(builder.ansi);
		assert!(builder.from_env);
		assert!(!builder.test_writer);
	}

	#[test]
	fn test_chained() {
		let builder = TracingBuilder::new()
			.with_level("ranger_function=trace")
			.with_format(TracingFormat::Json)
			.with_ansi(false)
			.with_target(false)
			.without_env()
			.for_tests();
		assert_eq!(builder.level, "ranger_function=trace");
		assert_eq!(builder.format, TracingFormat::Json);
		assert!(!builder.ansi);
		assert!(!builder.target);
		assert!(!builder.from_env);
		assert!(builder.test_writer);
	}
}
