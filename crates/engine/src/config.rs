// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_function::{RangeConfig, range::DEFAULT_PARALLEL_THRESHOLD};
use ranger_type::{IntegerType, Type};

/// Settings threaded through every evaluation of an [`Engine`](crate::Engine)
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
	/// Integer kind of a range when neither a dtype nor a typed bound says otherwise
	pub default_dtype: IntegerType,
	/// Row count from which `int_ranges` generates rows in parallel
	pub parallel_threshold: usize,
}

impl EngineConfig {
	pub fn new() -> Self {
		Self {
			default_dtype: IntegerType::default(),
			parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
		}
	}

	pub fn default_dtype(mut self, dtype: IntegerType) -> Self {
		self.default_dtype = dtype;
		self
	}

	pub fn parallel_threshold(mut self, rows: usize) -> Self {
		self.parallel_threshold = rows;
		self
	}

	/// The settings of a single range call requesting `dtype`
	pub fn range_config(&self, dtype: Option<Type>) -> RangeConfig {
		RangeConfig {
			dtype,
			default_dtype: self.default_dtype,
			parallel_threshold: self.parallel_threshold,
		}
	}
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use ranger_type::{IntegerType, Type};

	use super::EngineConfig;

	#[test]
	fn test_defaults() {
		let config = EngineConfig::default();
		assert_eq!(config.default_dtype, IntegerType::Int8);
		assert_eq!(config.parallel_threshold, 4096);
	}

	#[test]
	fn test_builder() {
		let config = EngineConfig::new().default_dtype(IntegerType::Int4).parallel_threshold(16);
		let range = config.range_config(Some(Type::Uint2));
		assert_eq!(range.default_dtype, IntegerType::Int4);
		assert_eq!(range.parallel_threshold, 16);
		assert_eq!(range.dtype, Some(Type::Uint2));
	}
}
