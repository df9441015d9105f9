// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Integer range generation.
//!
//! A call runs through the same pipeline in both modes: the dtype request is
//! validated, the operands are classified by [`shape`], null operands are
//! intercepted by [`gate`], every bound is checked against the resolved
//! [`IntegerType`] by [`dtype`], and only then does [`sequence`] produce
//! values. Deferred callers stop after dtype resolution and ask [`schema`]
//! for the output field.

use ranger_core::ColumnData;
use ranger_type::{IntegerType, Type, Value};

pub mod builder;
pub mod dtype;
pub mod gate;
pub mod int_range;
pub mod int_ranges;
pub mod schema;
pub mod sequence;
pub mod shape;
pub mod spec;

pub use schema::RangeFunction;

/// Row count from which per-row ranges are generated in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// An argument of a range function as handed over by the engine
#[derive(Clone, Debug, PartialEq)]
pub enum RangeOperand {
	/// An untyped literal, it does not take part in dtype inference
	Literal(Value),
	/// Typed values, one per row
	Column(ColumnData),
}

impl RangeOperand {
	/// The declared type, `None` for literals
	pub fn hint(&self) -> Option<Type> {
		match self {
			RangeOperand::Literal(_) => None,
			RangeOperand::Column(data) => Some(data.get_type()),
		}
	}
}

impl From<Value> for RangeOperand {
	fn from(value: Value) -> Self {
		RangeOperand::Literal(value)
	}
}

impl From<ColumnData> for RangeOperand {
	fn from(data: ColumnData) -> Self {
		RangeOperand::Column(data)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct RangeConfig {
	/// Requested output type, inferred from the operands when absent
	pub dtype: Option<Type>,
	pub default_dtype: IntegerType,
	pub parallel_threshold: usize,
}

impl Default for RangeConfig {
	fn default() -> Self {
		Self {
			dtype: None,
			default_dtype: IntegerType::default(),
			parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
		}
	}
}

impl RangeConfig {
	pub fn with_dtype(mut self, dtype: impl Into<Type>) -> Self {
		self.dtype = Some(dtype.into());
		self
	}
}
