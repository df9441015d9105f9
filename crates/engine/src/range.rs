// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_core::Column;
use ranger_type::{Result, Type};

use crate::{
	engine::Engine,
	expression::{Expression, lit},
};

/// Optional arguments of the range entry points
#[derive(Clone, Debug, PartialEq)]
pub struct RangeOptions {
	pub step: Expression,
	/// Requested output type, inferred when absent
	pub dtype: Option<Type>,
	/// Evaluate immediately instead of returning an expression
	pub eager: bool,
}

impl RangeOptions {
	pub fn new() -> Self {
		Self {
			step: lit(1),
			dtype: None,
			eager: false,
		}
	}

	/// Options that evaluate immediately
	pub fn eager() -> Self {
		Self::new().with_eager(true)
	}

	pub fn step(mut self, step: impl Into<Expression>) -> Self {
		self.step = step.into();
		self
	}

	pub fn dtype(mut self, dtype: impl Into<Type>) -> Self {
		self.dtype = Some(dtype.into());
		self
	}

	pub fn with_eager(mut self, eager: bool) -> Self {
		self.eager = eager;
		self
	}
}

impl Default for RangeOptions {
	fn default() -> Self {
		Self::new()
	}
}

/// A materialized column or a deferred expression
#[derive(Clone, Debug, PartialEq)]
pub enum RangeOutput {
	Column(Column),
	Expression(Expression),
}

impl RangeOutput {
	pub fn into_column(self) -> Option<Column> {
		match self {
			RangeOutput::Column(column) => Some(column),
			RangeOutput::Expression(_) => None,
		}
	}

	pub fn into_expression(self) -> Option<Expression> {
		match self {
			RangeOutput::Column(_) => None,
			RangeOutput::Expression(expression) => Some(expression),
		}
	}
}

/// A single range from `start` to `end`, excluding `end`
pub fn int_range(start: impl Into<Expression>, end: impl Into<Expression>, options: RangeOptions) -> Result<RangeOutput> {
	Engine::default().int_range(start, end, options)
}

/// One range per row of the operands
pub fn int_ranges(
	start: impl Into<Expression>,
	end: impl Into<Expression>,
	options: RangeOptions,
) -> Result<RangeOutput> {
	Engine::default().int_ranges(start, end, options)
}

pub fn arange(start: impl Into<Expression>, end: impl Into<Expression>, options: RangeOptions) -> Result<RangeOutput> {
	Engine::default().arange(start, end, options)
}

#[cfg(test)]
mod tests {
	use ranger_type::{Type, Value};

	use super::{RangeOptions, RangeOutput};
	use crate::expression::{Expression, lit};

	#[test]
	fn test_default_options() {
		let options = RangeOptions::default();
		assert_eq!(options.step, Expression::Constant(Value::Int4(1)));
		assert_eq!(options.dtype, None);
		assert!(!options.eager);
	}

	#[test]
	fn test_builder() {
		let options = RangeOptions::eager().step(-2).dtype(Type::Uint4);
		assert_eq!(options.step, lit(-2));
		assert_eq!(options.dtype, Some(Type::Uint4));
		assert!(options.eager);
	}

	#[test]
	fn test_output_accessors() {
		let output = RangeOutput::Expression(lit(1));
		assert_eq!(output.clone().into_column(), None);
		assert_eq!(output.into_expression(), Some(lit(1)));
	}
}
