// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

use ranger_core::ColumnData;
use ranger_type::{Fragment, Result, Type};

pub mod error;
pub mod range;
pub mod registry;

pub use error::{RangeError, RangeField, RangeResult};
pub use range::{RangeConfig, RangeFunction, RangeOperand, int_range::IntRange, int_ranges::IntRanges};
pub use registry::Functions;

pub struct GeneratorContext<'a> {
	pub fragment: Fragment,
	pub arguments: &'a [RangeOperand],
	pub config: &'a RangeConfig,
}

/// Produces one flat column from scalar arguments
pub trait GeneratorFunction: Send + Sync {
	fn generate<'a>(&self, ctx: GeneratorContext<'a>) -> Result<ColumnData>;

	fn return_type<'a>(&self, ctx: ReturnTypeContext<'a>) -> Result<Type>;
}

pub struct ScalarFunctionContext<'a> {
	pub fragment: Fragment,
	pub arguments: &'a [RangeOperand],
	pub config: &'a RangeConfig,
}

/// Produces one output row per input row
pub trait ScalarFunction: Send + Sync {
	fn scalar<'a>(&'a self, ctx: ScalarFunctionContext<'a>) -> Result<ColumnData>;

	fn return_type<'a>(&self, ctx: ReturnTypeContext<'a>) -> Result<Type>;
}

/// Declared argument types, `None` for untyped literals
pub struct ReturnTypeContext<'a> {
	pub fragment: Fragment,
	pub argument_types: &'a [Option<Type>],
	pub config: &'a RangeConfig,
}
