// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_core::ColumnData;
use ranger_type::{Fragment, IntegerType, Result, Type, error::diagnostic::function::arity_mismatch, return_error};
use tracing::{debug, instrument};

use crate::{
	GeneratorContext, GeneratorFunction, ReturnTypeContext,
	error::{RangeField, RangeResult},
	range::{
		RangeConfig, RangeFunction, RangeOperand, builder,
		dtype::{requested_dtype, resolve_dtype},
		shape::ResolvedOperands,
		spec::RangeSpec,
	},
};

/// A single range over scalar `start`, `end` and `step`
pub struct IntRange;

impl IntRange {
	pub fn new() -> Self {
		Self
	}

	/// Generates the range, every failure is reported against `function`
	#[instrument(name = "function::int_range::evaluate", level = "debug", skip_all, fields(function = %function))]
	pub fn evaluate(
		function: &Fragment,
		start: &RangeOperand,
		end: &RangeOperand,
		step: &RangeOperand,
		config: &RangeConfig,
	) -> RangeResult<ColumnData> {
		let requested = requested_dtype(function, config.dtype.as_ref())?;

		let operands = ResolvedOperands::resolve(start, end, step);
		operands.expect_scalar(function)?;

		let bounds = [
			(RangeField::Start, operands.start.value_at(0)),
			(RangeField::End, operands.end.value_at(0)),
			(RangeField::Step, operands.step.value_at(0)),
		];
		let dtype = resolve_dtype(requested, &operands.bound_hints(), config.default_dtype);

		let spec = RangeSpec::resolve(function, &bounds, dtype)?;
		debug!(start = %spec.start, end = %spec.end, step = spec.step.get(), %dtype, "generating range");
		Ok(builder::flat_column(&spec))
	}

	/// The element type without evaluating anything
	pub fn resolve_type(
		function: &Fragment,
		argument_types: &[Option<Type>],
		config: &RangeConfig,
	) -> RangeResult<IntegerType> {
		let requested = requested_dtype(function, config.dtype.as_ref())?;
		let hints: Vec<Option<Type>> = argument_types.iter().take(2).cloned().collect();
		Ok(resolve_dtype(requested, &hints, config.default_dtype))
	}
}

impl Default for IntRange {
	fn default() -> Self {
		Self::new()
	}
}

impl GeneratorFunction for IntRange {
	fn generate<'a>(&self, ctx: GeneratorContext<'a>) -> Result<ColumnData> {
		let [start, end, step] = ctx.arguments else {
			return_error!(arity_mismatch(ctx.fragment.text().to_string(), 3, ctx.arguments.len()));
		};
		Ok(Self::evaluate(&ctx.fragment, start, end, step, ctx.config)?)
	}

	fn return_type<'a>(&self, ctx: ReturnTypeContext<'a>) -> Result<Type> {
		let dtype = Self::resolve_type(&ctx.fragment, ctx.argument_types, ctx.config)?;
		Ok(RangeFunction::IntRange.output_type(dtype))
	}
}
