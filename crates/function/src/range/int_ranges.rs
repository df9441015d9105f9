// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_core::ColumnData;
use ranger_type::{Fragment, IntegerType, Result, Type, error::diagnostic::function::arity_mismatch, return_error};
use tracing::{debug, instrument};

use crate::{
	ReturnTypeContext, ScalarFunction, ScalarFunctionContext,
	error::{RangeField, RangeResult},
	range::{
		RangeConfig, RangeFunction, RangeOperand, builder,
		dtype::{requested_dtype, resolve_dtype},
		gate::{Bounds, has_null},
		shape::ResolvedOperands,
		spec::RangeSpec,
	},
};

/// One range per row, operands with a single value are broadcast
pub struct IntRanges;

impl IntRanges {
	pub fn new() -> Self {
		Self
	}

	#[instrument(name = "function::int_ranges::evaluate", level = "debug", skip_all, fields(function = %function))]
	pub fn evaluate(
		function: &Fragment,
		start: &RangeOperand,
		end: &RangeOperand,
		step: &RangeOperand,
		config: &RangeConfig,
	) -> RangeResult<ColumnData> {
		let requested = requested_dtype(function, config.dtype.as_ref())?;

		let operands = ResolvedOperands::resolve(start, end, step);
		let rows = operands.expect_rows(function)?.rows();

		let dtype = resolve_dtype(requested, &operands.bound_hints(), config.default_dtype);

		let mut specs = Vec::with_capacity(rows);
		for row in 0..rows {
			let bounds: Bounds = [
				(RangeField::Start, operands.start.value_at(row)),
				(RangeField::End, operands.end.value_at(row)),
				(RangeField::Step, operands.step.value_at(row)),
			];
			if has_null(&bounds) {
				specs.push(None);
				continue;
			}
			specs.push(Some(RangeSpec::resolve(function, &bounds, dtype)?));
		}

		let parallel = rows >= config.parallel_threshold;
		debug!(rows, %dtype, parallel, "generating ranges");
		Ok(builder::list_column(&specs, dtype, parallel))
	}

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

impl Default for IntRanges {
	fn default() -> Self {
		Self::new()
	}
}

impl ScalarFunction for IntRanges {
	fn scalar<'a>(&'a self, ctx: ScalarFunctionContext<'a>) -> Result<ColumnData> {
		let [start, end, step] = ctx.arguments else {
			return_error!(arity_mismatch(ctx.fragment.text().to_string(), 3, ctx.arguments.len()));
		};
		Ok(Self::evaluate(&ctx.fragment, start, end, step, ctx.config)?)
	}

	fn return_type<'a>(&self, ctx: ReturnTypeContext<'a>) -> Result<Type> {
		let dtype = Self::resolve_type(&ctx.fragment, ctx.argument_types, ctx.config)?;
		Ok(RangeFunction::IntRanges.output_type(dtype))
	}
}
