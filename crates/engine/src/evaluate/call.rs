// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_core::Column;
use ranger_function::{GeneratorContext, RangeFunction, RangeOperand, ScalarFunctionContext};
use ranger_type::{Fragment, Result, Type};

use crate::{
	evaluate::{EvaluationContext, StandardEvaluator},
	expression::{Expression, RangeExpression},
};

impl StandardEvaluator {
	pub(crate) fn int_range(&self, ctx: &EvaluationContext, range: &RangeExpression) -> Result<Column> {
		let function = self.functions.generator(&range.name)?;
		let arguments = self.operands(ctx, range)?;
		let config = ctx.config.range_config(range.dtype.map(Type::from));

		let data = function.generate(GeneratorContext {
			fragment: Fragment::internal(range.name.clone()),
			arguments: &arguments,
			config: &config,
		})?;
		Ok(Column::new(RangeFunction::IntRange.output_name(), data))
	}

	pub(crate) fn int_ranges(&self, ctx: &EvaluationContext, range: &RangeExpression) -> Result<Column> {
		let function = self.functions.scalar(&range.name)?;
		let arguments = self.operands(ctx, range)?;
		let config = ctx.config.range_config(range.dtype.map(Type::from));

		let data = function.scalar(ScalarFunctionContext {
			fragment: Fragment::internal(range.name.clone()),
			arguments: &arguments,
			config: &config,
		})?;
		Ok(Column::new(RangeFunction::IntRanges.output_name(), data))
	}

	/// Constants stay untyped literals, everything else becomes a typed column
	fn operands(&self, ctx: &EvaluationContext, range: &RangeExpression) -> Result<Vec<RangeOperand>> {
		range.arguments()
			.into_iter()
			.map(|argument| match argument {
				Expression::Constant(value) => Ok(RangeOperand::Literal(value.clone())),
				argument => self.evaluate(ctx, argument).map(|column| RangeOperand::Column(column.data)),
			})
			.collect()
	}
}
