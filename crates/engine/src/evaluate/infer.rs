// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_core::Field;
use ranger_function::{IntRange, IntRanges, RangeFunction, range::schema::project};
use ranger_type::{Fragment, Result, Type};
use tracing::trace;

use crate::{
	error::EngineError,
	evaluate::{InferenceContext, LITERAL_NAME, StandardEvaluator, check_cast},
	expression::{Expression, RangeExpression},
};

impl StandardEvaluator {
	/// The field `expr` evaluates to, derived from declared types only
	pub fn field(&self, ctx: &InferenceContext, expr: &Expression) -> Result<Field> {
		match expr {
			Expression::Constant(value) => Ok(Field::new(LITERAL_NAME, value.get_type())),
			Expression::Column(name) => match ctx.schema.field(name) {
				Some(field) => Ok(field.clone()),
				None => Err(EngineError::ColumnNotFound {
					name: name.clone(),
					available: ctx.schema.iter().map(|f| f.name.clone()).collect(),
				}
				.into()),
			},
			Expression::Cast(cast) => {
				let inner = self.field(ctx, &cast.expression)?;
				let fragment = Fragment::internal(cast.expression.to_string());
				check_cast(&fragment, &inner.ty, &cast.to)?;
				Ok(Field::new(inner.name, cast.to.clone()))
			}
			Expression::Alias(alias) => match alias.expression.as_ref() {
				Expression::IntRange(range) => {
					self.range_field(ctx, RangeFunction::IntRange, range, Some(&alias.alias))
				}
				Expression::IntRanges(range) => {
					self.range_field(ctx, RangeFunction::IntRanges, range, Some(&alias.alias))
				}
				inner => Ok(Field::new(alias.alias.clone(), self.field(ctx, inner)?.ty)),
			},
			Expression::IntRange(range) => self.range_field(ctx, RangeFunction::IntRange, range, None),
			Expression::IntRanges(range) => self.range_field(ctx, RangeFunction::IntRanges, range, None),
		}
	}

	fn range_field(
		&self,
		ctx: &InferenceContext,
		function: RangeFunction,
		range: &RangeExpression,
		alias: Option<&str>,
	) -> Result<Field> {
		let argument_types = range
			.arguments()
			.into_iter()
			.map(|argument| self.argument_type(ctx, argument))
			.collect::<Result<Vec<_>>>()?;

		let fragment = Fragment::internal(range.name.clone());
		let config = ctx.config.range_config(range.dtype.map(Type::from));
		let dtype = match function {
			RangeFunction::IntRange => IntRange::resolve_type(&fragment, &argument_types, &config)?,
			RangeFunction::IntRanges => IntRanges::resolve_type(&fragment, &argument_types, &config)?,
		};

		let field = project(function, dtype, alias);
		trace!(%field, "projected range field");
		Ok(field)
	}

	/// Literals carry no type, everything else its declared one
	fn argument_type(&self, ctx: &InferenceContext, argument: &Expression) -> Result<Option<Type>> {
		match argument {
			Expression::Constant(_) => Ok(None),
			argument => self.field(ctx, argument).map(|field| Some(field.ty)),
		}
	}
}

#[cfg(test)]
mod tests {
	use ranger_core::{Field, Schema};
	use ranger_function::RangeFunction;
	use ranger_type::{IntegerType, Type};

	use crate::{
		Engine, col,
		expression::{Expression, RangeExpression},
		lit,
	};

	fn schema() -> Schema {
		Schema::new(vec![Field::new("a", Type::Uint2), Field::new("b", Type::Int2)])
	}

	#[test]
	fn test_column_and_cast() {
		let engine = Engine::default();
		assert_eq!(engine.field(&col("a"), &schema()).unwrap(), Field::new("a", Type::Uint2));
		assert_eq!(engine.field(&col("a").cast(Type::Int8), &schema()).unwrap(), Field::new("a", Type::Int8));
		assert_eq!(engine.field(&lit(1), &schema()).unwrap(), Field::new("literal", Type::Int4));
	}

	#[test]
	fn test_invalid_cast_detected_without_rows() {
		let err = Engine::default().field(&col("a").cast(Type::Utf8), &schema()).unwrap_err();
		assert_eq!(err.code(), "CAST_002");
	}

	#[test]
	fn test_range_field_from_declared_types() {
		let engine = Engine::default();
		let expr = Expression::IntRanges(RangeExpression::new(
			RangeFunction::IntRanges,
			col("a"),
			col("b"),
			lit(1),
			None,
		));
		assert_eq!(engine.field(&expr, &schema()).unwrap(), Field::new("int_range", Type::list(Type::Int8)));

		let expr = Expression::IntRange(RangeExpression::new(
			RangeFunction::IntRange,
			col("a"),
			lit(9),
			lit(1),
			Some(IntegerType::Uint2),
		))
		.alias("r");
		assert_eq!(engine.field(&expr, &schema()).unwrap(), Field::new("r", Type::Uint2));
	}

	#[test]
	fn test_missing_column() {
		let err = Engine::default().field(&col("z"), &schema()).unwrap_err();
		assert_eq!(err.code(), "ENGINE_001");
		assert_eq!(err.notes, vec!["available columns: a, b".to_string()]);
	}
}
