// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_core::{Column, ColumnData};
use ranger_type::{
	Fragment, IntegerType, Result, Type, Value,
	error::diagnostic::cast::{integer_out_of_range, unsupported_cast},
	return_error,
};

use crate::{
	evaluate::{EvaluationContext, StandardEvaluator},
	expression::CastExpression,
};

/// The integer target of a cast from `from` to `to`, `None` for the identity.
///
/// Only integer targets are supported; undefined sources cast to anything.
pub(crate) fn check_cast(fragment: &Fragment, from: &Type, to: &Type) -> Result<Option<IntegerType>> {
	if from == to {
		return Ok(None);
	}
	match IntegerType::try_from(to) {
		Ok(target) if from.is_integer() || *from == Type::Undefined => Ok(Some(target)),
		_ => return_error!(unsupported_cast(fragment.clone(), from.clone(), to.clone())),
	}
}

impl StandardEvaluator {
	pub(crate) fn cast(&self, ctx: &EvaluationContext, expr: &CastExpression) -> Result<Column> {
		let column = self.evaluate(ctx, &expr.expression)?;
		let from = column.get_type();
		let fragment = Fragment::internal(expr.expression.to_string());

		let Some(target) = check_cast(&fragment, &from, &expr.to)? else {
			return Ok(column);
		};

		let mut values = Vec::with_capacity(column.len());
		for value in column.data.iter() {
			if value.is_undefined() {
				values.push(Value::Undefined);
				continue;
			}
			match value.as_integer().and_then(|v| target.value(v)) {
				Some(value) => values.push(value),
				None => return_error!(integer_out_of_range(fragment, from, expr.to.clone())),
			}
		}

		Ok(Column::new(column.name, ColumnData::from_values(&expr.to, values)))
	}
}

#[cfg(test)]
mod tests {
	use ranger_core::{Column, ColumnData, Columns};
	use ranger_type::{Type, Value};

	use crate::{Engine, col, lit};

	#[test]
	fn test_literal_into_unsigned() {
		let column = Engine::default().evaluate(&lit(3).cast(Type::Uint4), &Columns::empty()).unwrap();
		assert_eq!(column.data, ColumnData::uint4([3]));
	}

	#[test]
	fn test_keeps_undefined() {
		let columns = Columns::new(vec![Column::new("a", ColumnData::int8_with_bitvec([1, 0], [true, false]))]);
		let column = Engine::default().evaluate(&col("a").cast(Type::Uint1), &columns).unwrap();
		assert_eq!(column.name, "a");
		assert_eq!(column.data.get_value(0), Value::Uint1(1));
		assert_eq!(column.data.get_value(1), Value::Undefined);
	}

	#[test]
	fn test_out_of_range() {
		let err = Engine::default().evaluate(&lit(-1).cast(Type::Uint4), &Columns::empty()).unwrap_err();
		assert_eq!(err.code(), "CAST_001");
		assert_eq!(err.message, "conversion from `i32` to `u32` failed");
	}

	#[test]
	fn test_unsupported() {
		let err = Engine::default().evaluate(&lit(1).cast(Type::Utf8), &Columns::empty()).unwrap_err();
		assert_eq!(err.code(), "CAST_002");

		let err = Engine::default().evaluate(&lit("a").cast(Type::Int8), &Columns::empty()).unwrap_err();
		assert_eq!(err.code(), "CAST_002");
	}

	#[test]
	fn test_identity() {
		let column = Engine::default().evaluate(&lit(2i64).cast(Type::Int8), &Columns::empty()).unwrap();
		assert_eq!(column.data, ColumnData::int8([2]));
	}
}
