// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_core::{Column, ColumnData, Columns, Field, Schema};
use ranger_engine::{Engine, EngineConfig, LazyFrame, RangeOptions, arange, int_range, lit};
use ranger_type::{IntegerType, Type, Value};

fn eager(start: i32, end: i32, step: i32) -> Column {
	ranger_sub_tracing::init_for_tests();
	int_range(start, end, RangeOptions::eager().step(step)).unwrap().into_column().unwrap()
}

#[test]
fn test_descending_step() {
	let column = eager(10, 1, -2);
	assert_eq!(column, Column::int8("int", [10, 8, 6, 4, 2]));
}

#[test]
fn test_ascending_and_descending_by_one() {
	assert_eq!(eager(-3, 3, 1).data, ColumnData::int8([-3, -2, -1, 0, 1, 2]));
	assert_eq!(eager(3, -3, -1).data, ColumnData::int8([3, 2, 1, 0, -1, -2]));
}

#[test]
fn test_direction_disagrees_with_step() {
	for (start, end, step) in [(0, -5, 1), (5, 0, 1), (0, 5, -1), (4, 4, 1)] {
		let column = eager(start, end, step);
		assert_eq!(column.data, ColumnData::int8([]), "({start}, {end}, {step})");
		assert_eq!(column.get_type(), Type::Int8);
	}
}

#[test]
fn test_deferred_schema() {
	let expr = int_range(-3, 3, RangeOptions::default()).unwrap().into_expression().unwrap();
	let frame = LazyFrame::empty().select([expr]);
	let schema = frame.schema().unwrap();
	assert_eq!(schema, Schema::new(vec![Field::new("int", Type::Int8)]));
	assert_eq!(schema.to_string(), "{int: Int8}");

	let columns = frame.collect().unwrap();
	assert_eq!(columns.schema(), schema);
	assert_eq!(columns.data("int"), Some(&ColumnData::int8([-3, -2, -1, 0, 1, 2])));
}

#[test]
fn test_inferred_dtype_does_not_depend_on_operand_order() {
	let signed = || lit(0).cast(Type::Int1);
	let unsigned = || lit(3).cast(Type::Uint8);

	let forward = int_range(signed(), unsigned(), RangeOptions::eager()).unwrap().into_column().unwrap();
	let backward =
		int_range(unsigned(), signed(), RangeOptions::eager().step(-1)).unwrap().into_column().unwrap();

	assert_eq!(forward.get_type(), Type::Int8);
	assert_eq!(backward.get_type(), Type::Int8);
	assert_eq!(forward.data, ColumnData::int8([0, 1, 2]));
	assert_eq!(backward.data, ColumnData::int8([3, 2, 1]));
}

#[test]
fn test_deferred_schema_matches_collected_for_every_dtype() {
	for dtype in IntegerType::ALL {
		let expr = int_range(1, 4, RangeOptions::default().dtype(dtype)).unwrap().into_expression().unwrap();
		let frame = LazyFrame::empty().select([expr.alias("r")]);
		let schema = frame.schema().unwrap();
		let collected = frame.collect().unwrap();
		assert_eq!(schema, collected.schema(), "{dtype}");
		assert_eq!(schema.fields()[0].ty, Type::from(dtype));
		assert_eq!(collected[0].len(), 3);
	}
}

#[test]
fn test_typed_start_widens_to_default() {
	let column = int_range(lit(3).cast(Type::Uint4), -1, RangeOptions::eager().step(-1))
		.unwrap()
		.into_column()
		.unwrap();
	assert_eq!(column.data, ColumnData::int8([3, 2, 1, 0]));
}

#[test]
fn test_unsigned_dtype_counts_down() {
	let column =
		int_range(3, 0, RangeOptions::eager().step(-1).dtype(Type::Uint4)).unwrap().into_column().unwrap();
	assert_eq!(column.data, ColumnData::uint4([3, 2, 1]));
}

#[test]
fn test_null_end_with_dtype() {
	let err = int_range(3, Value::Undefined, RangeOptions::eager().step(-1).dtype(Type::Uint4)).unwrap_err();
	assert_eq!(err.code(), "RANGE_003");
	assert_eq!(err.message, "invalid null input for `int_range`");
}

#[test]
fn test_negative_end_into_unsigned() {
	let err = int_range(3, -1, RangeOptions::eager().step(-1).dtype(Type::Uint4)).unwrap_err();
	assert_eq!(err.code(), "RANGE_005");
	assert_eq!(err.message, "conversion from `i32` to `u32` failed");

	let cause = err.cause.as_ref().unwrap();
	assert_eq!(cause.code, "CAST_001");
	assert_eq!(cause.notes, vec!["valid range: 0 to 4_294_967_295".to_string()]);
}

#[test]
fn test_non_integer_dtype_in_both_modes() {
	for eager in [true, false] {
		let options = RangeOptions::default().dtype(Type::Float8).with_eager(eager);
		let err = int_range(0, 3, options).unwrap_err();
		assert_eq!(err.code(), "RANGE_004");
		assert_eq!(err.message, "non-integer `dtype` passed to `int_range`: Float8");
	}
}

#[test]
fn test_zero_step() {
	let err = int_range(0, 3, RangeOptions::eager().step(0)).unwrap_err();
	assert_eq!(err.code(), "RANGE_006");
}

#[test]
fn test_shape_of_column_operands() {
	let engine = Engine::default();

	let empty = Columns::new(vec![Column::int8("a", [])]);
	let expr = engine.int_range(ranger_engine::col("a"), 3, RangeOptions::default()).unwrap();
	let err = engine.frame(empty).select([expr.into_expression().unwrap()]).collect().unwrap_err();
	assert_eq!(err.message, "`start` must contain exactly one value, got 0 values");

	let two = Columns::new(vec![Column::int8("a", [1, 2])]);
	let expr = engine.int_range(0, ranger_engine::col("a"), RangeOptions::default()).unwrap();
	let err = engine.frame(two).select([expr.into_expression().unwrap()]).collect().unwrap_err();
	assert_eq!(err.message, "`end` must contain exactly one value, got 2 values");
}

#[test]
fn test_arange() {
	let column = arange(0, 10, RangeOptions::eager().step(2)).unwrap().into_column().unwrap();
	assert_eq!(column.data, ColumnData::int8([0, 2, 4, 6, 8]));
}

#[test]
fn test_extreme_bounds_do_not_wrap() {
	let column = int_range(i64::MAX - 2, i64::MAX, RangeOptions::eager()).unwrap().into_column().unwrap();
	assert_eq!(column.data, ColumnData::int8([i64::MAX - 2, i64::MAX - 1]));

	let column =
		int_range(i64::MIN + 2, i64::MIN, RangeOptions::eager().step(i64::MIN)).unwrap().into_column().unwrap();
	assert_eq!(column.data, ColumnData::int8([i64::MIN + 2]));
}

#[test]
fn test_engine_default_dtype() {
	let engine = Engine::new(EngineConfig::new().default_dtype(IntegerType::Int2));
	let expr = engine.int_range(0, 2, RangeOptions::default()).unwrap().into_expression().unwrap();
	let frame = engine.frame(Columns::empty()).select([expr]);
	assert_eq!(frame.schema().unwrap().fields()[0].ty, Type::Int2);
	assert_eq!(frame.collect().unwrap()[0].data, ColumnData::int2([0, 1]));
}
