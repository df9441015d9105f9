// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_type::{Type, Value};

use crate::{
	BitVec,
	value::{
		column::ColumnData,
		container::{BoolContainer, ListContainer, NumberContainer, UndefinedContainer, Utf8Container},
	},
};

macro_rules! number_factory {
	($($name:ident, $with_bitvec:ident => $prim:ty, $variant:ident);* $(;)?) => {
		$(
			pub fn $name(data: impl IntoIterator<Item = $prim>) -> Self {
				let data = data.into_iter().collect::<Vec<_>>();
				ColumnData::$variant(NumberContainer::from_vec(data))
			}

			pub fn $with_bitvec(data: impl IntoIterator<Item = $prim>, bitvec: impl Into<BitVec>) -> Self {
				let data = data.into_iter().collect::<Vec<_>>();
				let bitvec = bitvec.into();
				assert_eq!(bitvec.len(), data.len());
				ColumnData::$variant(NumberContainer::new(data, bitvec))
			}
		)*
	};
}

impl ColumnData {
	number_factory!(
		float4, float4_with_bitvec => f32, Float4;
		float8, float8_with_bitvec => f64, Float8;
		int1, int1_with_bitvec => i8, Int1;
		int2, int2_with_bitvec => i16, Int2;
		int4, int4_with_bitvec => i32, Int4;
		int8, int8_with_bitvec => i64, Int8;
		uint1, uint1_with_bitvec => u8, Uint1;
		uint2, uint2_with_bitvec => u16, Uint2;
		uint4, uint4_with_bitvec => u32, Uint4;
		uint8, uint8_with_bitvec => u64, Uint8;
	);

	pub fn bool(data: impl IntoIterator<Item = bool>) -> Self {
		let data = data.into_iter().collect::<Vec<_>>();
		ColumnData::Bool(BoolContainer::from_vec(data))
	}

	pub fn utf8<S: Into<String>>(data: impl IntoIterator<Item = S>) -> Self {
		let data = data.into_iter().map(Into::into).collect::<Vec<_>>();
		ColumnData::Utf8(Utf8Container::from_vec(data))
	}

	pub fn list(container: ListContainer) -> Self {
		ColumnData::List(container)
	}

	pub fn undefined(len: usize) -> Self {
		ColumnData::Undefined(UndefinedContainer::new(len))
	}

	/// A column of type `ty` without rows
	pub fn empty(ty: &Type) -> Self {
		Self::from_values(ty, std::iter::empty())
	}

	/// A single row column holding `value` with the value's own type
	pub fn from_value(value: &Value) -> Self {
		Self::from_values(&value.get_type(), std::iter::once(value.clone()))
	}

	/// Builds a column of type `ty`; values of any other type are stored as
	/// undefined rows.
	pub fn from_values(ty: &Type, values: impl IntoIterator<Item = Value>) -> Self {
		macro_rules! collect {
			($variant:ident) => {
				ColumnData::$variant(
					values.into_iter()
						.map(|v| match v {
							Value::$variant(v) => Some(v),
							_ => None,
						})
						.collect(),
				)
			};
		}

		match ty {
			Type::Float4 => collect!(Float4),
			Type::Float8 => collect!(Float8),
			Type::Int1 => collect!(Int1),
			Type::Int2 => collect!(Int2),
			Type::Int4 => collect!(Int4),
			Type::Int8 => collect!(Int8),
			Type::Uint1 => collect!(Uint1),
			Type::Uint2 => collect!(Uint2),
			Type::Uint4 => collect!(Uint4),
			Type::Uint8 => collect!(Uint8),
			Type::Boolean => {
				let mut container = BoolContainer::with_capacity(0);
				for value in values {
					match value {
						Value::Boolean(v) => container.push(v),
						_ => container.push_undefined(),
					}
				}
				ColumnData::Bool(container)
			}
			Type::Utf8 => {
				let mut container = Utf8Container::with_capacity(0);
				for value in values {
					match value {
						Value::Utf8(v) => container.push(v),
						_ => container.push_undefined(),
					}
				}
				ColumnData::Utf8(container)
			}
			Type::List(inner) => {
				let mut offsets = vec![0];
				let mut bitvec = BitVec::new();
				let mut flat = Vec::new();
				for value in values {
					match value {
						Value::List(items) => {
							flat.extend(items);
							bitvec.push(true);
						}
						_ => bitvec.push(false),
					}
					offsets.push(flat.len());
				}
				ColumnData::List(ListContainer::new(offsets, Self::from_values(inner, flat), bitvec))
			}
			Type::Undefined => ColumnData::undefined(values.into_iter().count()),
		}
	}
}

#[cfg(test)]
mod tests {
	use ranger_type::{Type, Value};

	use crate::ColumnData;

	#[test]
	fn test_from_value() {
		assert_eq!(ColumnData::from_value(&Value::Uint4(3)), ColumnData::uint4([3]));
		assert_eq!(ColumnData::from_value(&Value::Undefined), ColumnData::undefined(1));
	}

	#[test]
	fn test_from_values_mismatch_is_undefined() {
		let data = ColumnData::from_values(&Type::Int8, [Value::Int8(1), Value::Undefined, Value::Int4(3)]);
		assert_eq!(data, ColumnData::int8_with_bitvec([1, 0, 0], [true, false, false]));
	}

	#[test]
	fn test_from_values_list() {
		let data = ColumnData::from_values(
			&Type::list(Type::Int8),
			[Value::list([1i64, 2]), Value::Undefined, Value::List(vec![])],
		);
		assert_eq!(data.len(), 3);
		assert_eq!(data.get_type(), Type::list(Type::Int8));
		assert_eq!(data.get_value(0), Value::list([1i64, 2]));
		assert_eq!(data.get_value(1), Value::Undefined);
		assert_eq!(data.get_value(2), Value::List(vec![]));
	}

	#[test]
	fn test_empty() {
		let data = ColumnData::empty(&Type::list(Type::Uint2));
		assert!(data.is_empty());
		assert_eq!(data.get_type(), Type::list(Type::Uint2));
	}

	#[test]
	#[should_panic]
	fn test_bitvec_length_mismatch() {
		ColumnData::int4_with_bitvec([1, 2], [true]);
	}
}
