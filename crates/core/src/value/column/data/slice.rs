// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::value::column::ColumnData;

impl ColumnData {
	pub fn slice(&self, start: usize, end: usize) -> ColumnData {
		match self {
			ColumnData::Bool(container) => ColumnData::Bool(container.slice(start, end)),
			ColumnData::Float4(container) => ColumnData::Float4(container.slice(start, end)),
			ColumnData::Float8(container) => ColumnData::Float8(container.slice(start, end)),
			ColumnData::Int1(container) => ColumnData::Int1(container.slice(start, end)),
			ColumnData::Int2(container) => ColumnData::Int2(container.slice(start, end)),
			ColumnData::Int4(container) => ColumnData::Int4(container.slice(start, end)),
			ColumnData::Int8(container) => ColumnData::Int8(container.slice(start, end)),
			ColumnData::Uint1(container) => ColumnData::Uint1(container.slice(start, end)),
			ColumnData::Uint2(container) => ColumnData::Uint2(container.slice(start, end)),
			ColumnData::Uint4(container) => ColumnData::Uint4(container.slice(start, end)),
			ColumnData::Uint8(container) => ColumnData::Uint8(container.slice(start, end)),
			ColumnData::Utf8(container) => ColumnData::Utf8(container.slice(start, end)),
			ColumnData::List(container) => ColumnData::List(container.slice(start, end)),
			ColumnData::Undefined(container) => ColumnData::Undefined(container.slice(start, end)),
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::ColumnData;

	#[test]
	fn test_slice_keeps_type_and_bitvec() {
		let data = ColumnData::uint2_with_bitvec([1, 2, 3], [true, false, true]);
		assert_eq!(data.slice(1, 3), ColumnData::uint2_with_bitvec([2, 3], [false, true]));
	}

	#[test]
	fn test_slice_undefined() {
		assert_eq!(ColumnData::undefined(5).slice(1, 4), ColumnData::undefined(3));
	}
}
