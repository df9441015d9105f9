// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_type::Value;

use crate::value::column::ColumnData;

impl ColumnData {
	pub fn get_value(&self, index: usize) -> Value {
		match self {
			ColumnData::Bool(container) => container.get_value(index),
			ColumnData::Float4(container) => container.get_value(index),
			ColumnData::Float8(container) => container.get_value(index),
			ColumnData::Int1(container) => container.get_value(index),
			ColumnData::Int2(container) => container.get_value(index),
			ColumnData::Int4(container) => container.get_value(index),
			ColumnData::Int8(container) => container.get_value(index),
			ColumnData::Uint1(container) => container.get_value(index),
			ColumnData::Uint2(container) => container.get_value(index),
			ColumnData::Uint4(container) => container.get_value(index),
			ColumnData::Uint8(container) => container.get_value(index),
			ColumnData::Utf8(container) => container.get_value(index),
			ColumnData::List(container) => container.get_value(index),
			ColumnData::Undefined(container) => container.get_value(index),
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
		(0..self.len()).map(|idx| self.get_value(idx))
	}
}
