// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod factory;
mod from;
mod get;
mod slice;

use ranger_type::Type;
use serde::{Deserialize, Serialize};

use crate::value::container::{BoolContainer, ListContainer, NumberContainer, UndefinedContainer, Utf8Container};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Bool(BoolContainer),
	Float4(NumberContainer<f32>),
	Float8(NumberContainer<f64>),
	Int1(NumberContainer<i8>),
	Int2(NumberContainer<i16>),
	Int4(NumberContainer<i32>),
	Int8(NumberContainer<i64>),
	Uint1(NumberContainer<u8>),
	Uint2(NumberContainer<u16>),
	Uint4(NumberContainer<u32>),
	Uint8(NumberContainer<u64>),
	Utf8(Utf8Container),
	List(ListContainer),
	// special case: all undefined
	Undefined(UndefinedContainer),
}

impl ColumnData {
	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Bool(_) => Type::Boolean,
			ColumnData::Float4(_) => Type::Float4,
			ColumnData::Float8(_) => Type::Float8,
			ColumnData::Int1(_) => Type::Int1,
			ColumnData::Int2(_) => Type::Int2,
			ColumnData::Int4(_) => Type::Int4,
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Uint1(_) => Type::Uint1,
			ColumnData::Uint2(_) => Type::Uint2,
			ColumnData::Uint4(_) => Type::Uint4,
			ColumnData::Uint8(_) => Type::Uint8,
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::List(container) => Type::list(container.inner_type()),
			ColumnData::Undefined(_) => Type::Undefined,
		}
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		match self {
			ColumnData::Bool(container) => container.is_defined(idx),
			ColumnData::Float4(container) => container.is_defined(idx),
			ColumnData::Float8(container) => container.is_defined(idx),
			ColumnData::Int1(container) => container.is_defined(idx),
			ColumnData::Int2(container) => container.is_defined(idx),
			ColumnData::Int4(container) => container.is_defined(idx),
			ColumnData::Int8(container) => container.is_defined(idx),
			ColumnData::Uint1(container) => container.is_defined(idx),
			ColumnData::Uint2(container) => container.is_defined(idx),
			ColumnData::Uint4(container) => container.is_defined(idx),
			ColumnData::Uint8(container) => container.is_defined(idx),
			ColumnData::Utf8(container) => container.is_defined(idx),
			ColumnData::List(container) => container.is_defined(idx),
			ColumnData::Undefined(_) => false,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Bool(container) => container.len(),
			ColumnData::Float4(container) => container.len(),
			ColumnData::Float8(container) => container.len(),
			ColumnData::Int1(container) => container.len(),
			ColumnData::Int2(container) => container.len(),
			ColumnData::Int4(container) => container.len(),
			ColumnData::Int8(container) => container.len(),
			ColumnData::Uint1(container) => container.len(),
			ColumnData::Uint2(container) => container.len(),
			ColumnData::Uint4(container) => container.len(),
			ColumnData::Uint8(container) => container.len(),
			ColumnData::Utf8(container) => container.len(),
			ColumnData::List(container) => container.len(),
			ColumnData::Undefined(container) => container.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
