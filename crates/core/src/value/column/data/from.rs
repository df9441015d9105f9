// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::value::{
	column::ColumnData,
	container::{ListContainer, NumberContainer},
};

macro_rules! impl_from_number_container {
	($($prim:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<NumberContainer<$prim>> for ColumnData {
				fn from(container: NumberContainer<$prim>) -> Self {
					ColumnData::$variant(container)
				}
			}
		)*
	};
}

impl_from_number_container!(
	f32 => Float4,
	f64 => Float8,
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	u8 => Uint1,
	u16 => Uint2,
	u32 => Uint4,
	u64 => Uint8,
);

impl From<ListContainer> for ColumnData {
	fn from(container: ListContainer) -> Self {
		ColumnData::List(container)
	}
}
