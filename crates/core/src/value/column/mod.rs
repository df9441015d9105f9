// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod columns;
mod data;

pub use columns::Columns;
pub use data::ColumnData;
use ranger_type::Type;
use serde::{Deserialize, Serialize};

use crate::schema::Field;

/// A named column of data
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub data: ColumnData,
}

macro_rules! named_factory {
	($($name:ident => $prim:ty),* $(,)?) => {
		$(
			pub fn $name(name: impl Into<String>, data: impl IntoIterator<Item = $prim>) -> Self {
				Self::new(name, ColumnData::$name(data))
			}
		)*
	};
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}

	named_factory!(
		int1 => i8,
		int2 => i16,
		int4 => i32,
		int8 => i64,
		uint1 => u8,
		uint2 => u16,
		uint4 => u32,
		uint8 => u64,
		float8 => f64,
		bool => bool,
	);

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn data(&self) -> &ColumnData {
		&self.data
	}

	pub fn get_type(&self) -> Type {
		self.data.get_type()
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn field(&self) -> Field {
		Field::new(self.name.clone(), self.get_type())
	}

	pub fn with_name(self, name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			data: self.data,
		}
	}
}
