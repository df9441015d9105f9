// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::{Deref, Index};

use serde::{Deserialize, Serialize};

use crate::{
	schema::Schema,
	value::column::{Column, ColumnData},
};

/// An ordered set of equally long columns
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Columns {
	columns: Vec<Column>,
}

impl Deref for Columns {
	type Target = [Column];

	fn deref(&self) -> &Self::Target {
		self.columns.deref()
	}
}

impl Index<usize> for Columns {
	type Output = Column;

	fn index(&self, index: usize) -> &Self::Output {
		self.columns.index(index)
	}
}

impl Columns {
	pub fn new(columns: Vec<Column>) -> Self {
		let n = columns.first().map_or(0, |c| c.data().len());
		assert!(columns.iter().all(|c| c.data().len() == n));

		Self {
			columns,
		}
	}

	/// A frame without any column
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn single(column: Column) -> Self {
		Self {
			columns: vec![column],
		}
	}

	pub fn row_count(&self) -> usize {
		self.columns.first().map_or(0, |c| c.data().len())
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|c| c.name() == name)
	}

	pub fn data(&self, name: &str) -> Option<&ColumnData> {
		self.column(name).map(Column::data)
	}

	pub fn schema(&self) -> Schema {
		Schema::new(self.columns.iter().map(Column::field).collect())
	}

	pub fn into_columns(self) -> Vec<Column> {
		self.columns
	}
}

impl IntoIterator for Columns {
	type Item = Column;
	type IntoIter = std::vec::IntoIter<Column>;

	fn into_iter(self) -> Self::IntoIter {
		self.columns.into_iter()
	}
}

#[cfg(test)]
mod tests {
	use ranger_type::Type;

	use super::Columns;
	use crate::{Column, schema::Field};

	#[test]
	fn test_row_count() {
		let columns = Columns::new(vec![Column::int8("a", [1, 2]), Column::int8("b", [3, 4])]);
		assert_eq!(columns.row_count(), 2);
		assert_eq!(columns.len(), 2);
		assert_eq!(Columns::empty().row_count(), 0);
	}

	#[test]
	#[should_panic]
	fn test_unequal_lengths() {
		Columns::new(vec![Column::int8("a", [1, 2]), Column::int8("b", [3])]);
	}

	#[test]
	fn test_lookup() {
		let columns = Columns::new(vec![Column::uint4("a", [1]), Column::int8("b", [2])]);
		assert_eq!(columns.column("b").map(Column::get_type), Some(Type::Int8));
		assert!(columns.column("c").is_none());
	}

	#[test]
	fn test_schema() {
		let columns = Columns::new(vec![Column::uint4("a", [1]), Column::int8("b", [2])]);
		assert_eq!(columns.schema().fields(), &[Field::new("a", Type::Uint4), Field::new("b", Type::Int8)]);
	}
}
