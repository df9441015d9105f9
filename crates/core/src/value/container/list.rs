// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_type::{Type, Value};
use serde::{Deserialize, Serialize};

use crate::{BitVec, ColumnData};

/// Variable length lists stored as one flat child column.
///
/// Row `i` spans `values[offsets[i]..offsets[i + 1]]`. An undefined row
/// spans an empty slice and has its bit cleared.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListContainer {
	offsets: Vec<usize>,
	values: Box<ColumnData>,
	bitvec: BitVec,
}

impl ListContainer {
	pub fn new(offsets: Vec<usize>, values: ColumnData, bitvec: BitVec) -> Self {
		debug_assert_eq!(offsets.len(), bitvec.len() + 1);
		debug_assert_eq!(offsets.first().copied(), Some(0));
		debug_assert_eq!(offsets.last().copied(), Some(values.len()));
		debug_assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
		Self {
			offsets,
			values: Box::new(values),
			bitvec,
		}
	}

	/// A list column without rows whose elements are of type `inner`
	pub fn empty(inner: &Type) -> Self {
		Self::new(vec![0], ColumnData::empty(inner), BitVec::new())
	}

	pub fn len(&self) -> usize {
		self.offsets.len() - 1
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn inner_type(&self) -> Type {
		self.values.get_type()
	}

	pub fn offsets(&self) -> &[usize] {
		&self.offsets
	}

	pub fn values(&self) -> &ColumnData {
		&self.values
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		idx < self.len() && self.bitvec.get(idx)
	}

	pub fn get_value(&self, idx: usize) -> Value {
		if !self.is_defined(idx) {
			return Value::Undefined;
		}
		Value::List((self.offsets[idx]..self.offsets[idx + 1]).map(|i| self.values.get_value(i)).collect())
	}

	pub fn slice(&self, start: usize, end: usize) -> Self {
		let base = self.offsets[start];
		let offsets = self.offsets[start..=end].iter().map(|o| o - base).collect();
		Self {
			offsets,
			values: Box::new(self.values.slice(base, self.offsets[end])),
			bitvec: self.bitvec.slice(start, end),
		}
	}
}
