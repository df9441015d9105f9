// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_type::Value;
use serde::{Deserialize, Serialize};

use crate::BitVec;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoolContainer {
	data: BitVec,
	bitvec: BitVec,
}

impl BoolContainer {
	pub fn new(data: Vec<bool>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data: BitVec::from_slice(&data),
			bitvec,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: BitVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(data: Vec<bool>) -> Self {
		let bitvec = BitVec::repeat(data.len(), true);
		Self::new(data, bitvec)
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.data.len(), self.bitvec.len());
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.len() == 0
	}

	pub fn push(&mut self, value: bool) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(false);
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<bool> {
		if self.is_defined(index) {
			Some(self.data.get(index))
		} else {
			None
		}
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		idx < self.len() && self.bitvec.get(idx)
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn get_value(&self, index: usize) -> Value {
		self.get(index).map(Value::Boolean).unwrap_or(Value::Undefined)
	}

	pub fn slice(&self, start: usize, end: usize) -> Self {
		Self {
			data: self.data.slice(start, end),
			bitvec: self.bitvec.slice(start, end),
		}
	}
}

#[cfg(test)]
mod tests {
	use ranger_type::Value;

	use super::BoolContainer;

	#[test]
	fn test_get_value() {
		let mut c = BoolContainer::from_vec(vec![true, false]);
		c.push_undefined();
		assert_eq!(c.len(), 3);
		assert_eq!(c.get_value(0), Value::Boolean(true));
		assert_eq!(c.get_value(1), Value::Boolean(false));
		assert_eq!(c.get_value(2), Value::Undefined);
	}
}
