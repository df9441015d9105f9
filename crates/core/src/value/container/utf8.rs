// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_type::Value;
use serde::{Deserialize, Serialize};

use crate::BitVec;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Utf8Container {
	values: Vec<String>,
	bitvec: BitVec,
}

impl Utf8Container {
	pub fn new(values: Vec<String>, bitvec: BitVec) -> Self {
		debug_assert_eq!(values.len(), bitvec.len());
		Self {
			values,
			bitvec,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			values: Vec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(values: Vec<String>) -> Self {
		let bitvec = BitVec::repeat(values.len(), true);
		Self::new(values, bitvec)
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.values.len(), self.bitvec.len());
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn push(&mut self, value: String) {
		self.values.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.values.push(String::new());
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		if self.is_defined(index) {
			self.values.get(index).map(String::as_str)
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
		self.get(index).map(Value::utf8).unwrap_or(Value::Undefined)
	}

	pub fn slice(&self, start: usize, end: usize) -> Self {
		Self {
			values: self.values[start..end].to_vec(),
			bitvec: self.bitvec.slice(start, end),
		}
	}
}
