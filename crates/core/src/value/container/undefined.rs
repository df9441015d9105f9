// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_type::Value;
use serde::{Deserialize, Serialize};

/// A column where every row is undefined
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UndefinedContainer {
	len: usize,
}

impl UndefinedContainer {
	pub fn new(len: usize) -> Self {
		Self {
			len,
		}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn push_undefined(&mut self) {
		self.len += 1;
	}

	pub fn get_value(&self, _index: usize) -> Value {
		Value::Undefined
	}

	pub fn slice(&self, start: usize, end: usize) -> Self {
		Self {
			len: end.saturating_sub(start),
		}
	}
}
