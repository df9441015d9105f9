// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Debug;

use ranger_type::{Value, value::is::IsNumber};
use serde::{Deserialize, Serialize};

use crate::BitVec;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberContainer<T>
where
	T: IsNumber,
{
	values: Vec<T>,
	bitvec: BitVec,
}

impl<T> NumberContainer<T>
where
	T: IsNumber + Clone + Debug + Default,
{
	pub fn new(values: Vec<T>, bitvec: BitVec) -> Self {
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

	pub fn from_vec(values: Vec<T>) -> Self {
		let len = values.len();
		Self {
			values,
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.values.len(), self.bitvec.len());
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn push(&mut self, value: T) {
		self.values.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.values.push(T::default());
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		if self.is_defined(index) {
			self.values.get(index)
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

	pub fn values(&self) -> &[T] {
		&self.values
	}

	pub fn get_value(&self, index: usize) -> Value
	where
		T: Into<Value>,
	{
		self.get(index).map(|v| (*v).into()).unwrap_or(Value::Undefined)
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<T>> + '_ {
		self.values.iter().zip(self.bitvec.iter()).map(|(&v, defined)| {
			if defined {
				Some(v)
			} else {
				None
			}
		})
	}

	pub fn slice(&self, start: usize, end: usize) -> Self {
		Self {
			values: self.values[start..end].to_vec(),
			bitvec: self.bitvec.slice(start, end),
		}
	}
}

impl<T> FromIterator<Option<T>> for NumberContainer<T>
where
	T: IsNumber + Clone + Debug + Default,
{
	fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
		let iter = iter.into_iter();
		let mut result = Self::with_capacity(iter.size_hint().0);
		for value in iter {
			match value {
				Some(v) => result.push(v),
				None => result.push_undefined(),
			}
		}
		result
	}
}

#[cfg(test)]
mod tests {
	use ranger_type::Value;

	use super::NumberContainer;
	use crate::BitVec;

	#[test]
	fn test_from_vec_is_fully_defined() {
		let c = NumberContainer::from_vec(vec![1i64, 2, 3]);
		assert_eq!(c.len(), 3);
		assert_eq!(c.bitvec().count_ones(), 3);
		assert_eq!(c.get(1), Some(&2));
	}

	#[test]
	fn test_undefined_rows() {
		let c = NumberContainer::new(vec![1u16, 0, 3], BitVec::from_slice(&[true, false, true]));
		assert_eq!(c.get(1), None);
		assert_eq!(c.get_value(1), Value::Undefined);
		assert_eq!(c.get_value(2), Value::Uint2(3));
		assert_eq!(c.iter().collect::<Vec<_>>(), vec![Some(1), None, Some(3)]);
	}

	#[test]
	fn test_from_iter() {
		let c: NumberContainer<i8> = [Some(1), None].into_iter().collect();
		assert_eq!(c.len(), 2);
		assert!(!c.is_defined(1));
	}

	#[test]
	fn test_slice() {
		let c = NumberContainer::from_vec(vec![1i32, 2, 3, 4]);
		let s = c.slice(1, 3);
		assert_eq!(s.values(), &[2, 3]);
		assert_eq!(s.len(), 2);
	}

	#[test]
	fn test_serde() {
		let c = NumberContainer::from_vec(vec![5i64, 6]);
		let json = serde_json::to_string(&c).unwrap();
		let back: NumberContainer<i64> = serde_json::from_str(&json).unwrap();
		assert_eq!(back, c);
	}
}
