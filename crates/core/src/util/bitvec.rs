// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};

/// A growable, packed sequence of bits.
///
/// Containers use it as their validity mask: bit `i` is set when row `i`
/// holds a defined value.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitVec {
	bits: Vec<u8>,
	len: usize,
}

impl BitVec {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			bits: Vec::with_capacity(capacity.div_ceil(8)),
			len: 0,
		}
	}

	pub fn repeat(len: usize, value: bool) -> Self {
		let byte = if value {
			0xFF
		} else {
			0x00
		};
		let mut bits = vec![byte; len.div_ceil(8)];
		// keep trailing bits cleared
		if value && len % 8 != 0 {
			if let Some(last) = bits.last_mut() {
				*last = (1u8 << (len % 8)) - 1;
			}
		}
		Self {
			bits,
			len,
		}
	}

	pub fn from_slice(slice: &[bool]) -> Self {
		let mut result = Self::with_capacity(slice.len());
		for &bit in slice {
			result.push(bit);
		}
		result
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn capacity(&self) -> usize {
		self.bits.capacity() * 8
	}

	pub fn push(&mut self, bit: bool) {
		let byte = self.len / 8;
		let offset = self.len % 8;
		if byte == self.bits.len() {
			self.bits.push(0);
		}
		if bit {
			self.bits[byte] |= 1 << offset;
		}
		self.len += 1;
	}

	pub fn get(&self, idx: usize) -> bool {
		assert!(idx < self.len, "index {} out of bounds for bitvec of length {}", idx, self.len);
		self.bits[idx / 8] & (1 << (idx % 8)) != 0
	}

	pub fn set(&mut self, idx: usize, bit: bool) {
		assert!(idx < self.len, "index {} out of bounds for bitvec of length {}", idx, self.len);
		if bit {
			self.bits[idx / 8] |= 1 << (idx % 8);
		} else {
			self.bits[idx / 8] &= !(1 << (idx % 8));
		}
	}

	pub fn take(&self, n: usize) -> BitVec {
		self.iter().take(n).collect()
	}

	pub fn slice(&self, start: usize, end: usize) -> BitVec {
		self.iter().skip(start).take(end.saturating_sub(start)).collect()
	}

	pub fn count_ones(&self) -> usize {
		self.bits.iter().map(|b| b.count_ones() as usize).sum()
	}

	pub fn iter(&self) -> BitVecIter<'_> {
		BitVecIter {
			inner: self,
			pos: 0,
		}
	}
}

impl Debug for BitVec {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("BitVec[")?;
		for bit in self.iter() {
			f.write_str(if bit {
				"1"
			} else {
				"0"
			})?;
		}
		f.write_str("]")
	}
}

impl FromIterator<bool> for BitVec {
	fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
		let iter = iter.into_iter();
		let mut result = BitVec::with_capacity(iter.size_hint().0);
		for bit in iter {
			result.push(bit);
		}
		result
	}
}

impl<const N: usize> From<[bool; N]> for BitVec {
	fn from(value: [bool; N]) -> Self {
		BitVec::from_slice(&value)
	}
}

impl From<Vec<bool>> for BitVec {
	fn from(value: Vec<bool>) -> Self {
		BitVec::from_slice(&value)
	}
}

pub struct BitVecIter<'a> {
	inner: &'a BitVec,
	pos: usize,
}

impl Iterator for BitVecIter<'_> {
	type Item = bool;

	fn next(&mut self) -> Option<Self::Item> {
		if self.pos >= self.inner.len {
			return None;
		}
		let bit = self.inner.get(self.pos);
		self.pos += 1;
		Some(bit)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.inner.len - self.pos;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for BitVecIter<'_> {}
