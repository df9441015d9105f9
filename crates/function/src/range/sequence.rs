// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{iter::FusedIterator, num::NonZeroI64};

/// The half-open sequence `start, start + step, ...` stopping before `end`.
///
/// Counts up for a positive step and down for a negative one. The length is
/// known upfront, and all arithmetic happens in `i128` so no 64-bit bound
/// can wrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
	next: i128,
	step: i128,
	remaining: u128,
}

impl Sequence {
	pub fn new(start: i128, end: i128, step: NonZeroI64) -> Self {
		let step = i128::from(step.get());
		let distance = if step > 0 {
			end.checked_sub(start)
		} else {
			start.checked_sub(end)
		};

		let remaining = match distance {
			Some(distance) if distance > 0 => {
				let distance = distance.unsigned_abs();
				let magnitude = step.unsigned_abs();
				distance.div_ceil(magnitude)
			}
			_ => 0,
		};

		Self {
			next: start,
			step,
			remaining,
		}
	}

	pub fn remaining(&self) -> u128 {
		self.remaining
	}
}

impl Iterator for Sequence {
	type Item = i128;

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}
		let current = self.next;
		self.remaining -= 1;
		if self.remaining > 0 {
			self.next += self.step;
		}
		Some(current)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		match usize::try_from(self.remaining) {
			Ok(n) => (n, Some(n)),
			Err(_) => (usize::MAX, None),
		}
	}
}

impl ExactSizeIterator for Sequence {}

impl FusedIterator for Sequence {}
