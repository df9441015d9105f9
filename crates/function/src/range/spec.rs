// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::num::NonZeroI64;

use ranger_type::{Fragment, IntegerType, value::is::IsInt};

use crate::{
	error::{RangeError, RangeField, RangeResult},
	range::{
		dtype::cast_checked,
		gate::{Bounds, reject_null},
		sequence::Sequence,
	},
};

/// A fully validated range: both bounds fit `dtype` and the step is non-zero
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeSpec {
	pub start: i128,
	pub end: i128,
	pub step: NonZeroI64,
	pub dtype: IntegerType,
}

impl RangeSpec {
	/// Checks null bounds, operand types, casts and the step, in that order
	pub fn resolve(function: &Fragment, bounds: &Bounds, dtype: IntegerType) -> RangeResult<Self> {
		reject_null(function, bounds)?;

		let [(_, start), (_, end), (_, step)] = bounds;
		let start = cast_checked(function, RangeField::Start, start, dtype)?;
		let end = cast_checked(function, RangeField::End, end, dtype)?;
		let step = cast_checked(function, RangeField::Step, step, IntegerType::Int8)?;
		let step = i64::try_from(step).ok().and_then(NonZeroI64::new).ok_or_else(|| RangeError::ZeroStep {
			function: function.clone(),
		})?;

		Ok(Self {
			start,
			end,
			step,
			dtype,
		})
	}

	pub fn sequence(&self) -> Sequence {
		Sequence::new(self.start, self.end, self.step)
	}

	/// Number of values in the range
	pub fn count(&self) -> u128 {
		self.sequence().remaining()
	}

	pub fn is_empty(&self) -> bool {
		self.count() == 0
	}

	/// Every value of the range as `T`.
	///
	/// All values lie between the two checked bounds, so narrowing only
	/// fails when `T` is not the kind of `dtype`.
	pub fn values<T: IsInt>(&self) -> Vec<T> {
		self.sequence().map_while(T::narrow).collect()
	}
}

#[cfg(test)]
mod tests {
	use std::num::NonZeroI64;

	use ranger_type::{Fragment, IntegerType, Type, Value};

	use super::RangeSpec;
	use crate::error::{RangeError, RangeField};

	fn function() -> Fragment {
		Fragment::internal("int_range")
	}

	fn bounds(start: Value, end: Value, step: Value) -> [(RangeField, Value); 3] {
		[(RangeField::Start, start), (RangeField::End, end), (RangeField::Step, step)]
	}

	#[test]
	fn test_resolve() {
		let spec =
			RangeSpec::resolve(&function(), &bounds(10.into(), 1.into(), (-2).into()), IntegerType::Int8).unwrap();
		assert_eq!(
			spec,
			RangeSpec {
				start: 10,
				end: 1,
				step: NonZeroI64::new(-2).unwrap(),
				dtype: IntegerType::Int8
			}
		);
		assert_eq!(spec.values::<i64>(), vec![10, 8, 6, 4, 2]);
		assert_eq!(spec.count(), 5);
	}

	#[test]
	fn test_descending_into_unsigned() {
		let spec = RangeSpec::resolve(&function(), &bounds(3.into(), 0.into(), (-1).into()), IntegerType::Uint4)
			.unwrap();
		assert_eq!(spec.values::<u32>(), vec![3, 2, 1]);
	}

	#[test]
	fn test_null_precedes_cast() {
		let err = RangeSpec::resolve(&function(), &bounds(3.into(), Value::Undefined, (-1).into()), IntegerType::Uint4)
			.unwrap_err();
		assert!(matches!(
			err,
			RangeError::NullInput {
				field: RangeField::End,
				..
			}
		));
	}

	#[test]
	fn test_cast_overflow() {
		let err = RangeSpec::resolve(&function(), &bounds(3.into(), (-1).into(), (-1).into()), IntegerType::Uint4)
			.unwrap_err();
		assert_eq!(err.to_string(), "conversion from `i32` to `u32` failed");
	}

	#[test]
	fn test_step_out_of_range() {
		let err = RangeSpec::resolve(&function(), &bounds(0.into(), 5.into(), Value::Uint8(u64::MAX)), IntegerType::Int8)
			.unwrap_err();
		assert_eq!(
			err,
			RangeError::CastOverflow {
				function: function(),
				field: RangeField::Step,
				value: u64::MAX as i128,
				from: Type::Uint8,
				to: IntegerType::Int8,
			}
		);
	}

	#[test]
	fn test_zero_step_checked_last() {
		let err = RangeSpec::resolve(&function(), &bounds(0.into(), 5.into(), 0.into()), IntegerType::Int8).unwrap_err();
		assert_eq!(
			err,
			RangeError::ZeroStep {
				function: function()
			}
		);

		let err = RangeSpec::resolve(&function(), &bounds((-1).into(), 5.into(), 0.into()), IntegerType::Uint1)
			.unwrap_err();
		assert!(matches!(err, RangeError::CastOverflow { .. }));
	}

	#[test]
	fn test_empty() {
		for (s, e, st) in [(0, -5, 1), (5, 0, 1), (0, 5, -1)] {
			let spec = RangeSpec::resolve(&function(), &bounds(s.into(), e.into(), st.into()), IntegerType::Int8)
				.unwrap();
			assert!(spec.is_empty());
			assert!(spec.values::<i64>().is_empty());
		}
	}
}
