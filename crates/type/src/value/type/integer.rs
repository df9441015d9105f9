// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::Type;
use crate::value::{Value, number::safe::convert::SafeConvert};

/// The fixed-width integer kinds a range can be generated into.
///
/// `IntegerType` is the checked counterpart of the integer subset of
/// [`Type`]: converting a `Type` into an `IntegerType` fails for every
/// non-integer kind and hands the rejected type back to the caller.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegerType {
	Int1,
	Int2,
	Int4,
	#[default]
	Int8,
	Uint1,
	Uint2,
	Uint4,
	Uint8,
}

impl IntegerType {
	pub const ALL: [IntegerType; 8] = [
		IntegerType::Int1,
		IntegerType::Int2,
		IntegerType::Int4,
		IntegerType::Int8,
		IntegerType::Uint1,
		IntegerType::Uint2,
		IntegerType::Uint4,
		IntegerType::Uint8,
	];

	pub fn is_signed(&self) -> bool {
		matches!(self, IntegerType::Int1 | IntegerType::Int2 | IntegerType::Int4 | IntegerType::Int8)
	}

	pub fn bits(&self) -> u32 {
		match self {
			IntegerType::Int1 | IntegerType::Uint1 => 8,
			IntegerType::Int2 | IntegerType::Uint2 => 16,
			IntegerType::Int4 | IntegerType::Uint4 => 32,
			IntegerType::Int8 | IntegerType::Uint8 => 64,
		}
	}

	pub fn min(&self) -> i128 {
		match self {
			IntegerType::Int1 => i8::MIN as i128,
			IntegerType::Int2 => i16::MIN as i128,
			IntegerType::Int4 => i32::MIN as i128,
			IntegerType::Int8 => i64::MIN as i128,
			IntegerType::Uint1 | IntegerType::Uint2 | IntegerType::Uint4 | IntegerType::Uint8 => 0,
		}
	}

	pub fn max(&self) -> i128 {
		match self {
			IntegerType::Int1 => i8::MAX as i128,
			IntegerType::Int2 => i16::MAX as i128,
			IntegerType::Int4 => i32::MAX as i128,
			IntegerType::Int8 => i64::MAX as i128,
			IntegerType::Uint1 => u8::MAX as i128,
			IntegerType::Uint2 => u16::MAX as i128,
			IntegerType::Uint4 => u32::MAX as i128,
			IntegerType::Uint8 => u64::MAX as i128,
		}
	}

	/// Whether `value` is exactly representable in this kind
	pub fn contains(&self, value: i128) -> bool {
		self.min() <= value && value <= self.max()
	}

	/// The narrowest kind both `self` and `other` convert into without loss.
	///
	/// Returns `None` when no 64-bit kind can hold both, which only happens
	/// for `Uint8` paired with a signed kind.
	pub fn supertype(self, other: IntegerType) -> Option<IntegerType> {
		if self == other {
			return Some(self);
		}

		match (self.is_signed(), other.is_signed()) {
			(true, true) | (false, false) => {
				if self.bits() >= other.bits() {
					Some(self)
				} else {
					Some(other)
				}
			}
			(true, false) => Self::signed_superset(self, other),
			(false, true) => Self::signed_superset(other, self),
		}
	}

	fn signed_superset(signed: IntegerType, unsigned: IntegerType) -> Option<IntegerType> {
		if signed.bits() > unsigned.bits() {
			return Some(signed);
		}
		match unsigned.bits() * 2 {
			16 => Some(IntegerType::Int2),
			32 => Some(IntegerType::Int4),
			64 => Some(IntegerType::Int8),
			_ => None,
		}
	}

	/// Narrows `value` into a [`Value`] of this kind, `None` when it does not fit
	pub fn value(&self, value: i128) -> Option<Value> {
		Some(match self {
			IntegerType::Int1 => Value::Int1(value.checked_convert()?),
			IntegerType::Int2 => Value::Int2(value.checked_convert()?),
			IntegerType::Int4 => Value::Int4(value.checked_convert()?),
			IntegerType::Int8 => Value::Int8(value.checked_convert()?),
			IntegerType::Uint1 => Value::Uint1(value.checked_convert()?),
			IntegerType::Uint2 => Value::Uint2(value.checked_convert()?),
			IntegerType::Uint4 => Value::Uint4(value.checked_convert()?),
			IntegerType::Uint8 => Value::Uint8(value.checked_convert()?),
		})
	}

	pub fn primitive_name(&self) -> &'static str {
		Type::from(*self).primitive_name()
	}
}

impl From<IntegerType> for Type {
	fn from(value: IntegerType) -> Self {
		match value {
			IntegerType::Int1 => Type::Int1,
			IntegerType::Int2 => Type::Int2,
			IntegerType::Int4 => Type::Int4,
			IntegerType::Int8 => Type::Int8,
			IntegerType::Uint1 => Type::Uint1,
			IntegerType::Uint2 => Type::Uint2,
			IntegerType::Uint4 => Type::Uint4,
			IntegerType::Uint8 => Type::Uint8,
		}
	}
}

impl TryFrom<&Type> for IntegerType {
	type Error = Type;

	fn try_from(value: &Type) -> Result<Self, Self::Error> {
		match value {
			Type::Int1 => Ok(IntegerType::Int1),
			Type::Int2 => Ok(IntegerType::Int2),
			Type::Int4 => Ok(IntegerType::Int4),
			Type::Int8 => Ok(IntegerType::Int8),
			Type::Uint1 => Ok(IntegerType::Uint1),
			Type::Uint2 => Ok(IntegerType::Uint2),
			Type::Uint4 => Ok(IntegerType::Uint4),
			Type::Uint8 => Ok(IntegerType::Uint8),
			other => Err(other.clone()),
		}
	}
}

impl TryFrom<Type> for IntegerType {
	type Error = Type;

	fn try_from(value: Type) -> Result<Self, Self::Error> {
		IntegerType::try_from(&value)
	}
}

impl Display for IntegerType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&Type::from(*self), f)
	}
}
