// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Debug, Display};

use crate::value::{number::safe::convert::SafeConvert, r#type::GetType};

pub trait IsNumber: Display + Clone + Copy + Debug + PartialEq + PartialOrd + GetType + Default + Send + Sync {}

/// Fixed-width integers a range can be materialized into.
///
/// Every `IsInt` narrows from the `i128` a range is generated in with a
/// checked conversion.
pub trait IsInt: IsNumber + Ord {
	fn narrow(value: i128) -> Option<Self>;
}

impl IsNumber for f32 {}
impl IsNumber for f64 {}

macro_rules! impl_is_int {
	($($prim:ty),* $(,)?) => {
		$(
			impl IsNumber for $prim {}

			impl IsInt for $prim {
				fn narrow(value: i128) -> Option<Self> {
					value.checked_convert()
				}
			}
		)*
	};
}

impl_is_int!(i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
	use super::IsInt;

	#[test]
	fn test_narrow() {
		assert_eq!(u8::narrow(255), Some(255u8));
		assert_eq!(u8::narrow(256), None);
		assert_eq!(u32::narrow(-1), None);
		assert_eq!(i16::narrow(-32_768), Some(i16::MIN));
	}
}
