// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::r#type::Type;

pub trait GetType {
	fn get_type() -> Type;
}

macro_rules! impl_get_type {
	($($prim:ty => $ty:expr),* $(,)?) => {
		$(
			impl GetType for $prim {
				fn get_type() -> Type {
					$ty
				}
			}
		)*
	};
}

impl_get_type!(
	bool => Type::Boolean,
	f32 => Type::Float4,
	f64 => Type::Float8,
	i8 => Type::Int1,
	i16 => Type::Int2,
	i32 => Type::Int4,
	i64 => Type::Int8,
	u8 => Type::Uint1,
	u16 => Type::Uint2,
	u32 => Type::Uint4,
	u64 => Type::Uint8,
	String => Type::Utf8,
);

#[cfg(test)]
mod tests {
	use super::GetType;
	use crate::value::r#type::Type;

	#[test]
	fn test_integers() {
		assert_eq!(i8::get_type(), Type::Int1);
		assert_eq!(i64::get_type(), Type::Int8);
		assert_eq!(u16::get_type(), Type::Uint2);
		assert_eq!(u64::get_type(), Type::Uint8);
	}

	#[test]
	fn test_others() {
		assert_eq!(bool::get_type(), Type::Boolean);
		assert_eq!(f64::get_type(), Type::Float8);
		assert_eq!(String::get_type(), Type::Utf8);
	}
}
