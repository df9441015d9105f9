// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::Type;

pub(crate) fn value_range(value: &Type) -> &'static str {
	match value {
		Type::Float4 => "-3.4e38 to +3.4e38",
		Type::Float8 => "-1.8e308 to +1.8e308",
		Type::Int1 => "-128 to 127",
		Type::Int2 => "-32_768 to 32_767",
		Type::Int4 => "-2_147_483_648 to 2_147_483_647",
		Type::Int8 => "-9_223_372_036_854_775_808 to 9_223_372_036_854_775_807",
		Type::Uint1 => "0 to 255",
		Type::Uint2 => "0 to 65_535",
		Type::Uint4 => "0 to 4_294_967_295",
		Type::Uint8 => "0 to 18_446_744_073_709_551_615",
		Type::Boolean | Type::Utf8 | Type::List(_) | Type::Undefined => "not a numeric type",
	}
}

#[cfg(test)]
mod tests {
	mod value_range {
		use crate::{Type, error::diagnostic::util::value_range};

		#[test]
		fn test_signed_ints() {
			assert_eq!(value_range(&Type::Int1), "-128 to 127");
			assert_eq!(value_range(&Type::Int2), "-32_768 to 32_767");
			assert_eq!(value_range(&Type::Int4), "-2_147_483_648 to 2_147_483_647");
			assert_eq!(value_range(&Type::Int8), "-9_223_372_036_854_775_808 to 9_223_372_036_854_775_807");
		}

		#[test]
		fn test_unsigned_ints() {
			assert_eq!(value_range(&Type::Uint1), "0 to 255");
			assert_eq!(value_range(&Type::Uint2), "0 to 65_535");
			assert_eq!(value_range(&Type::Uint4), "0 to 4_294_967_295");
			assert_eq!(value_range(&Type::Uint8), "0 to 18_446_744_073_709_551_615");
		}

		#[test]
		fn test_floats() {
			assert_eq!(value_range(&Type::Float4), "-3.4e38 to +3.4e38");
			assert_eq!(value_range(&Type::Float8), "-1.8e308 to +1.8e308");
		}
	}
}
