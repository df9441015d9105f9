// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

mod get;
mod integer;

pub use get::GetType;
pub use integer::IntegerType;

/// All data types a column or an expression can carry
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 1-byte unsigned integer
	Uint1,
	/// A 2-byte unsigned integer
	Uint2,
	/// A 4-byte unsigned integer
	Uint4,
	/// An 8-byte unsigned integer
	Uint8,
	/// A UTF-8 encoded text.
	Utf8,
	/// A variable length list whose elements are all of the inner type
	List(Box<Type>),
	/// Value is not defined (think null in common programming languages)
	Undefined,
}

impl Type {
	pub fn list(inner: impl Into<Type>) -> Self {
		Type::List(Box::new(inner.into()))
	}

	pub fn is_signed_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8)
	}

	pub fn is_unsigned_integer(&self) -> bool {
		matches!(self, Type::Uint1 | Type::Uint2 | Type::Uint4 | Type::Uint8)
	}

	pub fn is_integer(&self) -> bool {
		self.is_signed_integer() || self.is_unsigned_integer()
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Type::Undefined)
	}

	/// Element type of a list, `None` for every other type
	pub fn inner(&self) -> Option<&Type> {
		match self {
			Type::List(inner) => Some(inner),
			_ => None,
		}
	}

	/// The name of the native representation, as used in conversion messages
	pub fn primitive_name(&self) -> &'static str {
		match self {
			Type::Boolean => "bool",
			Type::Float4 => "f32",
			Type::Float8 => "f64",
			Type::Int1 => "i8",
			Type::Int2 => "i16",
			Type::Int4 => "i32",
			Type::Int8 => "i64",
			Type::Uint1 => "u8",
			Type::Uint2 => "u16",
			Type::Uint4 => "u32",
			Type::Uint8 => "u64",
			Type::Utf8 => "str",
			Type::List(_) => "list",
			Type::Undefined => "null",
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Boolean => f.write_str("Boolean"),
			Type::Float4 => f.write_str("Float4"),
			Type::Float8 => f.write_str("Float8"),
			Type::Int1 => f.write_str("Int1"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Uint1 => f.write_str("Uint1"),
			Type::Uint2 => f.write_str("Uint2"),
			Type::Uint4 => f.write_str("Uint4"),
			Type::Uint8 => f.write_str("Uint8"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::List(inner) => write!(f, "List({})", inner),
			Type::Undefined => f.write_str("Undefined"),
		}
	}
}

impl FromStr for Type {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let upper = s.trim().to_uppercase();
		if let Some(inner) = upper.strip_prefix("LIST(").and_then(|rest| rest.strip_suffix(')')) {
			return Ok(Type::list(Type::from_str(inner)?));
		}

		match upper.as_str() {
			"BOOL" | "BOOLEAN" => Ok(Type::Boolean),
			"FLOAT4" => Ok(Type::Float4),
			"FLOAT8" => Ok(Type::Float8),
			"INT1" => Ok(Type::Int1),
			"INT2" => Ok(Type::Int2),
			"INT4" => Ok(Type::Int4),
			"INT8" => Ok(Type::Int8),
			"UINT1" => Ok(Type::Uint1),
			"UINT2" => Ok(Type::Uint2),
			"UINT4" => Ok(Type::Uint4),
			"UINT8" => Ok(Type::Uint8),
			"UTF8" | "TEXT" => Ok(Type::Utf8),
			"UNDEFINED" => Ok(Type::Undefined),
			_ => Err(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use super::Type;

	#[test]
	fn test_display_list() {
		assert_eq!(Type::list(Type::Uint2).to_string(), "List(Uint2)");
		assert_eq!(Type::list(Type::list(Type::Int8)).to_string(), "List(List(Int8))");
	}

	#[test]
	fn test_from_str() {
		assert_eq!(Type::from_str("int4"), Ok(Type::Int4));
		assert_eq!(Type::from_str("UINT8"), Ok(Type::Uint8));
		assert_eq!(Type::from_str("text"), Ok(Type::Utf8));
		assert_eq!(Type::from_str("list(int8)"), Ok(Type::list(Type::Int8)));
		assert_eq!(Type::from_str("decimal"), Err(()));
	}

	#[test]
	fn test_display_round_trips_through_from_str() {
		for ty in [Type::Boolean, Type::Float8, Type::Int2, Type::Uint4, Type::list(Type::Int1)] {
			assert_eq!(Type::from_str(&ty.to_string()), Ok(ty));
		}
	}

	#[test]
	fn test_predicates() {
		assert!(Type::Int1.is_signed_integer());
		assert!(Type::Uint8.is_unsigned_integer());
		assert!(!Type::Float8.is_integer());
		assert!(!Type::list(Type::Int8).is_integer());
		assert_eq!(Type::list(Type::Int8).inner(), Some(&Type::Int8));
		assert_eq!(Type::Int8.inner(), None);
	}

	#[test]
	fn test_primitive_name() {
		assert_eq!(Type::Int4.primitive_name(), "i32");
		assert_eq!(Type::Uint4.primitive_name(), "u32");
		assert_eq!(Type::Float8.primitive_name(), "f64");
	}
}
