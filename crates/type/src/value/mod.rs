// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod is;
pub mod number;
pub mod r#type;

use r#type::Type;

/// A single value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 4-byte floating point
	Float4(f32),
	/// An 8-byte floating point
	Float8(f64),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A 1-byte unsigned integer
	Uint1(u8),
	/// A 2-byte unsigned integer
	Uint2(u16),
	/// A 4-byte unsigned integer
	Uint4(u32),
	/// A 8-byte unsigned integer
	Uint8(u64),
	/// A UTF-8 encoded text
	Utf8(String),
	/// A list of values sharing one element type
	List(Vec<Value>),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		Value::Float8(v.into())
	}

	pub fn int1(v: impl Into<i8>) -> Self {
		Value::Int1(v.into())
	}

	pub fn int2(v: impl Into<i16>) -> Self {
		Value::Int2(v.into())
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn uint1(v: impl Into<u8>) -> Self {
		Value::Uint1(v.into())
	}

	pub fn uint2(v: impl Into<u16>) -> Self {
		Value::Uint2(v.into())
	}

	pub fn uint4(v: impl Into<u32>) -> Self {
		Value::Uint4(v.into())
	}

	pub fn uint8(v: impl Into<u64>) -> Self {
		Value::Uint8(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn list<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
		Value::List(values.into_iter().map(Into::into).collect())
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	/// The value as a widened integer, `None` for every non-integer value
	pub fn as_integer(&self) -> Option<i128> {
		match self {
			Value::Int1(v) => Some(i128::from(*v)),
			Value::Int2(v) => Some(i128::from(*v)),
			Value::Int4(v) => Some(i128::from(*v)),
			Value::Int8(v) => Some(i128::from(*v)),
			Value::Uint1(v) => Some(i128::from(*v)),
			Value::Uint2(v) => Some(i128::from(*v)),
			Value::Uint4(v) => Some(i128::from(*v)),
			Value::Uint8(v) => Some(i128::from(*v)),
			_ => None,
		}
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Int1(_) => Type::Int1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Uint1(_) => Type::Uint1,
			Value::Uint2(_) => Type::Uint2,
			Value::Uint4(_) => Type::Uint4,
			Value::Uint8(_) => Type::Uint8,
			Value::Utf8(_) => Type::Utf8,
			// element type of the first defined entry
			Value::List(values) => Type::list(
				values.iter().find(|v| !v.is_undefined()).map(Value::get_type).unwrap_or(Type::Undefined),
			),
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Float4(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Int1(value) => Display::fmt(value, f),
			Value::Int2(value) => Display::fmt(value, f),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Uint1(value) => Display::fmt(value, f),
			Value::Uint2(value) => Display::fmt(value, f),
			Value::Uint4(value) => Display::fmt(value, f),
			Value::Uint8(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
			Value::List(values) => {
				f.write_str("[")?;
				for (idx, value) in values.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(value, f)?;
				}
				f.write_str("]")
			}
			Value::Undefined => f.write_str("undefined"),
		}
	}
}

macro_rules! impl_from_primitive {
	($($prim:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$prim> for Value {
				fn from(value: $prim) -> Self {
					Value::$variant(value)
				}
			}
		)*
	};
}

impl_from_primitive!(
	bool => Boolean,
	f32 => Float4,
	f64 => Float8,
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	u8 => Uint1,
	u16 => Uint2,
	u32 => Uint4,
	u64 => Uint8,
	String => Utf8,
);

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Utf8(value.to_string())
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(Value::Undefined)
	}
}
