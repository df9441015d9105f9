// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use ranger_core::{Column, Columns, Field, Schema};
use ranger_function::RangeFunction;
use ranger_type::{IntegerType, Result, Type, Value};

use crate::engine::Engine;

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
	Constant(Value),
	Column(String),
	Cast(CastExpression),
	Alias(AliasExpression),
	IntRange(RangeExpression),
	IntRanges(RangeExpression),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CastExpression {
	pub expression: Box<Expression>,
	pub to: Type,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AliasExpression {
	pub expression: Box<Expression>,
	pub alias: String,
}

/// A call of a range function, `name` is the registered function it resolves to
#[derive(Clone, Debug, PartialEq)]
pub struct RangeExpression {
	pub name: String,
	pub start: Box<Expression>,
	pub end: Box<Expression>,
	pub step: Box<Expression>,
	pub dtype: Option<IntegerType>,
}

impl RangeExpression {
	pub fn new(
		function: RangeFunction,
		start: Expression,
		end: Expression,
		step: Expression,
		dtype: Option<IntegerType>,
	) -> Self {
		Self {
			name: function.name().to_string(),
			start: Box::new(start),
			end: Box::new(end),
			step: Box::new(step),
			dtype,
		}
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	pub fn arguments(&self) -> [&Expression; 3] {
		[&*self.start, &*self.end, &*self.step]
	}
}

/// An untyped literal
pub fn lit(value: impl Into<Value>) -> Expression {
	Expression::Constant(value.into())
}

pub fn col(name: impl Into<String>) -> Expression {
	Expression::Column(name.into())
}

impl Expression {
	pub fn cast(self, to: impl Into<Type>) -> Self {
		Expression::Cast(CastExpression {
			expression: Box::new(self),
			to: to.into(),
		})
	}

	pub fn alias(self, alias: impl Into<String>) -> Self {
		Expression::Alias(AliasExpression {
			expression: Box::new(self),
			alias: alias.into(),
		})
	}

	/// The output field over `schema` with the default engine
	pub fn field(&self, schema: &Schema) -> Result<Field> {
		Engine::default().field(self, schema)
	}

	/// Evaluates against `columns` with the default engine
	pub fn evaluate(&self, columns: &Columns) -> Result<Column> {
		Engine::default().evaluate(self, columns)
	}
}

macro_rules! impl_from_primitive {
	($($prim:ty),* $(,)?) => {
		$(
			impl From<$prim> for Expression {
				fn from(value: $prim) -> Self {
					lit(value)
				}
			}
		)*
	};
}

impl_from_primitive!(i8, i16, i32, i64, u8, u16, u32, u64, Value);

impl Display for Expression {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Expression::Constant(value) => write!(f, "{}", value),
			Expression::Column(name) => f.write_str(name),
			Expression::Cast(cast) => write!(f, "cast({} as {})", cast.expression, cast.to),
			Expression::Alias(alias) => write!(f, "{} as {}", alias.expression, alias.alias),
			Expression::IntRange(range) | Expression::IntRanges(range) => {
				write!(f, "{}({}, {}, {})", range.name, range.start, range.end, range.step)?;
				match range.dtype {
					Some(dtype) => write!(f, " as {}", dtype),
					None => Ok(()),
				}
			}
		}
	}
}
