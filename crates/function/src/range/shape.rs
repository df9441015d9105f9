// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_core::ColumnData;
use ranger_type::{Fragment, Type, Value};
use tracing::trace;

use crate::{
	error::{RangeError, RangeField, RangeResult},
	range::RangeOperand,
};

/// An operand classified by how many values it carries
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedOperand<'a> {
	/// Exactly one value. `hint` is the declared type, `None` for literals.
	Scalar {
		value: Value,
		hint: Option<Type>,
	},
	/// One value per row, more than one row
	RowWise(&'a ColumnData),
	/// A column without rows
	Absent {
		ty: Type,
	},
}

impl<'a> ResolvedOperand<'a> {
	pub fn resolve(operand: &'a RangeOperand) -> Self {
		match operand {
			RangeOperand::Literal(value) => ResolvedOperand::Scalar {
				value: value.clone(),
				hint: None,
			},
			RangeOperand::Column(data) => match data.len() {
				0 => ResolvedOperand::Absent {
					ty: data.get_type(),
				},
				1 => ResolvedOperand::Scalar {
					value: data.get_value(0),
					hint: Some(data.get_type()),
				},
				_ => ResolvedOperand::RowWise(data),
			},
		}
	}

	/// Number of values present
	pub fn len(&self) -> usize {
		match self {
			ResolvedOperand::Scalar {
				..
			} => 1,
			ResolvedOperand::RowWise(data) => data.len(),
			ResolvedOperand::Absent {
				..
			} => 0,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn hint(&self) -> Option<Type> {
		match self {
			ResolvedOperand::Scalar {
				hint,
				..
			} => hint.clone(),
			ResolvedOperand::RowWise(data) => Some(data.get_type()),
			ResolvedOperand::Absent {
				ty,
			} => Some(ty.clone()),
		}
	}

	/// The value used for `row`, scalars broadcast to every row
	pub fn value_at(&self, row: usize) -> Value {
		match self {
			ResolvedOperand::Scalar {
				value,
				..
			} => value.clone(),
			ResolvedOperand::RowWise(data) => data.get_value(row),
			ResolvedOperand::Absent {
				..
			} => Value::Undefined,
		}
	}
}

/// How a call produces its output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
	/// One range, a flat column
	Scalar,
	/// One range per row, a list column
	RowWise {
		rows: usize,
	},
}

impl Shape {
	/// Number of output rows
	pub fn rows(&self) -> usize {
		match self {
			Shape::Scalar => 1,
			Shape::RowWise {
				rows,
			} => *rows,
		}
	}
}

/// Start, end and step, classified in that order
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedOperands<'a> {
	pub start: ResolvedOperand<'a>,
	pub end: ResolvedOperand<'a>,
	pub step: ResolvedOperand<'a>,
}

impl<'a> ResolvedOperands<'a> {
	pub fn resolve(start: &'a RangeOperand, end: &'a RangeOperand, step: &'a RangeOperand) -> Self {
		Self {
			start: ResolvedOperand::resolve(start),
			end: ResolvedOperand::resolve(end),
			step: ResolvedOperand::resolve(step),
		}
	}

	pub fn fields(&self) -> [(RangeField, &ResolvedOperand<'a>); 3] {
		[(RangeField::Start, &self.start), (RangeField::End, &self.end), (RangeField::Step, &self.step)]
	}

	/// Declared types of start and end, the operands that drive dtype inference
	pub fn bound_hints(&self) -> [Option<Type>; 2] {
		[self.start.hint(), self.end.hint()]
	}

	/// Every operand must carry exactly one value
	pub fn expect_scalar(&self, function: &Fragment) -> RangeResult<Shape> {
		for (field, operand) in self.fields() {
			let got = operand.len();
			if got != 1 {
				return Err(RangeError::ShapeMismatch {
					function: function.clone(),
					field,
					got,
				});
			}
		}
		trace!("resolved scalar shape");
		Ok(Shape::Scalar)
	}

	/// Unit operands broadcast, all others must agree on their length
	pub fn expect_rows(&self, function: &Fragment) -> RangeResult<Shape> {
		let mut rows: Option<usize> = None;
		for (field, operand) in self.fields() {
			let got = operand.len();
			if got == 1 {
				continue;
			}
			match rows {
				None => rows = Some(got),
				Some(expected) if expected != got => {
					return Err(RangeError::RowCountMismatch {
						function: function.clone(),
						field,
						got,
						expected,
					});
				}
				Some(_) => {}
			}
		}
		let rows = rows.unwrap_or(1);
		trace!(rows, "resolved row-wise shape");
		Ok(Shape::RowWise {
			rows,
		})
	}
}
