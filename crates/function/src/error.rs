// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use ranger_type::{
	Error, IntegerType, IntoDiagnostic, Type,
	error::diagnostic::{Diagnostic, cast},
	fragment::Fragment,
};

pub type RangeResult<T> = std::result::Result<T, RangeError>;

/// The range argument an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeField {
	Start,
	End,
	Step,
}

impl Display for RangeField {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			RangeField::Start => f.write_str("start"),
			RangeField::End => f.write_str("end"),
			RangeField::Step => f.write_str("step"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RangeError {
	#[error("`{field}` must contain exactly one value, got {got} values")]
	ShapeMismatch {
		function: Fragment,
		field: RangeField,
		got: usize,
	},

	#[error("`{field}` has {got} rows, expected {expected}")]
	RowCountMismatch {
		function: Fragment,
		field: RangeField,
		got: usize,
		expected: usize,
	},

	#[error("invalid null input for `{}`", .function.text())]
	NullInput {
		function: Fragment,
		field: RangeField,
	},

	#[error("non-integer `dtype` passed to `{}`: {dtype}", .function.text())]
	NonIntegerDtype {
		function: Fragment,
		dtype: Type,
	},

	#[error("conversion from `{}` to `{}` failed", .from.primitive_name(), .to.primitive_name())]
	CastOverflow {
		function: Fragment,
		field: RangeField,
		value: i128,
		from: Type,
		to: IntegerType,
	},

	#[error("step must not be zero in `{}`", .function.text())]
	ZeroStep {
		function: Fragment,
	},

	#[error("`{field}` of `{}` must be an integer, got {got}", .function.text())]
	InvalidOperandType {
		function: Fragment,
		field: RangeField,
		got: Type,
	},
}

impl IntoDiagnostic for RangeError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			RangeError::ShapeMismatch {
				function,
				field,
				got,
			} => Diagnostic {
				code: "RANGE_001".to_string(),
				message,
				column: None,
				label: Some(format!("`{}` of `{}` is not a single value", field, function.text())),
				fragment: function,
				help: Some(format!("pass a single value for `{}` or use `int_ranges` for one range per row", field)),
				notes: vec![format!("{} values were present", got)],
				cause: None,
			},

			RangeError::RowCountMismatch {
				function,
				field,
				got,
				expected,
			} => Diagnostic {
				code: "RANGE_002".to_string(),
				message,
				column: None,
				label: Some(format!("`{}` does not line up with the other arguments", field)),
				fragment: function,
				help: Some(format!("`{}` must have {} rows or exactly one value", field, expected)),
				notes: vec![format!("single values are broadcast, {} rows are not", got)],
				cause: None,
			},

			RangeError::NullInput {
				function,
				field,
			} => Diagnostic {
				code: "RANGE_003".to_string(),
				message,
				column: None,
				label: Some(format!("`{}` is null", field)),
				fragment: function,
				help: Some("provide a defined integer for every range argument".to_string()),
				notes: vec![],
				cause: None,
			},

			RangeError::NonIntegerDtype {
				function,
				dtype,
			} => Diagnostic {
				code: "RANGE_004".to_string(),
				message,
				column: None,
				label: Some(format!("{} is not an integer type", dtype)),
				fragment: function,
				help: Some("use one of Int1, Int2, Int4, Int8, Uint1, Uint2, Uint4, Uint8".to_string()),
				notes: vec![],
				cause: None,
			},

			RangeError::CastOverflow {
				function,
				field,
				value,
				from,
				to,
			} => {
				let cause = cast::integer_out_of_range(Fragment::internal(field.to_string()), from, to.into());
				Diagnostic {
					code: "RANGE_005".to_string(),
					message,
					column: None,
					label: Some(format!("`{}` is {} which does not fit into {}", field, value, to)),
					fragment: function,
					help: Some(format!("request a wider `dtype` than {} or adjust `{}`", to, field)),
					notes: vec![],
					cause: Some(Box::new(cause)),
				}
			}

			RangeError::ZeroStep {
				function,
			} => Diagnostic {
				code: "RANGE_006".to_string(),
				message,
				column: None,
				label: Some("`step` is zero".to_string()),
				fragment: function,
				help: Some("use a positive step to count up or a negative step to count down".to_string()),
				notes: vec![],
				cause: None,
			},

			RangeError::InvalidOperandType {
				function,
				field,
				got,
			} => Diagnostic {
				code: "RANGE_007".to_string(),
				message,
				column: None,
				label: Some(format!("`{}` is of type {}", field, got)),
				fragment: function,
				help: Some(format!("cast `{}` to an integer type", field)),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<RangeError> for Error {
	fn from(err: RangeError) -> Self {
		Error(Box::new(err.into_diagnostic()))
	}
}

#[cfg(test)]
mod tests {
	use ranger_type::{Error, IntegerType, Type, fragment::Fragment};

	use super::{RangeError, RangeField};

	fn int_range() -> Fragment {
		Fragment::internal("int_range")
	}

	#[test]
	fn test_shape_mismatch_message() {
		let err = RangeError::ShapeMismatch {
			function: int_range(),
			field: RangeField::Start,
			got: 0,
		};
		assert_eq!(err.to_string(), "`start` must contain exactly one value, got 0 values");
	}

	#[test]
	fn test_null_input_message() {
		let err = RangeError::NullInput {
			function: int_range(),
			field: RangeField::End,
		};
		assert_eq!(err.to_string(), "invalid null input for `int_range`");
	}

	#[test]
	fn test_non_integer_dtype_message() {
		let err = RangeError::NonIntegerDtype {
			function: int_range(),
			dtype: Type::Float8,
		};
		assert_eq!(err.to_string(), "non-integer `dtype` passed to `int_range`: Float8");
	}

	#[test]
	fn test_cast_overflow_diagnostic() {
		let err: Error = RangeError::CastOverflow {
			function: int_range(),
			field: RangeField::End,
			value: -1,
			from: Type::Int4,
			to: IntegerType::Uint4,
		}
		.into();
		assert_eq!(err.code, "RANGE_005");
		assert_eq!(err.message, "conversion from `i32` to `u32` failed");
		let cause = err.cause.as_ref().map(|c| c.code.as_str());
		assert_eq!(cause, Some("CAST_001"));
	}

	#[test]
	fn test_codes() {
		let cases: Vec<(RangeError, &str)> = vec![
			(
				RangeError::RowCountMismatch {
					function: int_range(),
					field: RangeField::End,
					got: 3,
					expected: 2,
				},
				"RANGE_002",
			),
			(
				RangeError::ZeroStep {
					function: int_range(),
				},
				"RANGE_006",
			),
			(
				RangeError::InvalidOperandType {
					function: int_range(),
					field: RangeField::Start,
					got: Type::Utf8,
				},
				"RANGE_007",
			),
		];
		for (err, code) in cases {
			let err: Error = err.into();
			assert_eq!(err.code(), code);
		}
	}

	#[test]
	fn test_messages_of_remaining_variants() {
		let row_count = RangeError::RowCountMismatch {
			function: int_range(),
			field: RangeField::End,
			got: 3,
			expected: 2,
		};
		assert_eq!(row_count.to_string(), "`end` has 3 rows, expected 2");

		let operand = RangeError::InvalidOperandType {
			function: int_range(),
			field: RangeField::Start,
			got: Type::Utf8,
		};
		assert_eq!(operand.to_string(), "`start` of `int_range` must be an integer, got Utf8");

		let zero = RangeError::ZeroStep {
			function: int_range(),
		};
		assert_eq!(zero.to_string(), "step must not be zero in `int_range`");
	}
}
