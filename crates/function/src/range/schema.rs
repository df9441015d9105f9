// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use ranger_core::Field;
use ranger_type::{Fragment, IntegerType, Type};

/// The two range entry points
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeFunction {
	/// One flat range
	IntRange,
	/// One range per row
	IntRanges,
}

impl RangeFunction {
	pub fn name(&self) -> &'static str {
		match self {
			RangeFunction::IntRange => "int_range",
			RangeFunction::IntRanges => "int_ranges",
		}
	}

	/// Name of the output column when no alias is given
	pub fn output_name(&self) -> &'static str {
		match self {
			RangeFunction::IntRange => "int",
			RangeFunction::IntRanges => "int_range",
		}
	}

	pub fn fragment(&self) -> Fragment {
		Fragment::internal(self.name())
	}

	/// The output type for elements of kind `dtype`
	pub fn output_type(&self, dtype: IntegerType) -> Type {
		match self {
			RangeFunction::IntRange => dtype.into(),
			RangeFunction::IntRanges => Type::list(dtype),
		}
	}
}

impl Display for RangeFunction {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// Predicts the output field of a range call without touching any row
pub fn project(function: RangeFunction, dtype: IntegerType, alias: Option<&str>) -> Field {
	let name = alias.unwrap_or(function.output_name());
	Field::new(name, function.output_type(dtype))
}
