// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_type::{Fragment, IntegerType, Type, Value};
use tracing::debug;

use crate::error::{RangeError, RangeField, RangeResult};

/// Validates an explicit dtype request
pub fn requested_dtype(function: &Fragment, requested: Option<&Type>) -> RangeResult<Option<IntegerType>> {
	match requested {
		None => Ok(None),
		Some(ty) => IntegerType::try_from(ty).map(Some).map_err(|dtype| RangeError::NonIntegerDtype {
			function: function.clone(),
			dtype,
		}),
	}
}

/// The output kind of a range.
///
/// An explicit request wins. Otherwise the default is joined with the
/// declared integer kinds of the bounds. When the kinds have no common
/// 64-bit supertype the default is used and the checked cast guards each
/// value. The result does not depend on the order of the hints.
pub fn resolve_dtype(requested: Option<IntegerType>, hints: &[Option<Type>], default: IntegerType) -> IntegerType {
	if let Some(requested) = requested {
		return requested;
	}

	let resolved = hints
		.iter()
		.flatten()
		.filter_map(|ty| IntegerType::try_from(ty).ok())
		.try_fold(default, IntegerType::supertype)
		.unwrap_or(default);

	debug!(%resolved, "inferred range dtype");
	resolved
}

/// Converts a bound into `target`, failing instead of wrapping
pub fn cast_checked(function: &Fragment, field: RangeField, value: &Value, target: IntegerType) -> RangeResult<i128> {
	let Some(widened) = value.as_integer() else {
		return Err(RangeError::InvalidOperandType {
			function: function.clone(),
			field,
			got: value.get_type(),
		});
	};

	if target.contains(widened) {
		Ok(widened)
	} else {
		Err(RangeError::CastOverflow {
			function: function.clone(),
			field,
			value: widened,
			from: value.get_type(),
			to: target,
		})
	}
}
