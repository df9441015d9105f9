// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_type::{Fragment, Value};

use crate::error::{RangeError, RangeField, RangeResult};

/// Start, end and step values of one range
pub type Bounds = [(RangeField, Value); 3];

/// Rejects the first null bound, checked in the order start, end, step
pub fn reject_null(function: &Fragment, bounds: &Bounds) -> RangeResult<()> {
	match bounds.iter().find(|(_, value)| value.is_undefined()) {
		Some((field, _)) => Err(RangeError::NullInput {
			function: function.clone(),
			field: *field,
		}),
		None => Ok(()),
	}
}

/// Whether any bound of a row is null, such a row yields a null entry
pub fn has_null(bounds: &Bounds) -> bool {
	bounds.iter().any(|(_, value)| value.is_undefined())
}
