// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, util::value_range};
use crate::{Type, fragment::Fragment};

/// An integer did not fit into the requested target type
pub fn integer_out_of_range(fragment: Fragment, from: Type, to: Type) -> Diagnostic {
	let range = value_range(&to);
	let label = if fragment.is_none() {
		None
	} else {
		Some(format!("`{}` does not fit into {}", fragment.text(), to))
	};

	Diagnostic {
		code: "CAST_001".to_string(),
		message: format!("conversion from `{}` to `{}` failed", from.primitive_name(), to.primitive_name()),
		column: None,
		fragment,
		label,
		help: Some(format!("use a value within the valid range for {} or use a wider type", to)),
		notes: vec![format!("valid range: {}", range)],
		cause: None,
	}
}

/// The cast is not defined between the two types
pub fn unsupported_cast(fragment: Fragment, from: Type, to: Type) -> Diagnostic {
	let label = Some(format!("cannot cast {} of type {} to {}", fragment.text(), from, to));
	Diagnostic {
		code: "CAST_002".to_string(),
		message: format!("unsupported cast from {} to {}", from, to),
		column: None,
		fragment,
		label,
		help: Some("ensure the source and target types are compatible for casting".to_string()),
		notes: vec!["supported casts are between integer types".to_string()],
		cause: None,
	}
}
