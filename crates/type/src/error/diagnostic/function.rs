// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;
use crate::fragment::Fragment;

/// Function is not recognized or does not exist
pub fn unknown_function(name: String) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_001".to_string(),
		message: format!("unknown function: {}", name),
		column: None,
		fragment: Fragment::internal(name),
		label: None,
		help: Some("check the function name and available functions".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Function called with wrong number of arguments
pub fn arity_mismatch(function: String, expected: usize, actual: usize) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_002".to_string(),
		message: format!("function {} expects {} arguments, got {}", function, expected, actual),
		column: None,
		fragment: Fragment::internal(function.clone()),
		label: None,
		help: Some(format!("provide exactly {} arguments to function {}", expected, function)),
		notes: vec![],
		cause: None,
	}
}

/// Function was registered as one kind but invoked as the other
pub fn kind_mismatch(function: String, expected: &str) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_003".to_string(),
		message: format!("function {} is not a {} function", function, expected),
		column: None,
		fragment: Fragment::internal(function),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}
