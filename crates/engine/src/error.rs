// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_type::{Diagnostic, Error, Fragment, IntoDiagnostic};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
	#[error("column `{name}` not found")]
	ColumnNotFound {
		name: String,
		available: Vec<String>,
	},

	#[error("projection `{name}` has {got} rows, expected {expected}")]
	ProjectionLengthMismatch {
		name: String,
		got: usize,
		expected: usize,
	},
}

impl IntoDiagnostic for EngineError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			EngineError::ColumnNotFound {
				name,
				available,
			} => Diagnostic {
				code: "ENGINE_001".to_string(),
				message,
				column: None,
				label: Some("unknown column".to_string()),
				fragment: Fragment::internal(name),
				help: None,
				notes: if available.is_empty() {
					vec!["the frame has no columns".to_string()]
				} else {
					vec![format!("available columns: {}", available.join(", "))]
				},
				cause: None,
			},

			EngineError::ProjectionLengthMismatch {
				name,
				got,
				expected,
			} => Diagnostic {
				code: "ENGINE_002".to_string(),
				message,
				column: None,
				label: Some("projections of one select must have the same length".to_string()),
				help: Some(format!("select `{}` in a frame of its own", name)),
				fragment: Fragment::internal(name),
				notes: vec![format!("{} rows, expected {}", got, expected)],
				cause: None,
			},
		}
	}
}

impl From<EngineError> for Error {
	fn from(err: EngineError) -> Self {
		Error(Box::new(err.into_diagnostic()))
	}
}
