// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_type::{Diagnostic, Error, IntoDiagnostic, Fragment};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TracingError {
	#[error("invalid tracing directive `{directive}`")]
	InvalidDirective {
		directive: String,
		reason: String,
	},

	#[error("a global tracing subscriber is already installed")]
	AlreadyInstalled,
}

impl IntoDiagnostic for TracingError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			TracingError::InvalidDirective {
				directive,
				reason,
			} => Diagnostic {
				code: "TRACING_001".to_string(),
				message,
				column: None,
				fragment: Fragment::internal(directive),
				label: Some(reason),
				help: Some("use a level such as `info` or a directive such as `ranger_engine=debug`".to_string()),
				notes: vec![],
				cause: None,
			},
			TracingError::AlreadyInstalled => Diagnostic {
				code: "TRACING_002".to_string(),
				message,
				column: None,
				fragment: Fragment::None,
				label: None,
				help: Some("start the tracing subsystem once per process".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<TracingError> for Error {
	fn from(err: TracingError) -> Self {
		Error(Box::new(err.into_diagnostic()))
	}
}
