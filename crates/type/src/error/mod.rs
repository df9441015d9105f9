// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

pub mod diagnostic;
mod r#macro;

use diagnostic::{Diagnostic, render::DefaultRenderer};

pub type Result<T> = std::result::Result<T, Error>;

/// Anything that can describe itself as a [`Diagnostic`].
///
/// Domain error enums implement this so they can travel through the shared
/// [`Error`] type without losing their code.
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Box<Diagnostic>);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		*self.0
	}

	pub fn code(&self) -> &str {
		self.0.code.as_str()
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(Box::new(diagnostic))
	}
}

#[cfg(test)]
mod tests {
	use super::{Error, IntoDiagnostic};
	use crate::{
		Type,
		error::diagnostic::{Diagnostic, cast},
		fragment::Fragment,
	};

	#[test]
	fn test_error_renders_code_and_message() {
		let err: Error = cast::integer_out_of_range(Fragment::internal("start"), Type::Int4, Type::Uint4).into();
		let rendered = err.to_string();
		assert!(rendered.starts_with("error[CAST_001]: conversion from `i32` to `u32` failed"));
	}

	#[test]
	fn test_diagnostic_round_trip_through_error() {
		let diagnostic = Diagnostic {
			code: "TEST_001".to_string(),
			message: "boom".to_string(),
			..Default::default()
		};
		let err = crate::error!(diagnostic.clone());
		assert_eq!(err.code(), "TEST_001");
		assert_eq!(err.diagnostic(), diagnostic.into_diagnostic());
	}

	#[test]
	fn test_return_error() {
		fn fails() -> crate::Result<()> {
			crate::return_error!(Diagnostic {
				code: "TEST_002".to_string(),
				..Default::default()
			});
		}

		assert_eq!(fails().unwrap_err().code(), "TEST_002");
	}
}
