// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{fragment::Fragment, value::r#type::Type};

pub mod cast;
pub mod function;
pub mod render;
pub(crate) mod util;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub column: Option<DiagnosticColumn>,

	pub fragment: Fragment,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticColumn {
	pub name: String,
	pub ty: Type,
}

impl Diagnostic {
	pub fn with_column(mut self, name: impl Into<String>, ty: Type) -> Self {
		self.column = Some(DiagnosticColumn {
			name: name.into(),
			ty,
		});
		self
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!("{}", self.code))
	}
}
