// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The piece of a query a diagnostic points at, usually the name of the
/// function or column that was being evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fragment {
	#[default]
	None,
	Internal {
		text: String,
	},
}

impl Fragment {
	pub fn internal(text: impl Into<String>) -> Self {
		Fragment::Internal {
			text: text.into(),
		}
	}

	pub fn text(&self) -> &str {
		match self {
			Fragment::None => "",
			Fragment::Internal {
				text,
			} => text.as_str(),
		}
	}

	pub fn is_none(&self) -> bool {
		matches!(self, Fragment::None)
	}
}

impl Display for Fragment {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.text())
	}
}

impl From<&str> for Fragment {
	fn from(value: &str) -> Self {
		Fragment::internal(value)
	}
}

impl From<String> for Fragment {
	fn from(value: String) -> Self {
		Fragment::internal(value)
	}
}
