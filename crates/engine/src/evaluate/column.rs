// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_core::Column;
use ranger_type::Result;

use crate::{
	error::EngineError,
	evaluate::{EvaluationContext, StandardEvaluator},
};

impl StandardEvaluator {
	pub(crate) fn column(&self, ctx: &EvaluationContext, name: &str) -> Result<Column> {
		match ctx.columns.column(name) {
			Some(column) => Ok(column.clone()),
			None => Err(EngineError::ColumnNotFound {
				name: name.to_string(),
				available: ctx.columns.iter().map(|c| c.name().to_string()).collect(),
			}
			.into()),
		}
	}
}

#[cfg(test)]
mod tests {
	use ranger_core::{Column, Columns};

	use crate::{Engine, col};

	#[test]
	fn test_lookup() {
		let columns = Columns::new(vec![Column::int8("a", [1, 2])]);
		let column = Engine::default().evaluate(&col("a"), &columns).unwrap();
		assert_eq!(column, Column::int8("a", [1, 2]));
	}

	#[test]
	fn test_missing() {
		let columns = Columns::new(vec![Column::int8("a", [1, 2])]);
		let err = Engine::default().evaluate(&col("b"), &columns).unwrap_err();
		assert_eq!(err.code(), "ENGINE_001");
		assert_eq!(err.message, "column `b` not found");
	}
}
