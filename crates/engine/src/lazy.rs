// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_core::{Column, Columns, Schema};
use ranger_type::Result;
use tracing::{debug, instrument};

use crate::{engine::Engine, error::EngineError, expression::Expression};

/// Projections over an input frame, evaluated on [`collect`](Self::collect)
#[derive(Clone)]
pub struct LazyFrame {
	input: Columns,
	projections: Vec<Expression>,
	engine: Engine,
}

impl LazyFrame {
	pub fn new(input: Columns) -> Self {
		Self::with_engine(Engine::default(), input)
	}

	pub(crate) fn with_engine(engine: Engine, input: Columns) -> Self {
		Self {
			input,
			projections: Vec::new(),
			engine,
		}
	}

	/// A frame without columns
	pub fn empty() -> Self {
		Self::new(Columns::empty())
	}

	pub fn select(mut self, projections: impl IntoIterator<Item = Expression>) -> Self {
		self.projections = projections.into_iter().collect();
		self
	}

	pub fn projections(&self) -> &[Expression] {
		&self.projections
	}

	/// The output schema, derived without evaluating a single row
	pub fn schema(&self) -> Result<Schema> {
		if self.projections.is_empty() {
			return Ok(self.input.schema());
		}
		let schema = self.input.schema();
		self.projections.iter().map(|expr| self.engine.field(expr, &schema)).collect()
	}

	#[instrument(name = "lazy::collect", level = "debug", skip_all, fields(projections = self.projections.len()))]
	pub fn collect(self) -> Result<Columns> {
		if self.projections.is_empty() {
			return Ok(self.input);
		}

		let mut columns = Vec::with_capacity(self.projections.len());
		for expr in &self.projections {
			let column = self.engine.evaluate(expr, &self.input)?;
			if let Some(expected) = columns.first().map(|c: &Column| c.len()) {
				let got = column.len();
				if got != expected {
					return Err(EngineError::ProjectionLengthMismatch {
						name: column.name,
						got,
						expected,
					}
					.into());
				}
			}
			columns.push(column);
		}

		debug!(rows = columns.first().map_or(0, |c| c.len()), "collected");
		Ok(Columns::new(columns))
	}
}

#[cfg(test)]
mod tests {
	use ranger_core::{Column, Columns, Field, Schema};
	use ranger_type::Type;

	use super::LazyFrame;
	use crate::{col, lit};

	fn input() -> Columns {
		Columns::new(vec![Column::int8("a", [1, 2]), Column::uint2("b", [3, 4])])
	}

	#[test]
	fn test_without_projections() {
		let frame = LazyFrame::new(input());
		assert_eq!(frame.schema().unwrap(), input().schema());
		assert_eq!(frame.collect().unwrap(), input());
	}

	#[test]
	fn test_select() {
		let frame = LazyFrame::new(input()).select([col("b"), col("a").alias("c")]);
		assert_eq!(
			frame.schema().unwrap(),
			Schema::new(vec![Field::new("b", Type::Uint2), Field::new("c", Type::Int8)])
		);
		let columns = frame.collect().unwrap();
		assert_eq!(columns.into_columns(), vec![Column::uint2("b", [3, 4]), Column::int8("c", [1, 2])]);
	}

	#[test]
	fn test_projection_length_mismatch() {
		let err = LazyFrame::new(input()).select([col("a"), lit(1)]).collect().unwrap_err();
		assert_eq!(err.code(), "ENGINE_002");
		assert_eq!(err.message, "projection `literal` has 1 rows, expected 2");
	}

	#[test]
	fn test_empty() {
		let frame = LazyFrame::empty();
		assert!(frame.schema().unwrap().is_empty());
		assert_eq!(frame.collect().unwrap().row_count(), 0);
	}
}
