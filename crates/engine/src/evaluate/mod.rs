// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use ranger_core::{Column, Columns, Schema};
use ranger_function::Functions;
use ranger_type::Result;
use tracing::instrument;

use crate::{config::EngineConfig, expression::Expression};

mod alias;
mod call;
mod cast;
mod column;
mod constant;
mod infer;

pub(crate) use cast::check_cast;

/// Name of the column a constant evaluates to
pub const LITERAL_NAME: &str = "literal";

pub struct EvaluationContext<'a> {
	pub columns: &'a Columns,
	pub config: &'a EngineConfig,
}

/// Types are inferred from a schema alone, no row is touched
pub struct InferenceContext<'a> {
	pub schema: &'a Schema,
	pub config: &'a EngineConfig,
}

#[derive(Clone)]
pub struct StandardEvaluator {
	functions: Arc<Functions>,
}

impl StandardEvaluator {
	pub fn new(functions: Arc<Functions>) -> Self {
		Self {
			functions,
		}
	}

	pub fn functions(&self) -> &Functions {
		&self.functions
	}

	#[instrument(name = "evaluate::expression", level = "trace", skip_all, fields(expression = %expr))]
	pub fn evaluate(&self, ctx: &EvaluationContext, expr: &Expression) -> Result<Column> {
		match expr {
			Expression::Constant(value) => Ok(self.constant(value)),
			Expression::Column(name) => self.column(ctx, name),
			Expression::Cast(cast) => self.cast(ctx, cast),
			Expression::Alias(alias) => self.alias(ctx, alias),
			Expression::IntRange(range) => self.int_range(ctx, range),
			Expression::IntRanges(range) => self.int_ranges(ctx, range),
		}
	}
}
