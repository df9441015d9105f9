// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use ranger_core::{Column, Columns, Field, Schema};
use ranger_function::{Functions, RangeFunction, range::dtype::requested_dtype};
use ranger_type::{Fragment, Result};
use tracing::{debug, instrument};

use crate::{
	config::EngineConfig,
	evaluate::{EvaluationContext, InferenceContext, StandardEvaluator},
	expression::{Expression, RangeExpression},
	lazy::LazyFrame,
	range::{RangeOptions, RangeOutput},
};

/// Evaluates expressions with one configuration and one function registry
#[derive(Clone)]
pub struct Engine {
	config: EngineConfig,
	evaluator: StandardEvaluator,
}

impl Engine {
	pub fn new(config: EngineConfig) -> Self {
		Self::with_functions(config, Functions::default())
	}

	pub fn with_functions(config: EngineConfig, functions: Functions) -> Self {
		Self {
			config,
			evaluator: StandardEvaluator::new(Arc::new(functions)),
		}
	}

	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	pub fn functions(&self) -> &Functions {
		self.evaluator.functions()
	}

	pub fn evaluate(&self, expression: &Expression, columns: &Columns) -> Result<Column> {
		let ctx = EvaluationContext {
			columns,
			config: &self.config,
		};
		self.evaluator.evaluate(&ctx, expression)
	}

	pub fn field(&self, expression: &Expression, schema: &Schema) -> Result<Field> {
		let ctx = InferenceContext {
			schema,
			config: &self.config,
		};
		self.evaluator.field(&ctx, expression)
	}

	/// A lazy frame over `input` evaluated by this engine
	pub fn frame(&self, input: Columns) -> LazyFrame {
		LazyFrame::with_engine(self.clone(), input)
	}

	pub fn int_range(
		&self,
		start: impl Into<Expression>,
		end: impl Into<Expression>,
		options: RangeOptions,
	) -> Result<RangeOutput> {
		self.range(RangeFunction::IntRange, RangeFunction::IntRange.name(), start.into(), end.into(), options)
	}

	pub fn int_ranges(
		&self,
		start: impl Into<Expression>,
		end: impl Into<Expression>,
		options: RangeOptions,
	) -> Result<RangeOutput> {
		self.range(RangeFunction::IntRanges, RangeFunction::IntRanges.name(), start.into(), end.into(), options)
	}

	/// `int_range` under its registered alias
	pub fn arange(
		&self,
		start: impl Into<Expression>,
		end: impl Into<Expression>,
		options: RangeOptions,
	) -> Result<RangeOutput> {
		self.range(RangeFunction::IntRange, "arange", start.into(), end.into(), options)
	}

	#[instrument(name = "engine::range", level = "debug", skip(self, start, end, options), fields(eager = options.eager))]
	fn range(
		&self,
		function: RangeFunction,
		name: &str,
		start: Expression,
		end: Expression,
		options: RangeOptions,
	) -> Result<RangeOutput> {
		let dtype = requested_dtype(&Fragment::internal(name), options.dtype.as_ref())?;
		let range = RangeExpression::new(function, start, end, options.step, dtype).with_name(name);
		let expression = match function {
			RangeFunction::IntRange => Expression::IntRange(range),
			RangeFunction::IntRanges => Expression::IntRanges(range),
		};

		if !options.eager {
			debug!(%expression, "deferred range");
			return Ok(RangeOutput::Expression(expression));
		}
		self.evaluate(&expression, &Columns::empty()).map(RangeOutput::Column)
	}
}

impl Default for Engine {
	fn default() -> Self {
		Self::new(EngineConfig::default())
	}
}
