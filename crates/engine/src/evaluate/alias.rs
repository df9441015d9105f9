// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_core::Column;
use ranger_type::Result;

use crate::{
	evaluate::{EvaluationContext, StandardEvaluator},
	expression::AliasExpression,
};

impl StandardEvaluator {
	pub(crate) fn alias(&self, ctx: &EvaluationContext, expr: &AliasExpression) -> Result<Column> {
		let evaluated = self.evaluate(ctx, &expr.expression)?;
		Ok(evaluated.with_name(expr.alias.clone()))
	}
}
