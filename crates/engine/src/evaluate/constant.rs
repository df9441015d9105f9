// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ranger_core::{Column, ColumnData};
use ranger_type::Value;

use crate::evaluate::{LITERAL_NAME, StandardEvaluator};

impl StandardEvaluator {
	pub(crate) fn constant(&self, value: &Value) -> Column {
		Column::new(LITERAL_NAME, ColumnData::from_value(value))
	}
}
