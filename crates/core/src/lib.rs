// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod schema;
pub mod util;
pub mod value;

pub use ranger_type::{Error, Result, Type, Value};
pub use schema::{Field, Schema};
pub use util::BitVec;
pub use value::{
	column::{Column, ColumnData, Columns},
	container::{BoolContainer, ListContainer, NumberContainer, UndefinedContainer, Utf8Container},
};
