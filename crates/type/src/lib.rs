// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod fragment;
pub mod value;

pub use error::{Error, IntoDiagnostic, Result, diagnostic::Diagnostic};
pub use fragment::Fragment;
pub use value::{
	Value,
	number::safe::convert::SafeConvert,
	r#type::{GetType, IntegerType, Type},
};
