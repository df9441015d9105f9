// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod config;
pub mod engine;
pub mod error;
pub mod evaluate;
pub mod expression;
pub mod lazy;
pub mod range;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::EngineError;
pub use expression::{Expression, col, lit};
pub use lazy::LazyFrame;
pub use range::{RangeOptions, RangeOutput, arange, int_range, int_ranges};
