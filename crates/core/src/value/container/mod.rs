// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod bool;
mod list;
mod number;
mod undefined;
mod utf8;

pub use bool::BoolContainer;
pub use list::ListContainer;
pub use number::NumberContainer;
pub use undefined::UndefinedContainer;
pub use utf8::Utf8Container;
