// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod builder;
pub mod error;
pub mod factory;
pub mod subsystem;

pub use builder::{TracingBuilder, TracingFormat};
pub use error::TracingError;
pub use factory::{TracingConfigurator, TracingSubsystemFactory};
pub use subsystem::TracingSubsystem;

/// Installs a compact subscriber for tests, later calls are no-ops
pub fn init_for_tests() {
	let _ = TracingSubsystemFactory::with_configurator(|builder| {
		builder.with_level("debug").with_ansi(false).for_tests()
	})
	.create()
	.start();
}
