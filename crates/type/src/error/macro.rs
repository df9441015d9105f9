// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Wraps a [`Diagnostic`](crate::Diagnostic) into an [`Error`](crate::Error)
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error(Box::new($diagnostic))
	};
}

#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error!($diagnostic).into())
	};
}
