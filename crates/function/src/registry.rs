// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use ranger_type::{
	Result,
	error::diagnostic::function::{kind_mismatch, unknown_function},
	return_error,
};

use crate::{GeneratorFunction, IntRange, IntRanges, ScalarFunction};

type GeneratorFactory = Box<dyn Fn() -> Box<dyn GeneratorFunction> + Send + Sync>;
type ScalarFactory = Box<dyn Fn() -> Box<dyn ScalarFunction> + Send + Sync>;

/// Named function factories in registration order
pub struct Functions {
	generators: IndexMap<String, GeneratorFactory>,
	scalars: IndexMap<String, ScalarFactory>,
}

impl Functions {
	pub fn new() -> Self {
		Self {
			generators: IndexMap::new(),
			scalars: IndexMap::new(),
		}
	}

	pub fn get_generator(&self, name: &str) -> Option<Box<dyn GeneratorFunction>> {
		self.generators.get(name).map(|func| func())
	}

	pub fn register_generator<F, G>(&mut self, name: &str, init: F)
	where
		F: Fn() -> G + Send + Sync + 'static,
		G: GeneratorFunction + 'static,
	{
		self.generators.insert(name.to_string(), Box::new(move || Box::new(init()) as Box<dyn GeneratorFunction>));
	}

	pub fn get_scalar(&self, name: &str) -> Option<Box<dyn ScalarFunction>> {
		self.scalars.get(name).map(|func| func())
	}

	pub fn register_scalar<F, S>(&mut self, name: &str, init: F)
	where
		F: Fn() -> S + Send + Sync + 'static,
		S: ScalarFunction + 'static,
	{
		self.scalars.insert(name.to_string(), Box::new(move || Box::new(init()) as Box<dyn ScalarFunction>));
	}

	/// Looks up a generator, failing with a diagnostic when `name` is unknown
	/// or registered as a scalar function
	pub fn generator(&self, name: &str) -> Result<Box<dyn GeneratorFunction>> {
		if let Some(func) = self.get_generator(name) {
			return Ok(func);
		}
		if self.scalars.contains_key(name) {
			return_error!(kind_mismatch(name.to_string(), "generator"));
		}
		return_error!(unknown_function(name.to_string()))
	}

	pub fn scalar(&self, name: &str) -> Result<Box<dyn ScalarFunction>> {
		if let Some(func) = self.get_scalar(name) {
			return Ok(func);
		}
		if self.generators.contains_key(name) {
			return_error!(kind_mismatch(name.to_string(), "scalar"));
		}
		return_error!(unknown_function(name.to_string()))
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.generators.keys().chain(self.scalars.keys()).map(String::as_str)
	}
}

impl Default for Functions {
	/// `int_range` and its alias `arange` as generators, `int_ranges` as scalar
	fn default() -> Self {
		let mut result = Self::new();
		result.register_generator("int_range", IntRange::new);
		result.register_generator("arange", IntRange::new);
		result.register_scalar("int_ranges", IntRanges::new);
		result
	}
}
