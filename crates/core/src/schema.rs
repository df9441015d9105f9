// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use ranger_type::Type;
use serde::{Deserialize, Serialize};

/// Name and type of a column, known without materializing its rows
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
	pub name: String,
	pub ty: Type,
}

impl Field {
	pub fn new(name: impl Into<String>, ty: Type) -> Self {
		Self {
			name: name.into(),
			ty,
		}
	}
}

impl Display for Field {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}: {}", self.name, self.ty)
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
	fields: Vec<Field>,
}

impl Schema {
	pub fn new(fields: Vec<Field>) -> Self {
		Self {
			fields,
		}
	}

	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	pub fn field(&self, name: &str) -> Option<&Field> {
		self.fields.iter().find(|f| f.name == name)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Field> {
		self.fields.iter()
	}
}

impl FromIterator<Field> for Schema {
	fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl Display for Schema {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("{")?;
		for (idx, field) in self.fields.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			Display::fmt(field, f)?;
		}
		f.write_str("}")
	}
}

#[cfg(test)]
mod tests {
	use ranger_type::Type;

	use super::{Field, Schema};

	#[test]
	fn test_display() {
		let schema = Schema::new(vec![Field::new("int", Type::Int8), Field::new("r", Type::list(Type::Uint2))]);
		assert_eq!(schema.to_string(), "{int: Int8, r: List(Uint2)}");
	}

	#[test]
	fn test_field_lookup() {
		let schema: Schema = [Field::new("a", Type::Int4)].into_iter().collect();
		assert_eq!(schema.field("a").map(|f| &f.ty), Some(&Type::Int4));
		assert_eq!(schema.field("b"), None);
	}
}
