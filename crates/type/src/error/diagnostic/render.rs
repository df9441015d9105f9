// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use super::Diagnostic;

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, d: &Diagnostic) -> String {
		let mut output = String::new();
		self.render_one(&mut output, d, 0);
		output
	}
}

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}

	fn render_one(&self, output: &mut String, d: &Diagnostic, depth: usize) {
		let indent = "  ".repeat(depth);
		let _ = writeln!(output, "{}error[{}]: {}", indent, d.code, d.message);

		if !d.fragment.is_none() {
			let _ = writeln!(output, "{}  --> {}", indent, d.fragment.text());
			if let Some(label) = &d.label {
				let _ = writeln!(output, "{}   = {}", indent, label);
			}
		}

		if let Some(col) = &d.column {
			let _ = writeln!(output, "\n{}note: column `{}` is of type `{}`", indent, col.name, col.ty);
		}

		if let Some(help) = &d.help {
			let _ = writeln!(output, "\n{}help: {}", indent, help);
		}

		for note in &d.notes {
			let _ = writeln!(output, "\n{}note: {}", indent, note);
		}

		if let Some(cause) = &d.cause {
			let _ = writeln!(output, "\n{}caused by:", indent);
			self.render_one(output, cause, depth + 1);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::DefaultRenderer;
	use crate::{Type, error::diagnostic::Diagnostic, fragment::Fragment};

	#[test]
	fn test_render_minimal() {
		let d = Diagnostic {
			code: "RANGE_006".to_string(),
			message: "`step` must not be zero".to_string(),
			..Default::default()
		};
		assert_eq!(DefaultRenderer::render_string(&d), "error[RANGE_006]: `step` must not be zero\n");
	}

	#[test]
	fn test_render_full() {
		let d = Diagnostic {
			code: "X_001".to_string(),
			message: "bad".to_string(),
			fragment: Fragment::internal("start"),
			label: Some("here".to_string()),
			help: Some("fix it".to_string()),
			notes: vec!["one".to_string()],
			..Default::default()
		}
		.with_column("a", Type::Int4);

		let rendered = DefaultRenderer::render_string(&d);
		assert!(rendered.contains("  --> start"));
		assert!(rendered.contains("   = here"));
		assert!(rendered.contains("note: column `a` is of type `Int4`"));
		assert!(rendered.contains("help: fix it"));
		assert!(rendered.contains("note: one"));
	}

	#[test]
	fn test_render_cause_is_indented() {
		let cause = Diagnostic {
			code: "CAST_001".to_string(),
			message: "inner".to_string(),
			..Default::default()
		};
		let d = Diagnostic {
			code: "RANGE_005".to_string(),
			message: "outer".to_string(),
			cause: Some(Box::new(cause)),
			..Default::default()
		};
		let rendered = DefaultRenderer::render_string(&d);
		assert!(rendered.contains("caused by:\n  error[CAST_001]: inner"));
	}
}
