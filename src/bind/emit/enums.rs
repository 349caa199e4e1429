use crate::bind::emit::CodeWriter;
use crate::bind::{GeneratorConfig, HeaderModel};

/// Render every enum declaration into one artifact.
pub fn render_enums(model: &HeaderModel, config: &GeneratorConfig) -> String {
	let mut writer = CodeWriter::with_banner();
	writer.line("using System;");
	writer.blank();
	writer.line(&format!("namespace {};", config.namespace));

	for decl in &model.enums {
		writer.blank();
		writer.summary(decl.summary.as_deref());
		if decl.is_flags {
			writer.line("[Flags]");
		}
		writer.open(&format!("public enum {}", decl.name));
		for (idx, value) in decl.values.iter().enumerate() {
			if idx > 0 && value.summary.is_some() {
				writer.blank();
			}
			writer.summary(value.summary.as_deref());
			match &value.literal {
				Some(literal) => writer.line(&format!("{} = {literal},", value.name)),
				None => writer.line(&format!("{},", value.name)),
			}
		}
		writer.close();
	}

	writer.finish()
}
