use crate::bind::emit::CodeWriter;
use crate::bind::{GeneratorConfig, HeaderModel};

/// Render every struct declaration into one artifact.
///
/// Handles are opaque and never appear here.
pub fn render_structs(model: &HeaderModel, config: &GeneratorConfig) -> String {
	let mut writer = CodeWriter::with_banner();
	writer.line("using System.Runtime.InteropServices;");
	writer.blank();
	writer.line(&format!("namespace {};", config.namespace));

	for decl in &model.structs {
		writer.blank();
		writer.summary(decl.summary.as_deref());
		writer.line("[StructLayout(LayoutKind.Sequential)]");
		writer.open(&format!("public partial struct {}", decl.name));
		for field in &decl.fields {
			writer.summary(field.summary.as_deref());
			// C bool is one byte; the managed default is four.
			if field.ty.is_bool() {
				writer.line("[MarshalAs(UnmanagedType.U1)]");
			}
			writer.line(&format!("public {} {};", field.ty.type_name(), field.name));
		}
		writer.close();
	}

	writer.finish()
}
