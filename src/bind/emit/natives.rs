use serde::Serialize;

use crate::bind::emit::CodeWriter;
use crate::bind::names::escape_identifier;
use crate::bind::{FunctionDecl, GeneratorConfig, HeaderModel, ParamDecl, ParamDirection, ResolvedType};

/// Passing-mode keyword placed before a parameter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamModifier {
	/// Callee writes the value.
	Out,
	/// Callee reads and writes the value.
	Ref,
	/// Read-only reference to a value type.
	In,
}

impl ParamModifier {
	/// Managed keyword.
	pub fn keyword(self) -> &'static str {
		match self {
			Self::Out => "out",
			Self::Ref => "ref",
			Self::In => "in",
		}
	}
}

/// Choose the passing mode for one parameter.
pub fn param_modifier(param: &ParamDecl) -> Option<ParamModifier> {
	let by_reference = param.pointer_depth >= 1 && !param.is_callback && !param.ty.is_text_or_buffer();
	if by_reference {
		match param.direction {
			ParamDirection::Out => return Some(ParamModifier::Out),
			ParamDirection::InOut => return Some(ParamModifier::Ref),
			ParamDirection::In | ParamDirection::Unknown => {}
		}
	}
	let read_only_value = matches!(param.ty, ResolvedType::Aggregate(_) | ResolvedType::Primitive(_));
	if param.is_const && param.pointer_depth == 1 && read_only_value {
		return Some(ParamModifier::In);
	}
	None
}

/// Render one parameter with its marshalling attributes.
pub fn render_param(param: &ParamDecl) -> String {
	let name = escape_identifier(&param.name);
	match param.ty {
		ResolvedType::Text => return format!("[MarshalAs(UnmanagedType.LPUTF8Str)] string {name}"),
		ResolvedType::Buffer => return format!("[MarshalAs(UnmanagedType.LPArray)] byte[] {name}"),
		_ => {}
	}

	let mut out = String::new();
	if param.ty.is_bool() {
		out.push_str("[MarshalAs(UnmanagedType.U1)] ");
	}
	if let Some(modifier) = param_modifier(param) {
		out.push_str(modifier.keyword());
		out.push(' ');
	}
	out.push_str(param.ty.type_name());
	out.push(' ');
	out.push_str(&name);
	out
}

/// Managed return type. Returned strings stay owned by the engine, so they
/// surface as raw addresses.
fn return_type_name(ty: &ResolvedType) -> &str {
	match ty {
		ResolvedType::Text | ResolvedType::Buffer => "nint",
		other => other.type_name(),
	}
}

/// Render every function declaration into the native method class.
pub fn render_natives(model: &HeaderModel, config: &GeneratorConfig) -> String {
	let mut writer = CodeWriter::with_banner();
	writer.line("using System.Runtime.InteropServices;");
	writer.line(&format!("using {};", config.namespace));
	writer.blank();
	writer.line(&format!("namespace {};", config.native_namespace));
	writer.blank();
	writer.open(&format!("internal static partial class {}", config.native_class));
	writer.line(&format!("private const string LibraryName = \"{}\";", config.library_name));

	for function in &model.functions {
		writer.blank();
		render_function(&mut writer, function);
	}

	writer.close();
	writer.finish()
}

fn render_function(writer: &mut CodeWriter, function: &FunctionDecl) {
	writer.summary(function.summary.as_deref());
	for param in &function.params {
		if let Some(summary) = param.summary.as_deref() {
			writer.param_doc(&param.name, summary);
		}
	}
	if let Some(returns) = function.returns.as_deref().filter(|text| !text.is_empty()) {
		writer.returns_doc(returns);
	}

	writer.line(&format!(
		"[DllImport(LibraryName, EntryPoint = \"{}\", CallingConvention = CallingConvention.Cdecl)]",
		function.name
	));
	if function.return_type.is_bool() {
		writer.line("[return: MarshalAs(UnmanagedType.U1)]");
	}
	let params: Vec<String> = function.params.iter().map(render_param).collect();
	writer.line(&format!(
		"internal static extern {} {}({});",
		return_type_name(&function.return_type),
		function.name,
		params.join(", ")
	));
}
