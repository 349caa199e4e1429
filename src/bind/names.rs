/// Prefix carried by native record (type) names.
pub const RECORD_PREFIX: &str = "Tvg_";
/// Shout-case prefix carried by native enum values and macros.
pub const VALUE_PREFIX: &str = "TVG_";
/// Suffix appended to derived handle type names.
pub const HANDLE_SUFFIX: &str = "Handle";

/// Type names whose mechanical transform reads poorly or collides.
const TYPE_RENAMES: &[(&str, &str)] = &[("Engine_Option", "EngineOptions"), ("Type", "PaintType")];

/// C# reserved words that must be escaped when used as identifiers.
const RESERVED: &[&str] = &[
	"abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked", "class", "const", "continue", "decimal", "default", "delegate", "do",
	"double", "else", "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for", "foreach", "goto", "if", "implicit", "in", "int",
	"interface", "internal", "is", "lock", "long", "namespace", "new", "null", "object", "operator", "out", "override", "params", "private", "protected",
	"public", "readonly", "ref", "return", "sbyte", "sealed", "short", "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
	"try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual", "void", "volatile", "while",
];

/// Map a native record name (`Tvg_Stroke_Join`, `_Tvg_Canvas`) to a type name.
pub fn to_type_name(native: &str) -> String {
	let trimmed = strip_record_prefix(native);
	if let Some((_, renamed)) = TYPE_RENAMES.iter().find(|(from, _)| *from == trimmed) {
		return (*renamed).to_owned();
	}
	to_pascal_case(trimmed)
}

/// Map a native struct field name to a field name.
pub fn to_field_name(native: &str) -> String {
	to_pascal_case(native.trim_start_matches('_'))
}

/// Map a native handle typedef name to its handle type name.
pub fn to_handle_name(native: &str) -> String {
	format!("{}{HANDLE_SUFFIX}", to_type_name(native))
}

/// Map a native enum value to a member name by stripping the enum's own prefix.
///
/// Falls back to stripping only [`VALUE_PREFIX`] when the value does not
/// start with the prefix derived from `enum_native`.
pub fn to_enum_member_name(enum_native: &str, value_native: &str) -> String {
	let prefix = enum_prefix(enum_native);
	let trimmed = value_native
		.strip_prefix(prefix.as_str())
		.or_else(|| value_native.strip_prefix(VALUE_PREFIX))
		.unwrap_or(value_native);
	to_pascal_case(trimmed)
}

/// Derive the shout-case value prefix of an enum (`Tvg_Stroke_Join` -> `TVG_STROKE_JOIN_`).
pub fn enum_prefix(enum_native: &str) -> String {
	let trimmed = strip_record_prefix(enum_native);
	let mut out = String::from(VALUE_PREFIX);
	let mut prev = None;
	for (idx, ch) in trimmed.chars().enumerate() {
		if ch.is_uppercase() && idx > 0 && prev != Some('_') {
			out.push('_');
		}
		out.extend(ch.to_uppercase());
		prev = Some(ch);
	}
	out.push('_');
	out
}

/// Escape an identifier that collides with a reserved word.
pub fn escape_identifier(name: &str) -> String {
	if RESERVED.contains(&name) { format!("@{name}") } else { name.to_owned() }
}

fn strip_record_prefix(native: &str) -> &str {
	let trimmed = native.trim_start_matches('_');
	trimmed.strip_prefix(RECORD_PREFIX).unwrap_or(trimmed)
}

/// Uppercase the first letter of each `_`-separated word and lowercase the rest.
fn to_pascal_case(value: &str) -> String {
	let mut out = String::with_capacity(value.len());
	for word in value.split('_').filter(|word| !word.is_empty()) {
		let mut chars = word.chars();
		if let Some(first) = chars.next() {
			out.extend(first.to_uppercase());
			out.push_str(&chars.as_str().to_lowercase());
		}
	}
	out
}

#[cfg(test)]
mod tests;
