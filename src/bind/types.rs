use serde::Serialize;

use crate::bind::names::{RECORD_PREFIX, to_type_name};
use crate::bind::{HandleDecl, ParamDirection};

/// Parameter name that marks a `const char*` as a binary buffer instead of text.
pub const BUFFER_PARAM_NAME: &str = "data";

/// Managed scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
	/// `void`
	Void,
	/// `bool`
	Bool,
	/// `sbyte`
	SByte,
	/// `byte`
	Byte,
	/// `short`
	Short,
	/// `ushort`
	UShort,
	/// `int`
	Int,
	/// `uint`
	UInt,
	/// `long`
	Long,
	/// `ulong`
	ULong,
	/// `nuint`
	NUInt,
	/// `float`
	Float,
	/// `double`
	Double,
}

impl Primitive {
	/// Map a native scalar spelling.
	pub fn from_native(name: &str) -> Option<Self> {
		Some(match name {
			"void" => Self::Void,
			"bool" => Self::Bool,
			"char" | "int8_t" => Self::SByte,
			"uint8_t" => Self::Byte,
			"int16_t" => Self::Short,
			"uint16_t" => Self::UShort,
			"int" | "int32_t" => Self::Int,
			"unsigned" | "unsigned int" | "uint32_t" => Self::UInt,
			"int64_t" => Self::Long,
			"uint64_t" => Self::ULong,
			"size_t" => Self::NUInt,
			"float" => Self::Float,
			"double" => Self::Double,
			_ => return None,
		})
	}

	/// Managed keyword.
	pub fn keyword(self) -> &'static str {
		match self {
			Self::Void => "void",
			Self::Bool => "bool",
			Self::SByte => "sbyte",
			Self::Byte => "byte",
			Self::Short => "short",
			Self::UShort => "ushort",
			Self::Int => "int",
			Self::UInt => "uint",
			Self::Long => "long",
			Self::ULong => "ulong",
			Self::NUInt => "nuint",
			Self::Float => "float",
			Self::Double => "double",
		}
	}
}

/// Native aggregates that cross the boundary by value or by read-only reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregate {
	/// `Tvg_Point`
	Point,
	/// `Tvg_Matrix`
	Matrix,
	/// `Tvg_Color_Stop`
	ColorStop,
}

impl Aggregate {
	const ALL: [Self; 3] = [Self::Point, Self::Matrix, Self::ColorStop];

	/// Look up by native typedef name.
	pub fn from_native(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|item| item.native_name() == name)
	}

	/// Native typedef name.
	pub fn native_name(self) -> &'static str {
		match self {
			Self::Point => "Tvg_Point",
			Self::Matrix => "Tvg_Matrix",
			Self::ColorStop => "Tvg_Color_Stop",
		}
	}

	/// Managed struct name.
	pub fn type_name(self) -> &'static str {
		match self {
			Self::Point => "Point",
			Self::Matrix => "Matrix",
			Self::ColorStop => "ColorStop",
		}
	}
}

/// Project typedefs that resolve to something other than their own name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeAlias {
	/// `typedef uint8_t Tvg_Path_Command;`
	PathCommand,
	/// Asset resolver callback typedef.
	AssetResolver,
}

impl TypeAlias {
	const ALL: [Self; 2] = [Self::PathCommand, Self::AssetResolver];

	/// Look up by native typedef name.
	pub fn from_native(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|item| item.native_name() == name)
	}

	/// Native typedef name.
	pub fn native_name(self) -> &'static str {
		match self {
			Self::PathCommand => "Tvg_Path_Command",
			Self::AssetResolver => "Tvg_Picture_Asset_Resolver",
		}
	}

	/// Type the alias stands for.
	pub fn target(self) -> ResolvedType {
		match self {
			Self::PathCommand => ResolvedType::Primitive(Primitive::Byte),
			Self::AssetResolver => ResolvedType::Pointer,
		}
	}
}

/// Managed type chosen for a native type reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum ResolvedType {
	/// Scalar passed by value.
	Primitive(Primitive),
	/// Scalar behind a documented out or in-out pointer.
	ScalarRef(Primitive),
	/// Opaque handle type.
	Handle(String),
	/// Known by-value aggregate.
	Aggregate(Aggregate),
	/// Other generated enum or struct.
	Named(String),
	/// UTF-8 text.
	Text,
	/// Binary buffer.
	Buffer,
	/// Pointer-sized fallback.
	Pointer,
}

impl ResolvedType {
	/// Managed type spelling.
	pub fn type_name(&self) -> &str {
		match self {
			Self::Primitive(item) | Self::ScalarRef(item) => item.keyword(),
			Self::Handle(name) | Self::Named(name) => name,
			Self::Aggregate(item) => item.type_name(),
			Self::Text => "string",
			Self::Buffer => "byte[]",
			Self::Pointer => "nint",
		}
	}

	/// Whether the value is marshalled through a string or array conversion.
	pub fn is_text_or_buffer(&self) -> bool {
		matches!(self, Self::Text | Self::Buffer)
	}

	/// Whether the value is a C `bool`.
	pub fn is_bool(&self) -> bool {
		matches!(self, Self::Primitive(Primitive::Bool) | Self::ScalarRef(Primitive::Bool))
	}
}

/// One native type reference to resolve.
#[derive(Debug, Clone, Copy)]
pub struct TypeQuery<'a> {
	/// Native type text; `const` and `*` are ignored for lookup.
	pub native: &'a str,
	/// Indirection levels.
	pub pointer_depth: u8,
	/// Whether the type is `const`-qualified.
	pub is_const: bool,
	/// Documented direction, or `None` where direction does not apply.
	pub direction: Option<ParamDirection>,
	/// Parameter name, for the buffer naming heuristic.
	pub name: Option<&'a str>,
}

/// Resolves native type references against the handles parsed so far.
pub struct TypeMapper<'a> {
	handles: &'a [HandleDecl],
}

impl<'a> TypeMapper<'a> {
	/// Create a mapper over known handles.
	pub fn new(handles: &'a [HandleDecl]) -> Self {
		Self { handles }
	}

	/// Resolve a function parameter.
	pub fn resolve_param(&self, native: &str, pointer_depth: u8, is_const: bool, direction: ParamDirection, name: &str) -> ResolvedType {
		self.resolve(TypeQuery {
			native,
			pointer_depth,
			is_const,
			direction: Some(direction),
			name: Some(name),
		})
	}

	/// Resolve a function return type. Returns are never treated as buffers.
	pub fn resolve_return(&self, native: &str, pointer_depth: u8, is_const: bool) -> ResolvedType {
		self.resolve(TypeQuery {
			native,
			pointer_depth,
			is_const,
			direction: None,
			name: None,
		})
	}

	/// Resolve a struct field. Fields hold raw addresses, so any indirection or
	/// handle becomes the pointer-sized fallback.
	pub fn resolve_field(&self, native: &str, pointer_depth: u8) -> ResolvedType {
		if pointer_depth > 0 {
			return ResolvedType::Pointer;
		}
		match self.resolve_return(native, 0, false) {
			ResolvedType::Handle(_) => ResolvedType::Pointer,
			other => other,
		}
	}

	/// Resolve one query using the fixed precedence.
	pub fn resolve(&self, query: TypeQuery<'_>) -> ResolvedType {
		let base = base_name(query.native);

		if query.pointer_depth >= 2 {
			return ResolvedType::Pointer;
		}

		if let Some(handle) = self.handles.iter().find(|item| item.native_name == base) {
			return ResolvedType::Handle(handle.name.clone());
		}

		if base == "char" && query.pointer_depth == 1 && query.is_const {
			return if query.name == Some(BUFFER_PARAM_NAME) { ResolvedType::Buffer } else { ResolvedType::Text };
		}

		if let Some(aggregate) = Aggregate::from_native(&base) {
			return ResolvedType::Aggregate(aggregate);
		}

		if let Some(primitive) = Primitive::from_native(&base) {
			if query.pointer_depth == 0 {
				return ResolvedType::Primitive(primitive);
			}
			return match query.direction {
				Some(ParamDirection::Out | ParamDirection::InOut) => ResolvedType::ScalarRef(primitive),
				_ => ResolvedType::Pointer,
			};
		}

		if let Some(alias) = TypeAlias::from_native(&base) {
			return alias.target();
		}

		if base.starts_with(RECORD_PREFIX) {
			return ResolvedType::Named(to_type_name(&base));
		}

		log::debug!("unresolved native type {:?}, using pointer fallback", query.native);
		ResolvedType::Pointer
	}
}

/// Strip `const` and `*` and collapse whitespace (`const unsigned  int*` -> `unsigned int`).
pub fn base_name(native: &str) -> String {
	native
		.replace('*', " ")
		.split_whitespace()
		.filter(|word| *word != "const")
		.collect::<Vec<_>>()
		.join(" ")
}

/// Remove `const` tokens while keeping `*` markers (`const char *` -> `char*`).
pub fn normalize_type(native: &str) -> String {
	let base = base_name(native);
	let stars = native.matches('*').count();
	format!("{base}{}", "*".repeat(stars))
}

/// Whether the type text carries a `const` qualifier token.
pub fn has_const(native: &str) -> bool {
	native.replace('*', " ").split_whitespace().any(|word| word == "const")
}
