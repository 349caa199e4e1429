use serde::Serialize;

use crate::bind::{ParamDirection, ResolvedType};

/// Parse result: every recognized declaration, grouped by kind in source order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HeaderModel {
	/// Enumerated types.
	pub enums: Vec<EnumDecl>,
	/// Plain aggregates.
	pub structs: Vec<StructDecl>,
	/// Opaque handle typedefs.
	pub handles: Vec<HandleDecl>,
	/// Exported function prototypes.
	pub functions: Vec<FunctionDecl>,
}

impl HeaderModel {
	/// Group declarations by kind, keeping source order within each kind.
	pub fn from_declarations(decls: impl IntoIterator<Item = Declaration>) -> Self {
		let mut model = Self::default();
		for decl in decls {
			match decl {
				Declaration::Enum(item) => model.enums.push(item),
				Declaration::Struct(item) => model.structs.push(item),
				Declaration::Handle(item) => model.handles.push(item),
				Declaration::Function(item) => model.functions.push(item),
			}
		}
		model
	}
}

/// One recognized top-level declaration.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
	/// `typedef enum { ... } Name;`
	Enum(EnumDecl),
	/// `typedef struct { ... } Name;`
	Struct(StructDecl),
	/// `typedef struct _Tag* Name;`
	Handle(HandleDecl),
	/// `TVG_API Ret name(...);`
	Function(FunctionDecl),
}

/// Enumerated type declaration.
#[derive(Debug, Clone, Serialize)]
pub struct EnumDecl {
	/// Managed type name.
	pub name: String,
	/// Native typedef name.
	pub native_name: String,
	/// Declaration summary.
	pub summary: Option<String>,
	/// Values in source order.
	pub values: Vec<EnumValue>,
	/// Whether any value literal is a shift expression.
	pub is_flags: bool,
}

/// One enum member.
#[derive(Debug, Clone, Serialize)]
pub struct EnumValue {
	/// Managed member name.
	pub name: String,
	/// Native value name.
	pub native_name: String,
	/// Literal expression after `=`, verbatim.
	pub literal: Option<String>,
	/// Inline summary.
	pub summary: Option<String>,
}

/// Plain aggregate declaration.
#[derive(Debug, Clone, Serialize)]
pub struct StructDecl {
	/// Managed type name.
	pub name: String,
	/// Native typedef name.
	pub native_name: String,
	/// Declaration summary.
	pub summary: Option<String>,
	/// Fields in memory order.
	pub fields: Vec<StructField>,
}

/// One struct field.
#[derive(Debug, Clone, Serialize)]
pub struct StructField {
	/// Managed field name.
	pub name: String,
	/// Native field name.
	pub native_name: String,
	/// Native type text with `const` removed.
	pub native_type: String,
	/// Pointer indirection levels from the type and the declarator.
	pub pointer_depth: u8,
	/// Resolved managed type.
	pub ty: ResolvedType,
	/// Inline or leading summary.
	pub summary: Option<String>,
}

/// Opaque handle typedef.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandleDecl {
	/// Derived managed handle type name.
	pub name: String,
	/// Native struct tag (`_Tvg_Canvas`).
	pub tag: String,
	/// Native typedef name (`Tvg_Canvas`).
	pub native_name: String,
}

/// Exported function prototype.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDecl {
	/// Native exported symbol.
	pub name: String,
	/// Native return type text with `const` removed.
	pub native_return: String,
	/// Resolved managed return type.
	pub return_type: ResolvedType,
	/// Declaration summary.
	pub summary: Option<String>,
	/// `@return` text.
	pub returns: Option<String>,
	/// Parameters in call order.
	pub params: Vec<ParamDecl>,
}

/// One function parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ParamDecl {
	/// Parameter name.
	pub name: String,
	/// Native type text with `const` removed, including `*` markers.
	pub native_type: String,
	/// `@param` summary.
	pub summary: Option<String>,
	/// Documented direction.
	pub direction: ParamDirection,
	/// Whether the native type carries `const`.
	pub is_const: bool,
	/// Whether the native type has any indirection.
	pub is_pointer: bool,
	/// Number of `*` levels.
	pub pointer_depth: u8,
	/// Whether the parameter is a `(*name)(...)` function pointer.
	pub is_callback: bool,
	/// Resolved managed type.
	pub ty: ResolvedType,
}
