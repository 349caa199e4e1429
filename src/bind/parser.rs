use std::collections::HashMap;

use crate::bind::cursor::Scanner;
use crate::bind::decl::{clean_field_statement, enum_entries, parse_param, split_field_decl, split_statements, split_top_level};
use crate::bind::names::{to_enum_member_name, to_field_name, to_handle_name, to_type_name};
use crate::bind::types::{TypeMapper, has_const, normalize_type};
use crate::bind::{
	BindError, Declaration, DocBlock, EnumDecl, EnumValue, FunctionDecl, HandleDecl, HeaderModel, ParamDecl, ResolvedType, Result, StructDecl,
	StructField,
};

/// Export marker that introduces a function prototype.
pub const API_MARKER: &str = "TVG_API";

/// Parse header text into a [`HeaderModel`].
///
/// Any structural failure aborts the whole parse; no partial model is returned.
pub fn parse_header(text: &str) -> Result<HeaderModel> {
	let mut scan = Scanner::new(text);
	let mut handles: Vec<HandleDecl> = Vec::new();
	let mut decls = Vec::new();

	while let Some(decl) = parse_next(&mut scan, &handles)? {
		if let Declaration::Handle(handle) = &decl {
			handles.push(handle.clone());
		}
		decls.push(decl);
	}

	let model = HeaderModel::from_declarations(decls);
	log::debug!(
		"parsed {} enums, {} structs, {} handles, {} functions",
		model.enums.len(),
		model.structs.len(),
		model.handles.len(),
		model.functions.len()
	);
	Ok(model)
}

/// Parse the next recognized declaration, or `None` at end of text.
fn parse_next(scan: &mut Scanner<'_>, handles: &[HandleDecl]) -> Result<Option<Declaration>> {
	loop {
		scan.skip_noise();
		if scan.is_eof() {
			return Ok(None);
		}

		if scan.starts_with_keyword("typedef enum") {
			return parse_enum(scan).map(|item| Some(Declaration::Enum(item)));
		}
		if scan.starts_with_keyword("typedef struct") {
			if let Some(handle) = try_parse_handle(scan)? {
				return Ok(Some(Declaration::Handle(handle)));
			}
			return parse_struct(scan, handles).map(|item| Some(Declaration::Struct(item)));
		}
		if scan.starts_with_keyword(API_MARKER) {
			return parse_function(scan, handles).map(|item| Some(Declaration::Function(item)));
		}
		if scan.try_consume("}") {
			continue;
		}
		scan.skip_statement();
	}
}

fn parse_enum(scan: &mut Scanner<'_>) -> Result<EnumDecl> {
	scan.expect("typedef enum")?;
	scan.expect("{")?;
	let body = scan.read_block(b'{', b'}', "}")?;
	let native_name = scan.expect_identifier()?;
	scan.expect(";")?;
	let doc = DocBlock::parse(scan.take_doc());

	let mut values = Vec::new();
	for entry in enum_entries(body) {
		let (value_name, literal) = match entry.code.split_once('=') {
			Some((name, literal)) => (name.trim(), Some(literal.trim().to_owned())),
			None => (entry.code.trim(), None),
		};
		values.push(EnumValue {
			name: to_enum_member_name(native_name, value_name),
			native_name: value_name.to_owned(),
			literal,
			summary: entry.summary,
		});
	}
	check_members(native_name, &values)?;

	let is_flags = values.iter().any(|value| value.literal.as_deref().is_some_and(|literal| literal.contains("<<")));
	log::debug!("enum {native_name}: {} values{}", values.len(), if is_flags { " (flags)" } else { "" });

	Ok(EnumDecl {
		name: to_type_name(native_name),
		native_name: native_name.to_owned(),
		summary: doc.summary,
		values,
		is_flags,
	})
}

/// Reject members whose prefix stripping left nothing, or that collide.
fn check_members(enum_name: &str, values: &[EnumValue]) -> Result<()> {
	let mut seen: HashMap<&str, &str> = HashMap::new();
	for value in values {
		if value.name.is_empty() {
			return Err(BindError::EmptyEnumMember {
				enum_name: enum_name.to_owned(),
				value: value.native_name.clone(),
			});
		}
		if let Some(first) = seen.insert(value.name.as_str(), value.native_name.as_str()) {
			return Err(BindError::EnumMemberCollision {
				enum_name: enum_name.to_owned(),
				member: value.name.clone(),
				first: first.to_owned(),
				second: value.native_name.clone(),
			});
		}
	}
	Ok(())
}

/// Trial parse of `typedef struct _Tag* Name;`. Backtracks and returns `None`
/// when the text is not a handle typedef.
fn try_parse_handle(scan: &mut Scanner<'_>) -> Result<Option<HandleDecl>> {
	let mark = scan.mark();
	scan.expect("typedef struct")?;

	if !scan.starts_with("_") {
		scan.reset(mark);
		return Ok(None);
	}
	let tag = scan.read_identifier();
	if !scan.try_consume("*") {
		scan.reset(mark);
		return Ok(None);
	}
	let native_name = scan.read_identifier();
	if native_name.is_empty() || !scan.try_consume(";") {
		scan.reset(mark);
		return Ok(None);
	}
	let _ = scan.take_doc();

	log::debug!("handle {native_name} ({tag})");
	Ok(Some(HandleDecl {
		name: to_handle_name(native_name),
		tag: tag.to_owned(),
		native_name: native_name.to_owned(),
	}))
}

fn parse_struct(scan: &mut Scanner<'_>, handles: &[HandleDecl]) -> Result<StructDecl> {
	scan.expect("typedef struct")?;
	// Tagged form `typedef struct _Tag { ... } Name;`.
	let _ = scan.read_identifier();
	scan.expect("{")?;
	let body = scan.read_block(b'{', b'}', "}")?;
	let native_name = scan.expect_identifier()?;
	scan.expect(";")?;
	let doc = DocBlock::parse(scan.take_doc());

	let mapper = TypeMapper::new(handles);
	let mut fields = Vec::new();
	for statement in split_statements(body) {
		let cleaned = clean_field_statement(statement);
		if cleaned.code.is_empty() {
			continue;
		}
		let Some(decl) = split_field_decl(&cleaned.code) else {
			log::debug!("struct {native_name}: skipping field statement {:?}", cleaned.code);
			continue;
		};
		let base_type = normalize_type(decl.ty);
		for declarator in decl.names {
			let name = declarator.name;
			if declarator.is_array {
				return Err(BindError::ArrayField {
					struct_name: native_name.to_owned(),
					field: name.to_owned(),
				});
			}
			let native_type = format!("{base_type}{}", "*".repeat(declarator.stars as usize));
			let pointer_depth = native_type.matches('*').count() as u8;
			fields.push(StructField {
				name: to_field_name(name),
				native_name: name.to_owned(),
				ty: mapper.resolve_field(&native_type, pointer_depth),
				native_type,
				pointer_depth,
				summary: cleaned.summary.clone(),
			});
		}
	}

	log::debug!("struct {native_name}: {} fields", fields.len());
	Ok(StructDecl {
		name: to_type_name(native_name),
		native_name: native_name.to_owned(),
		summary: doc.summary,
		fields,
	})
}

fn parse_function(scan: &mut Scanner<'_>, handles: &[HandleDecl]) -> Result<FunctionDecl> {
	scan.expect(API_MARKER)?;
	scan.skip_ws();
	let start = scan.pos();
	let declaration = scan.read_statement();
	scan.expect(";")?;
	let doc = DocBlock::parse(scan.take_doc());

	let open = declaration.find('(').ok_or_else(|| scan.expected_at("(", start + declaration.len()))?;
	let close = declaration
		.rfind(')')
		.filter(|close| *close > open)
		.ok_or_else(|| scan.expected_at(")", start + declaration.len()))?;

	let signature = declaration[..open].trim();
	let Some(split) = signature.rfind(|ch: char| ch.is_ascii_whitespace() || ch == '*') else {
		let (line, column) = scan.location_of(start);
		return Err(BindError::ExpectedIdentifier { at: start, line, column });
	};
	let name = signature[split + 1..].trim();
	if name.is_empty() {
		let (line, column) = scan.location_of(start + open);
		return Err(BindError::ExpectedIdentifier { at: start + open, line, column });
	}
	let return_text = &signature[..=split];

	let mapper = TypeMapper::new(handles);
	let native_return = normalize_type(return_text);
	let return_depth = native_return.matches('*').count() as u8;
	let return_type = mapper.resolve_return(&native_return, return_depth, has_const(return_text));

	let mut params = Vec::new();
	for (index, raw) in split_top_level(&declaration[open + 1..close], ',').into_iter().enumerate() {
		let raw = raw.trim();
		if raw.is_empty() || raw == "void" {
			continue;
		}
		let shape = parse_param(raw, index);
		let direction = doc.direction_of(&shape.name);
		let ty = if shape.is_callback {
			ResolvedType::Pointer
		} else {
			mapper.resolve_param(&shape.native_type, shape.pointer_depth, shape.is_const, direction, &shape.name)
		};
		params.push(ParamDecl {
			summary: doc.param_summary(&shape.name).map(str::to_owned),
			direction,
			is_const: shape.is_const,
			is_pointer: shape.pointer_depth > 0,
			pointer_depth: shape.pointer_depth,
			is_callback: shape.is_callback,
			ty,
			name: shape.name,
			native_type: shape.native_type,
		});
	}

	log::debug!("function {name}: {} params", params.len());
	Ok(FunctionDecl {
		name: name.to_owned(),
		native_return,
		return_type,
		summary: doc.summary,
		returns: doc.returns,
		params,
	})
}
