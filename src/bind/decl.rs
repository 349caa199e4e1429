use crate::bind::doc::split_inline_doc;
use crate::bind::types::{has_const, normalize_type};

/// One enum entry or struct field statement with its documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DocumentedCode {
	/// Declaration text with comments and the trailing separator removed.
	pub code: String,
	/// Inline doc, or a leading `/** */` doc when no inline doc is present.
	pub summary: Option<String>,
}

/// Parsed struct field statement (`uint8_t r, g, b, a`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldDecl<'a> {
	/// Type portion, including any `*` written next to it.
	pub ty: &'a str,
	/// Declarators sharing the type.
	pub names: Vec<Declarator<'a>>,
}

/// One name in a field declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Declarator<'a> {
	/// Field name without stars or array extent.
	pub name: &'a str,
	/// Number of leading `*` stripped from the name.
	pub stars: u8,
	/// The name carried an `[N]` extent.
	pub is_array: bool,
}

/// Parsed function parameter text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParamShape {
	/// Parameter name.
	pub name: String,
	/// Type text with `const` removed and `*` markers appended.
	pub native_type: String,
	/// Whether the written type carried `const`.
	pub is_const: bool,
	/// Indirection levels.
	pub pointer_depth: u8,
	/// Whether the parameter is a `(*name)(...)` function pointer.
	pub is_callback: bool,
}

/// Split on `separator` outside any `()`, `[]`, or `{}` nesting.
pub(crate) fn split_top_level(text: &str, separator: char) -> Vec<&str> {
	let mut parts = Vec::new();
	let mut depth = 0_i32;
	let mut start = 0_usize;
	for (idx, ch) in text.char_indices() {
		match ch {
			'(' | '[' | '{' => depth += 1,
			')' | ']' | '}' => depth -= 1,
			_ if ch == separator && depth == 0 => {
				parts.push(&text[start..idx]);
				start = idx + ch.len_utf8();
			}
			_ => {}
		}
	}
	if start < text.len() {
		parts.push(&text[start..]);
	}
	parts
}

/// Split a struct body into field statements on semicolons outside comments.
///
/// A comment that follows the semicolon on the same line stays with the
/// statement it documents.
pub(crate) fn split_statements(body: &str) -> Vec<&str> {
	let bytes = body.as_bytes();
	let mut parts = Vec::new();
	let mut start = 0_usize;
	let mut idx = 0_usize;

	while idx < bytes.len() {
		if bytes[idx..].starts_with(b"//") {
			idx = line_end(body, idx);
			continue;
		}
		if bytes[idx..].starts_with(b"/*") {
			idx = block_end(body, idx);
			continue;
		}
		if bytes[idx] != b';' {
			idx += 1;
			continue;
		}

		idx += 1;
		let mut next = idx;
		while next < bytes.len() && matches!(bytes[next], b' ' | b'\t') {
			next += 1;
		}
		if bytes[next..].starts_with(b"//") {
			idx = line_end(body, next);
		} else if bytes[next..].starts_with(b"/*") {
			idx = block_end(body, next);
		}
		parts.push(&body[start..idx]);
		start = idx;
	}

	if !strip_comments(&body[start..]).trim().is_empty() {
		parts.push(&body[start..]);
	}
	parts
}

/// Split an enum body into entries, one per value, with their inline docs.
pub(crate) fn enum_entries(body: &str) -> Vec<DocumentedCode> {
	let mut entries = Vec::new();
	let mut in_block = false;

	for raw in body.lines() {
		let mut line = raw.trim();
		if in_block {
			match line.find("*/") {
				Some(end) => {
					in_block = false;
					line = line[end + 2..].trim();
				}
				None => continue,
			}
		}

		let (rest, _) = strip_leading_comments(line);
		if rest.trim_start().starts_with("/*") && !rest.contains("*/") {
			in_block = true;
			continue;
		}
		if rest.trim().is_empty() {
			continue;
		}

		let inline = split_inline_doc(rest);
		let code = strip_comments(&inline.code);
		for piece in split_top_level(&code, ',') {
			let piece = piece.trim();
			if !piece.is_empty() {
				entries.push(DocumentedCode {
					code: piece.to_owned(),
					summary: inline.summary.clone(),
				});
			}
		}
	}
	entries
}

/// Clean one struct field statement produced by [`split_statements`].
pub(crate) fn clean_field_statement(raw: &str) -> DocumentedCode {
	let (rest, leading_doc) = strip_leading_comments(raw);
	let inline = split_inline_doc(rest);
	let code = strip_comments(&inline.code);
	let code = code.trim();
	let code = code.strip_suffix(';').unwrap_or(code).trim();
	DocumentedCode {
		code: code.to_owned(),
		summary: inline.summary.or(leading_doc),
	}
}

/// Split `type name1, *name2` into the shared type and its declarator names.
pub(crate) fn split_field_decl(decl: &str) -> Option<FieldDecl<'_>> {
	let mut parts = decl.split(',').map(str::trim).filter(|part| !part.is_empty());
	let first = parts.next()?;
	let head = &first[..first.find('[').unwrap_or(first.len())];
	let boundary = head.rfind(|ch: char| ch.is_ascii_whitespace() || ch == '*')?;
	let (ty, first_name) = if first.as_bytes()[boundary] == b'*' {
		(first[..=boundary].trim(), &first[boundary + 1..])
	} else {
		(first[..boundary].trim(), &first[boundary + 1..])
	};
	if ty.is_empty() {
		return None;
	}

	let mut names = Vec::new();
	for raw in std::iter::once(first_name).chain(parts) {
		let name = raw.trim();
		let stars = name.chars().take_while(|ch| *ch == '*' || ch.is_ascii_whitespace()).filter(|ch| *ch == '*').count();
		let name = name.trim_start_matches(|ch: char| ch == '*' || ch.is_ascii_whitespace());
		let (name, is_array) = match name.find('[') {
			Some(open) => (name[..open].trim_end(), true),
			None => (name, false),
		};
		if !name.is_empty() {
			names.push(Declarator {
				name,
				stars: stars as u8,
				is_array,
			});
		}
	}
	Some(FieldDecl { ty, names })
}

/// Parse one parameter. `index` names parameters that omit a name.
pub(crate) fn parse_param(raw: &str, index: usize) -> ParamShape {
	let param = raw.trim();

	if let Some(start) = param.find("(*") {
		let after = &param[start + 2..];
		let name = after
			.find(')')
			.map(|end| after[..end].trim_start_matches('*').trim())
			.filter(|name| !name.is_empty())
			.unwrap_or("callback");
		return ParamShape {
			name: name.to_owned(),
			native_type: param.split_whitespace().collect::<Vec<_>>().join(" "),
			is_const: false,
			pointer_depth: 1,
			is_callback: true,
		};
	}

	let words: Vec<&str> = param.split_whitespace().collect();
	let (mut ty, name) = match words.split_last() {
		Some((name, rest)) if !rest.is_empty() && !name.ends_with('*') => (rest.join(" "), *name),
		_ => (param.to_owned(), ""),
	};

	let stars = name.chars().take_while(|ch| *ch == '*').count();
	let mut name = name[stars..].to_owned();
	ty.push_str(&"*".repeat(stars));
	if let Some(open) = name.find('[') {
		name.truncate(open);
		ty.push('*');
	}
	if name.is_empty() {
		name = format!("arg{index}");
	}

	let native_type = normalize_type(&ty);
	let pointer_depth = native_type.matches('*').count() as u8;
	ParamShape {
		name,
		is_const: has_const(&ty),
		native_type,
		pointer_depth,
		is_callback: false,
	}
}

/// Strip comments that precede the code on a line or statement.
///
/// Returns the remaining text and the last leading `/** */` doc, if any.
fn strip_leading_comments(text: &str) -> (&str, Option<String>) {
	let mut rest = text.trim_start();
	let mut doc = None;
	loop {
		if rest.starts_with("/**<") || rest.starts_with("///<") {
			return (rest, doc);
		}
		if rest.starts_with("//") {
			rest = rest[line_end(rest, 0)..].trim_start();
			continue;
		}
		if rest.starts_with("/*") {
			let Some(end) = rest[2..].find("*/") else {
				return (rest, doc);
			};
			let comment = &rest[..end + 4];
			if comment.starts_with("/**") {
				let parsed = crate::bind::DocBlock::parse(Some(comment));
				doc = parsed.summary.or(doc);
			}
			rest = rest[end + 4..].trim_start();
			continue;
		}
		return (rest, doc);
	}
}

/// Remove any remaining `//` and `/* */` comments.
fn strip_comments(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut rest = text;
	loop {
		let line = rest.find("//");
		let block = rest.find("/*");
		match (line, block) {
			(Some(l), Some(b)) if b < l => {
				out.push_str(&rest[..b]);
				rest = &rest[block_end(rest, b)..];
			}
			(Some(l), _) => {
				out.push_str(&rest[..l]);
				rest = &rest[line_end(rest, l)..];
			}
			(None, Some(b)) => {
				out.push_str(&rest[..b]);
				rest = &rest[block_end(rest, b)..];
			}
			(None, None) => {
				out.push_str(rest);
				return out;
			}
		}
	}
}

/// Offset just past the end of the line containing `from` (newline excluded).
fn line_end(text: &str, from: usize) -> usize {
	text[from..].find('\n').map(|rel| from + rel).unwrap_or(text.len())
}

/// Offset just past the `*/` closing a block comment that starts at `from`.
fn block_end(text: &str, from: usize) -> usize {
	text[from + 2..].find("*/").map(|rel| from + 2 + rel + 2).unwrap_or(text.len())
}
