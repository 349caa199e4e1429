use serde::Serialize;

/// Documented data flow of a function parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamDirection {
	/// No `[dir]` annotation was present.
	#[default]
	Unknown,
	/// `@param[in]`.
	In,
	/// `@param[out]`.
	Out,
	/// `@param[in,out]`.
	InOut,
}

impl ParamDirection {
	fn from_token(token: &str) -> Self {
		if token.contains("in,out") {
			Self::InOut
		} else if token.contains("out") {
			Self::Out
		} else if token.contains("in") {
			Self::In
		} else {
			Self::Unknown
		}
	}
}

/// One `@param` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDoc {
	/// Parameter name as written in the directive.
	pub name: String,
	/// Bracketed direction, or unknown.
	pub direction: ParamDirection,
	/// Text after the name.
	pub summary: Option<String>,
}

/// Parsed Doxygen comment block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
	/// Space-joined free text and `@brief` lines.
	pub summary: Option<String>,
	/// `@param` directives in source order.
	pub params: Vec<ParamDoc>,
	/// Text of the last `@return` directive.
	pub returns: Option<String>,
}

impl DocBlock {
	/// Parse a raw `/** ... */` block. Absent or malformed input yields empty results.
	pub fn parse(raw: Option<&str>) -> Self {
		let Some(raw) = raw.filter(|item| !item.trim().is_empty()) else {
			return Self::default();
		};

		let mut block = Self::default();
		let mut summary_lines = Vec::new();

		let normalized = normalize(raw);
		for line in normalized.lines().map(str::trim).filter(|line| !line.is_empty()) {
			if line.starts_with("@param") {
				if let Some(param) = parse_param_line(line) {
					block.params.push(param);
				}
			} else if line.starts_with("@retval") {
				continue;
			} else if let Some(rest) = line.strip_prefix("@returns").or_else(|| line.strip_prefix("@return")) {
				block.returns = Some(rest.trim().to_owned());
			} else if let Some(rest) = line.strip_prefix("@brief ") {
				summary_lines.push(rest.trim());
			} else if !line.starts_with('@') {
				summary_lines.push(line);
			}
		}

		if !summary_lines.is_empty() {
			block.summary = Some(summary_lines.join(" "));
		}
		block
	}

	/// Direction documented for `name`; the last matching directive wins.
	pub fn direction_of(&self, name: &str) -> ParamDirection {
		self.find_param(name).map(|param| param.direction).unwrap_or_default()
	}

	/// Summary documented for `name`.
	pub fn param_summary(&self, name: &str) -> Option<&str> {
		self.find_param(name).and_then(|param| param.summary.as_deref())
	}

	fn find_param(&self, name: &str) -> Option<&ParamDoc> {
		self.params.iter().rev().find(|param| param.name == name)
	}
}

/// Declaration text with a trailing `///<` or `/**< */` comment removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineDoc {
	/// Declaration text without the inline comment.
	pub code: String,
	/// Inline comment text.
	pub summary: Option<String>,
}

/// Split a single enum value or struct field line into code and inline doc.
pub fn split_inline_doc(line: &str) -> InlineDoc {
	if let Some(idx) = line.find("///<") {
		let summary = line[idx + 4..].trim();
		return InlineDoc {
			code: line[..idx].to_owned(),
			summary: non_empty(summary),
		};
	}

	if let Some(idx) = line.find("/**<") {
		let after = &line[idx + 4..];
		return match after.find("*/") {
			Some(end) => InlineDoc {
				code: format!("{}{}", &line[..idx], &after[end + 2..]),
				summary: non_empty(after[..end].trim()),
			},
			None => InlineDoc {
				code: line[..idx].to_owned(),
				summary: non_empty(after.trim()),
			},
		};
	}

	InlineDoc {
		code: line.to_owned(),
		summary: None,
	}
}

fn normalize(raw: &str) -> String {
	let text = raw.replace('\r', "").replace("/**", "").replace("*/", "");
	text.lines()
		.map(|line| line.trim().trim_start_matches('*').trim())
		.collect::<Vec<_>>()
		.join("\n")
}

fn parse_param_line(line: &str) -> Option<ParamDoc> {
	let mut rest = line["@param".len()..].trim();
	let mut direction = ParamDirection::Unknown;

	if rest.starts_with('[') {
		if let Some(end) = rest.find(']').filter(|end| *end > 1) {
			direction = ParamDirection::from_token(&rest[1..end]);
			rest = rest[end + 1..].trim();
		}
	}

	let (name, summary) = match rest.split_once(char::is_whitespace) {
		Some((name, summary)) => (name, non_empty(summary.trim())),
		None => (rest, None),
	};
	if name.is_empty() {
		return None;
	}

	Some(ParamDoc {
		name: name.to_owned(),
		direction,
		summary,
	})
}

fn non_empty(text: &str) -> Option<String> {
	if text.is_empty() { None } else { Some(text.to_owned()) }
}
