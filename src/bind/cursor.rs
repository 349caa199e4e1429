use crate::bind::{BindError, Result};

/// Saved scan position used to backtrack a trial parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

/// Forward-only cursor over header text with one pending documentation slot.
///
/// Probes (`starts_with`, `try_consume`, `expect`) skip leading whitespace
/// before looking at the text. Positions are byte offsets; every offset the
/// cursor stops at borders an ASCII byte, so slicing stays on char boundaries.
pub struct Scanner<'a> {
	text: &'a str,
	pos: usize,
	pending_doc: Option<&'a str>,
}

impl<'a> Scanner<'a> {
	/// Create a scanner at position 0.
	pub fn new(text: &'a str) -> Self {
		Self {
			text,
			pos: 0,
			pending_doc: None,
		}
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Whether all text has been consumed.
	pub fn is_eof(&self) -> bool {
		self.pos >= self.text.len()
	}

	/// Unread remainder of the text.
	pub fn rest(&self) -> &'a str {
		&self.text[self.pos.min(self.text.len())..]
	}

	/// Save the current position.
	pub fn mark(&self) -> Mark {
		Mark(self.pos)
	}

	/// Return to a saved position. The pending documentation slot is untouched.
	pub fn reset(&mut self, mark: Mark) {
		self.pos = mark.0;
	}

	/// Take and clear the pending documentation comment.
	pub fn take_doc(&mut self) -> Option<&'a str> {
		self.pending_doc.take()
	}

	/// Pending documentation comment, if one was captured.
	pub fn pending_doc(&self) -> Option<&'a str> {
		self.pending_doc
	}

	/// Skip ASCII whitespace.
	pub fn skip_ws(&mut self) {
		let bytes = self.text.as_bytes();
		while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
			self.pos += 1;
		}
	}

	/// Skip whitespace, comments, and preprocessor lines.
	///
	/// A `/** ... */` block replaces the pending documentation slot; every other
	/// kind of noise leaves it alone.
	pub fn skip_noise(&mut self) {
		loop {
			self.skip_ws();
			if self.try_doc_comment() || self.try_plain_comment() || self.try_preprocessor() {
				continue;
			}
			break;
		}
	}

	/// Whether the text after whitespace starts with `literal`.
	pub fn starts_with(&mut self, literal: &str) -> bool {
		self.skip_ws();
		self.rest().starts_with(literal)
	}

	/// Like [`Scanner::starts_with`] but also requires `literal` to end on an identifier boundary.
	pub fn starts_with_keyword(&mut self, literal: &str) -> bool {
		if !self.starts_with(literal) {
			return false;
		}
		!self.rest()[literal.len()..].bytes().next().is_some_and(is_ident_byte)
	}

	/// Consume `literal` if it follows the current position.
	pub fn try_consume(&mut self, literal: &str) -> bool {
		if self.starts_with(literal) {
			self.pos += literal.len();
			return true;
		}
		false
	}

	/// Consume `literal` or fail with the current position.
	pub fn expect(&mut self, literal: &'static str) -> Result<()> {
		if self.try_consume(literal) {
			return Ok(());
		}
		Err(self.expected(literal))
	}

	/// Read an identifier, which may be empty.
	pub fn read_identifier(&mut self) -> &'a str {
		self.skip_ws();
		let start = self.pos;
		let bytes = self.text.as_bytes();
		while self.pos < bytes.len() && is_ident_byte(bytes[self.pos]) {
			self.pos += 1;
		}
		&self.text[start..self.pos]
	}

	/// Read a non-empty identifier or fail.
	pub fn expect_identifier(&mut self) -> Result<&'a str> {
		let ident = self.read_identifier();
		if ident.is_empty() {
			let (line, column) = self.location();
			return Err(BindError::ExpectedIdentifier { at: self.pos, line, column });
		}
		Ok(ident)
	}

	/// Read a balanced block whose opening delimiter was already consumed.
	///
	/// Returns the text between the delimiters and leaves the cursor after the
	/// closing delimiter.
	pub fn read_block(&mut self, open: u8, close: u8, close_literal: &'static str) -> Result<&'a str> {
		let start = self.pos;
		let bytes = self.text.as_bytes();
		let mut depth = 1_usize;
		while self.pos < bytes.len() {
			let byte = bytes[self.pos];
			self.pos += 1;
			if byte == open {
				depth += 1;
			} else if byte == close {
				depth -= 1;
				if depth == 0 {
					return Ok(&self.text[start..self.pos - 1]);
				}
			}
		}
		Err(self.expected(close_literal))
	}

	/// Read up to (not including) the next `;` outside parentheses.
	pub fn read_statement(&mut self) -> &'a str {
		self.skip_ws();
		let start = self.pos;
		let bytes = self.text.as_bytes();
		let mut depth = 0_i32;
		while self.pos < bytes.len() {
			match bytes[self.pos] {
				b'(' => depth += 1,
				b')' => depth -= 1,
				b';' if depth == 0 => break,
				_ => {}
			}
			self.pos += 1;
		}
		&self.text[start..self.pos]
	}

	/// Skip through the next `;` and drop any pending documentation.
	pub fn skip_statement(&mut self) {
		match self.rest().find(';') {
			Some(rel) => self.pos += rel + 1,
			None => self.pos = self.text.len(),
		}
		self.pending_doc = None;
	}

	/// Build an [`BindError::Expected`] at the current position.
	pub fn expected(&self, expected: &'static str) -> BindError {
		self.expected_at(expected, self.pos)
	}

	/// Build an [`BindError::Expected`] at byte offset `at`.
	pub fn expected_at(&self, expected: &'static str, at: usize) -> BindError {
		let (line, column) = self.location_of(at);
		BindError::Expected { expected, at, line, column }
	}

	/// One-based line and column of the current position.
	pub fn location(&self) -> (usize, usize) {
		self.location_of(self.pos)
	}

	/// One-based line and column of byte offset `at`.
	pub fn location_of(&self, at: usize) -> (usize, usize) {
		let consumed = &self.text[..at.min(self.text.len())];
		let line = consumed.matches('\n').count() + 1;
		let column = match consumed.rfind('\n') {
			Some(idx) => consumed.len() - idx,
			None => consumed.len() + 1,
		};
		(line, column)
	}

	fn try_doc_comment(&mut self) -> bool {
		if !self.rest().starts_with("/**") {
			return false;
		}
		let Some(rel_end) = self.rest()[2..].find("*/") else {
			return false;
		};
		let end = self.pos + 2 + rel_end + 2;
		self.pending_doc = Some(&self.text[self.pos..end]);
		self.pos = end;
		true
	}

	fn try_plain_comment(&mut self) -> bool {
		let rest = self.rest();
		if rest.starts_with("//") {
			self.skip_line();
			return true;
		}
		if rest.starts_with("/*") {
			match rest[2..].find("*/") {
				Some(rel_end) => self.pos += 2 + rel_end + 2,
				None => self.pos = self.text.len(),
			}
			return true;
		}
		false
	}

	fn try_preprocessor(&mut self) -> bool {
		let rest = self.rest();
		if rest.starts_with('#') {
			loop {
				let line_start = self.pos;
				self.skip_line();
				let line = self.text[line_start..self.pos].trim_end();
				if !line.ends_with('\\') || self.is_eof() {
					break;
				}
			}
			return true;
		}
		if rest.starts_with("extern \"C\"") {
			self.skip_line();
			return true;
		}
		false
	}

	fn skip_line(&mut self) {
		match self.rest().find('\n') {
			Some(rel) => self.pos += rel + 1,
			None => self.pos = self.text.len(),
		}
	}
}

fn is_ident_byte(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || byte == b'_'
}

#[cfg(test)]
mod tests;
