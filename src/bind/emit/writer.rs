/// Line-oriented source builder with tab indentation.
#[derive(Debug, Default)]
pub struct CodeWriter {
	out: String,
	indent: usize,
}

impl CodeWriter {
	/// Start an artifact with the generated-file banner.
	pub fn with_banner() -> Self {
		let mut writer = Self::default();
		writer.line("// <auto-generated />");
		writer.line(concat!("// Generated by tvgbind ", env!("CARGO_PKG_VERSION"), " from the ThorVG C header. Do not edit."));
		writer.blank();
		writer
	}

	/// Write one line at the current indentation.
	pub fn line(&mut self, text: &str) {
		for _ in 0..self.indent {
			self.out.push('\t');
		}
		self.out.push_str(text);
		self.out.push('\n');
	}

	/// Write an empty line.
	pub fn blank(&mut self) {
		self.out.push('\n');
	}

	/// Write `header` and an opening brace, then indent.
	pub fn open(&mut self, header: &str) {
		self.line(header);
		self.line("{");
		self.indent += 1;
	}

	/// Dedent and write a closing brace.
	pub fn close(&mut self) {
		self.indent = self.indent.saturating_sub(1);
		self.line("}");
	}

	/// Write a `<summary>` block when `summary` is present.
	pub fn summary(&mut self, summary: Option<&str>) {
		let Some(summary) = summary.filter(|text| !text.trim().is_empty()) else {
			return;
		};
		self.line("/// <summary>");
		self.line(&format!("/// {}", xml_escape(summary)));
		self.line("/// </summary>");
	}

	/// Write a `<param>` doc line.
	pub fn param_doc(&mut self, name: &str, text: &str) {
		self.line(&format!("/// <param name=\"{}\">{}</param>", xml_escape(name), xml_escape(text)));
	}

	/// Write a `<returns>` doc line.
	pub fn returns_doc(&mut self, text: &str) {
		self.line(&format!("/// <returns>{}</returns>", xml_escape(text)));
	}

	/// Finished artifact text.
	pub fn finish(self) -> String {
		self.out
	}
}

/// Escape text for XML documentation comments.
pub fn xml_escape(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			_ => out.push(ch),
		}
	}
	out
}
