use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::bind::{GeneratorConfig, HeaderModel, Result, parse_header, render_enums, render_natives, render_structs};

/// Summary of one generator run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
	/// Input header.
	pub header: PathBuf,
	/// Output directory.
	pub output: PathBuf,
	/// Number of enums emitted.
	pub enums: usize,
	/// Number of structs emitted.
	pub structs: usize,
	/// Number of handle typedefs recognized.
	pub handles: usize,
	/// Number of native functions emitted.
	pub functions: usize,
	/// Artifacts written, in write order.
	pub files: Vec<PathBuf>,
}

/// Rendered artifact waiting to be written.
#[derive(Debug, Clone)]
pub struct Artifact {
	/// File name inside the output directory.
	pub file_name: String,
	/// Full file text.
	pub text: String,
}

/// Render all three artifacts for a parsed model.
pub fn render_all(model: &HeaderModel, config: &GeneratorConfig) -> [Artifact; 3] {
	[
		Artifact {
			file_name: config.enums_file.clone(),
			text: render_enums(model, config),
		},
		Artifact {
			file_name: config.structs_file.clone(),
			text: render_structs(model, config),
		},
		Artifact {
			file_name: config.natives_file.clone(),
			text: render_natives(model, config),
		},
	]
}

/// Read a header file and parse it.
pub fn load_model(header: impl AsRef<Path>) -> Result<HeaderModel> {
	let header = header.as_ref();
	let text = std::fs::read_to_string(header)?;
	log::debug!("read {} bytes from {}", text.len(), header.display());
	parse_header(&text)
}

/// Parse `header` and write the generated artifacts into `output`.
///
/// Everything is parsed and rendered in memory first; the output directory is
/// only created once the model is complete.
pub fn generate(header: impl AsRef<Path>, output: impl AsRef<Path>, config: &GeneratorConfig) -> Result<GenerateReport> {
	let header = header.as_ref();
	let output = output.as_ref();

	let model = load_model(header)?;
	let artifacts = render_all(&model, config);

	std::fs::create_dir_all(output)?;
	let mut files = Vec::with_capacity(artifacts.len());
	for artifact in artifacts {
		let path = output.join(&artifact.file_name);
		std::fs::write(&path, artifact.text)?;
		log::info!("wrote {}", path.display());
		files.push(path);
	}

	Ok(GenerateReport {
		header: header.to_path_buf(),
		output: output.to_path_buf(),
		enums: model.enums.len(),
		structs: model.structs.len(),
		handles: model.handles.len(),
		functions: model.functions.len(),
		files,
	})
}
