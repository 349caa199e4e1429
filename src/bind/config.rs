use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bind::{BindError, Result};

/// Output naming for one generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
	/// Namespace for enums and structs.
	pub namespace: String,
	/// Namespace for the native method class.
	pub native_namespace: String,
	/// Name of the static class holding the native methods.
	pub native_class: String,
	/// Native library name passed to `DllImport`.
	pub library_name: String,
	/// File name of the enum artifact.
	pub enums_file: String,
	/// File name of the struct artifact.
	pub structs_file: String,
	/// File name of the native method artifact.
	pub natives_file: String,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			namespace: "IronThorVG".to_owned(),
			native_namespace: "IronThorVG.Native".to_owned(),
			native_class: "ThorVGNative".to_owned(),
			library_name: "thorvg".to_owned(),
			enums_file: "Enums.g.cs".to_owned(),
			structs_file: "Structs.g.cs".to_owned(),
			natives_file: "NativeMethods.g.cs".to_owned(),
		}
	}
}

impl GeneratorConfig {
	/// Load a JSON config file. Missing fields keep their defaults.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let invalid = |reason: String| BindError::InvalidConfig {
			path: path.to_path_buf(),
			reason,
		};
		let text = std::fs::read_to_string(path).map_err(|err| invalid(err.to_string()))?;
		let config: Self = serde_json::from_str(&text).map_err(|err| invalid(err.to_string()))?;
		for (field, value) in [
			("namespace", &config.namespace),
			("native_namespace", &config.native_namespace),
			("native_class", &config.native_class),
			("library_name", &config.library_name),
			("enums_file", &config.enums_file),
			("structs_file", &config.structs_file),
			("natives_file", &config.natives_file),
		] {
			if value.trim().is_empty() {
				return Err(invalid(format!("{field} must not be empty")));
			}
		}
		log::debug!("loaded config from {}", path.display());
		Ok(config)
	}
}
