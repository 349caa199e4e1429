use std::path::PathBuf;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BindError>;

/// Errors produced while reading a header, parsing it, or writing bindings.
#[derive(Debug, Error)]
pub enum BindError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON encoding or decoding failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Configuration file could not be read or decoded.
	#[error("invalid config {path}: {reason}")]
	InvalidConfig {
		/// Config file path.
		path: PathBuf,
		/// Underlying failure description.
		reason: String,
	},
	/// A literal token required by a production was not found.
	#[error("expected {expected:?} at position {at} (line {line}, column {column})")]
	Expected {
		/// Literal the parser required.
		expected: &'static str,
		/// Byte offset of the scan position.
		at: usize,
		/// One-based line of the scan position.
		line: usize,
		/// One-based column of the scan position.
		column: usize,
	},
	/// A declaration name was required but no identifier was present.
	#[error("expected identifier at position {at} (line {line}, column {column})")]
	ExpectedIdentifier {
		/// Byte offset of the scan position.
		at: usize,
		/// One-based line of the scan position.
		line: usize,
		/// One-based column of the scan position.
		column: usize,
	},
	/// Prefix stripping produced an empty enum member name.
	#[error("enum {enum_name}: value {value} maps to an empty member name")]
	EmptyEnumMember {
		/// Native enum name.
		enum_name: String,
		/// Native value name.
		value: String,
	},
	/// Two values of one enum map to the same member name.
	#[error("enum {enum_name}: values {first} and {second} both map to member {member}")]
	EnumMemberCollision {
		/// Native enum name.
		enum_name: String,
		/// Colliding idiomatic member name.
		member: String,
		/// First native value name.
		first: String,
		/// Second native value name.
		second: String,
	},
	/// A struct field declares an inline fixed-size array.
	#[error("struct {struct_name}: array field {field} has no sequential-layout mapping")]
	ArrayField {
		/// Native struct name.
		struct_name: String,
		/// Native field name.
		field: String,
	},
}
