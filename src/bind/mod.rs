mod config;
mod cursor;
mod decl;
mod doc;
mod emit;
mod error;
mod generate;
mod model;
/// Native-to-managed identifier transforms.
pub mod names;
mod parser;
/// Native type resolution tables.
pub mod types;

/// Output naming configuration.
pub use config::GeneratorConfig;
/// Header scan cursor.
pub use cursor::{Mark, Scanner};
/// Doxygen comment extraction.
pub use doc::{DocBlock, InlineDoc, ParamDirection, ParamDoc, split_inline_doc};
/// Managed source emitters.
pub use emit::{CodeWriter, ParamModifier, param_modifier, render_enums, render_natives, render_param, render_structs, xml_escape};
/// Error and result aliases.
pub use error::{BindError, Result};
/// Generator entry points and run report.
pub use generate::{Artifact, GenerateReport, generate, load_model, render_all};
/// Parsed header model.
pub use model::{Declaration, EnumDecl, EnumValue, FunctionDecl, HandleDecl, HeaderModel, ParamDecl, StructDecl, StructField};
/// Declaration parser entry point.
pub use parser::{API_MARKER, parse_header};
/// Type resolution.
pub use types::{Aggregate, BUFFER_PARAM_NAME, Primitive, ResolvedType, TypeMapper};
