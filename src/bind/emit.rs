//! Managed source emitters over a parsed [`HeaderModel`](crate::bind::HeaderModel).

mod enums;
mod natives;
mod structs;
mod writer;

/// Enum artifact renderer.
pub use enums::render_enums;
/// Native method artifact renderer and per-parameter marshalling.
pub use natives::{ParamModifier, param_modifier, render_natives, render_param};
/// Struct artifact renderer.
pub use structs::render_structs;
/// Source writer and escaping helpers.
pub use writer::{CodeWriter, xml_escape};
