//! C# interop binding generator for the ThorVG C API header.

/// Header parsing, type mapping, and managed source emission.
pub mod bind;
