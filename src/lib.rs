//! Translate compiled authorization schemas into a serializable JSON document model.
#![warn(missing_docs)]

/// Mapping pass from the compiled tree to the output document model.
pub mod mapper;
/// Pretty-printed JSON rendering and file output.
pub mod output;
/// Read-only compiled-schema tree consumed from the upstream schema compiler.
pub mod schema;
