/// Compiled schema tree: definitions, relations, rewrite rules, and metadata.
pub mod core;
/// Qualified-name splitting and sentinel relation names.
pub mod names;
