/// Doc-comment extraction from metadata attachments.
pub mod comments;
/// JSON-serializable output document model.
pub mod document;
/// The mapping pass from compiled tree to output document.
pub mod schema_mapper;
