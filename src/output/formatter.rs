use std::path::Path;

use crate::mapper::document::SchemaDocument;

/// Render the document as pretty-printed JSON.
///
/// Two-space indentation, field order taken from the struct declarations, so
/// output is byte-stable across runs over the same input.
pub fn render_document(document: &SchemaDocument) -> Result<String, String> {
    serde_json::to_string_pretty(document)
        .map_err(|e| format!("Unable to serialize document: {e}"))
}

/// Write rendered output to `path`, creating missing parent directories.
pub fn write_output(path: &Path, rendered: &str) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create output directory: {e}"))?;
    }
    std::fs::write(path, rendered).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_path(prefix: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        std::env::temp_dir().join(format!("{prefix}_{nanos}"))
    }

    fn empty_document() -> SchemaDocument {
        SchemaDocument {
            definitions: Vec::new(),
            caveats: Vec::new(),
        }
    }

    #[test]
    fn render_document_pretty_prints_with_two_space_indent() {
        let rendered = render_document(&empty_document()).expect("render should succeed");
        assert_eq!(rendered, "{\n  \"definitions\": []\n}");
    }

    #[test]
    fn write_output_creates_parent_directories() {
        let dir = unique_path("zed2json_formatter_nested");
        let path = dir.join("deep").join("schema.json");

        write_output(&path, "{}").expect("write_output should succeed");

        let written = std::fs::read_to_string(&path).expect("output should exist");
        assert_eq!(written, "{}");
    }

    #[test]
    fn write_output_reports_the_failing_path() {
        let blocker = unique_path("zed2json_formatter_file");
        std::fs::write(&blocker, "not a directory").expect("should create marker file");

        let path = blocker.join("schema.json");
        let err = write_output(&path, "{}").expect_err("write through a file should fail");
        assert!(err.contains("Failed to"));
    }
}
