use std::sync::LazyLock;

use regex::Regex;

use crate::schema::core::Metadata;

/// Type tag under which the compiler attaches doc comments to schema elements.
pub const DOC_COMMENT_TYPE_URL: &str = "type.googleapis.com/impl.v1.DocComment";

// The compiler prefixes each doc-comment payload with a fixed 2-byte
// structural marker ahead of the visible text.
const PAYLOAD_PREFIX_LEN: usize = 2;

// Comment-syntax decoration: leading `/*` or `/**`, `//`, mid-line ` * `, and
// trailing `*/`, each with optional surrounding spaces.
static DECORATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(/\*{1,2} ?|// ?| ?\* | ?\*?/)").expect("decoration pattern"));

/// Extract the normalized doc-comment text attached to a schema element.
///
/// Scans the metadata attachments for doc-comment entries, strips the payload
/// prefix and comment-syntax decoration from each, joins them in attachment
/// order with newlines, and trims the result. Returns an empty string when no
/// doc comment is attached. Never fails: payloads shorter than the prefix or
/// containing invalid UTF-8 simply contribute nothing useful.
pub fn extract_doc_comments(metadata: &Metadata) -> String {
    let mut comment = String::new();
    for message in &metadata.messages {
        if message.type_url != DOC_COMMENT_TYPE_URL {
            continue;
        }
        let payload = message.value.get(PAYLOAD_PREFIX_LEN..).unwrap_or_default();
        let text = String::from_utf8_lossy(payload);
        comment.push_str(&DECORATION.replace_all(&text, ""));
        comment.push('\n');
    }
    comment.trim().to_string()
}
