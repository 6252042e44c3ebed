/// Sentinel sub-relation name the compiler emits for "the subject itself".
pub const SELF_RELATION: &str = "...";

/// Relation name used in the output document for wildcard subject references.
pub const WILDCARD_RELATION: &str = "*";

/// Split a qualified definition name into `(namespace, local name)`.
///
/// The split happens on the first `/` only; a name without a separator has an
/// empty namespace.
pub fn split_qualified_name(name: &str) -> (String, String) {
    match name.split_once('/') {
        Some((namespace, local)) => (namespace.to_string(), local.to_string()),
        None => (String::new(), name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_qualified_name_separates_namespace() {
        assert_eq!(
            split_qualified_name("a/b"),
            ("a".to_string(), "b".to_string())
        );
    }

    #[test]
    fn split_qualified_name_without_separator_has_empty_namespace() {
        assert_eq!(
            split_qualified_name("b"),
            (String::new(), "b".to_string())
        );
    }

    #[test]
    fn split_qualified_name_splits_on_first_separator_only() {
        assert_eq!(
            split_qualified_name("a/b/c"),
            ("a".to_string(), "b/c".to_string())
        );
    }
}
