use std::collections::BTreeMap;

use serde::Serialize;

// ── Output document structs ─────────────────────────────────────────

/// Top-level output document, serializable to the JSON shape consumed by
/// external tooling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaDocument {
    /// Object-type definitions, preserving source declaration order.
    pub definitions: Vec<Definition>,
    /// Caveat definitions, preserving source declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caveats: Vec<Caveat>,
}

/// One object type with its relations partitioned into storage relations and
/// permissions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Definition {
    /// Local type name, with any namespace prefix removed.
    pub name: String,
    /// Namespace prefix, empty when the type is unqualified.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    /// Storage relations, in source order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<Relation>,
    /// Computed permissions, in source order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Permission>,
    /// Normalized doc-comment text, empty when none is attached.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// A storage relation and the subject types it accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relation {
    /// Relation name.
    pub name: String,
    /// Allowed subject references, in source order. Always emitted.
    pub types: Vec<RelationType>,
    /// Normalized doc-comment text.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// One allowed subject reference on a storage relation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationType {
    /// Target object-type name.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Sub-relation on the target. Empty means the subject itself; `*` marks
    /// a wildcard reference.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub relation: String,
    /// Name of the caveat required for this reference, empty when none.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caveat: String,
}

/// A computed permission and its rewrite tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Permission {
    /// Permission name.
    pub name: String,
    /// Root of the rewrite tree. Always emitted; `null` when the source rule
    /// is unrecognized.
    #[serde(rename = "userSet")]
    pub user_set: Option<UserSet>,
    /// Normalized doc-comment text.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// One node of a permission rewrite tree.
///
/// The two shapes are mutually exclusive by construction: a node is either a
/// set-algebra operator over children or a leaf reference, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UserSet {
    /// Set-algebra operator applied to an ordered list of child nodes.
    Operation {
        /// Which operator combines the children.
        operation: SetOperator,
        /// Child nodes in source order. For exclusion the first child is the
        /// base set and the rest are subtracted.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        children: Vec<UserSet>,
    },
    /// Leaf reference to a relation, directly or through a tupleset traversal.
    Reference {
        /// The referenced relation; for an indirect reference, the relation
        /// that is traversed.
        relation: String,
        /// For an indirect reference, the permission computed on each subject
        /// reached through `relation`. Empty for direct references.
        #[serde(skip_serializing_if = "String::is_empty")]
        permission: String,
    },
}

/// Set-algebra operator of an operator node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SetOperator {
    /// Members of any child set.
    Union,
    /// Members of every child set.
    Intersection,
    /// Members of the first child set minus members of the rest.
    Exclusion,
}

/// A caveat with its declared parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Caveat {
    /// Caveat name.
    pub name: String,
    /// Parameter name to declared type name. Always emitted, keys in
    /// deterministic order.
    pub parameters: BTreeMap<String, String>,
    /// Normalized doc-comment text.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl UserSet {
    /// Leaf node referencing a sibling relation or permission directly.
    pub fn reference(relation: impl Into<String>) -> Self {
        UserSet::Reference {
            relation: relation.into(),
            permission: String::new(),
        }
    }

    /// Leaf node traversing `relation` and computing `permission` on each
    /// subject reached.
    pub fn traversal(relation: impl Into<String>, permission: impl Into<String>) -> Self {
        UserSet::Reference {
            relation: relation.into(),
            permission: permission.into(),
        }
    }
}
