//! Data model of a fully compiled authorization schema.
//!
//! The schema compiler lives upstream; this crate only consumes its output as
//! a read-only tree. The types here mirror that tree one-to-one: object
//! definitions with kind-tagged relations, set-algebra rewrite rules, opaque
//! metadata attachments, and caveats. `Deserialize` is derived so a compiled
//! tree can be loaded from its JSON encoding at the CLI boundary.
//!
//! Two spots deliberately use `Option` where an enum would otherwise close the
//! variant set: [`UsersetRewrite::operation`] and [`SetOperationChild::child`].
//! Upstream wire encodings can leave either oneof unset, and the mapping layer
//! treats the unset state as "no rule here" rather than an error.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A fully compiled schema: object definitions and caveats in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CompiledSchema {
    /// Object-type definitions, in source declaration order.
    #[serde(default)]
    pub object_definitions: Vec<ObjectDefinition>,
    /// Caveat definitions, in source declaration order.
    #[serde(default)]
    pub caveat_definitions: Vec<CaveatDefinition>,
}

/// One object type, possibly namespace-qualified (`ns/name`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObjectDefinition {
    /// Qualified name as the compiler emitted it.
    pub name: String,
    /// Every relation declared on the type, storage relations and permissions alike.
    #[serde(default)]
    pub relations: Vec<RelationDef>,
    /// Opaque metadata attached to the definition.
    #[serde(default)]
    pub metadata: Metadata,
}

/// A declared relation, before it is classified as storage or computed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelationDef {
    /// Relation name, unique within its definition.
    pub name: String,
    /// Kind tag stamped by the compiler.
    #[serde(default)]
    pub kind: RelationKind,
    /// Allowed subject references. Populated for storage relations.
    #[serde(default)]
    pub allowed_types: Vec<AllowedRelation>,
    /// Set-algebra rewrite rule. Populated for permissions.
    #[serde(default)]
    pub rewrite: Option<UsersetRewrite>,
    /// Opaque metadata attached to the relation.
    #[serde(default)]
    pub metadata: Metadata,
}

/// Compiler-assigned classification of a [`RelationDef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// No recognized kind tag. Fatal to the mapping of the whole definition.
    #[default]
    Unspecified,
    /// A storage relation: subjects are written directly as tuples.
    Relation,
    /// A permission: membership is computed from a rewrite rule.
    Permission,
}

/// One allowed subject reference on a storage relation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AllowedRelation {
    /// Target object-type name.
    pub target_type: String,
    /// Sub-relation on the target, or the public wildcard.
    pub subject: SubjectRef,
    /// Caveat that must hold for tuples of this shape, if any.
    #[serde(default)]
    pub required_caveat: Option<String>,
}

/// The subject half of an [`AllowedRelation`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectRef {
    /// A named sub-relation on the target type. The compiler emits the
    /// sentinel `"..."` for "the subject itself".
    Relation(String),
    /// The public wildcard (`type:*`).
    Wildcard,
}

/// A permission's set-algebra rewrite rule.
///
/// `operation` is `None` when the wire encoding left the operator oneof unset;
/// the mapping layer turns that into an absent userset rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct UsersetRewrite {
    /// The populated operator, if any.
    #[serde(default)]
    pub operation: Option<RewriteOperation>,
}

/// The operator of a [`UsersetRewrite`], with its ordered child operations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewriteOperation {
    /// Members of any child set.
    Union(Vec<SetOperationChild>),
    /// Members of every child set.
    Intersection(Vec<SetOperationChild>),
    /// Members of the first child set minus members of the rest.
    /// Child order is semantically load-bearing.
    Exclusion(Vec<SetOperationChild>),
}

/// One operand slot of a set operation.
///
/// `child` is `None` when the wire encoding left the slot's oneof unset; the
/// mapping layer drops such slots silently.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SetOperationChild {
    /// The populated operand, if any.
    #[serde(default)]
    pub child: Option<ChildKind>,
}

/// The three operand shapes a set operation can hold.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildKind {
    /// Direct reference to a sibling relation or permission by name.
    ComputedUserset {
        /// The referenced relation.
        relation: String,
    },
    /// Indirection: traverse `tupleset`, then compute `computed_relation` on
    /// each subject reached.
    TupleToUserset {
        /// Relation whose tuples provide the intermediate subjects.
        tupleset: String,
        /// Relation or permission evaluated on each intermediate subject.
        computed_relation: String,
    },
    /// A nested rewrite rule.
    UsersetRewrite(UsersetRewrite),
}

/// Opaque metadata attached to a schema element.
///
/// Modeled as a plain attachment list; only doc comments are interpreted by
/// this crate (see [`crate::mapper::comments`]).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Metadata {
    /// Typed message attachments, in the order the compiler emitted them.
    #[serde(default)]
    pub messages: Vec<MetadataMessage>,
}

/// One typed, opaque metadata attachment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetadataMessage {
    /// Type tag identifying the payload's message type.
    pub type_url: String,
    /// Raw payload bytes.
    #[serde(default)]
    pub value: Vec<u8>,
}

/// A caveat definition: a named, parameterized condition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CaveatDefinition {
    /// Caveat name.
    pub name: String,
    /// Declared parameters, parameter name to type reference.
    #[serde(default)]
    pub parameter_types: BTreeMap<String, CaveatTypeReference>,
    /// Opaque metadata attached to the caveat.
    #[serde(default)]
    pub metadata: Metadata,
}

/// The declared type of one caveat parameter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CaveatTypeReference {
    /// Type name as declared (e.g. `ipaddress`, `int`).
    pub type_name: String,
}
