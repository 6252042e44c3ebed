//! The mapping pass: compiled schema tree in, output document out.
//!
//! Every function here is a total, side-effect-free reshaping of its input,
//! with one exception: relation classification. A relation whose kind tag is
//! unrecognized fails the whole pass, wrapped with the offending definition's
//! name. The produced tree mirrors the source exactly — no flattening,
//! deduplication, or algebraic simplification.

use crate::mapper::comments::extract_doc_comments;
use crate::mapper::document::{
    Caveat, Definition, Permission, Relation, RelationType, SchemaDocument, SetOperator, UserSet,
};
use crate::schema::core::{
    AllowedRelation, CaveatDefinition, ChildKind, CompiledSchema, ObjectDefinition, RelationDef,
    RelationKind, RewriteOperation, SetOperationChild, SubjectRef, UsersetRewrite,
};
use crate::schema::names::{split_qualified_name, SELF_RELATION, WILDCARD_RELATION};

/// Errors surfaced while mapping a compiled schema into a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// A relation's kind tag was neither storage relation nor permission.
    #[error("unexpected relation {relation:?}, neither permission nor relation")]
    UnclassifiedRelation {
        /// Name of the offending relation.
        relation: String,
    },

    /// Wraps a failure below a single definition with that definition's name.
    #[error("failed to map definition {definition:?}: {source}")]
    Definition {
        /// Qualified name of the definition that failed.
        definition: String,
        /// The underlying failure.
        #[source]
        source: Box<MapError>,
    },
}

/// Map a whole compiled schema into the output document.
///
/// Definitions and caveats are mapped in source order. Any single definition
/// failure aborts the operation; no partial document is returned.
pub fn map_schema(schema: &CompiledSchema) -> Result<SchemaDocument, MapError> {
    let mut definitions = Vec::with_capacity(schema.object_definitions.len());
    for def in &schema.object_definitions {
        let mapped = map_definition(def).map_err(|source| MapError::Definition {
            definition: def.name.clone(),
            source: Box::new(source),
        })?;
        definitions.push(mapped);
    }

    let caveats = schema.caveat_definitions.iter().map(map_caveat).collect();

    Ok(SchemaDocument {
        definitions,
        caveats,
    })
}

/// Map one object definition, partitioning its relations by kind.
pub fn map_definition(def: &ObjectDefinition) -> Result<Definition, MapError> {
    let mut relations = Vec::new();
    let mut permissions = Vec::new();
    for relation in &def.relations {
        match relation.kind {
            RelationKind::Relation => relations.push(map_relation(relation)),
            RelationKind::Permission => permissions.push(map_permission(relation)),
            RelationKind::Unspecified => {
                return Err(MapError::UnclassifiedRelation {
                    relation: relation.name.clone(),
                })
            }
        }
    }

    let (namespace, name) = split_qualified_name(&def.name);

    Ok(Definition {
        name,
        namespace,
        relations,
        permissions,
        comment: extract_doc_comments(&def.metadata),
    })
}

fn map_relation(relation: &RelationDef) -> Relation {
    Relation {
        name: relation.name.clone(),
        types: relation.allowed_types.iter().map(map_relation_type).collect(),
        comment: extract_doc_comments(&relation.metadata),
    }
}

fn map_relation_type(allowed: &AllowedRelation) -> RelationType {
    let relation = match &allowed.subject {
        SubjectRef::Wildcard => WILDCARD_RELATION.to_string(),
        SubjectRef::Relation(name) if name == SELF_RELATION => String::new(),
        SubjectRef::Relation(name) => name.clone(),
    };

    RelationType {
        type_name: allowed.target_type.clone(),
        relation,
        caveat: allowed.required_caveat.clone().unwrap_or_default(),
    }
}

fn map_permission(relation: &RelationDef) -> Permission {
    Permission {
        name: relation.name.clone(),
        user_set: relation.rewrite.as_ref().and_then(map_user_set),
        comment: extract_doc_comments(&relation.metadata),
    }
}

/// Map a rewrite rule into its output tree.
///
/// Returns `None` when the rule's operator oneof is unset, signalling the
/// caller to treat the permission as having no computed rule.
pub fn map_user_set(rewrite: &UsersetRewrite) -> Option<UserSet> {
    let (operation, children) = match rewrite.operation.as_ref()? {
        RewriteOperation::Union(children) => (SetOperator::Union, children),
        RewriteOperation::Intersection(children) => (SetOperator::Intersection, children),
        RewriteOperation::Exclusion(children) => (SetOperator::Exclusion, children),
    };

    Some(UserSet::Operation {
        operation,
        children: map_children(children),
    })
}

fn map_children(children: &[SetOperationChild]) -> Vec<UserSet> {
    let mut sets = Vec::with_capacity(children.len());
    for child in children {
        match &child.child {
            Some(ChildKind::ComputedUserset { relation }) => {
                sets.push(UserSet::reference(relation.clone()));
            }
            Some(ChildKind::TupleToUserset {
                tupleset,
                computed_relation,
            }) => {
                sets.push(UserSet::traversal(tupleset.clone(), computed_relation.clone()));
            }
            Some(ChildKind::UsersetRewrite(rewrite)) => {
                if let Some(set) = map_user_set(rewrite) {
                    sets.push(set);
                }
            }
            // An unset operand slot carries nothing to reference; skip it.
            None => {}
        }
    }
    sets
}

fn map_caveat(caveat: &CaveatDefinition) -> Caveat {
    let parameters = caveat
        .parameter_types
        .iter()
        .map(|(name, reference)| (name.clone(), reference.type_name.clone()))
        .collect();

    Caveat {
        name: caveat.name.clone(),
        parameters,
        comment: extract_doc_comments(&caveat.metadata),
    }
}
