#![allow(dead_code)]

use std::path::PathBuf;

use zed2json::mapper::comments::DOC_COMMENT_TYPE_URL;
use zed2json::schema::core::{
    AllowedRelation, ChildKind, CompiledSchema, Metadata, MetadataMessage, ObjectDefinition,
    RelationDef, RelationKind, RewriteOperation, SetOperationChild, SubjectRef, UsersetRewrite,
};

pub(crate) fn fixture_path(fixture: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(fixture).join("schema.json")
}

pub(crate) fn load_fixture_schema(fixture: &str) -> CompiledSchema {
    let json = std::fs::read_to_string(fixture_path(fixture))
        .expect("fixture schema should be readable");
    serde_json::from_str(&json).expect("fixture schema should deserialize")
}

pub(crate) fn doc_comment(text: &str) -> MetadataMessage {
    let mut value = vec![0x0a, text.len() as u8];
    value.extend_from_slice(text.as_bytes());
    MetadataMessage {
        type_url: DOC_COMMENT_TYPE_URL.to_string(),
        value,
    }
}

pub(crate) fn commented(text: &str) -> Metadata {
    Metadata {
        messages: vec![doc_comment(text)],
    }
}

pub(crate) fn definition(name: &str, relations: Vec<RelationDef>) -> ObjectDefinition {
    ObjectDefinition {
        name: name.to_string(),
        relations,
        metadata: Metadata::default(),
    }
}

pub(crate) fn storage_relation(name: &str, allowed_types: Vec<AllowedRelation>) -> RelationDef {
    RelationDef {
        name: name.to_string(),
        kind: RelationKind::Relation,
        allowed_types,
        rewrite: None,
        metadata: Metadata::default(),
    }
}

pub(crate) fn permission(name: &str, rewrite: UsersetRewrite) -> RelationDef {
    RelationDef {
        name: name.to_string(),
        kind: RelationKind::Permission,
        allowed_types: Vec::new(),
        rewrite: Some(rewrite),
        metadata: Metadata::default(),
    }
}

pub(crate) fn allowed_self(target: &str) -> AllowedRelation {
    AllowedRelation {
        target_type: target.to_string(),
        subject: SubjectRef::Relation("...".to_string()),
        required_caveat: None,
    }
}

pub(crate) fn computed(relation: &str) -> SetOperationChild {
    SetOperationChild {
        child: Some(ChildKind::ComputedUserset {
            relation: relation.to_string(),
        }),
    }
}

pub(crate) fn union(children: Vec<SetOperationChild>) -> UsersetRewrite {
    UsersetRewrite {
        operation: Some(RewriteOperation::Union(children)),
    }
}

pub(crate) fn exclusion(children: Vec<SetOperationChild>) -> UsersetRewrite {
    UsersetRewrite {
        operation: Some(RewriteOperation::Exclusion(children)),
    }
}
