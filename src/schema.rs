// Strongly-typed schema model for codegen. No serde_json::Value here.

use indexmap::IndexMap;
use serde::Serialize;

/// Canonical PascalCase type identifier. Always non-empty: derivation that
/// yields nothing falls back to `GeneratedType` (see `naming::resolve`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TypeName(pub String);

impl TypeName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrimitiveKind {
    String,
    Bool,
    Integer,
    Float,
    /// Structurally unknown — passed through verbatim (null values,
    /// empty or all-null lists). Emitted as `nlohmann::json`.
    Opaque,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FieldType {
    Primitive(PrimitiveKind),
    Record(TypeName),
    List(Box<FieldType>),
}

/// A named aggregate of (original JSON key, inferred type) pairs.
/// Field order is first-seen key order from the sample; the emitter
/// relies on it for struct layout and serialization bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordDef {
    pub name: TypeName,
    pub fields: Vec<(String, FieldType)>,
}

impl RecordDef {
    pub fn new(name: TypeName) -> Self {
        Self { name, fields: Vec::new() }
    }

    pub fn push_field(&mut self, key: impl Into<String>, ty: FieldType) {
        self.fields.push((key.into(), ty));
    }
}

/// All records discovered for one sample, keyed by type name in
/// registration order (root first).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schema {
    pub records: IndexMap<TypeName, RecordDef>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &TypeName) -> bool {
        self.records.contains_key(name)
    }

    pub fn get(&self, name: &TypeName) -> Option<&RecordDef> {
        self.records.get(name)
    }

    pub fn insert(&mut self, record: RecordDef) {
        self.records.insert(record.name.clone(), record);
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordDef> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
