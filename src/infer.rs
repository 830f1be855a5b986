//! Single-sample type inference (single-file).
//!
//! Walk one JSON document depth-first and produce a `Schema`: an ordered
//! mapping from type name to record definition, suitable for emitting a
//! strongly-typed deserialization layer.
//!
//! Design goals:
//! - One pass, no backtracking; the schema is an explicit accumulator
//!   threaded through the walk, never ambient state.
//! - Records dedup by *name*, first occurrence wins. Two differently
//!   shaped objects under the same key collapse into whichever was seen
//!   first; callers must not read structural soundness into reused names.
//! - Unknowns widen to `Opaque` instead of erroring. A single sample can
//!   prove presence, never absence, so inference degrades rather than
//!   rejects.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::naming;
use crate::schema::{FieldType, PrimitiveKind, RecordDef, Schema, TypeName};

// ------------------------------- Errors ----------------------------------- //

#[derive(Debug, Error)]
pub enum InferError {
    /// Arrays and scalars at the document root are unsupported.
    #[error("root JSON value must be an object, found {found}")]
    InvalidRoot { found: &'static str },
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ------------------------------ Front API --------------------------------- //

/// Infer the schema for one sample document.
///
/// The root value must be a JSON object; the resulting schema registers
/// `root` first, then every nested record in pre-order discovery order.
pub fn infer(root: TypeName, document: &Value) -> Result<Schema, InferError> {
    let map = match document {
        Value::Object(map) => map,
        other => {
            return Err(InferError::InvalidRoot { found: json_kind(other) });
        }
    };

    let mut inferer = Inferer::new();
    inferer.register_object(root, map);
    Ok(inferer.finish())
}

// ------------------------------- Walker ----------------------------------- //

/// Owns the schema-under-construction for the duration of one walk.
struct Inferer {
    schema: Schema,
}

impl Inferer {
    fn new() -> Self {
        Self { schema: Schema::new() }
    }

    fn finish(self) -> Schema {
        self.schema
    }

    /// Register the record for one object value and return its name.
    ///
    /// Registration happens *before* the field walk, so a nested object
    /// that resolves to an already-seen name (including this record's own)
    /// short-circuits into a reference instead of recursing forever. An
    /// already-registered name is reused verbatim: the current object's
    /// fields are not inspected.
    fn register_object(&mut self, name: TypeName, map: &Map<String, Value>) -> TypeName {
        if self.schema.contains(&name) {
            return name;
        }
        self.schema.insert(RecordDef::new(name.clone()));

        let mut fields = Vec::with_capacity(map.len());
        for (key, value) in map {
            fields.push((key.clone(), self.field_type(key, value)));
        }
        if let Some(record) = self.schema.records.get_mut(&name) {
            record.fields = fields;
        }
        name
    }

    /// Field type for one value observed under `key`.
    fn field_type(&mut self, key: &str, value: &Value) -> FieldType {
        match value {
            Value::Null => FieldType::Primitive(PrimitiveKind::Opaque),
            // The bool arm must stay ahead of the number arm: a boolean
            // sample value must never widen into an integer field.
            Value::Bool(_) => FieldType::Primitive(PrimitiveKind::Bool),
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    FieldType::Primitive(PrimitiveKind::Integer)
                } else {
                    FieldType::Primitive(PrimitiveKind::Float)
                }
            }
            Value::String(_) => FieldType::Primitive(PrimitiveKind::String),
            Value::Array(elems) => {
                // First non-null element governs the whole list; empty and
                // all-null lists stay opaque. Heterogeneous lists are not
                // detected (single-sample limitation, not fixed here).
                let elem = elems
                    .iter()
                    .find(|e| !e.is_null())
                    .map(|e| self.field_type(key, e))
                    .unwrap_or(FieldType::Primitive(PrimitiveKind::Opaque));
                FieldType::List(Box::new(elem))
            }
            Value::Object(map) => {
                // Objects inside a list inherit the list's key, so the
                // record is named after the field that holds it.
                let name = naming::resolve(key);
                FieldType::Record(self.register_object(name, map))
            }
        }
    }
}

// ------------------------------- Tests ------------------------------------ //
