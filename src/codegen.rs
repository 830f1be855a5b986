//! C++ header emission.
//!
//! Consumes a finished `Schema` and renders structs plus nlohmann/json
//! bindings. Every field is wrapped in `std::optional` unconditionally: a
//! single sample can show a field present, never prove it required. Struct
//! definitions follow schema registration order; forward declarations are
//! emitted up front so a record may reference one defined later (or
//! itself).

use crate::schema::{FieldType, PrimitiveKind, Schema};

pub struct Codegen {
    out: String,
}

impl Codegen {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    pub fn into_string(self) -> String {
        self.out
    }

    pub fn emit(&mut self, schema: &Schema, guard: &str) {
        self.line("// Auto-generated from a JSON sample; edit by hand as needed.");
        self.line("");
        self.line(&format!("#ifndef {guard}"));
        self.line(&format!("#define {guard}"));
        self.line("");
        self.line("#include <string>");
        self.line("#include <vector>");
        self.line("#include <optional>");
        self.line("#include <nlohmann/json.hpp>");
        self.line("");
        self.line("using json = nlohmann::json;");
        self.line("");

        // Forward declarations so definition order never matters.
        for record in schema.iter() {
            self.line(&format!("struct {};", record.name));
        }
        self.line("");

        for record in schema.iter() {
            self.line(&format!("struct {} {{", record.name));
            for (key, ty) in &record.fields {
                self.line(&format!("    std::optional<{}> {};", cpp_type(ty), key));
            }
            self.line("};");
            self.line("");
        }

        for record in schema.iter() {
            if record.fields.is_empty() {
                self.line(&format!(
                    "NLOHMANN_DEFINE_TYPE_NON_INTRUSIVE({})",
                    record.name
                ));
            } else {
                let names = record
                    .fields
                    .iter()
                    .map(|(k, _)| k.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                self.line(&format!(
                    "NLOHMANN_DEFINE_TYPE_NON_INTRUSIVE({}, {names})",
                    record.name
                ));
            }
        }

        self.line("");
        self.line(&format!("#endif // {guard}"));
    }

    fn line(&mut self, s: &str) {
        self.out.push_str(s);
        self.out.push('\n');
    }
}

/// Target-language type expression for one inferred field type.
pub fn cpp_type(ty: &FieldType) -> String {
    match ty {
        FieldType::Primitive(PrimitiveKind::String) => "std::string".to_string(),
        FieldType::Primitive(PrimitiveKind::Bool) => "bool".to_string(),
        FieldType::Primitive(PrimitiveKind::Integer) => "int".to_string(),
        FieldType::Primitive(PrimitiveKind::Float) => "double".to_string(),
        FieldType::Primitive(PrimitiveKind::Opaque) => "nlohmann::json".to_string(),
        FieldType::Record(name) => name.as_str().to_string(),
        FieldType::List(item) => format!("std::vector<{}>", cpp_type(item)),
    }
}

// ------------------------------- Tests ------------------------------------ //
