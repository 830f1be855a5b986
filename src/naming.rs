//! Identifier derivation: raw JSON keys / file stems → PascalCase type
//! names, plus include-guard tokens for the emitted header.

use std::path::Path;

use crate::schema::TypeName;

/// Fallback when a raw name yields no usable segments.
pub const FALLBACK_TYPE_NAME: &str = "GeneratedType";

/// Separators normalized to `_` before segmenting.
const SEPARATORS: [char; 4] = ['-', ' ', '.', '/'];

/// Canonicalize an arbitrary raw name into a type identifier.
///
/// Only the leading character of each segment is uppercased; the rest is
/// left untouched (`userID` → `UserID`, not `Userid`). Total: always
/// returns a non-empty name.
pub fn resolve(raw: &str) -> TypeName {
    let normalized: String = raw
        .chars()
        .map(|c| if SEPARATORS.contains(&c) { '_' } else { c })
        .collect();

    let mut out = String::new();
    for segment in normalized.split('_').filter(|s| !s.is_empty()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    if out.is_empty() {
        TypeName(FALLBACK_TYPE_NAME.to_string())
    } else {
        TypeName(out)
    }
}

/// Root type name from the input file (e.g. `person.json` → `Person`).
pub fn root_name_from_path(path: &Path) -> TypeName {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    resolve(&stem)
}

/// Deterministic include-guard token from the output artifact's file name
/// (e.g. `person.hpp` → `PERSON_HPP`).
pub fn header_guard(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_collapse_to_pascal_case() {
        assert_eq!(resolve("user-profile.v2").as_str(), "UserProfileV2");
        assert_eq!(resolve("shipping address").as_str(), "ShippingAddress");
        assert_eq!(resolve("a/b/c").as_str(), "ABC");
    }

    #[test]
    fn only_leading_character_is_uppercased() {
        assert_eq!(resolve("userID").as_str(), "UserID");
        assert_eq!(resolve("HTTPHeaders").as_str(), "HTTPHeaders");
    }

    #[test]
    fn empty_and_separator_only_inputs_fall_back() {
        assert_eq!(resolve("").as_str(), FALLBACK_TYPE_NAME);
        assert_eq!(resolve("---").as_str(), FALLBACK_TYPE_NAME);
        assert_eq!(resolve("_._").as_str(), FALLBACK_TYPE_NAME);
    }

    #[test]
    fn root_name_strips_extension() {
        assert_eq!(
            root_name_from_path(Path::new("samples/person.json")).as_str(),
            "Person"
        );
        assert_eq!(
            root_name_from_path(Path::new("api-response.json")).as_str(),
            "ApiResponse"
        );
    }

    #[test]
    fn header_guard_is_uppercase_with_underscores() {
        assert_eq!(header_guard("person.hpp"), "PERSON_HPP");
        assert_eq!(header_guard("api-response.hpp"), "API_RESPONSE_HPP");
    }
}
