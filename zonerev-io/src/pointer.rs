//! RFC 6901 JSON Pointer helpers for locating the zone config

use crate::error::{Result, ReverseError};
use serde_json::{Map, Value};
use zonerev_core::config::json_type_name;

/// Default location of the zone config inside a document
pub const DEFAULT_CONFIG_POINTER: &str = "/options/config";

/// Parse a JSON Pointer (RFC 6901) into its decoded reference tokens.
///
/// The empty pointer addresses the whole document and yields no tokens.
pub fn parse_pointer(pointer: &str) -> Result<Vec<String>> {
    Ok(segments(pointer)?.into_iter().map(|(_, key)| key).collect())
}

/// Split `pointer` into `(raw, decoded)` token pairs.
fn segments(pointer: &str) -> Result<Vec<(&str, String)>> {
    let invalid = |reason: String| ReverseError::InvalidPointer {
        pointer: pointer.to_string(),
        reason,
    };
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    let rest = pointer
        .strip_prefix('/')
        .ok_or_else(|| invalid("a non-empty pointer starts with '/'".to_string()))?;
    rest.split('/')
        .map(|raw| decode_token(raw).map(|key| (raw, key)).map_err(&invalid))
        .collect()
}

/// Decode `~0` and `~1` in a single pass, rejecting any other use of `~`.
fn decode_token(raw: &str) -> std::result::Result<String, String> {
    let mut key = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '~' {
            key.push(ch);
            continue;
        }
        match chars.next() {
            Some('0') => key.push('~'),
            Some('1') => key.push('/'),
            Some(other) => return Err(format!("token '{raw}' contains '~{other}'")),
            None => return Err(format!("token '{raw}' ends in a bare '~'")),
        }
    }
    Ok(key)
}

/// Navigate to the object addressed by `pointer`, mutably.
///
/// Fails if any step is missing, or if the target is not an object.
pub fn locate_object_mut<'a>(
    document: &'a mut Value,
    pointer: &str,
) -> Result<&'a mut Map<String, Value>> {
    let tokens = segments(pointer)?;
    let mut current = document;
    let mut path_so_far = String::new();

    for (raw, token) in &tokens {
        let parent_path = if path_so_far.is_empty() {
            "/".to_string()
        } else {
            path_so_far.clone()
        };
        path_so_far.push('/');
        path_so_far.push_str(raw);

        let node = current;
        current = match node {
            Value::Object(map) => {
                if !map.contains_key(token.as_str()) {
                    return Err(ReverseError::PointerNotFound {
                        pointer: pointer.to_string(),
                        reached_path: path_so_far,
                        available_keys: describe_keys(map),
                    });
                }
                map.get_mut(token.as_str())
                    .ok_or_else(|| ReverseError::PointerNotFound {
                        pointer: pointer.to_string(),
                        reached_path: path_so_far.clone(),
                        available_keys: String::new(),
                    })?
            }
            Value::Array(arr) => {
                let len = arr.len();
                let index = token.parse::<usize>().map_err(|_| ReverseError::PointerNotFound {
                    pointer: pointer.to_string(),
                    reached_path: parent_path.clone(),
                    available_keys: format!("<array with {len} elements, expected numeric index>"),
                })?;
                arr.get_mut(index)
                    .ok_or_else(|| ReverseError::PointerNotFound {
                        pointer: pointer.to_string(),
                        reached_path: path_so_far.clone(),
                        available_keys: format!("<array with {len} elements>"),
                    })?
            }
            other => {
                return Err(ReverseError::PointerNotFound {
                    pointer: pointer.to_string(),
                    reached_path: parent_path,
                    available_keys: format!(
                        "<{}, cannot traverse further>",
                        json_type_name(other)
                    ),
                });
            }
        };
    }

    match current {
        Value::Object(map) => Ok(map),
        other => Err(ReverseError::PointerTargetWrongType {
            pointer: pointer.to_string(),
            found_type: json_type_name(other).to_string(),
        }),
    }
}

fn describe_keys(map: &Map<String, Value>) -> String {
    let available: Vec<&str> = map.keys().take(10).map(|s| s.as_str()).collect();
    if map.len() > 10 {
        format!("{}, ... ({} total)", available.join(", "), map.len())
    } else if available.is_empty() {
        "<empty object>".to_string()
    } else {
        available.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_pointer_rejects_invalid_start() {
        let result = parse_pointer("options/config");
        assert!(matches!(result, Err(ReverseError::InvalidPointer { .. })));
    }

    #[test]
    fn parse_pointer_handles_root() {
        assert_eq!(parse_pointer("").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn parse_pointer_splits_default() {
        assert_eq!(
            parse_pointer(DEFAULT_CONFIG_POINTER).unwrap(),
            vec!["options".to_string(), "config".to_string()]
        );
    }

    #[test]
    fn parse_pointer_unescapes_tokens() {
        let result = parse_pointer("/a~1b/c~0d").unwrap();
        assert_eq!(result, vec!["a/b".to_string(), "c~d".to_string()]);
    }

    #[test]
    fn parse_pointer_validates_escape_sequences() {
        let result = parse_pointer("/invalid~2");
        assert!(matches!(result, Err(ReverseError::InvalidPointer { .. })));

        let result = parse_pointer("/trailing~");
        assert!(matches!(result, Err(ReverseError::InvalidPointer { .. })));
    }

    #[test]
    fn decode_token_is_single_pass() {
        assert_eq!(decode_token("zone~1in~0out").unwrap(), "zone/in~out");
        // "~01" is an escaped '~' followed by '1', never '/'
        assert_eq!(decode_token("~01").unwrap(), "~1");
        assert_eq!(decode_token("").unwrap(), "");
    }

    #[test]
    fn decode_token_reports_bad_escapes() {
        assert_eq!(decode_token("a~2").unwrap_err(), "token 'a~2' contains '~2'");
        assert_eq!(decode_token("a~").unwrap_err(), "token 'a~' ends in a bare '~'");
    }

    #[test]
    fn reached_path_keeps_escaped_form() {
        let mut doc = json!({"a/b": {"x": 1}});
        let err = locate_object_mut(&mut doc, "/a~1b/config").unwrap_err();
        match err {
            ReverseError::PointerNotFound { reached_path, .. } => {
                assert_eq!(reached_path, "/a~1b/config");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn locates_default_config_for_mutation() {
        let mut doc = json!({
            "module_name": "zone",
            "options": {"config": {"zone.id": "hall_in"}}
        });
        let config = locate_object_mut(&mut doc, DEFAULT_CONFIG_POINTER).unwrap();
        config.insert("zone.id".to_string(), json!("hall_out"));
        assert_eq!(doc["options"]["config"]["zone.id"], json!("hall_out"));
    }

    #[test]
    fn locates_through_array_index() {
        let mut doc = json!({"zones": [{"a": 1}, {"b": 2}]});
        let config = locate_object_mut(&mut doc, "/zones/1").unwrap();
        assert_eq!(config.get("b"), Some(&json!(2)));
    }

    #[test]
    fn root_pointer_returns_whole_object() {
        let mut doc = json!({"zone.path": []});
        let config = locate_object_mut(&mut doc, "").unwrap();
        assert!(config.contains_key("zone.path"));
    }

    #[test]
    fn missing_config_reports_available_keys() {
        let mut doc = json!({"options": {"title": "x", "zoom": 3}});
        let err = locate_object_mut(&mut doc, DEFAULT_CONFIG_POINTER).unwrap_err();
        match err {
            ReverseError::PointerNotFound {
                reached_path,
                available_keys,
                ..
            } => {
                assert_eq!(reached_path, "/options/config");
                assert_eq!(available_keys, "title, zoom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_options_on_empty_document() {
        let mut doc = json!({});
        let err = locate_object_mut(&mut doc, DEFAULT_CONFIG_POINTER).unwrap_err();
        assert!(err.to_string().contains("<empty object>"));
    }

    #[test]
    fn scalar_in_path_cannot_be_traversed() {
        let mut doc = json!({"options": "none"});
        let err = locate_object_mut(&mut doc, DEFAULT_CONFIG_POINTER).unwrap_err();
        match err {
            ReverseError::PointerNotFound {
                reached_path,
                available_keys,
                ..
            } => {
                assert_eq!(reached_path, "/options");
                assert_eq!(available_keys, "<string, cannot traverse further>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_object_target_is_rejected() {
        let mut doc = json!({"options": {"config": [1, 2]}});
        let err = locate_object_mut(&mut doc, DEFAULT_CONFIG_POINTER).unwrap_err();
        assert!(matches!(
            err,
            ReverseError::PointerTargetWrongType { ref found_type, .. } if found_type == "array"
        ));
    }
}
