//! JSON pointer edits on configuration documents.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Set `new_value` at `pointer`, creating intermediate objects as needed.
pub fn set_json_pointer(root: &mut Value, pointer: &str, new_value: Value) -> Result<()> {
    let pointer = normalize_pointer(pointer)?;
    let Some((parent_ptr, token)) = split_parent_pointer(&pointer) else {
        *root = new_value;
        return Ok(());
    };

    let parent = ensure_pointer_container(root, &parent_ptr)?;
    set_child(parent, &token, new_value)
}

fn normalize_pointer(pointer: &str) -> Result<String> {
    if pointer.is_empty() {
        return Ok(String::new());
    }

    if pointer == "/" {
        return Err(Error::validation_invalid_argument(
            "pointer",
            "Invalid JSON pointer '/'",
            None,
            None,
        ));
    }

    if !pointer.starts_with('/') {
        return Err(Error::validation_invalid_argument(
            "pointer",
            format!("JSON pointer must start with '/': {}", pointer),
            None,
            None,
        ));
    }

    Ok(pointer.to_string())
}

fn split_parent_pointer(pointer: &str) -> Option<(String, String)> {
    if pointer.is_empty() {
        return None;
    }

    let (parent, token) = pointer.rsplit_once('/')?;
    Some((parent.to_string(), unescape_token(token)))
}

fn ensure_pointer_container<'a>(root: &'a mut Value, pointer: &str) -> Result<&'a mut Value> {
    let mut current = root;

    for token in pointer.split('/').skip(1).map(unescape_token) {
        if current.is_null() {
            *current = Value::Object(Map::new());
        }

        current = match current {
            Value::Object(map) => map
                .entry(token)
                .or_insert_with(|| Value::Object(Map::new())),
            Value::Array(arr) => {
                let index = parse_array_index(&token)?;
                let len = arr.len();
                arr.get_mut(index).ok_or_else(|| {
                    Error::config_invalid_value(
                        pointer,
                        Some(len.to_string()),
                        "Array index out of bounds while creating path",
                    )
                })?
            }
            other => {
                return Err(Error::config_invalid_value(
                    pointer,
                    Some(value_type_name(other).to_string()),
                    "Expected object/array at pointer",
                ))
            }
        };
    }

    Ok(current)
}

fn set_child(parent: &mut Value, token: &str, value: Value) -> Result<()> {
    match parent {
        Value::Object(map) => {
            map.insert(token.to_string(), value);
            Ok(())
        }
        Value::Array(arr) => {
            let index = parse_array_index(token)?;
            if index == arr.len() {
                arr.push(value);
                return Ok(());
            }
            match arr.get_mut(index) {
                Some(slot) => {
                    *slot = value;
                    Ok(())
                }
                None => Err(Error::config_invalid_value(
                    "arrayIndex",
                    Some(index.to_string()),
                    "Array index out of bounds",
                )),
            }
        }
        other => Err(Error::config_invalid_value(
            token,
            Some(value_type_name(other).to_string()),
            "Cannot set a child on a scalar value",
        )),
    }
}

fn parse_array_index(token: &str) -> Result<usize> {
    token.parse::<usize>().map_err(|_| {
        Error::validation_invalid_argument(
            "pointer",
            format!("Invalid array index '{}'", token),
            None,
            None,
        )
    })
}

fn unescape_token(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sets_nested_value_creating_objects() {
        let mut root = json!({});
        set_json_pointer(&mut root, "/defaults/base_type", json!("Acme\\Base")).unwrap();
        assert_eq!(root, json!({"defaults": {"base_type": "Acme\\Base"}}));
    }

    #[test]
    fn appends_when_index_equals_length() {
        let mut root = json!({"defaults": {"known_types": ["A"]}});
        set_json_pointer(&mut root, "/defaults/known_types/1", json!("B")).unwrap();
        assert_eq!(root["defaults"]["known_types"], json!(["A", "B"]));
    }

    #[test]
    fn rejects_pointer_without_leading_slash() {
        let mut root = json!({});
        let err = set_json_pointer(&mut root, "defaults", json!(1)).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
    }

    #[test]
    fn rejects_descending_into_scalar() {
        let mut root = json!({"defaults": {"app_path": "app"}});
        let err = set_json_pointer(&mut root, "/defaults/app_path/x", json!(1)).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_value");
    }

    #[test]
    fn unescapes_tokens() {
        let mut root = json!({});
        set_json_pointer(&mut root, "/a~1b", json!(true)).unwrap();
        assert_eq!(root, json!({"a/b": true}));
    }
}
