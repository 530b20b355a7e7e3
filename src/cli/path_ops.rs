use serde_json::Value;

use super::CliError;

/// Follows a dot-separated path through the JSON form of the settings.
///
/// Object keys match field names; array segments are indices, so
/// `ignore_dlc_title_ids.0` is the first ignored id.
///
/// # Errors
/// * `CliError::InvalidArguments` - If a segment does not exist or the path
///   tries to descend into a scalar
pub(super) fn navigate_path<'a>(value: &'a Value, path: &str) -> Result<&'a Value, CliError> {
    let parts: Vec<&str> = path.split('.').collect();
    let mut current = value;

    for (i, part) in parts.iter().enumerate() {
        current = match current {
            Value::Object(map) => map.get(*part).ok_or_else(|| {
                CliError::InvalidArguments(format!(
                    "Key '{}' not found at path '{}'",
                    part,
                    parts[..i].join(".")
                ))
            })?,
            Value::Array(array) => {
                let index = parse_index(part, &parts[..i])?;

                array.get(index).ok_or_else(|| {
                    CliError::InvalidArguments(format!(
                        "Array index '{}' out of bounds at path '{}'",
                        index,
                        parts[..i].join(".")
                    ))
                })?
            }
            _ => {
                return Err(CliError::InvalidArguments(format!(
                    "Cannot navigate into {} at path '{}'",
                    type_name(current),
                    parts[..i].join(".")
                )));
            }
        };
    }

    Ok(current)
}

/// Replaces the value at `path`, converting `raw` to the type already stored
/// there.
///
/// Only existing fields can be set; the settings document has a fixed shape.
///
/// # Errors
/// * `CliError::InvalidArguments` - If the path does not exist or `raw`
///   cannot be read as the field's type
pub(super) fn set_value_at_path(root: &mut Value, path: &str, raw: &str) -> Result<(), CliError> {
    let parts: Vec<&str> = path.split('.').collect();
    let mut current = root;

    for i in 0..parts.len() {
        current = navigate_step_mut(current, &parts[..=i])?;
    }

    *current = coerce_value(current, raw)?;

    Ok(())
}

fn navigate_step_mut<'a>(
    current: &'a mut Value,
    path_so_far: &[&str],
) -> Result<&'a mut Value, CliError> {
    let Some((key, parent_parts)) = path_so_far.split_last() else {
        return Err(CliError::InvalidArguments("Empty path".to_string()));
    };
    let parent = parent_parts.join(".");

    match current {
        Value::Object(map) => map.get_mut(*key).ok_or_else(|| {
            CliError::InvalidArguments(format!("Key '{key}' not found at path '{parent}'"))
        }),
        Value::Array(array) => {
            let index = parse_index(key, parent_parts)?;

            array.get_mut(index).ok_or_else(|| {
                CliError::InvalidArguments(format!(
                    "Array index {index} out of bounds at path '{parent}'"
                ))
            })
        }
        other => Err(CliError::InvalidArguments(format!(
            "Cannot navigate into {} at path '{parent}'",
            type_name(other)
        ))),
    }
}

/// Reads `raw` as the same JSON type as `existing`.
///
/// Lists accept either a JSON array or a comma separated list of strings;
/// `[]` or an empty argument clears the list.
pub(super) fn coerce_value(existing: &Value, raw: &str) -> Result<Value, CliError> {
    let mismatch = |expected: &str| {
        CliError::InvalidArguments(format!("Expected {expected}, got '{raw}'"))
    };

    match existing {
        Value::String(_) => Ok(Value::String(raw.to_string())),
        Value::Bool(_) => raw
            .parse::<bool>()
            .map(Value::Bool)
            .map_err(|_| mismatch("true or false")),
        Value::Number(_) => raw
            .parse::<u64>()
            .map(Value::from)
            .map_err(|_| mismatch("a non-negative integer")),
        Value::Array(_) => {
            let trimmed = raw.trim();

            if trimmed.starts_with('[') {
                return match serde_json::from_str::<Value>(trimmed) {
                    Ok(value @ Value::Array(_)) => Ok(value),
                    _ => Err(mismatch("a JSON array")),
                };
            }

            let items = trimmed
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| Value::String(item.to_string()))
                .collect();

            Ok(Value::Array(items))
        }
        Value::Object(_) => Err(CliError::InvalidArguments(
            "Cannot replace a whole section, set its fields one at a time".to_string(),
        )),
        Value::Null => Ok(Value::String(raw.to_string())),
    }
}

fn parse_index(part: &str, path_so_far: &[&str]) -> Result<usize, CliError> {
    part.parse::<usize>().map_err(|_| {
        CliError::InvalidArguments(format!(
            "Invalid array index '{}' at path '{}'",
            part,
            path_so_far.join(".")
        ))
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
