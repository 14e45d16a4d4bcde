use serde_json::Value;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable or is not a json object
/// carrying `course` and `players`.
pub fn check_readable_json_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() {
        return Err(format!("The scorecard file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("The scorecard file '{file}': {e}"))?;
    let json: Value = serde_json::from_str(&contents)
        .map_err(|e| format!("The scorecard file '{file}' is not valid json: {e}"))?;
    validate_json_format(&json)?;
    Ok(path)
}

/// Validate the top level of a scorecard document:
/// { "course": { "name": "...", "holes": [...] }, "players": [...], "matches": [...] }
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
pub fn validate_json_format(json: &Value) -> Result<(), String> {
    let Some(obj) = json.as_object() else {
        return Err("The scorecard is not a json object.".to_string());
    };

    let expected_keys = ["course", "played_on", "players", "matches"];
    for key in obj.keys() {
        if !expected_keys.contains(&key.as_str()) {
            return Err(format!(
                "Unexpected key '{key}' in scorecard. Expected keys: {expected_keys:?}"
            ));
        }
    }

    let holes = obj
        .get("course")
        .and_then(|c| c.get("holes"))
        .and_then(Value::as_array)
        .ok_or_else(|| "The json key course.holes is missing or not an array.".to_string())?;
    if holes.is_empty() {
        return Err("The course has no holes.".to_string());
    }

    if !obj.get("players").is_some_and(Value::is_array) {
        return Err("The json key players is missing or not an array.".to_string());
    }
    if obj.get("matches").is_some_and(|m| !m.is_array()) {
        return Err("The json key matches is not an array.".to_string());
    }
    Ok(())
}
