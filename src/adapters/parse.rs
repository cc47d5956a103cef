use crate::domain::model::{sort_by_volume_desc, KeywordRecord};
use crate::utils::error::{KeywordError, Result};
use serde_json::{Map, Value};

/// Parses the model's completion text into records sorted by volume, highest first.
///
/// Every element is checked field by field; the schema sent with the request is
/// not trusted.
pub fn parse_keyword_payload(text: &str) -> Result<Vec<KeywordRecord>> {
    let value: Value = serde_json::from_str(text.trim())
        .map_err(|e| KeywordError::malformed(format!("response is not valid JSON: {}", e)))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(KeywordError::malformed(format!(
                "expected a JSON array, got {}",
                json_type_name(&other)
            )))
        }
    };

    let mut records = items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_record(index, item))
        .collect::<Result<Vec<_>>>()?;

    sort_by_volume_desc(&mut records);
    Ok(records)
}

fn parse_record(index: usize, item: &Value) -> Result<KeywordRecord> {
    let obj = item.as_object().ok_or_else(|| {
        KeywordError::malformed(format!(
            "element {}: expected an object, got {}",
            index,
            json_type_name(item)
        ))
    })?;

    let keyword = required(obj, index, "keyword")?
        .as_str()
        .ok_or_else(|| wrong_type(index, "keyword", "a string"))?;
    if keyword.trim().is_empty() {
        return Err(KeywordError::malformed(format!(
            "element {}: field 'keyword' is empty",
            index
        )));
    }

    let volume = required(obj, index, "volume")?
        .as_u64()
        .ok_or_else(|| wrong_type(index, "volume", "a non-negative integer"))?;

    let difficulty = required(obj, index, "difficulty")?
        .as_u64()
        .filter(|d| *d <= 100)
        .ok_or_else(|| wrong_type(index, "difficulty", "an integer between 0 and 100"))?;

    Ok(KeywordRecord::new(keyword, volume, difficulty as u8))
}

fn required<'a>(obj: &'a Map<String, Value>, index: usize, field: &str) -> Result<&'a Value> {
    obj.get(field).ok_or_else(|| {
        KeywordError::malformed(format!("element {}: missing field '{}'", index, field))
    })
}

fn wrong_type(index: usize, field: &str, expected: &str) -> KeywordError {
    KeywordError::malformed(format!(
        "element {}: field '{}' must be {}",
        index, field, expected
    ))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
