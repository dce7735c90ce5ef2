//! Response Validator: strict, schema-driven decoding of model replies.
//!
//! The model is asked for a specific JSON shape but is not guaranteed to honor it,
//! so every promised field is checked before anything reaches a client.
//! There is no partial recovery: one bad field fails the whole reply.

use serde_json::Value;
use thiserror::Error;

/// Expected shape of a JSON value.
#[derive(Debug)]
pub enum Schema {
    String,
    Number,
    /// Free-form object, contents unchecked.
    AnyObject,
    Object(&'static [Field]),
    ArrayOf(&'static Schema),
}

#[derive(Debug)]
pub struct Field {
    pub name: &'static str,
    pub schema: Schema,
    /// Optional fields may be absent or `null`; when present they must match `schema`.
    pub required: bool,
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("reply is not valid JSON: {0}")]
    NotJson(String),

    #[error("missing required field `{0}`")]
    MissingField(String),

    #[error("`{path}` should be {expected}")]
    WrongType { path: String, expected: &'static str },
}

impl Schema {
    fn describe(&self) -> &'static str {
        match self {
            Schema::String => "a string",
            Schema::Number => "a number",
            Schema::AnyObject | Schema::Object(_) => "an object",
            Schema::ArrayOf(_) => "an array",
        }
    }
}

/// Decodes `raw` and checks it against `schema`. The decoded value is returned unchanged.
pub fn parse(raw: &str, schema: &Schema) -> Result<Value, ValidationError> {
    let text = strip_json_fences(raw);
    let value: Value =
        serde_json::from_str(text).map_err(|e| ValidationError::NotJson(e.to_string()))?;
    check(&value, schema, "$")?;
    Ok(value)
}

/// Checks an already-decoded value.
pub fn check(value: &Value, schema: &Schema, path: &str) -> Result<(), ValidationError> {
    let matches = match (schema, value) {
        (Schema::String, Value::String(_)) => true,
        (Schema::Number, Value::Number(_)) => true,
        (Schema::AnyObject, Value::Object(_)) => true,
        (Schema::Object(fields), Value::Object(map)) => {
            for field in fields.iter() {
                let field_path = format!("{path}.{}", field.name);
                match map.get(field.name) {
                    None | Some(Value::Null) if field.required => {
                        return Err(ValidationError::MissingField(field_path));
                    }
                    None | Some(Value::Null) => {}
                    Some(inner) => check(inner, &field.schema, &field_path)?,
                }
            }
            true
        }
        (Schema::ArrayOf(item), Value::Array(items)) => {
            for (i, inner) in items.iter().enumerate() {
                check(inner, item, &format!("{path}[{i}]"))?;
            }
            true
        }
        _ => false,
    };

    if matches {
        Ok(())
    } else {
        Err(ValidationError::WrongType {
            path: path.to_string(),
            expected: schema.describe(),
        })
    }
}

/// Strips a ```json ... ``` or ``` ... ``` fence wrapped around the whole reply.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(stripped) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };
    stripped
        .trim_start()
        .strip_suffix("```")
        .map(|s| s.trim())
        .unwrap_or(stripped.trim_start())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const STRING_LIST: Schema = Schema::ArrayOf(&Schema::String);

    const PERSON: Schema = Schema::Object(&[
        Field {
            name: "name",
            schema: Schema::String,
            required: true,
        },
        Field {
            name: "age",
            schema: Schema::Number,
            required: false,
        },
        Field {
            name: "tags",
            schema: STRING_LIST,
            required: true,
        },
    ]);

    const PEOPLE: Schema = Schema::ArrayOf(&PERSON);

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = parse("not json", &PERSON).unwrap_err();
        assert!(matches!(err, ValidationError::NotJson(_)));
    }

    #[test]
    fn test_parse_returns_value_unchanged() {
        let raw = r#"{"name":"Ada","age":36,"tags":["math"],"extra":true}"#;
        let value = parse(raw, &PERSON).unwrap();
        assert_eq!(value, json!({"name":"Ada","age":36,"tags":["math"],"extra":true}));
    }

    #[test]
    fn test_missing_required_field_reports_path() {
        let err = parse(r#"[{"name":"Ada","tags":[]},{"name":"Bob"}]"#, &PEOPLE).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("$[1].tags".to_string()));
    }

    #[test]
    fn test_null_required_field_is_missing() {
        let err = parse(r#"{"name":null,"tags":[]}"#, &PERSON).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("$.name".to_string()));
    }

    #[test]
    fn test_optional_field_may_be_absent_or_null() {
        assert!(parse(r#"{"name":"Ada","tags":[]}"#, &PERSON).is_ok());
        assert!(parse(r#"{"name":"Ada","age":null,"tags":[]}"#, &PERSON).is_ok());
    }

    #[test]
    fn test_optional_field_with_wrong_type_is_rejected() {
        let err = parse(r#"{"name":"Ada","age":"old","tags":[]}"#, &PERSON).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongType {
                path: "$.age".to_string(),
                expected: "a number",
            }
        );
    }

    #[test]
    fn test_array_expected_but_object_given() {
        let err = parse(r#"{"name":"Ada","tags":[]}"#, &PEOPLE).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongType {
                path: "$".to_string(),
                expected: "an array",
            }
        );
    }

    #[test]
    fn test_wrong_item_type_inside_list() {
        let err = parse(r#"{"name":"Ada","tags":["a",2]}"#, &PERSON).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongType {
                path: "$.tags[1]".to_string(),
                expected: "a string",
            }
        );
    }

    #[test]
    fn test_fenced_reply_is_accepted() {
        let raw = "```json\n{\"name\":\"Ada\",\"tags\":[]}\n```";
        assert!(parse(raw, &PERSON).is_ok());
    }
}
