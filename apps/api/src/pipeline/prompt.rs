//! Prompt Builder: pure string assembly.
//!
//! Templates are `&'static str` with `{placeholder}` tokens (lowercase ASCII and `_`).
//! Any other brace, such as the JSON schema examples inside a template, is left verbatim.
//! Rendering is a single pass, so braces inside interpolated values are never re-expanded.

use std::collections::BTreeMap;

use thiserror::Error;

/// Rendered for an empty list so the model never sees a blank line.
pub const NONE_LISTED: &str = "None listed";

#[derive(Debug, Error, PartialEq)]
pub enum PromptError {
    /// A required value was absent or blank.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// The template references a placeholder no value was bound to.
    #[error("template placeholder `{0}` has no value")]
    UnboundPlaceholder(&'static str),
}

/// Named values interpolated into one template.
#[derive(Debug, Default, Clone)]
pub struct PromptFields {
    values: BTreeMap<&'static str, String>,
}

impl PromptFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a value verbatim.
    pub fn text(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    /// Binds a value that must be present and non-blank.
    pub fn required(self, key: &'static str, value: Option<&str>) -> Result<Self, PromptError> {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Ok(self.text(key, v)),
            _ => Err(PromptError::MissingField(key)),
        }
    }

    /// Binds a comma-separated list, or `NONE_LISTED` when empty.
    pub fn list<S: AsRef<str>>(self, key: &'static str, items: &[S]) -> Self {
        let joined = items
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(", ");
        if joined.trim().is_empty() {
            self.text(key, NONE_LISTED)
        } else {
            self.text(key, joined)
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Interpolates `fields` into `template`.
pub fn render(template: &'static str, fields: &PromptFields) -> Result<String, PromptError> {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}').map(|close| &after[..close]) {
            Some(name) if is_placeholder(name) => {
                let value = fields
                    .get(name)
                    .ok_or(PromptError::UnboundPlaceholder(name))?;
                out.push_str(value);
                rest = &after[name.len() + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    Ok(out)
}

fn is_placeholder(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_lowercase() || b == b'_')
}
