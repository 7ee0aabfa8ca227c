//! Resolving field expressions against records.
//!
//! Resolution tries, in order:
//!
//! 1. Tag lookups (`tags.<key>`, `Tags.<key>`, `tags:<key>`, `Tags:<key>`)
//!    against the record's tag map. A missing tag is an empty value, not a miss.
//! 2. Reserved accessors the record type defines (e.g. `id`, `state`).
//! 3. A [`Path`] evaluated over the record's JSON document.
//!
//! The result is a [`Resolution`]: the cell text, or a [`ResolutionMiss`]
//! explaining why there is none. Misses are collapsed to text only when a row
//! is rendered, according to a [`MissPolicy`].

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

use crate::expr::{ExprError, Path};
use crate::value::FieldValue;

/// Tag prefixes, checked in order.
const TAG_PREFIXES: [&str; 4] = ["tags.", "Tags.", "tags:", "Tags:"];

/// Why an expression produced no value for a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionMiss {
    /// The path does not exist in this record
    #[error("no value at '{expression}'")]
    Absent { expression: String },

    /// The expression could not be parsed
    #[error("invalid expression '{expression}': {source}")]
    InvalidExpression {
        expression: String,
        source: ExprError,
    },
}

/// Outcome of resolving one field against one record.
pub type Resolution = std::result::Result<String, ResolutionMiss>;

/// How misses are shown in rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissPolicy {
    /// Every miss is an empty cell
    #[default]
    Blank,
    /// Invalid expressions show `<error: ...>`; absent values stay empty
    Marker,
}

impl MissPolicy {
    /// Collapse a resolution to the text placed in a cell.
    pub fn cell(self, resolution: &Resolution) -> String {
        match (self, resolution) {
            (_, Ok(text)) => text.clone(),
            (MissPolicy::Marker, Err(miss @ ResolutionMiss::InvalidExpression { .. })) => {
                format!("<error: {miss}>")
            }
            (_, Err(_)) => String::new(),
        }
    }
}

/// A record the display engine can pull values out of.
pub trait Resolvable {
    /// Value of the tag `key`, if the record carries it.
    fn tag(&self, key: &str) -> Option<&str>;

    /// Reserved shorthand names handled by the record type itself.
    fn accessor(&self, _name: &str) -> Option<FieldValue<'_>> {
        None
    }

    /// Structural view used for general path expressions.
    fn document(&self) -> &Value;

    /// Evaluate a parsed path.
    fn lookup(&self, path: &Path) -> Option<FieldValue<'_>> {
        path.evaluate(self.document()).map(FieldValue::from)
    }
}

/// Key named by a tag expression, if `expression` is one.
pub fn tag_key(expression: &str) -> Option<&str> {
    TAG_PREFIXES
        .iter()
        .find_map(|prefix| expression.strip_prefix(prefix))
}

/// Resolve `expression` against `record`.
pub fn resolve<R: Resolvable + ?Sized>(expression: &str, record: &R) -> Resolution {
    if let Some(key) = tag_key(expression) {
        return Ok(record.tag(key).unwrap_or_default().to_string());
    }

    if let Some(value) = record.accessor(expression) {
        return Ok(value.to_cell());
    }

    let path = Path::parse(expression).map_err(|source| ResolutionMiss::InvalidExpression {
        expression: expression.to_string(),
        source,
    })?;

    record
        .lookup(&path)
        .map(|value| value.to_cell())
        .ok_or_else(|| ResolutionMiss::Absent {
            expression: expression.to_string(),
        })
}

/// Generic JSON records.
///
/// Tags come from a `tags`/`Tags` object of strings, or from an AWS-style
/// `Tags` list of `{"Key": .., "Value": ..}` pairs. No reserved accessors.
impl Resolvable for Value {
    fn tag(&self, key: &str) -> Option<&str> {
        ["tags", "Tags"].iter().find_map(|field| match self.get(field)? {
            Value::Object(map) => map.get(key)?.as_str(),
            Value::Array(pairs) => pairs
                .iter()
                .rev()
                .find(|pair| pair.get("Key").and_then(Value::as_str) == Some(key))?
                .get("Value")?
                .as_str(),
            _ => None,
        })
    }

    fn document(&self) -> &Value {
        self
    }
}

/// Flatten an AWS-style `[{"Key": .., "Value": ..}]` list into a map.
///
/// Entries without a string key are skipped; a missing value becomes empty.
/// Later duplicates win.
pub fn tag_map(pairs: &[Value]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .filter_map(|pair| {
            let key = pair.get("Key")?.as_str()?;
            let value = pair.get("Value").and_then(Value::as_str).unwrap_or_default();
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn web() -> Value {
        json!({
            "id": "i-1",
            "tags": {"Name": "web", "Env": "prod"},
            "state": "running",
            "nested": {"count": 3, "flags": [true, false]}
        })
    }

    #[test]
    fn test_tag_key() {
        assert_eq!(tag_key("tags.Name"), Some("Name"));
        assert_eq!(tag_key("Tags.Name"), Some("Name"));
        assert_eq!(
            tag_key("tags:aws:cloudformation:stack-name"),
            Some("aws:cloudformation:stack-name")
        );
        assert_eq!(tag_key("Tags:Env"), Some("Env"));
        assert_eq!(tag_key("tags"), None);
        assert_eq!(tag_key("state"), None);
    }

    #[test]
    fn test_present_tag() {
        assert_eq!(resolve("tags.Name", &web()), Ok("web".to_string()));
        assert_eq!(resolve("Tags:Env", &web()), Ok("prod".to_string()));
    }

    #[test]
    fn test_absent_tag_is_empty_not_a_miss() {
        assert_eq!(resolve("tags.Owner", &web()), Ok(String::new()));
        assert_eq!(resolve("tags.Name", &json!({"id": "i-2"})), Ok(String::new()));
    }

    #[test]
    fn test_tag_keys_with_dots_and_spaces() {
        let record = json!({"tags": {"team.owner": "ops", "Cost Center": "42"}});
        assert_eq!(resolve("tags.team.owner", &record), Ok("ops".to_string()));
        assert_eq!(resolve("tags.Cost Center", &record), Ok("42".to_string()));
    }

    #[test]
    fn test_aws_style_tag_list() {
        let record = json!({
            "Tags": [
                {"Key": "Name", "Value": "old"},
                {"Key": "Env", "Value": "dev"},
                {"Key": "Name", "Value": "api"}
            ]
        });
        assert_eq!(resolve("tags.Name", &record), Ok("api".to_string()));
        assert_eq!(resolve("tags.Env", &record), Ok("dev".to_string()));
        assert_eq!(resolve("tags.Team", &record), Ok(String::new()));
    }

    #[test]
    fn test_path_values() {
        let record = web();
        assert_eq!(resolve("id", &record), Ok("i-1".to_string()));
        assert_eq!(resolve("nested.count", &record), Ok("3".to_string()));
        assert_eq!(resolve("nested.flags[1]", &record), Ok("false".to_string()));
        assert_eq!(resolve("nested.flags", &record), Ok("[true,false]".to_string()));
        assert_eq!(
            resolve("tags", &record),
            Ok(r#"{"Env":"prod","Name":"web"}"#.to_string())
        );
    }

    #[test]
    fn test_absent_path() {
        let miss = resolve("nested.missing.path", &web()).unwrap_err();
        assert_eq!(
            miss,
            ResolutionMiss::Absent {
                expression: "nested.missing.path".to_string()
            }
        );
    }

    #[test]
    fn test_null_is_empty_value() {
        let record = json!({"PublicIpAddress": null});
        assert_eq!(resolve("PublicIpAddress", &record), Ok(String::new()));
    }

    #[test]
    fn test_invalid_expression() {
        let miss = resolve("nested..count", &web()).unwrap_err();
        assert!(matches!(miss, ResolutionMiss::InvalidExpression { .. }));
    }

    #[test]
    fn test_miss_policy() {
        let found: Resolution = Ok("web".to_string());
        let absent: Resolution = Err(ResolutionMiss::Absent {
            expression: "a.b".to_string(),
        });
        let invalid = resolve("a[", &web());

        assert_eq!(MissPolicy::Blank.cell(&found), "web");
        assert_eq!(MissPolicy::Blank.cell(&absent), "");
        assert_eq!(MissPolicy::Blank.cell(&invalid), "");

        assert_eq!(MissPolicy::Marker.cell(&found), "web");
        assert_eq!(MissPolicy::Marker.cell(&absent), "");
        let marker = MissPolicy::Marker.cell(&invalid);
        assert!(marker.starts_with("<error: invalid expression 'a['"), "{marker}");
        assert!(marker.ends_with('>'));
    }

    #[test]
    fn test_tag_map() {
        let pairs = vec![
            json!({"Key": "Name", "Value": "web"}),
            json!({"Key": "Empty"}),
            json!({"Value": "orphan"}),
            json!({"Key": "Name", "Value": "api"}),
        ];
        let tags = tag_map(&pairs);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags["Name"], "api");
        assert_eq!(tags["Empty"], "");
    }
}
