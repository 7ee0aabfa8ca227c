//! Instance records.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::resolve::{tag_map, Resolvable};
use crate::value::FieldValue;

/// Instance lifecycle state, from `State.Name`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InstanceState {
    Pending,
    Running,
    ShuttingDown,
    Terminated,
    Stopping,
    Stopped,
    /// A name this tool does not know, kept verbatim
    Other(String),
    /// No state in the record
    #[default]
    Unknown,
}

impl InstanceState {
    pub fn from_name(name: &str) -> Self {
        match name {
            "pending" => InstanceState::Pending,
            "running" => InstanceState::Running,
            "shutting-down" => InstanceState::ShuttingDown,
            "terminated" => InstanceState::Terminated,
            "stopping" => InstanceState::Stopping,
            "stopped" => InstanceState::Stopped,
            other => InstanceState::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            InstanceState::Pending => "pending",
            InstanceState::Running => "running",
            InstanceState::ShuttingDown => "shutting-down",
            InstanceState::Terminated => "terminated",
            InstanceState::Stopping => "stopping",
            InstanceState::Stopped => "stopped",
            InstanceState::Other(name) => name,
            InstanceState::Unknown => "",
        }
    }
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One compute instance.
///
/// The full API object is kept as the record's document, so any attribute
/// is reachable with a path expression. Id, state and tags are extracted
/// once for the reserved accessors and tag lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    id: Option<String>,
    state: InstanceState,
    tags: BTreeMap<String, String>,
    raw: Value,
}

impl Instance {
    /// Build from one element of `Reservations[].Instances[]`.
    pub fn from_json(raw: Value) -> Self {
        let id = raw
            .get("InstanceId")
            .and_then(Value::as_str)
            .map(str::to_string);
        let state = raw
            .pointer("/State/Name")
            .and_then(Value::as_str)
            .map(InstanceState::from_name)
            .unwrap_or_default();
        let tags = raw
            .get("Tags")
            .and_then(Value::as_array)
            .map(|pairs| tag_map(pairs))
            .unwrap_or_default();

        Self {
            id,
            state,
            tags,
            raw,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn state(&self) -> &InstanceState {
        &self.state
    }

    pub fn tags(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl Resolvable for Instance {
    fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    fn accessor(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::from(self.id())),
            "state" => Some(FieldValue::Display(&self.state)),
            _ => None,
        }
    }

    fn document(&self) -> &Value {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve;
    use serde_json::json;

    fn sample() -> Instance {
        Instance::from_json(json!({
            "InstanceId": "i-0abc",
            "InstanceType": "t3.micro",
            "State": {"Code": 16, "Name": "running"},
            "Placement": {"AvailabilityZone": "eu-west-1b"},
            "Tags": [
                {"Key": "Name", "Value": "web"},
                {"Key": "Env", "Value": "prod"}
            ],
            "SecurityGroups": [
                {"GroupId": "sg-1", "GroupName": "default"},
                {"GroupId": "sg-2", "GroupName": "web"}
            ],
            "EbsOptimized": false
        }))
    }

    #[test]
    fn test_extracted_fields() {
        let instance = sample();
        assert_eq!(instance.id(), Some("i-0abc"));
        assert_eq!(instance.state(), &InstanceState::Running);
        assert_eq!(instance.tags().get("Env").map(String::as_str), Some("prod"));
    }

    #[test]
    fn test_reserved_accessors() {
        let instance = sample();
        assert_eq!(resolve("id", &instance), Ok("i-0abc".to_string()));
        assert_eq!(resolve("state", &instance), Ok("running".to_string()));
    }

    #[test]
    fn test_tags_and_paths() {
        let instance = sample();
        assert_eq!(resolve("tags.Name", &instance), Ok("web".to_string()));
        assert_eq!(resolve("tags.Owner", &instance), Ok(String::new()));
        assert_eq!(resolve("InstanceType", &instance), Ok("t3.micro".to_string()));
        assert_eq!(
            resolve("Placement.AvailabilityZone", &instance),
            Ok("eu-west-1b".to_string())
        );
        assert_eq!(
            resolve("SecurityGroups[-1].GroupName", &instance),
            Ok("web".to_string())
        );
        assert_eq!(resolve("State.Code", &instance), Ok("16".to_string()));
        assert_eq!(resolve("EbsOptimized", &instance), Ok("false".to_string()));
        assert_eq!(
            resolve("State", &instance),
            Ok(r#"{"Code":16,"Name":"running"}"#.to_string())
        );
    }

    #[test]
    fn test_sparse_instance() {
        let instance = Instance::from_json(json!({"ImageId": "ami-1"}));
        assert_eq!(instance.id(), None);
        assert_eq!(resolve("id", &instance), Ok(String::new()));
        assert_eq!(resolve("state", &instance), Ok(String::new()));
        assert_eq!(resolve("tags.Name", &instance), Ok(String::new()));
        assert!(resolve("Placement.AvailabilityZone", &instance).is_err());
    }

    #[test]
    fn test_state_names() {
        for name in [
            "pending",
            "running",
            "shutting-down",
            "terminated",
            "stopping",
            "stopped",
        ] {
            let state = InstanceState::from_name(name);
            assert!(!matches!(state, InstanceState::Other(_)), "{name}");
            assert_eq!(state.to_string(), name);
        }
        assert_eq!(
            InstanceState::from_name("hibernated"),
            InstanceState::Other("hibernated".to_string())
        );
        assert_eq!(InstanceState::from_name("hibernated").to_string(), "hibernated");
    }
}
