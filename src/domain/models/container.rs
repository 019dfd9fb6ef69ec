//! Data-transfer shapes exchanged with the container-manager service.
//!
//! The service owns these schemas. Only the fields the HTTP contract names
//! (`id`, `status`, `timestamp`) are surfaced as typed accessors; everything
//! else is carried through untouched so a decode/encode cycle reproduces the
//! server's object exactly.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request body for `POST /containers/`.
///
/// The payload is an opaque JSON object (image, command, resources, ...);
/// the client never inspects it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeployConfig(Map<String, Value>);

impl DeployConfig {
    /// Create an empty deploy payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a top-level field, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow the underlying JSON object.
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for DeployConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for DeployConfig {
    type Error = Value;

    /// Accepts only JSON objects; any other value is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

/// Response of a successful deploy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployResponse {
    /// Identifier of the created container
    pub id: String,
}

/// One container as reported by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerInfo {
    /// Container identifier
    pub id: String,

    /// Every other field returned by the service, in server order
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl ContainerInfo {
    /// Lifecycle status reported by the service, when it is a string.
    pub fn status(&self) -> Option<&str> {
        self.attributes.get("status").and_then(Value::as_str)
    }

    /// Look up any other field by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

/// Response of `GET /containers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerList {
    /// Matching containers
    pub containers: Vec<ContainerInfo>,
}

/// One log record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogEntry(Map<String, Value>);

impl LogEntry {
    /// Timestamp of the record, when the service sent one as a string.
    pub fn timestamp(&self) -> Option<&str> {
        self.0.get("timestamp").and_then(Value::as_str)
    }

    /// Look up any field by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// All fields except the timestamp.
    pub fn payload(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter().filter(|(key, _)| key.as_str() != "timestamp")
    }
}

impl From<Map<String, Value>> for LogEntry {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Response of `GET /containers/{id}/logs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogList {
    /// Log records, oldest first as returned by the service
    pub logs: Vec<LogEntry>,
}

/// Response of the start and stop endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Status string reported by the service
    pub status: String,
}

/// Query parameters narrowing a container listing.
///
/// Keys keep insertion order; setting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    params: Vec<(String, String)>,
}

impl ListFilter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Add or replace a parameter in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key, value)),
        }
    }

    /// Parameters in insertion order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// True when no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
