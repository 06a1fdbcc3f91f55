//! Result types for generation

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata key: model identifier
pub const META_MODEL_ID: &str = "model_id";

/// Metadata key: number of normalized rules
pub const META_RULES_COUNT: &str = "rules_count";

/// Metadata key: number of records returned
pub const META_GENERATED_COUNT: &str = "generated_count";

/// Extracted mock data
///
/// Serializes untagged: a single JSON object or an array of objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MockData {
    /// One record (count = 1)
    Record(Map<String, Value>),
    /// Several records (count > 1)
    Records(Vec<Map<String, Value>>),
}

impl MockData {
    /// Number of records carried
    pub fn len(&self) -> usize {
        match self {
            MockData::Record(_) => 1,
            MockData::Records(records) => records.len(),
        }
    }

    /// True when a record list is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow every record in order
    pub fn records(&self) -> Vec<&Map<String, Value>> {
        match self {
            MockData::Record(record) => vec![record],
            MockData::Records(records) => records.iter().collect(),
        }
    }

    /// Take every record in order
    pub fn into_records(self) -> Vec<Map<String, Value>> {
        match self {
            MockData::Record(record) => vec![record],
            MockData::Records(records) => records,
        }
    }

    /// The single record, if this holds exactly one object
    pub fn as_record(&self) -> Option<&Map<String, Value>> {
        match self {
            MockData::Record(record) => Some(record),
            MockData::Records(_) => None,
        }
    }
}

/// Success/failure wrapper returned in formatted mode
///
/// Callers must check `success` before reading `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    /// Whether generation succeeded
    pub success: bool,

    /// Generated payload on success
    pub data: Option<MockData>,

    /// Error message on failure
    pub error: Option<String>,

    /// Model identifier, rule count and generated count
    pub metadata: IndexMap<String, Value>,
}

impl ResultEnvelope {
    /// Wrap a successful payload
    pub fn success(data: MockData, model_id: &str, rules_count: usize) -> Self {
        let mut metadata = IndexMap::new();
        metadata.insert(META_MODEL_ID.to_string(), Value::from(model_id));
        metadata.insert(META_RULES_COUNT.to_string(), Value::from(rules_count));
        metadata.insert(META_GENERATED_COUNT.to_string(), Value::from(data.len()));

        Self {
            success: true,
            data: Some(data),
            error: None,
            metadata,
        }
    }

    /// Wrap a failure message
    pub fn failure(error: impl Into<String>, model_id: &str) -> Self {
        let mut metadata = IndexMap::new();
        metadata.insert(META_MODEL_ID.to_string(), Value::from(model_id));

        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            metadata,
        }
    }

    /// Read a metadata entry
    pub fn meta(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Pretty JSON rendering
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Output of `ShadowAi::generate_with`
#[derive(Debug, Clone, PartialEq)]
pub enum Generated {
    /// Raw payload (`format_output = false`)
    Data(MockData),
    /// Wrapped payload (`format_output = true`)
    Envelope(ResultEnvelope),
}
