use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog record. Only `id` is interpreted by the service; every other
/// field is caller-supplied and passed through unchanged.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Product {
    /// Build a record from caller-supplied fields and an assigned id.
    /// Any `id` key in the input is discarded; the store owns id assignment.
    pub fn from_fields(id: u64, mut fields: Map<String, Value>) -> Self {
        fields.remove("id");
        Self { id, fields }
    }

    /// Shallow-merge a partial update onto this record: matching keys are
    /// overwritten, everything else is preserved. A numeric `id` in the
    /// patch replaces the stored id.
    pub fn merge(&mut self, patch: Map<String, Value>) {
        for (key, value) in patch {
            if key == "id" {
                if let Some(id) = value.as_u64() {
                    self.id = id;
                }
            } else {
                self.fields.insert(key, value);
            }
        }
    }
}
