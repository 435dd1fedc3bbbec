//! Model records as served by the storage service

use serde::{Deserialize, Serialize};

/// Server-assigned model identifier
pub type ModelId = i64;

/// A stored model as returned in the model list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Unique model ID
    pub id: ModelId,
    /// File name the model was uploaded under
    pub filename: String,
}

impl ModelRecord {
    pub fn new(id: ModelId, filename: impl Into<String>) -> Self {
        Self {
            id,
            filename: filename.into(),
        }
    }
}

impl From<ModelRecord> for (ModelId, String) {
    fn from(record: ModelRecord) -> Self {
        (record.id, record.filename)
    }
}
