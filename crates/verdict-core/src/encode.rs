// Rust guideline compliant 2026-02-06

//! Serialization contract for Verdict.
//!
//! A verdict serializes to one flat JSON object: the extra entries merged
//! first, then the reserved keys written over them, so a reserved key always
//! wins a name collision. Reserved keys:
//!
//! - `status_code` - integer, with the 200-while-error correction applied
//! - `status` - `"success"` or `"error"`, derived from the error flag alone
//! - `error`, `error_code`, `success`, `success_code` - arrays, empty when
//!   their side is unpopulated
//! - `data` - the payload, or an empty array when absent (never `null`, for
//!   consumers in languages where `null` and "empty" decode differently)

use crate::Verdict;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

impl Verdict {
    /// Builds the flat envelope object.
    #[must_use]
    pub fn to_object(&self) -> Map<String, Value> {
        let mut out = Map::new();

        for (key, value) in &self.extra {
            out.insert(key.clone(), value.clone());
        }

        // Reserved keys last: they overwrite colliding extra entries.
        out.insert(
            "status_code".to_string(),
            Value::from(self.effective_status_code()),
        );
        out.insert(
            "status".to_string(),
            Value::from(if self.is_error() { "error" } else { "success" }),
        );
        out.insert("error".to_string(), self.error_messages.clone().into());
        out.insert("error_code".to_string(), self.error_codes.clone().into());
        out.insert("success".to_string(), self.success_messages.clone().into());
        out.insert(
            "success_code".to_string(),
            self.success_codes.clone().into(),
        );
        out.insert(
            "data".to_string(),
            self.data.clone().unwrap_or_else(|| Value::Array(Vec::new())),
        );

        out
    }

    /// JSON encoding of the envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if `serde_json` fails to encode the envelope.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.to_object())
    }
}

impl Serialize for Verdict {
    /// Serializes as the flat envelope, not as the struct fields.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_object().serialize(serializer)
    }
}
