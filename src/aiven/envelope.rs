//! Response envelope
//!
//! Every Aiven response may carry an `errors` list and a `message` next to
//! the payload. Fields are optional on the wire and may be `null`.

use serde::{Deserialize, Deserializer, Serialize};

/// A single error entry reported by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default, deserialize_with = "nullable")]
    pub message: String,
    #[serde(default, deserialize_with = "nullable")]
    pub more_info: String,
    #[serde(default)]
    pub status: u16,
}

/// The generic part of every response body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Envelope {
    #[serde(default, deserialize_with = "nullable")]
    pub errors: Vec<ApiError>,
    #[serde(default, deserialize_with = "nullable")]
    pub message: String,
}

/// Decode `null` as the type's default value.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_envelope() {
        let envelope: Envelope = serde_json::from_value(json!({
            "errors": [
                {"message": "Topic already exists", "more_info": "https://example.com", "status": 409}
            ],
            "message": "Topic already exists"
        }))
        .unwrap();

        assert_eq!(envelope.errors.len(), 1);
        assert_eq!(envelope.errors[0].status, 409);
        assert_eq!(envelope.errors[0].message, "Topic already exists");
        assert_eq!(envelope.message, "Topic already exists");
    }

    #[test]
    fn test_missing_and_null_fields_default() {
        let envelope: Envelope = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.errors.is_empty());
        assert!(envelope.message.is_empty());

        let envelope: Envelope =
            serde_json::from_value(json!({"errors": null, "message": null})).unwrap();
        assert_eq!(envelope, Envelope::default());
    }

    #[test]
    fn test_payload_fields_are_ignored() {
        let envelope: Envelope =
            serde_json::from_value(json!({"message": "created", "topic": {"topic_name": "a"}}))
                .unwrap();
        assert!(envelope.errors.is_empty());
        assert_eq!(envelope.message, "created");
    }
}
