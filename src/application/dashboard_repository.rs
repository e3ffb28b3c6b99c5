// Repository trait for dashboard storage
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::fmt;

/// A problem the provider found in a submitted dashboard body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMessage {
    pub data_path: Option<String>,
    pub message: String,
}

/// Acknowledgment returned when a dashboard is created or overwritten
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutDashboardOutcome {
    pub validation_messages: Vec<ValidationMessage>,
    pub request_id: Option<String>,
    pub http_status: Option<u16>,
}

impl PutDashboardOutcome {
    /// Provider-shaped acknowledgment, including the response metadata.
    pub fn to_json(&self) -> Value {
        let messages: Vec<Value> = self
            .validation_messages
            .iter()
            .map(|msg| {
                let mut fields = Map::new();
                if let Some(path) = &msg.data_path {
                    fields.insert("DataPath".to_string(), json!(path));
                }
                fields.insert("Message".to_string(), json!(msg.message));
                Value::Object(fields)
            })
            .collect();

        let mut metadata = Map::new();
        if let Some(status) = self.http_status {
            metadata.insert("HTTPStatusCode".to_string(), json!(status));
        }
        if let Some(request_id) = &self.request_id {
            metadata.insert("RequestId".to_string(), json!(request_id));
        }

        json!({
            "DashboardValidationMessages": messages,
            "ResponseMetadata": metadata,
        })
    }
}

impl fmt::Display for PutDashboardOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Fetch the raw JSON body of a dashboard by name
    async fn get_dashboard(&self, name: &str) -> anyhow::Result<String>;

    /// Create a dashboard, or overwrite the one with the same name
    async fn put_dashboard(&self, name: &str, body: &str) -> anyhow::Result<PutDashboardOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display_includes_response_metadata() {
        let outcome = PutDashboardOutcome {
            validation_messages: vec![],
            request_id: Some("1234-abcd".to_string()),
            http_status: Some(200),
        };
        assert_eq!(
            outcome.to_string(),
            r#"{"DashboardValidationMessages":[],"ResponseMetadata":{"HTTPStatusCode":200,"RequestId":"1234-abcd"}}"#
        );
    }

    #[test]
    fn test_outcome_display_with_validation_messages() {
        let outcome = PutDashboardOutcome {
            validation_messages: vec![
                ValidationMessage {
                    data_path: Some("/widgets/0/properties".to_string()),
                    message: "Should have at least 1 items".to_string(),
                },
                ValidationMessage {
                    data_path: None,
                    message: "Unknown field".to_string(),
                },
            ],
            request_id: None,
            http_status: None,
        };
        assert_eq!(
            outcome.to_json(),
            json!({
                "DashboardValidationMessages": [
                    {"DataPath": "/widgets/0/properties", "Message": "Should have at least 1 items"},
                    {"Message": "Unknown field"}
                ],
                "ResponseMetadata": {}
            })
        );
    }
}
