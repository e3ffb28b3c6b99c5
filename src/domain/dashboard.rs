// Dashboard domain model
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("dashboard body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("dashboard body is not a JSON object")]
    NotAnObject,
    #[error("dashboard body has no `widgets` field")]
    MissingWidgets,
    #[error("dashboard `widgets` field is not an array")]
    WidgetsNotArray,
    #[error("widget {index} has no string `properties.query`")]
    WidgetWithoutQuery { index: usize },
}

/// How strictly a fetched dashboard body is checked before partitioning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Missing or malformed fields fall back to empty values.
    #[default]
    Lenient,
    /// Missing or malformed fields are reported as errors.
    Strict,
}

/// One visualization unit. Everything except `properties.query` is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Widget(Value);

impl Widget {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn query(&self) -> Option<&str> {
        self.0
            .get("properties")
            .and_then(|properties| properties.get("query"))
            .and_then(Value::as_str)
    }

    /// Copy of this widget with `properties.query` replaced.
    pub fn with_query(&self, query: String) -> Widget {
        let mut value = self.0.clone();
        if !value.is_object() {
            value = Value::Object(Map::new());
        }
        if let Some(fields) = value.as_object_mut() {
            let properties = fields
                .entry("properties")
                .or_insert_with(|| Value::Object(Map::new()));
            if !properties.is_object() {
                *properties = Value::Object(Map::new());
            }
            if let Some(properties) = properties.as_object_mut() {
                properties.insert("query".to_string(), Value::String(query));
            }
        }
        Widget(value)
    }
}

/// Ordered widget list of a dashboard; the only part of the body this tool reads or writes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardBody {
    pub widgets: Vec<Widget>,
}

impl DashboardBody {
    pub fn new(widgets: Vec<Widget>) -> Self {
        Self { widgets }
    }

    pub fn parse(raw: &str, mode: ValidationMode) -> Result<Self, DashboardError> {
        let document: Value = serde_json::from_str(raw)?;

        let Some(fields) = document.as_object() else {
            return match mode {
                ValidationMode::Strict => Err(DashboardError::NotAnObject),
                ValidationMode::Lenient => {
                    tracing::warn!("Dashboard body is not an object, treating as empty");
                    Ok(Self::default())
                }
            };
        };

        let widgets = match (fields.get("widgets"), mode) {
            (Some(Value::Array(items)), _) => items.clone(),
            (None, ValidationMode::Strict) => return Err(DashboardError::MissingWidgets),
            (Some(_), ValidationMode::Strict) => return Err(DashboardError::WidgetsNotArray),
            (None, ValidationMode::Lenient) => Vec::new(),
            (Some(_), ValidationMode::Lenient) => {
                tracing::warn!("Dashboard `widgets` is not an array, treating as empty");
                Vec::new()
            }
        };

        let widgets: Vec<Widget> = widgets.into_iter().map(Widget::new).collect();

        if mode == ValidationMode::Strict {
            if let Some(index) = widgets.iter().position(|w| w.query().is_none()) {
                return Err(DashboardError::WidgetWithoutQuery { index });
            }
        }

        Ok(Self { widgets })
    }

    pub fn to_json(&self) -> Result<String, DashboardError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn log_widget(query: &str) -> Value {
        json!({
            "type": "log",
            "x": 0,
            "y": 6,
            "properties": { "query": query, "region": "us-west-2", "title": "Errors" }
        })
    }

    #[test]
    fn test_widget_query() {
        assert_eq!(Widget::new(log_widget("fields @message")).query(), Some("fields @message"));
        assert_eq!(Widget::new(json!({"type": "text"})).query(), None);
        assert_eq!(Widget::new(json!({"properties": {"query": 7}})).query(), None);
    }

    #[test]
    fn test_with_query_keeps_other_fields() {
        let original = Widget::new(log_widget("old"));
        let rewritten = original.with_query("new".to_string());

        assert_eq!(rewritten.query(), Some("new"));
        assert_eq!(original.query(), Some("old"));

        assert_eq!(rewritten, Widget::new(log_widget("new")));
    }

    #[test]
    fn test_parse_lenient_fallbacks() {
        let body = DashboardBody::parse("{}", ValidationMode::Lenient).unwrap();
        assert!(body.widgets.is_empty());

        let body =
            DashboardBody::parse(r#"{"widgets": {"a": 1}}"#, ValidationMode::Lenient).unwrap();
        assert!(body.widgets.is_empty());

        let raw = r#"{"widgets": [{"type": "text"}]}"#;
        let body = DashboardBody::parse(raw, ValidationMode::Lenient).unwrap();
        assert_eq!(body.widgets.len(), 1);
    }

    #[test]
    fn test_parse_strict_reports_problems() {
        assert!(matches!(
            DashboardBody::parse("{}", ValidationMode::Strict),
            Err(DashboardError::MissingWidgets)
        ));
        assert!(matches!(
            DashboardBody::parse(r#"{"widgets": 3}"#, ValidationMode::Strict),
            Err(DashboardError::WidgetsNotArray)
        ));
        assert!(matches!(
            DashboardBody::parse("[]", ValidationMode::Strict),
            Err(DashboardError::NotAnObject)
        ));

        let raw = json!({"widgets": [log_widget("a"), {"type": "text"}]}).to_string();
        assert!(matches!(
            DashboardBody::parse(&raw, ValidationMode::Strict),
            Err(DashboardError::WidgetWithoutQuery { index: 1 })
        ));
    }

    #[test]
    fn test_parse_rejects_non_json_in_both_modes() {
        assert!(matches!(
            DashboardBody::parse("not json", ValidationMode::Lenient),
            Err(DashboardError::InvalidJson(_))
        ));
        assert!(matches!(
            DashboardBody::parse("not json", ValidationMode::Strict),
            Err(DashboardError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_to_json_only_carries_widgets() {
        let body = DashboardBody::new(vec![Widget::new(json!({"type": "text"}))]);
        assert_eq!(body.to_json().unwrap(), r#"{"widgets":[{"type":"text"}]}"#);
        assert_eq!(DashboardBody::default().to_json().unwrap(), r#"{"widgets":[]}"#);
    }
}
