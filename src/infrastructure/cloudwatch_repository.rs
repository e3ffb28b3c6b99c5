// CloudWatch dashboard repository implementation
use crate::application::dashboard_repository::{
    DashboardRepository, PutDashboardOutcome, ValidationMessage,
};
use crate::infrastructure::config::AppConfig;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_cloudwatch::config::{Credentials, Region};
use aws_sdk_cloudwatch::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_cloudwatch::operation::put_dashboard::PutDashboardOutput;
use aws_sdk_cloudwatch::operation::RequestId;
use aws_sdk_cloudwatch::Client;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub const CREDENTIALS_PROVIDER: &str = "dashboard-splitter";

#[derive(Debug, Error)]
pub enum CloudWatchError {
    #[error("invalid client configuration: {0}")]
    Config(String),
    #[error("CloudWatch returned {code}: {message}")]
    Api {
        status: Option<u16>,
        code: String,
        message: String,
    },
    #[error("request to CloudWatch failed: {0}")]
    Request(String),
    #[error("CloudWatch response is missing {0}")]
    MissingField(&'static str),
}

impl CloudWatchError {
    fn from_sdk<E>(err: SdkError<E>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    {
        let status = err.raw_response().map(|response| response.status().as_u16());
        match err.code() {
            Some(code) => CloudWatchError::Api {
                status,
                code: code.to_string(),
                message: err.message().unwrap_or_default().to_string(),
            },
            None => CloudWatchError::Request(DisplayErrorContext(&err).to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CloudWatchRepository {
    client: Client,
}

impl CloudWatchRepository {
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Build a client for `region` with static credentials. The endpoint is
    /// derived from the region unless `endpoint` overrides it.
    pub async fn new(
        region: &str,
        endpoint: Option<&str>,
        credentials: Credentials,
    ) -> Result<Self, CloudWatchError> {
        let region = region.trim();
        if region.is_empty() {
            return Err(CloudWatchError::Config("region must not be empty".to_string()));
        }
        if credentials.access_key_id().is_empty() || credentials.secret_access_key().is_empty() {
            return Err(CloudWatchError::Config(
                "access key id and secret must not be empty".to_string(),
            ));
        }
        if let Some(endpoint) = endpoint {
            if !is_http_url(endpoint) {
                return Err(CloudWatchError::Config(format!(
                    "endpoint {} is not an http(s) URL",
                    endpoint
                )));
            }
        }

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .credentials_provider(credentials);
        if let Some(endpoint) = endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        Ok(Self::from_client(Client::new(&sdk_config)))
    }

    pub async fn from_config(
        config: &AppConfig,
        credentials: Credentials,
    ) -> Result<Self, CloudWatchError> {
        Self::new(&config.region, config.endpoint.as_deref(), credentials).await
    }
}

fn is_http_url(endpoint: &str) -> bool {
    endpoint
        .strip_prefix("https://")
        .or_else(|| endpoint.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty())
}

fn outcome_from(output: &PutDashboardOutput, http_status: Option<u16>) -> PutDashboardOutcome {
    PutDashboardOutcome {
        validation_messages: output
            .dashboard_validation_messages()
            .iter()
            .map(|m| ValidationMessage {
                data_path: m.data_path().map(str::to_string),
                message: m.message().unwrap_or_default().to_string(),
            })
            .collect(),
        request_id: output.request_id().map(str::to_string),
        http_status,
    }
}

#[async_trait]
impl DashboardRepository for CloudWatchRepository {
    async fn get_dashboard(&self, name: &str) -> anyhow::Result<String> {
        let output = self
            .client
            .get_dashboard()
            .dashboard_name(name)
            .send()
            .await
            .map_err(CloudWatchError::from_sdk)?;

        tracing::debug!("GetDashboard {} request id {:?}", name, output.request_id());
        let body = output
            .dashboard_body()
            .ok_or(CloudWatchError::MissingField("DashboardBody"))?;
        Ok(body.to_string())
    }

    async fn put_dashboard(&self, name: &str, body: &str) -> anyhow::Result<PutDashboardOutcome> {
        let status = Arc::new(Mutex::new(None));
        let seen = status.clone();

        let output = self
            .client
            .put_dashboard()
            .dashboard_name(name)
            .dashboard_body(body)
            .customize()
            .mutate_response(move |response| {
                if let Ok(mut slot) = seen.lock() {
                    *slot = Some(response.status().as_u16());
                }
            })
            .send()
            .await
            .map_err(CloudWatchError::from_sdk)?;

        let http_status = status.lock().ok().and_then(|slot| *slot);
        Ok(outcome_from(&output, http_status))
    }
}
