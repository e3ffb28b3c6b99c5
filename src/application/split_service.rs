// Split service - Use case for repartitioning a dashboard by brand range
use crate::application::dashboard_repository::{DashboardRepository, PutDashboardOutcome};
use crate::domain::brand_range::BrandRange;
use crate::domain::dashboard::{DashboardBody, ValidationMode};
use crate::domain::partition::{partition_widgets, RangePartition};
use anyhow::Context;
use std::sync::Arc;

/// Result of publishing one range's dashboard
#[derive(Debug, Clone)]
pub struct PublishedDashboard {
    pub name: String,
    pub outcome: PutDashboardOutcome,
}

#[derive(Clone)]
pub struct SplitService {
    repository: Arc<dyn DashboardRepository>,
    dashboard_prefix: String,
    validation: ValidationMode,
}

impl SplitService {
    pub fn new(
        repository: Arc<dyn DashboardRepository>,
        dashboard_prefix: String,
        validation: ValidationMode,
    ) -> Self {
        Self {
            repository,
            dashboard_prefix,
            validation,
        }
    }

    /// Fetch the source dashboard once and partition its widgets across `ranges`.
    pub async fn partition(
        &self,
        source_dashboard: &str,
        ranges: &[BrandRange],
    ) -> anyhow::Result<Vec<RangePartition>> {
        tracing::info!("Fetching dashboard {}", source_dashboard);
        let raw = self
            .repository
            .get_dashboard(source_dashboard)
            .await
            .with_context(|| format!("Failed to fetch dashboard {}", source_dashboard))?;

        let body = DashboardBody::parse(&raw, self.validation)
            .with_context(|| format!("Dashboard {} has an unusable body", source_dashboard))?;
        tracing::info!("Dashboard {} has {} widgets", source_dashboard, body.widgets.len());

        let partitions = partition_widgets(&body.widgets, ranges);
        for partition in &partitions {
            tracing::info!(
                "Range {} selected {} widgets",
                partition.range.label(),
                partition.widgets.len()
            );
        }

        Ok(partitions)
    }

    pub fn dashboard_name(&self, range: &BrandRange) -> String {
        range.dashboard_name(&self.dashboard_prefix)
    }

    /// Create or overwrite the dashboard for one partition.
    pub async fn publish(&self, partition: &RangePartition) -> anyhow::Result<PublishedDashboard> {
        let name = self.dashboard_name(&partition.range);
        let body = partition
            .body()
            .to_json()
            .with_context(|| format!("Failed to serialize dashboard {}", name))?;

        tracing::info!("Publishing dashboard {} with {} widgets", name, partition.widgets.len());
        let outcome = self
            .repository
            .put_dashboard(&name, &body)
            .await
            .with_context(|| format!("Failed to publish dashboard {}", name))?;

        for msg in &outcome.validation_messages {
            tracing::warn!(
                "Dashboard {} validation: {} ({})",
                name,
                msg.message,
                msg.data_path.as_deref().unwrap_or("-")
            );
        }

        Ok(PublishedDashboard { name, outcome })
    }

    /// Publish every partition in order, handing each result to `on_published`.
    /// The first failure stops the run; dashboards already published stay in place.
    pub async fn publish_all<F>(
        &self,
        partitions: &[RangePartition],
        mut on_published: F,
    ) -> anyhow::Result<Vec<PublishedDashboard>>
    where
        F: FnMut(&PublishedDashboard),
    {
        let mut published = Vec::with_capacity(partitions.len());
        for partition in partitions {
            let dashboard = self.publish(partition).await?;
            on_published(&dashboard);
            published.push(dashboard);
        }
        Ok(published)
    }
}
