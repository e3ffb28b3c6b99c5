// Widget partitioning by brand range
use super::brand_query::BrandQuery;
use super::brand_range::BrandRange;
use super::dashboard::{DashboardBody, Widget};

/// Widgets selected for one range, with queries restricted to that range's brands.
#[derive(Debug, Clone, PartialEq)]
pub struct RangePartition {
    pub range: BrandRange,
    pub widgets: Vec<Widget>,
}

impl RangePartition {
    pub fn body(&self) -> DashboardBody {
        DashboardBody::new(self.widgets.clone())
    }
}

/// Split widgets into one partition per range, in range order.
///
/// A widget lands in every range that holds at least one of its brands.
/// Widgets whose query names no brand land nowhere.
pub fn partition_widgets(widgets: &[Widget], ranges: &[BrandRange]) -> Vec<RangePartition> {
    let parsed: Vec<(&Widget, BrandQuery)> = widgets
        .iter()
        .filter_map(|widget| {
            let query = widget.query().unwrap_or_default();
            match BrandQuery::parse(query) {
                Some(brand_query) => Some((widget, brand_query)),
                None => {
                    tracing::debug!("Dropping widget without brand source: {:?}", query);
                    None
                }
            }
        })
        .collect();

    ranges
        .iter()
        .map(|range| {
            let widgets = parsed
                .iter()
                .filter_map(|(widget, brand_query)| {
                    brand_query
                        .rewrite_for(range)
                        .map(|query| widget.with_query(query))
                })
                .collect();

            RangePartition {
                range: range.clone(),
                widgets,
            }
        })
        .collect()
}
