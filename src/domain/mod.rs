// Domain layer - Brand ranges, widget queries and partitioning
pub mod brand_query;
pub mod brand_range;
pub mod dashboard;
pub mod partition;
