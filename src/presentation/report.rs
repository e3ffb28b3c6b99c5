// Console output for publish results and generated widget sets
use crate::application::split_service::PublishedDashboard;
use crate::domain::partition::RangePartition;
use std::collections::HashSet;

pub fn render_published(published: &PublishedDashboard) -> String {
    format!(
        "Dashboard {} creation response: {}",
        published.name, published.outcome
    )
}

pub fn print_published(published: &PublishedDashboard) {
    println!("{}", render_published(published));
}

pub fn print_dry_run(dashboard_name: &str, partition: &RangePartition) {
    println!(
        "Dry run: dashboard {} would hold {} widgets",
        dashboard_name,
        partition.widgets.len()
    );
}

/// Pretty-printed widget sets, one block per distinct range key.
/// A range repeated in the input is shown once, at its first position.
pub fn render_widgets(partitions: &[RangePartition]) -> serde_json::Result<String> {
    let mut shown = HashSet::new();
    let mut out = String::new();
    for partition in partitions {
        if !shown.insert(partition.range.key()) {
            continue;
        }
        out.push_str(&format!("\nWidgets {}:\n", partition.range.label()));
        out.push_str(&serde_json::to_string_pretty(&partition.widgets)?);
        out.push('\n');
    }
    Ok(out)
}

pub fn print_widgets(partitions: &[RangePartition]) -> serde_json::Result<()> {
    print!("{}", render_widgets(partitions)?);
    Ok(())
}
