use std::collections::HashSet;

use gr_core::granule::Granule;

/// Result of one paste pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteSummary {
    /// Nodes where at least one assignment succeeded.
    pub success_count: usize,
    /// Names of nodes that exposed none of the requested granules, in
    /// selection order. May repeat when several nodes share a name.
    pub skipped_node_names: Vec<String>,
}

impl PasteSummary {
    /// Skipped names with repeats removed, first occurrence order.
    pub fn unique_skipped_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.skipped_node_names
            .iter()
            .map(String::as_str)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Notification text, e.g. `Pasted fills to 2 objects. Skipped Group 1 (incompatible).`
    pub fn message(&self, granules: &[Granule]) -> String {
        let labels = if granules.len() > 3 {
            format!("{} properties", granules.len())
        } else {
            granules
                .iter()
                .map(|granule| granule.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let noun = if self.success_count == 1 { "object" } else { "objects" };

        let mut message = format!("Pasted {labels} to {} {noun}", self.success_count);
        let skipped = self.unique_skipped_names();
        if !skipped.is_empty() {
            message.push_str(&format!(". Skipped {} (incompatible).", skipped.join(", ")));
        }
        message
    }
}
