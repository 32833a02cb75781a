//! Paste engine
//! 粘贴引擎

mod summary;

use std::sync::Arc;

use futures::future::join_all;
use gr_core::granule::{apply_granule, Granule};
use gr_core::node::{is_auto_layout_container, read_number, FontName, NodeValue};
use gr_core::ports::{DesignNodePort, FontLoaderPort};
use gr_core::record::PropertyRecord;
use tracing::{debug, error, info, info_span, Instrument};

pub use summary::PasteSummary;

/// Auto-layout sizing modes, copied instead of resizing inside auto layout.
const SIZING_MODES: [Granule; 2] = [Granule::PrimaryAxisSizingMode, Granule::CounterAxisSizingMode];

/// What one target node contributed to the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeOutcome {
    Applied,
    /// Exposed a requested granule but every write failed. Counted nowhere.
    AllFailed,
    Skipped(String),
}

#[derive(Default)]
struct NodeProgress {
    supported_any: bool,
    applied_any: bool,
}

/// Applies granules of a stored record to target nodes.
///
/// # Behavior / 行为
/// - Text targets get their font loaded before text granules are written
/// - `width`/`height` become sizing-mode copies inside auto layout and a
///   resize elsewhere
/// - Every other granule is written through the setter table
///
/// Targets are processed concurrently; failures are isolated per node and
/// per granule and only show up in the [`PasteSummary`].
/// 每个节点、每个属性的失败都是隔离的。
pub struct ApplyProperties {
    fonts: Arc<dyn FontLoaderPort>,
}

impl ApplyProperties {
    pub fn new(fonts: Arc<dyn FontLoaderPort>) -> Self {
        Self { fonts }
    }

    pub async fn execute(
        &self,
        record: &PropertyRecord,
        granules: &[Granule],
        targets: &[Arc<dyn DesignNodePort>],
    ) -> PasteSummary {
        let span = info_span!(
            "usecase.apply_properties.execute",
            source = %record.id,
            granules = granules.len(),
            targets = targets.len(),
        );

        async {
            let outcomes = join_all(
                targets
                    .iter()
                    .map(|node| self.apply_to_node(record, granules, node.as_ref())),
            )
            .await;

            let mut summary = PasteSummary::default();
            for outcome in outcomes {
                match outcome {
                    NodeOutcome::Applied => summary.success_count += 1,
                    NodeOutcome::AllFailed => {}
                    NodeOutcome::Skipped(name) => summary.skipped_node_names.push(name),
                }
            }

            info!(
                success_count = summary.success_count,
                skipped = summary.skipped_node_names.len(),
                "Paste finished"
            );
            summary
        }
        .instrument(span)
        .await
    }

    async fn apply_to_node(
        &self,
        record: &PropertyRecord,
        granules: &[Granule],
        node: &dyn DesignNodePort,
    ) -> NodeOutcome {
        let mut progress = NodeProgress::default();

        if node.kind().is_ranged_text() && granules.iter().any(|g| g.is_text_property()) {
            self.prepare_font(record, node).await;
        }

        if granules.iter().any(|g| g.is_size()) {
            apply_size(record, node, &mut progress);
        }

        for granule in granules.iter().copied().filter(|g| !g.is_size()) {
            let Some(value) = record.get(granule) else {
                continue;
            };
            if !node.has(granule) {
                continue;
            }
            progress.supported_any = true;
            match apply_granule(node, granule, value) {
                Ok(()) => progress.applied_any = true,
                Err(e) => error!(node = %node.name(), granule = %granule, error = %e, "Failed to apply granule"),
            }
        }

        if progress.applied_any {
            NodeOutcome::Applied
        } else if progress.supported_any {
            debug!(node = %node.name(), "Node supported the paste but every write failed");
            NodeOutcome::AllFailed
        } else {
            NodeOutcome::Skipped(node.name())
        }
    }

    /// Loads the font text writes will need. Failure only gets logged.
    async fn prepare_font(&self, record: &PropertyRecord, node: &dyn DesignNodePort) {
        let Some(font) = record.font_name().or_else(|| current_font(node)) else {
            debug!(node = %node.name(), "No font to preload");
            return;
        };
        if let Err(e) = self.fonts.load_font(&font).await {
            error!(node = %node.name(), font = %font, error = %e, "Failed to load font");
        }
    }
}

/// The node's own font; a mixed font falls back to the first character's.
fn current_font(node: &dyn DesignNodePort) -> Option<FontName> {
    let value = match node.get(Granule::FontName)? {
        NodeValue::Value(value) => value,
        NodeValue::Mixed => node.sample_text_range(Granule::FontName, 0, 1)?,
    };
    serde_json::from_value(value).ok()
}

fn apply_size(record: &PropertyRecord, node: &dyn DesignNodePort, progress: &mut NodeProgress) {
    let in_auto_layout = node
        .parent()
        .map_or(false, |parent| is_auto_layout_container(parent.as_ref()));

    if in_auto_layout && record.has_sizing_modes() {
        for granule in SIZING_MODES {
            let Some(value) = record.get(granule) else {
                continue;
            };
            if !node.has(granule) {
                continue;
            }
            match apply_granule(node, granule, value) {
                Ok(()) => progress.applied_any = true,
                Err(e) => error!(node = %node.name(), granule = %granule, error = %e, "Failed to apply sizing mode"),
            }
        }
        progress.supported_any = true;
        return;
    }

    if !node.can_resize() {
        return;
    }
    progress.supported_any = true;

    let width = record.number(Granule::Width).or_else(|| read_number(node, Granule::Width));
    let height = record.number(Granule::Height).or_else(|| read_number(node, Granule::Height));
    let (Some(width), Some(height)) = (width, height) else {
        error!(node = %node.name(), "No size to resize to");
        return;
    };

    match node.resize(width, height) {
        Ok(()) => progress.applied_any = true,
        Err(e) => error!(node = %node.name(), width, height, error = %e, "Failed to resize"),
    }
}
