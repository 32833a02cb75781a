//! # gr-core
//!
//! Core domain models and ports for Granular, a granule-level property
//! copy/paste engine for a design-tool host.
//!
//! This crate contains pure domain logic without any infrastructure dependencies.

pub mod config;
pub mod granule;
pub mod ids;
pub mod node;
pub mod paint;
pub mod ports;
pub mod preview;
pub mod record;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use granule::{Granule, GranuleBundle, ValueShape};
pub use ids::{NodeId, StyleId, VariableId};
pub use node::{Capabilities, FontName, NodeKind, NodeValue};
pub use paint::Paint;
pub use preview::{PanelSize, PreviewLabel, PreviewTarget};
pub use record::{AncestorEntry, ExtractedProperties, PropertyRecord};
