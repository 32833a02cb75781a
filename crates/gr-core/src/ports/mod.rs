//! Port interfaces for the application layer
//!
//! Ports are the contract between the copy/paste use cases and everything
//! the engine does not own: the host scene graph, its style and variable
//! registries, font loading, key-value persistence, the current selection and
//! user notification. Use cases only ever see `Arc<dyn Port>`.

pub mod errors;
mod font_loader;
mod key_value_store;
mod node;
mod notifier;
mod selection;
mod style_registry;
mod variable_registry;

#[cfg(test)]
pub(crate) mod tests;

pub use errors::{KeyValueStoreError, NodeWriteError, ResizeError};
pub use font_loader::FontLoaderPort;
pub use key_value_store::KeyValueStorePort;
pub use node::DesignNodePort;
pub use notifier::{NotifierPort, UiMessage};
pub use selection::SelectionPort;
pub use style_registry::{StyleInfo, StyleRegistryPort};
pub use variable_registry::{VariableInfo, VariableRegistryPort};
