//! In-memory reference host
//!
//! A small scene graph with the same contracts as a real design-tool host:
//! kind-based capabilities, mixed values, ranged text sampling, font gating
//! of text writes, resize and raster export. Used for wiring and tests.

mod font_loader;
mod memory_node;
mod notifier;
mod registries;
mod selection;

pub use font_loader::MemoryFontLoader;
pub use memory_node::MemoryNode;
pub use notifier::RecordingNotifier;
pub use registries::{MemoryStyleRegistry, MemoryVariableRegistry};
pub use selection::MemorySelection;

use std::sync::{Mutex, MutexGuard};

/// Locks a mutex, recovering the data if a holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
