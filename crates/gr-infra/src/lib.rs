pub mod document;
pub mod fs;
pub mod storage;

pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
