pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use tracing::init_tracing_subscriber;
pub use wiring::{wire_dependencies, HostPorts, WiringError, WiringResult};
