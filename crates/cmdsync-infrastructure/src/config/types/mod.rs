//! Configuration types module

pub mod app;
pub mod logging;
pub mod registry;
pub mod sync;

// Re-export main types
pub use app::*;
pub use logging::*;
pub use registry::*;
pub use sync::*;
