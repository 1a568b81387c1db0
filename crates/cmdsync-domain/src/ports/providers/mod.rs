//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | CommandRegistryProvider | Remote registry of application commands |
//! | CommandTranslator | Localized command payloads |

/// Command registry port
pub mod registry;
/// Translator port
pub mod translator;

pub use registry::CommandRegistryProvider;
pub use translator::CommandTranslator;
