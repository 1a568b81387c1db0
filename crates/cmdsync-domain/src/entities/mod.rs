//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`CommandDefinition`] | Command tree registered by a command module |
//! | [`DeclaredCommand`] | One node of a command tree, addressed by qualified name |

/// Command definition trees
pub mod command;
/// Flattened command nodes
pub mod declared;

pub use command::{CommandDefinition, CommandOption, Localizations, OptionChoice, OptionType};
pub use declared::DeclaredCommand;
