//! Domain layer constants
//!
//! Limits imposed by the remote command registry and the fixed parameters of
//! the change detector. Infrastructure-specific constants live in
//! `cmdsync_infrastructure::constants`.

// ============================================================================
// COMMAND SHAPE LIMITS
// ============================================================================

/// Maximum length of a command, group or option name
pub const COMMAND_NAME_MAX_LENGTH: usize = 32;

/// Maximum length of a command or option description
pub const COMMAND_DESCRIPTION_MAX_LENGTH: usize = 100;

/// Maximum number of options or children attached to a single node
pub const COMMAND_OPTIONS_MAX: usize = 25;

/// Maximum number of choices attached to a single option
pub const OPTION_CHOICES_MAX: usize = 25;

/// Maximum number of top-level commands per scope
pub const SCOPE_COMMANDS_MAX: usize = 100;

/// Maximum depth of a command tree (group > subgroup > command)
pub const COMMAND_TREE_MAX_DEPTH: usize = 3;

/// Separator between the segments of a qualified command name
pub const QUALIFIED_NAME_SEPARATOR: char = ' ';

// ============================================================================
// DIGEST CONSTANTS
// ============================================================================

/// Seed for the command tree digest; fixed so digests are reproducible
pub const DIGEST_SEED: u64 = 1;

/// Size in bytes of a command tree digest
pub const DIGEST_LENGTH: usize = 8;
