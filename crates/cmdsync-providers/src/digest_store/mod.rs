//! Digest store implementations
//!
//! | Store | Description |
//! |-------|-------------|
//! | [`FileDigestStore`] | Raw record in the user cache directory |
//! | [`InMemoryDigestStore`] | Process-local, for dry runs and tests |

pub mod file;
pub mod in_memory;

pub use file::FileDigestStore;
pub use in_memory::InMemoryDigestStore;
