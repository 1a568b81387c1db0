//! Command registry provider implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`HttpCommandRegistry`] | Platform REST API (feature `registry-http`) |
//! | [`InMemoryCommandRegistry`] | Local registry for development and tests (feature `registry-memory`) |

#[cfg(feature = "registry-http")]
pub mod http;
#[cfg(feature = "registry-memory")]
pub mod in_memory;

#[cfg(feature = "registry-http")]
pub use http::HttpCommandRegistry;
#[cfg(feature = "registry-memory")]
pub use in_memory::InMemoryCommandRegistry;
