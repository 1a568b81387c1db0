//! # cmdsync Providers
//!
//! Adapter implementations of the domain port traits.
//!
//! ## Provider Categories
//!
//! | Module | Port | Description |
//! |--------|------|-------------|
//! | [`registry`] | `CommandRegistryProvider` | REST API and in-memory registries |
//! | [`translator`] | `CommandTranslator` | Locale table translator |
//! | [`digest_store`] | `DigestStoreProvider` | File and in-memory digest records |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `registry-http` | REST registry over reqwest (default) |
//! | `registry-memory` | In-memory registry (default) |

pub mod constants;
pub mod digest_store;
#[cfg(feature = "registry-http")]
pub mod http;
pub mod registry;
pub mod translator;
pub mod utils;

pub use cmdsync_domain::error::{Error, Result};

pub use digest_store::{FileDigestStore, InMemoryDigestStore};
#[cfg(feature = "registry-http")]
pub use http::HttpClientConfig;
#[cfg(feature = "registry-http")]
pub use registry::HttpCommandRegistry;
#[cfg(feature = "registry-memory")]
pub use registry::InMemoryCommandRegistry;
pub use translator::LocaleTableTranslator;
