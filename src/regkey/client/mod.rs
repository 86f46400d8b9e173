//! # Registry client seam
//!
//! The registry is reached through the [`RegistryClient`] trait so the
//! command layer never knows about transports:
//!
//! - [`http::HttpRegistry`]: production client speaking the registry's
//!   JSON HTTP API (blocking, single-shot, no retries)
//! - [`memory::InMemoryRegistry`]: in-process double for tests, with call
//!   counters and injectable failures
//!
//! All methods are synchronous and fail fast; retry policy, if any, belongs
//! to the transport behind the trait, not to the callers.

use crate::config::Credentials;
use crate::error::Result;
use crate::model::{KeyRecord, Permission};

pub mod http;
pub mod memory;

/// Abstract interface to the key endpoints of the package registry.
pub trait RegistryClient {
    /// Create a new key. When `name` is `None` the registry picks one.
    /// The returned record carries the one-time secret.
    fn key_add(
        &mut self,
        creds: &Credentials,
        name: Option<&str>,
        permissions: &[Permission],
    ) -> Result<KeyRecord>;

    /// Fetch a single key by name
    fn key_get(&self, creds: &Credentials, name: &str) -> Result<KeyRecord>;

    /// List all keys attached to the account
    fn key_list(&self, creds: &Credentials) -> Result<Vec<KeyRecord>>;

    /// Revoke a single key by name
    fn key_delete(&mut self, creds: &Credentials, name: &str) -> Result<()>;

    /// Revoke every key attached to the account
    fn key_delete_all(&mut self, creds: &Credentials) -> Result<()>;
}
