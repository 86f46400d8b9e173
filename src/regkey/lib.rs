//! # Regkey Architecture
//!
//! Regkey manages API keys against a remote package registry. It is a
//! library with a CLI client on top, not a CLI that happens to export
//! some functions — every operation is reachable without a terminal.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs)                             │
//! │  - Parses arguments, prints tables/messages, exit codes    │
//! │  - The ONLY place that knows about stdout/stderr           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - Command dispatcher: operation name → command module     │
//! │  - Resolves credentials in the right access mode           │
//! │  - Validates option shapes, returns Result<CmdResult>     │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - One module per operation, pure logic, no I/O            │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Client Seam (client/)                                     │
//! │  - RegistryClient trait                                    │
//! │  - HttpRegistry (production), InMemoryRegistry (testing)   │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns
//! `Result<CmdResult>`, never writes to stdout/stderr and never calls
//! `std::process::exit`. The network call inside the client is the only
//! blocking external interaction, and it sits behind a trait.
//!
//! ## Module Overview
//!
//! - [`api`]: The dispatcher facade — entry point for all operations
//! - [`commands`]: One module per operation (generate, fetch, list, revoke)
//! - [`client`]: Registry client trait and its two implementations
//! - [`model`]: Core data types (`KeyRecord`, `Permission`, `Operation`)
//! - [`permissions`]: `domain:resource` token parsing
//! - [`config`]: Registry config and credential resolution
//! - [`render`]: Table rendering for list and detail views
//! - [`report`]: Error-to-display-string mapping
//! - [`error`]: Error types

pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod permissions;
pub mod render;
pub mod report;
