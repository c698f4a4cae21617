//! # Todofile Architecture
//!
//! Todofile is a small to-do list kept in one plain text file. The library holds
//! every rule about that list; the binary is only a menu loop on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags, resolves config, runs the numeric menu     │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns store outcomes into `CmdResult` messages           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/) + Record Codec (codec.rs)           │
//! │  - ItemStore: ids, order, rewrite-on-mutation               │
//! │  - StorageBackend: FsBackend (production), MemBackend       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Fatal Errors in the Core
//!
//! Unreadable lines, a missing file, permission problems and failed saves are
//! all reported as [`store::Diagnostic`] values. The list stays usable after
//! each of them. The only error the core returns to a caller is an empty
//! title on add.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation (load, add, delete, list)
//! - [`store`]: Item store, backends and diagnostics
//! - [`codec`]: The `{id:N, title:"..."}` line format
//! - [`model`]: The `Item` type
//! - [`config`]: Optional JSON configuration
//! - [`error`]: Error types
//! - `cli`: flag parsing, logging setup and the menu loop (binary only)

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;
