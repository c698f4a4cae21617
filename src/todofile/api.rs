//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every todo operation, whatever UI drives it.
//!
//! The API:
//! - **Dispatches** to the matching command function
//! - **Owns** the [`ItemStore`] so callers never touch the raw list
//! - **Returns structured types** (`CmdResult`), never strings or exit codes
//!
//! `TodoApi<B: StorageBackend>` is generic over the backend:
//! - Production: `TodoApi<FsBackend>`
//! - Testing: `TodoApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::model::{Item, ItemId};
use crate::store::backend::StorageBackend;
use crate::store::item_store::ItemStore;

pub use commands::{CmdMessage, CmdResult, MessageLevel};

pub struct TodoApi<B: StorageBackend> {
    store: ItemStore<B>,
}

impl<B: StorageBackend> TodoApi<B> {
    /// Load the store from `backend`. The returned result carries the load
    /// diagnostics.
    pub fn open(backend: B) -> (Self, commands::CmdResult) {
        let (store, result) = commands::load::run(backend);
        (Self { store }, result)
    }

    pub fn add(&mut self, title: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, title)
    }

    pub fn delete(&mut self, id: ItemId) -> commands::CmdResult {
        commands::delete::run(&mut self.store, id)
    }

    pub fn list(&self) -> commands::CmdResult {
        commands::list::run(&self.store)
    }

    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    pub fn location(&self) -> String {
        self.store.location()
    }

    pub fn store(&self) -> &ItemStore<B> {
        &self.store
    }
}
