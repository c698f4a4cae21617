use super::backend::StorageBackend;
use super::{Diagnostic, DiagnosticKind};
use crate::codec::{self, Malformed, ParseOutcome};
use crate::error::{Result, TodoError};
use crate::model::{Item, ItemId};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Result of a mutation that was applied in memory.
///
/// `save_error` is set when rewriting the file failed. The change is kept in
/// memory regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub item: Item,
    pub save_error: Option<Diagnostic>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Mutation),
    NotFound(ItemId),
}

/// The ordered list of todos plus the backend that persists it.
pub struct ItemStore<B: StorageBackend> {
    backend: B,
    items: Vec<Item>,
}

impl<B: StorageBackend> ItemStore<B> {
    /// Read every line of the backend, keeping what parses.
    ///
    /// Never fails: bad lines, a missing file and read faults all come back
    /// as diagnostics, and items parsed before a fault are kept.
    pub fn load(backend: B) -> (Self, Vec<Diagnostic>) {
        let mut items: Vec<Item> = Vec::new();
        let mut seen: HashSet<ItemId> = HashSet::new();
        let mut diagnostics = Vec::new();

        let read = backend.read_lines(&mut |line| match codec::deserialize(&line) {
            ParseOutcome::Parsed(item) => {
                if seen.insert(item.id) {
                    items.push(item);
                } else {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticKind::DuplicateId,
                        format!("Skipping line '{}': id {} is already in use", line, item.id),
                    ));
                }
            }
            ParseOutcome::Unmatched => diagnostics.push(Diagnostic::new(
                DiagnosticKind::UnmatchedLine,
                format!("Line does not match expected format: '{}'", line),
            )),
            ParseOutcome::Malformed(Malformed::InvalidId) => diagnostics.push(Diagnostic::new(
                DiagnosticKind::MalformedId,
                format!("Error parsing line '{}': invalid id", line),
            )),
            ParseOutcome::Malformed(Malformed::IdOverflow) => diagnostics.push(Diagnostic::new(
                DiagnosticKind::IdOverflow,
                format!("Error parsing line '{}': id is too large", line),
            )),
        });

        if let Err(e) = read {
            diagnostics.push(Diagnostic::from_read_error(&e, &backend.location()));
        }

        for d in &diagnostics {
            if d.kind != DiagnosticKind::FileNotFound {
                warn!(kind = ?d.kind, "{}", d.detail);
            }
        }
        debug!(
            items = items.len(),
            location = %backend.location(),
            "loaded todos"
        );

        (Self { backend, items }, diagnostics)
    }

    /// Rewrite the whole backend from the current list.
    pub fn save(&self) -> std::result::Result<(), Diagnostic> {
        let lines = codec::to_lines(&self.items);
        match self.backend.write_lines(&lines) {
            Ok(()) => {
                debug!(items = lines.len(), "saved todos");
                Ok(())
            }
            Err(e) => {
                let diagnostic = Diagnostic::from_write_error(&e, &self.backend.location());
                warn!(kind = ?diagnostic.kind, "{}", diagnostic.detail);
                Err(diagnostic)
            }
        }
    }

    /// Append a todo with the smallest free id and persist.
    pub fn add(&mut self, title: &str) -> Result<Mutation> {
        if title.is_empty() {
            return Err(TodoError::InvalidTitle);
        }

        let item = Item::new(self.next_id()?, title);
        self.items.push(item.clone());
        debug!(id = item.id, "added todo");

        Ok(Mutation {
            save_error: self.save().err(),
            item,
        })
    }

    /// Remove the todo with `id` and persist. Other todos keep their ids.
    pub fn delete(&mut self, id: ItemId) -> DeleteOutcome {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            debug!(id, "todo to delete not found");
            return DeleteOutcome::NotFound(id);
        };

        let item = self.items.remove(pos);
        debug!(id, "deleted todo");

        DeleteOutcome::Deleted(Mutation {
            save_error: self.save().err(),
            item,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn location(&self) -> String {
        self.backend.location()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Smallest positive id not currently used.
    pub fn next_id(&self) -> Result<ItemId> {
        let used: HashSet<ItemId> = self.items.iter().map(|item| item.id).collect();
        (1..=ItemId::MAX)
            .find(|id| !used.contains(id))
            .ok_or(TodoError::IdsExhausted)
    }
}
