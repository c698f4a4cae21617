use crate::commands::{CmdMessage, CmdResult};
use crate::store::backend::StorageBackend;
use crate::store::item_store::ItemStore;

pub fn run<B: StorageBackend>(backend: B) -> (ItemStore<B>, CmdResult) {
    let (store, diagnostics) = ItemStore::load(backend);
    let mut result = CmdResult::default();

    for diagnostic in diagnostics {
        result.add_diagnostic(diagnostic);
    }
    if !store.items().is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Loaded {} todo(s) from {}",
            store.items().len(),
            store.location()
        )));
    }

    (store, result)
}
