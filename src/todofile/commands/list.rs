use crate::commands::CmdResult;
use crate::store::backend::StorageBackend;
use crate::store::item_store::ItemStore;

pub fn run<B: StorageBackend>(store: &ItemStore<B>) -> CmdResult {
    CmdResult::default().with_listed_items(store.items().to_vec())
}
