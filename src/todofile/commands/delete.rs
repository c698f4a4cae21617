use crate::commands::{CmdMessage, CmdResult};
use crate::model::ItemId;
use crate::store::backend::StorageBackend;
use crate::store::item_store::{DeleteOutcome, ItemStore};

pub fn run<B: StorageBackend>(store: &mut ItemStore<B>, id: ItemId) -> CmdResult {
    let mut result = CmdResult::default();

    match store.delete(id) {
        DeleteOutcome::NotFound(id) => {
            result.not_found = true;
            result.add_message(CmdMessage::warning(format!(
                "Cannot find todo with id {}",
                id
            )));
            result
        }
        DeleteOutcome::Deleted(mutation) => {
            result.add_message(CmdMessage::success(format!(
                "Todo with id {} was successfully deleted.",
                mutation.item.id
            )));
            if let Some(diagnostic) = mutation.save_error {
                result.add_diagnostic(diagnostic);
            }
            result.with_affected_items(vec![mutation.item])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, list};
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn removes_item() {
        let (mut store, _) = ItemStore::load(MemBackend::new());
        add::run(&mut store, "A").unwrap();
        add::run(&mut store, "B").unwrap();

        let result = run(&mut store, 1);
        assert!(!result.not_found);
        assert_eq!(result.affected_items[0].title(), "A");
        assert!(result.messages[0].content.contains("successfully deleted"));

        let listed = list::run(&store);
        assert_eq!(listed.listed_items.len(), 1);
        assert_eq!(listed.listed_items[0].id, 2);
    }

    #[test]
    fn unknown_id_is_flagged() {
        let (mut store, _) = ItemStore::load(MemBackend::new());
        add::run(&mut store, "A").unwrap();

        let result = run(&mut store, 42);
        assert!(result.not_found);
        assert!(result.affected_items.is_empty());
        assert_eq!(result.messages[0].content, "Cannot find todo with id 42");
        assert_eq!(store.items().len(), 1);
    }
}
