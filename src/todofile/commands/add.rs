use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::item_store::ItemStore;

pub fn run<B: StorageBackend>(store: &mut ItemStore<B>, title: &str) -> Result<CmdResult> {
    let mutation = store.add(title)?;
    let mut result = CmdResult::default();

    result.add_message(CmdMessage::success(format!(
        "Todo added ({}): {}",
        mutation.item.id,
        mutation.item.title()
    )));
    if let Some(diagnostic) = mutation.save_error {
        result.add_diagnostic(diagnostic);
    }

    Ok(result.with_affected_items(vec![mutation.item]))
}
