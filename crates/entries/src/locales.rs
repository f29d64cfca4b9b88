use tracing::debug;

use crate::error::StoreResult;
use crate::locale::Locale;
use crate::model::EntryId;
use crate::store::ContentStore;

/// Locales in which entry `entry_id` is published, sorted by code.
///
/// Always contains `current`; the alternate locale is included only when the
/// store has a live counterpart with the same id.
pub fn available_locales(
    store: &dyn ContentStore,
    entry_id: EntryId,
    current: Locale,
) -> StoreResult<Vec<Locale>> {
    let alternate = current.alternate();
    let mut locales = vec![current];

    if store.find(entry_id, alternate)?.is_some() {
        locales.push(alternate);
    }
    locales.sort();

    debug!(entry_id, current = %current, available = locales.len(), "available_locales");
    Ok(locales)
}
