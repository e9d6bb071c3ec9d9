use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::now_millis;
use crate::samples::sample_listings;
use crate::store::{ListingStore, StorageBackend};

use super::helpers::indexed_listings;

/// Replaces every listing with the demonstration set.
pub fn run<B: StorageBackend>(store: &mut ListingStore<B>) -> Result<CmdResult> {
    let replaced = store.len();
    let mutation = store.seed(sample_listings(now_millis()))?;

    let mut result = CmdResult::default();
    result.affected_listings = indexed_listings(store);
    let message = if replaced == 0 {
        format!("Seeded {} sample listings", store.len())
    } else {
        format!(
            "Seeded {} sample listings, replacing {} existing",
            store.len(),
            replaced
        )
    };
    result.record_mutation(store, mutation, message);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::mem_backend::fixtures::{empty_store, form};

    #[test]
    fn seeding_replaces_existing_listings() {
        let mut store = empty_store();
        create::run(&mut store, form("Mine")).unwrap();

        let result = run(&mut store).unwrap();

        assert_eq!(store.len(), 3);
        assert!(store.listings().iter().all(|l| l.title != "Mine"));
        assert_eq!(result.affected_listings.len(), 3);
        assert!(result.messages[0].content.contains("replacing 1"));
    }

    #[test]
    fn seeding_twice_is_stable() {
        let mut store = empty_store();
        run(&mut store).unwrap();
        run(&mut store).unwrap();
        assert_eq!(store.len(), 3);
    }
}
