use crate::commands::CmdResult;
use crate::error::Result;
use crate::form::ListingForm;
use crate::index::DisplayListing;
use crate::store::{ListingStore, StorageBackend};

/// Posts a new listing. Any id on the form is ignored: creation always mints one.
pub fn run<B: StorageBackend>(store: &mut ListingStore<B>, mut form: ListingForm) -> Result<CmdResult> {
    form.id = None;
    let listing = form.into_listing()?;
    let title = listing.title.clone();

    let mutation = store.insert(listing.clone())?;

    let mut result = CmdResult::default();
    // New listings go to the front, so they always get index 1
    result.affected_listings.push(DisplayListing { index: 1, listing });
    result.record_mutation(store, mutation, format!("Listing created: {}", title));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::MarketError;
    use crate::form::{RequiredField, ValidationError};
    use crate::store::mem_backend::fixtures::{empty_store, form, seeded_store};

    #[test]
    fn creates_at_front_with_fresh_id() {
        let mut store = seeded_store();
        let mut input = form("Used Bicycle");
        input.id = Some("sneaky".into());

        let result = run(&mut store, input).unwrap();

        assert_eq!(store.len(), 4);
        assert_eq!(store.listings()[0].title, "Used Bicycle");
        assert_ne!(store.listings()[0].id.as_str(), "sneaky");
        assert_eq!(result.affected_listings[0].index, 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn empty_title_is_rejected_and_store_unchanged() {
        let mut store = seeded_store();
        let mut input = form("");
        input.title = "   ".into();

        let result = run(&mut store, input);

        assert!(matches!(
            result,
            Err(MarketError::Validation(ValidationError::MissingField(
                RequiredField::Title
            )))
        ));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn warns_when_write_back_fails() {
        let mut store = empty_store();
        store.persistence().backend().set_simulate_write_error(true);

        let result = run(&mut store, form("Kettle")).unwrap();

        assert_eq!(store.len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
    }
}
