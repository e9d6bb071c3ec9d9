//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every campusmart operation, whichever UI is driving it.
//!
//! The facade:
//! - **Opens** the listing store once, using the configured storage key
//! - **Normalizes inputs** (selector strings into [`ListingSelector`]s)
//! - **Dispatches** to the matching `commands::*::run`
//! - **Returns structured types** (`Result<CmdResult>`), never text for a terminal
//!
//! ## Selectors
//!
//! Anywhere a listing is named, the input may be its display index (`3`), its full
//! id, or a unique id prefix (`0192f3`). Duplicate selectors are collapsed while
//! keeping the order they were given in.
//!
//! ## Generic Over StorageBackend
//!
//! `MarketApi<B: StorageBackend>` runs on `FsBackend` in production and on
//! `MemBackend` in tests, so this layer is tested without touching the disk.

use std::collections::HashSet;
use std::path::Path;

use crate::commands;
use crate::config::MarketConfig;
use crate::error::{MarketError, Result};
use crate::form::ListingForm;
use crate::index::ListingSelector;
use crate::model::FilterState;
use crate::store::{ListingStore, Persistence, StorageBackend};

pub use crate::commands::config::ConfigAction;
pub use crate::commands::edit::EditInput;
pub use crate::commands::{CmdMessage, CmdResult, ContactCard, MessageLevel};

/// The main API facade for marketplace operations.
pub struct MarketApi<B: StorageBackend> {
    store: ListingStore<B>,
    config: MarketConfig,
}

impl<B: StorageBackend> MarketApi<B> {
    /// Opens the store on `backend`, loading whatever is persisted under the
    /// configured storage key.
    pub fn open(backend: B, config: MarketConfig) -> Self {
        let persistence = Persistence::new(backend, config.storage_key.clone());
        Self {
            store: ListingStore::open(persistence),
            config,
        }
    }

    /// Re-reads the collection from storage, dropping unsaved in-memory changes.
    pub fn load(&mut self) {
        self.store.reload();
    }

    pub fn close(self) -> B {
        self.store.close()
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    pub fn store(&self) -> &ListingStore<B> {
        &self.store
    }

    pub fn view(&self, filters: &FilterState) -> Result<CmdResult> {
        commands::list::run(&self.store, filters)
    }

    pub fn create(&mut self, form: ListingForm) -> Result<CmdResult> {
        commands::create::run(&mut self.store, form)
    }

    pub fn edit(&mut self, selector: &str, input: EditInput) -> Result<CmdResult> {
        let selector = parse_selector(selector)?;
        commands::edit::run(&mut self.store, &selector, input)
    }

    /// Create-or-update keyed on the form's id.
    pub fn submit(&mut self, form: ListingForm) -> Result<CmdResult> {
        commands::submit::run(&mut self.store, form)
    }

    pub fn remove<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.store, &selectors)
    }

    pub fn seed_samples(&mut self) -> Result<CmdResult> {
        commands::seed::run(&mut self.store)
    }

    pub fn details<I: AsRef<str>>(&self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.store, &selectors)
    }

    pub fn contact(&self, selector: &str) -> Result<CmdResult> {
        let selector = parse_selector(selector)?;
        commands::contact::run(&self.store, &selector)
    }
}

/// Reads or changes the config file in `dir`. Needs no open store.
pub fn configure(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(dir, action)
}

fn parse_selector(input: &str) -> Result<ListingSelector> {
    input.parse().map_err(MarketError::Api)
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<ListingSelector>> {
    if inputs.is_empty() {
        return Err(MarketError::Api("No listing selected".to_string()));
    }

    let mut seen = HashSet::new();
    let mut selectors = Vec::with_capacity(inputs.len());
    for input in inputs {
        let selector = parse_selector(input.as_ref())?;
        if seen.insert(selector.to_string()) {
            selectors.push(selector);
        }
    }
    Ok(selectors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ListingPatch;
    use crate::model::Category;
    use crate::store::mem_backend::fixtures::form;
    use crate::store::mem_backend::MemBackend;
    use crate::store::StorageBackend;

    fn api() -> MarketApi<MemBackend> {
        MarketApi::open(MemBackend::new(), MarketConfig::default())
    }

    fn seeded() -> MarketApi<MemBackend> {
        let mut api = api();
        api.seed_samples().unwrap();
        api
    }

    #[test]
    fn test_parse_selectors_dedupes_in_order() {
        let selectors = parse_selectors(&["2", "abc", "2"]).unwrap();
        assert_eq!(
            selectors,
            vec![
                ListingSelector::Index(2),
                ListingSelector::Id("abc".to_string())
            ]
        );
    }

    #[test]
    fn test_parse_selectors_rejects_zero_and_empty() {
        assert!(parse_selectors(&["0"]).is_err());
        assert!(parse_selectors::<&str>(&[]).is_err());
        assert!(parse_selector("  ").is_err());
    }

    #[test]
    fn test_uses_configured_storage_key() {
        let config = MarketConfig {
            storage_key: "other_key".to_string(),
            ..MarketConfig::default()
        };
        let mut api = MarketApi::open(MemBackend::new(), config);
        api.create(form("Lamp")).unwrap();

        let backend = api.close();
        assert!(backend.raw("other_key").is_some());
        assert!(backend.raw("cmp_listings_v1").is_none());
    }

    #[test]
    fn test_reopen_sees_previous_session() {
        let mut api = api();
        api.create(form("Lamp")).unwrap();
        let api = MarketApi::open(api.close(), MarketConfig::default());
        assert_eq!(api.store().len(), 1);
    }

    #[test]
    fn test_load_drops_unsaved_changes() {
        let mut api = api();
        api.store.persistence().backend().set_simulate_write_error(true);
        api.create(form("Lost")).unwrap();
        assert_eq!(api.store().len(), 1);

        api.load();
        assert!(api.store().is_empty());
    }

    #[test]
    fn test_view_dispatches_filters() {
        let api = seeded();
        let result = api
            .view(&FilterState::default().with_category("books".parse().unwrap()))
            .unwrap();
        assert_eq!(result.listed_listings.len(), 1);
        assert_eq!(result.listed_listings[0].listing.category, Category::Books);
    }

    #[test]
    fn test_edit_by_index() {
        let mut api = seeded();
        let patch = ListingPatch {
            title: Some("Renamed".into()),
            ..Default::default()
        };
        api.edit("3", EditInput::Patch(patch)).unwrap();
        assert_eq!(api.store().listings()[2].title, "Renamed");
    }

    #[test]
    fn test_remove_by_id_prefix() {
        let mut api = seeded();
        let id = api.store().listings()[0].id.to_string();
        api.remove(&[&id[..28]]).unwrap();
        assert_eq!(api.store().len(), 2);
    }

    #[test]
    fn test_details_and_contact() {
        let api = seeded();
        let details = api.details(&["1", "2"]).unwrap();
        assert_eq!(details.listed_listings.len(), 2);

        let contact = api.contact("2").unwrap();
        assert!(contact.contact.is_some());
    }

    #[test]
    fn test_submit_upserts() {
        let mut api = seeded();
        let mut edit = ListingForm::from_listing(&api.store().listings()[0]);
        edit.price = "50".into();
        api.submit(edit).unwrap();
        assert_eq!(api.store().len(), 3);
        assert_eq!(api.store().listings()[0].price, 50);

        api.submit(form("Fresh")).unwrap();
        assert_eq!(api.store().len(), 4);
    }

    #[test]
    fn test_location_is_exposed_for_messages() {
        let api = api();
        assert_eq!(
            api.store().persistence().backend().location("cmp_listings_v1"),
            std::path::PathBuf::from("memory://cmp_listings_v1")
        );
    }

    #[test]
    fn test_configure_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        configure(
            dir.path(),
            ConfigAction::Set("currency".into(), "$".into()),
        )
        .unwrap();
        let shown = configure(dir.path(), ConfigAction::ShowKey("currency".into())).unwrap();
        assert_eq!(shown.messages[0].content, "$");
    }
}
