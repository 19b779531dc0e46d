//! Page-scoped session state for the comparison widget.
//!
//! The catalog is loaded once per page session and is read-only afterwards.
//! `CompareSession` owns it together with the resolved category context and
//! the pair of selector choices, and is handed to components via context.

use std::collections::HashMap;

use contracts::domain::product_specs::{Catalog, CategoryContext, SelectionState, SelectorSlot};
use leptos::prelude::*;
use thiserror::Error;

use super::api;
use super::categories::CATEGORIES;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InitError {
    #[error("required page object is unavailable: {0}")]
    MissingElement(&'static str),

    #[error("no active category could be determined (requested: {requested:?})")]
    NoActiveCategory { requested: Option<String> },
}

#[derive(Clone, Copy)]
pub struct CompareSession {
    /// Loaded catalog; `None` until the fetch resolves, and forever after a
    /// failed load.
    pub catalog: RwSignal<Option<Catalog>>,
    /// Category context resolved once at initialization.
    pub category: RwSignal<Option<CategoryContext>>,
    pub selection: RwSignal<SelectionState>,
    pub load_error: RwSignal<Option<String>>,
    initialized: RwSignal<bool>,
}

impl CompareSession {
    pub fn new() -> Self {
        Self {
            catalog: RwSignal::new(None),
            category: RwSignal::new(None),
            selection: RwSignal::new(SelectionState::default()),
            load_error: RwSignal::new(None),
            initialized: RwSignal::new(false),
        }
    }

    /// Resolve the category context and start the one catalog fetch.
    ///
    /// Idempotent: repeated calls are ignored, so there is never more than
    /// one fetch and never duplicate change handling behind it.
    pub fn init(&self) {
        if !self.try_begin_init() {
            log::debug!("compare session already initialized, skipping");
            return;
        }

        let search = match window_search() {
            Ok(search) => search,
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        };

        let category = match category_from_search(&search, &CATEGORIES) {
            Ok(category) => category,
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        };
        log::info!("Current category: {}", category);
        self.category.set(Some(category.clone()));

        let session = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_catalog().await {
                Ok(catalog) => {
                    log::info!("Loaded data: {} products", catalog.len());
                    let matches = catalog.in_category(&category).count();
                    log::info!("Found {} products for category: {}", matches, category);
                    session.catalog.set(Some(catalog));
                }
                Err(e) => {
                    log::error!("{}", e);
                    session.load_error.set(Some(e.to_string()));
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message(
                            "Error loading product data. Check console for details.",
                        );
                    }
                }
            }
        });
    }

    /// Flip the one-shot guard. Only the first caller gets `true`.
    fn try_begin_init(&self) -> bool {
        if self.initialized.get_untracked() {
            return false;
        }
        self.initialized.set(true);
        true
    }

    /// Record a selector change. An empty control value clears the slot.
    pub fn select(&self, slot: SelectorSlot, id: Option<String>) {
        self.selection.update(|selection| selection.set(slot, id));
    }
}

fn window_search() -> Result<String, InitError> {
    let window = web_sys::window().ok_or(InitError::MissingElement("window"))?;
    window
        .location()
        .search()
        .map_err(|_| InitError::MissingElement("location"))
}

/// Resolve the active category from the page query string.
///
/// An explicit `?category=` parameter must name a registered category; with
/// no parameter the first registry entry is the context.
pub fn category_from_search(
    search: &str,
    registry: &[&str],
) -> Result<CategoryContext, InitError> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

    match params.get("category") {
        Some(requested) => {
            if registry.iter().any(|category| *category == requested.as_str()) {
                Ok(CategoryContext::new(requested.clone()))
            } else {
                Err(InitError::NoActiveCategory {
                    requested: Some(requested.clone()),
                })
            }
        }
        None => registry
            .first()
            .map(|category| CategoryContext::new(*category))
            .ok_or(InitError::NoActiveCategory { requested: None }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRY: &[&str] = &["Smartphones", "Tablets", "Laptops"];

    #[test]
    fn test_explicit_category_parameter() {
        let category = category_from_search("?category=Tablets", REGISTRY).unwrap();
        assert_eq!(category.as_str(), "Tablets");
    }

    #[test]
    fn test_absent_parameter_falls_back_to_default() {
        let category = category_from_search("", REGISTRY).unwrap();
        assert_eq!(category.as_str(), "Smartphones");

        let category = category_from_search("?other=1", REGISTRY).unwrap();
        assert_eq!(category.as_str(), "Smartphones");
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = category_from_search("?category=Cameras", REGISTRY).unwrap_err();
        assert_eq!(
            err,
            InitError::NoActiveCategory {
                requested: Some("Cameras".to_string())
            }
        );
    }

    #[test]
    fn test_empty_registry_has_no_active_category() {
        let err = category_from_search("", &[]).unwrap_err();
        assert_eq!(err, InitError::NoActiveCategory { requested: None });
    }

    #[test]
    fn test_initialization_runs_at_most_once() {
        let session = CompareSession::new();
        assert!(session.try_begin_init());
        assert!(!session.try_begin_init());
        assert!(!session.try_begin_init());
    }
}
