//! Pure derivations behind the comparison view.
//!
//! The rendered fragment is a function of (selection, catalog) only; the
//! component rebuilds it wholesale from these values on every change event.

use contracts::domain::product_specs::{Catalog, CategoryContext, ProductRecord, SelectionState};

/// Label of the default entry in both selectors and of an unfilled column.
pub const MODEL_PLACEHOLDER: &str = "Choose a model";

/// One column of the comparison area.
#[derive(Debug, Clone, PartialEq)]
pub enum CardSlot {
    Placeholder,
    Card(ProductRecord),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonView {
    pub left: CardSlot,
    pub right: CardSlot,
    /// The "vs" divider appears only between two resolved cards.
    pub divider: bool,
}

/// Options for a selector control: the placeholder entry first, then the
/// records of the active category in catalog order as `(id, model)`.
pub fn selector_options(catalog: &Catalog, category: &CategoryContext) -> Vec<(String, String)> {
    let mut options = vec![(String::new(), MODEL_PLACEHOLDER.to_string())];
    options.extend(
        catalog
            .in_category(category)
            .map(|record| (record.id.clone(), record.model.clone())),
    );
    options
}

/// Derive the comparison area from the current selection.
///
/// `None` means the area stays empty: that is keyed on the raw selection pair
/// being unset. A set identifier that resolves to no record degrades its slot
/// to a placeholder.
pub fn comparison_view(selection: &SelectionState, catalog: &Catalog) -> Option<ComparisonView> {
    if selection.is_empty() {
        return None;
    }

    let left = resolve_slot(selection.first.as_deref(), catalog);
    let right = resolve_slot(selection.second.as_deref(), catalog);
    let divider = matches!((&left, &right), (CardSlot::Card(_), CardSlot::Card(_)));

    Some(ComparisonView {
        left,
        right,
        divider,
    })
}

fn resolve_slot(id: Option<&str>, catalog: &Catalog) -> CardSlot {
    id.and_then(|id| catalog.find(id))
        .cloned()
        .map(CardSlot::Card)
        .unwrap_or(CardSlot::Placeholder)
}
