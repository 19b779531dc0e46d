pub mod card;
pub mod view_model;

use contracts::domain::product_specs::SelectorSlot;
use leptos::prelude::*;

use crate::domain::product_specs::session::CompareSession;
use crate::shared::components::ui::Select;

use self::card::ProductCard;
use self::view_model::{comparison_view, selector_options, CardSlot, MODEL_PLACEHOLDER};

#[component]
#[allow(non_snake_case)]
pub fn ComparePage() -> impl IntoView {
    let session =
        use_context::<CompareSession>().expect("CompareSession context not found");
    session.init();

    // Until a catalog is loaded (or after a failed load) the controls hold no
    // options at all; after a load they hold the placeholder plus the
    // filtered records. Both controls are fed the same list.
    let options = Signal::derive(move || {
        match (session.catalog.get(), session.category.get()) {
            (Some(catalog), Some(category)) => selector_options(&catalog, &category),
            _ => Vec::new(),
        }
    });

    let first_value = Signal::derive(move || session.selection.get().first.unwrap_or_default());
    let second_value = Signal::derive(move || session.selection.get().second.unwrap_or_default());

    let on_select = move |slot: SelectorSlot| {
        Callback::new(move |value: String| {
            let id = if value.is_empty() { None } else { Some(value) };
            session.select(slot, id);
        })
    };

    view! {
        <main class="content">
            <div class="selector-row">
                <Select
                    id="model-selector-1"
                    value=first_value
                    options=options
                    on_change=on_select(SelectorSlot::First)
                />
                <Select
                    id="model-selector-2"
                    value=second_value
                    options=options
                    on_change=on_select(SelectorSlot::Second)
                />
            </div>

            {move || session.load_error.get().map(|e| view! { <div class="error">{e}</div> })}

            <section id="compare-section">
                {move || comparison_fragment(session)}
            </section>
        </main>
    }
}

/// Rebuild the comparison area from current state. The previous fragment is
/// always discarded wholesale; nothing is diffed.
fn comparison_fragment(session: CompareSession) -> AnyView {
    let Some(catalog) = session.catalog.get() else {
        return view! { <></> }.into_any();
    };
    let selection = session.selection.get();

    match comparison_view(&selection, &catalog) {
        None => view! { <></> }.into_any(),
        Some(comparison) => view! {
            <div class="products-comparison">
                {slot_view(comparison.left)}
                {comparison
                    .divider
                    .then(|| view! { <div class="vs-divider"><span>"vs"</span></div> })}
                {slot_view(comparison.right)}
            </div>
        }
        .into_any(),
    }
}

fn slot_view(slot: CardSlot) -> AnyView {
    match slot {
        CardSlot::Card(record) => view! { <ProductCard record=record /> }.into_any(),
        CardSlot::Placeholder => view! {
            <div class="product-column">
                <div class="placeholder">{MODEL_PLACEHOLDER}</div>
            </div>
        }
        .into_any(),
    }
}
