use leptos::prelude::*;

use crate::domain::product_specs::categories::CATEGORIES;
use crate::domain::product_specs::session::CompareSession;

/// Category navigation. Entries are plain links: switching category is a
/// full page navigation with a new `?category=` parameter.
#[component]
pub fn CategoryNav() -> impl IntoView {
    let session =
        use_context::<CompareSession>().expect("CompareSession context not found");

    view! {
        <nav class="tab-bar">
            {CATEGORIES
                .iter()
                .map(|&category| {
                    let is_active = move || {
                        session
                            .category
                            .get()
                            .is_some_and(|active| active.as_str() == category)
                    };
                    view! {
                        <a
                            class=move || {
                                if is_active() { "tab-link active" } else { "tab-link" }
                            }
                            href=format!("?category={}", category)
                        >
                            {category}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
