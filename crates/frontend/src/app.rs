use leptos::prelude::*;

use crate::domain::product_specs::session::CompareSession;
use crate::domain::product_specs::ui::compare::ComparePage;
use crate::layout::header::Header;

#[component]
pub fn App() -> impl IntoView {
    // Provide the page-scoped session state to the whole app via context.
    provide_context(CompareSession::new());

    view! {
        <Header />
        <ComparePage />
    }
}
