use leptos::prelude::*;

use crate::layout::header::category_nav::CategoryNav;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header__content">
                <span class="header__title">"Tech Specs"</span>
                <CategoryNav />
            </div>
        </header>
    }
}
