use leptos::prelude::*;

use crate::components::B2bOnly;
use crate::context::use_site_context;
use crate::data::copy::{b2b, nav};
use crate::models::Text;

#[component]
pub fn CatalogPage() -> impl IntoView {
    view! { <ComingSoon title=nav::CATALOG/> }
}

#[component]
pub fn QuotePage() -> impl IntoView {
    view! { <ComingSoon title=nav::QUOTE/> }
}

#[component]
fn ComingSoon(title: Text) -> impl IntoView {
    let lang = use_site_context().lang;

    view! {
        <B2bOnly>
            <div class="placeholder-page">
                <h1>{move || title.get(lang.get())}</h1>
                <p class="subtitle">{move || b2b::SOON.get(lang.get())}</p>
                <p>{move || b2b::SOON_BODY.get(lang.get())}</p>
            </div>
        </B2bOnly>
    }
}
