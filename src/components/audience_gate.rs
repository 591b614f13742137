use leptos::prelude::*;

use crate::context::use_site_context;
use crate::data::copy::gate;
use crate::models::Audience;

/// Full-screen prompt shown until the visitor picks a storefront
#[component]
pub fn AudienceGate() -> impl IntoView {
    let ctx = use_site_context();
    let lang = ctx.lang;

    let pending = move || ctx.audience_loaded.get() && ctx.audience.get().is_none();

    view! {
        <Show when=pending>
            <div class="audience-gate" role="dialog" aria-modal="true">
                <div class="gate-card">
                    <h2>{move || gate::TITLE.get(lang.get())}</h2>
                    <div class="gate-options">
                        {Audience::all()
                            .into_iter()
                            .map(|audience| {
                                let text = match audience {
                                    Audience::B2c => gate::B2C,
                                    Audience::B2b => gate::B2B,
                                };
                                view! {
                                    <button
                                        class="btn btn-primary gate-option"
                                        on:click=move |_| ctx.choose_audience(audience)
                                    >
                                        {move || text.get(lang.get())}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Renders children only for business visitors, otherwise sends them home
#[component]
pub fn B2bOnly(children: ChildrenFn) -> impl IntoView {
    let ctx = use_site_context();
    let navigate = leptos_router::hooks::use_navigate();

    Effect::new(move |_| {
        if ctx.audience_loaded.get() && ctx.audience.get() != Some(Audience::B2b) {
            navigate("/", Default::default());
        }
    });

    view! {
        {move || {
            if ctx.audience.get() == Some(Audience::B2b) {
                children().into_any()
            } else {
                view! { <div class="loading">"..."</div> }.into_any()
            }
        }}
    }
}
