use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::use_site_context;
use crate::data::copy::nav;
use crate::hooks::{use_media_query, use_scroll_direction, MOBILE_QUERY};
use crate::models::Audience;

const HIDE_AFTER: f64 = 80.0;

#[component]
pub fn Nav() -> impl IntoView {
    let ctx = use_site_context();
    let lang = ctx.lang;
    let scroll = use_scroll_direction(HIDE_AFTER);
    let is_mobile = use_media_query(MOBILE_QUERY);
    let (menu_open, set_menu_open) = signal(false);

    let is_b2b = move || ctx.audience.get() == Some(Audience::B2b);

    view! {
        <nav
            class="main-nav"
            class:hidden=move || !scroll.get().visible && !menu_open.get()
            class:scrolled=move || scroll.get().scrolled
        >
            <div class="nav-brand">
                <A href="/">"Marcenaria"</A>
            </div>

            <Show when=move || is_mobile.get()>
                <button
                    class="nav-toggle"
                    aria-label="Menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "×" } else { "☰" }}
                </button>
            </Show>

            <div
                class="nav-links"
                class:open=move || menu_open.get()
                on:click=move |_| set_menu_open.set(false)
            >
                <A href="/">{move || nav::HOME.get(lang.get())}</A>
                <A href="/portfolio">{move || nav::PORTFOLIO.get(lang.get())}</A>
                <A href="/about">{move || nav::ABOUT.get(lang.get())}</A>
                <A href="/contact">{move || nav::CONTACT.get(lang.get())}</A>
                <Show when=is_b2b>
                    <A href="/b2b/catalogo">{move || nav::CATALOG.get(lang.get())}</A>
                    <A href="/b2b/orcamento">{move || nav::QUOTE.get(lang.get())}</A>
                </Show>
            </div>

            <div class="nav-switches">
                <Show when=move || ctx.audience.get().is_some()>
                    <button
                        class="btn btn-small audience-switch"
                        on:click=move |_| {
                            if let Some(current) = ctx.audience.get_untracked() {
                                ctx.choose_audience(current.other());
                            }
                        }
                    >
                        {move || {
                            let text = if is_b2b() { nav::SWITCH_TO_B2C } else { nav::SWITCH_TO_B2B };
                            text.get(lang.get())
                        }}
                    </button>
                </Show>
                <button class="btn btn-small lang-switch" on:click=move |_| ctx.toggle_lang()>
                    {move || lang.get().toggled().code().to_uppercase()}
                </button>
            </div>
        </nav>
    }
}
