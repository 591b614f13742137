use leptos::prelude::*;

use crate::context::use_site_context;
use crate::data::copy::footer;
use crate::server_fns::get_contact_details;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_site_context();
    let lang = ctx.lang;
    let contact = Resource::new(|| (), |_| get_contact_details());

    view! {
        <footer class="site-footer">
            <Suspense fallback=|| ()>
                {move || {
                    contact
                        .get()
                        .and_then(|result| result.ok())
                        .map(|details| {
                            view! {
                                <div class="footer-contact">
                                    <a href=format!("mailto:{}", details.email)>{details.email.clone()}</a>
                                    <a href=details.tel()>{details.phone.clone()}</a>
                                    <a href=details.instagram.clone() target="_blank" rel="noopener">
                                        "Instagram"
                                    </a>
                                </div>
                            }
                        })
                }}
            </Suspense>
            <Show when=move || ctx.audience.get().is_some()>
                <button class="btn btn-small change-storefront" on:click=move |_| ctx.reset_audience()>
                    {move || footer::CHANGE_STOREFRONT.get(lang.get())}
                </button>
            </Show>
            <p class="copyright">
                "© Marcenaria · "
                {move || footer::RIGHTS.get(lang.get())}
            </p>
        </footer>
    }
}
