use leptos::prelude::*;

use crate::context::use_site_context;
use crate::data::copy::contact;
use crate::server_fns::get_contact_details;

#[component]
pub fn ContactPage() -> impl IntoView {
    let lang = use_site_context().lang;
    let details = Resource::new(|| (), |_| get_contact_details());

    let (name, set_name) = signal(String::new());
    let (message, set_message) = signal(String::new());

    view! {
        <div class="contact-page">
            <div class="page-header">
                <h1>{move || contact::TITLE.get(lang.get())}</h1>
            </div>

            <Suspense fallback=move || view! { <p>{contact::LOADING.get(lang.get_untracked())}</p> }>
                {move || {
                    details
                        .get()
                        .map(|result| match result {
                            Ok(d) => {
                                let info = d.clone();
                                let mailto = move || {
                                    d.mailto(
                                        contact::SUBJECT.get(lang.get()),
                                        &name.get(),
                                        &message.get(),
                                    )
                                };
                                view! {
                                    <div class="contact-layout">
                                        <dl class="contact-details">
                                            <dt>"E-mail"</dt>
                                            <dd><a href=format!("mailto:{}", info.email)>{info.email.clone()}</a></dd>
                                            <dt>"WhatsApp"</dt>
                                            <dd><a href=info.tel()>{info.phone.clone()}</a></dd>
                                            <dt>"📍"</dt>
                                            <dd>{info.address.clone()}</dd>
                                        </dl>

                                        <form class="contact-form" on:submit=|ev| ev.prevent_default()>
                                            <div class="form-group">
                                                <label for="name">{move || contact::NAME.get(lang.get())}</label>
                                                <input
                                                    type="text"
                                                    id="name"
                                                    prop:value=move || name.get()
                                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                                />
                                            </div>
                                            <div class="form-group">
                                                <label for="message">{move || contact::MESSAGE.get(lang.get())}</label>
                                                <textarea
                                                    id="message"
                                                    rows="6"
                                                    prop:value=move || message.get()
                                                    on:input=move |ev| set_message.set(event_target_value(&ev))
                                                ></textarea>
                                            </div>
                                            <a
                                                class="btn btn-primary"
                                                class:disabled=move || message.get().trim().is_empty()
                                                href=mailto
                                            >
                                                {move || contact::SEND.get(lang.get())}
                                            </a>
                                        </form>
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
