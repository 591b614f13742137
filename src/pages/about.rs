use leptos::prelude::*;

use crate::components::MagneticButton;
use crate::context::use_site_context;
use crate::data::copy::{about, home};
use crate::models::Text;

#[component]
pub fn AboutPage() -> impl IntoView {
    let lang = use_site_context().lang;

    view! {
        <div class="about-page">
            <section class="about-intro">
                <h1>{move || about::TITLE.get(lang.get())}</h1>
                <p class="description">{move || about::BODY.get(lang.get())}</p>
            </section>

            <section class="features">
                <Pillar title=about::CRAFT body=about::CRAFT_BODY/>
                <Pillar title=about::SOURCING body=about::SOURCING_BODY/>
            </section>

            <div class="cta-buttons">
                <MagneticButton href="/contact">{move || home::CTA.get(lang.get())}</MagneticButton>
            </div>
        </div>
    }
}

#[component]
fn Pillar(title: Text, body: Text) -> impl IntoView {
    let lang = use_site_context().lang;

    view! {
        <div class="feature">
            <h3>{move || title.get(lang.get())}</h3>
            <p>{move || body.get(lang.get())}</p>
        </div>
    }
}
