use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{MagneticButton, ProjectCard};
use crate::context::use_site_context;
use crate::data::{copy, projects};
use crate::services::color::{blend_color_or_first, with_alpha_or_black};
use crate::services::portfolio::featured;

const WALNUT: &str = "#5b3a29";
const OAK: &str = "#d3a17e";

/// Hero backdrop: walnut fading into oak, tinted by how far the page has
/// scrolled through the hero
fn hero_background(progress: f64) -> String {
    let top = blend_color_or_first(WALNUT, OAK, progress);
    format!(
        "background: linear-gradient(160deg, {} 0%, {} 100%);",
        with_alpha_or_black(&top, 0.92),
        with_alpha_or_black(OAK, 0.35)
    )
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_site_context();
    let lang = ctx.lang;
    let audience = ctx.audience;
    let highlights = featured(&projects());
    let (progress, set_progress) = signal(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let win = window();
            let y = win.scroll_y().unwrap_or(0.0);
            let height = win
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(1.0)
                .max(1.0);
            set_progress.set((y / height).clamp(0.0, 1.0));
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_progress;

    view! {
        <div class="home-page">
            <section class="hero" style=move || hero_background(progress.get())>
                <h1>{move || copy::hero_title(audience.get()).get(lang.get())}</h1>
                <p class="subtitle">{move || copy::hero_subtitle(audience.get()).get(lang.get())}</p>
                <div class="cta-buttons">
                    <MagneticButton href="/contact">
                        {move || copy::home::CTA.get(lang.get())}
                    </MagneticButton>
                    <MagneticButton href="/portfolio" secondary=true>
                        {move || copy::nav::PORTFOLIO.get(lang.get())}
                    </MagneticButton>
                </div>
            </section>

            <section class="featured">
                <h2>{move || copy::home::FEATURED.get(lang.get())}</h2>
                <div class="project-grid">
                    {highlights
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project/> })
                        .collect_view()}
                </div>
                <A href="/portfolio" attr:class="see-all">
                    {move || copy::home::SEE_ALL.get(lang.get())}
                </A>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_background_spans_the_palette() {
        assert_eq!(
            hero_background(0.0),
            "background: linear-gradient(160deg, rgba(91, 58, 41, 0.92) 0%, rgba(211, 161, 126, 0.35) 100%);"
        );
        assert!(hero_background(1.0).contains("rgba(211, 161, 126, 0.92)"));
    }
}
