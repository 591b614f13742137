use leptos::prelude::*;

use crate::context::use_site_context;
use crate::models::Project;
use crate::services::color::with_alpha_or_black;

/// Shade laid over project photos behind the caption
const CAPTION_SHADE: &str = "#1f1a17";

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let lang = use_site_context().lang;
    let Project {
        title,
        category,
        image,
        year,
        description,
        ..
    } = project;

    let overlay = format!(
        "background: linear-gradient(to top, {}, {});",
        with_alpha_or_black(CAPTION_SHADE, 0.85),
        with_alpha_or_black(CAPTION_SHADE, 0.0)
    );
    let alt = title.clone();

    view! {
        <article class="project-card">
            <div class="project-image">
                <img src=image alt=alt loading="lazy"/>
                <div class="project-overlay" style=overlay></div>
            </div>
            <div class="project-caption">
                <span class="project-meta">
                    {move || category.label(lang.get())}
                    " · "
                    {year}
                </span>
                <h3>{title}</h3>
                <p>{move || description.get(lang.get()).to_string()}</p>
            </div>
        </article>
    }
}
