use leptos::prelude::*;

use crate::components::ProjectCard;
use crate::context::use_site_context;
use crate::data::{copy::portfolio, projects};
use crate::models::Category;
use crate::services::portfolio::{ProjectQuery, YearOrder};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let lang = use_site_context().lang;
    let all = StoredValue::new(projects());
    let (query, set_query) = signal(ProjectQuery::default());

    let visible = move || all.with_value(|list| query.get().apply(list));

    let filter_button = move |category: Option<Category>| {
        let label = move || match category {
            Some(c) => c.label(lang.get()),
            None => portfolio::ALL.get(lang.get()),
        };
        view! {
            <button
                class="filter-btn"
                class:active=move || query.get().category == category
                on:click=move |_| set_query.update(|q| q.category = category)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="portfolio-page">
            <div class="page-header">
                <h1>{move || portfolio::TITLE.get(lang.get())}</h1>
            </div>

            <div class="portfolio-controls">
                <div class="category-filters">
                    {filter_button(None)}
                    {Category::all().into_iter().map(|c| filter_button(Some(c))).collect_view()}
                </div>

                <select
                    class="select-input"
                    on:change=move |ev| {
                        if let Some(order) = YearOrder::from_str(&event_target_value(&ev)) {
                            set_query.update(|q| q.order = order);
                        }
                    }
                    prop:value=move || query.get().order.as_str()
                >
                    {YearOrder::all()
                        .into_iter()
                        .map(|order| {
                            view! {
                                <option
                                    value=order.as_str()
                                    selected=move || query.get().order == order
                                >
                                    {move || order.label(lang.get())}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            {move || {
                let list = visible();
                if list.is_empty() {
                    view! { <p class="no-results">{portfolio::EMPTY.get(lang.get())}</p> }.into_any()
                } else {
                    view! {
                        <div class="project-grid">
                            {list
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project/> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
