use leptos::{html, prelude::*};
use leptos_router::components::A;

use crate::hooks::use_magnetic;

const STRENGTH: f64 = 0.3;

/// Link styled as a button that drifts towards the pointer
#[component]
pub fn MagneticButton(
    #[prop(into)] href: String,
    #[prop(optional)] secondary: bool,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let offset = use_magnetic(node, STRENGTH);

    let class = if secondary { "btn btn-secondary" } else { "btn btn-primary" };

    view! {
        <div
            class="magnetic"
            node_ref=node
            style=move || {
                let (x, y) = offset.get();
                format!("transform: translate({x:.1}px, {y:.1}px);")
            }
        >
            <A href=href attr:class=class>
                {children()}
            </A>
        </div>
    }
}
