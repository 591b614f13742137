use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};

use crate::components::{AudienceGate, Footer, Nav};
use crate::context::provide_site_context;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_site_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/marcenaria.css"/>
        <Title text="Marcenaria - Móveis sob medida"/>
        <Meta name="description" content="Móveis em madeira maciça para casas e empresas"/>

        <Router>
            <Nav/>
            <AudienceGate/>
            <main>
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/portfolio") view=PortfolioPage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/b2b/catalogo") view=CatalogPage/>
                    <Route path=path!("/b2b/orcamento") view=QuotePage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
