//! Root component and route table.

use leptos::prelude::*;
use leptos_meta::{Meta, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::components::layout::Layout;
use crate::pages::attractions::AttractionsPage;
use crate::pages::contact::ContactPage;
use crate::pages::gallery::GalleryPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;

/// Application root: meta context, router, and the site shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Meta name="description" content="Przytulny domek w Brzozowej, z dala od miejskiego zgiełku." />
        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=StaticSegment("") view=HomePage />
                    <Route path=StaticSegment("galeria") view=GalleryPage />
                    <Route path=StaticSegment("atrakcje") view=AttractionsPage />
                    <Route path=StaticSegment("kontakt") view=ContactPage />
                </Routes>
            </Layout>
        </Router>
    }
}
