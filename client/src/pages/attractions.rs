//! Nearby attractions with a category filter.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::category_chips::CategoryChips;
use crate::components::page_banner::PageBanner;
use crate::content::attractions::{ALL, Attraction, chips, visible};
use crate::content::{BANNER_IMAGE, page_title};

#[component]
fn AttractionCard(attraction: &'static Attraction) -> impl IntoView {
    view! {
        <article class="attraction">
            <img class="attraction__image" src=attraction.image alt=attraction.title loading="lazy" />
            <div class="attraction__body">
                <header class="attraction__header">
                    <h2>{attraction.title}</h2>
                    <span class="attraction__distance">"Odległość: " {attraction.distance}</span>
                </header>
                <p>{attraction.description}</p>
                <a class="attraction__map" href=attraction.map_link target="_blank" rel="noopener noreferrer">
                    "Zobacz na mapie ↗"
                </a>
            </div>
        </article>
    }
}

#[component]
pub fn AttractionsPage() -> impl IntoView {
    let selected = RwSignal::new(ALL);
    let on_select = Callback::new(move |name| selected.set(name));

    let cards = move || {
        visible(selected.get())
            .into_iter()
            .map(|attraction| view! { <AttractionCard attraction=attraction /> })
            .collect_view()
    };

    view! {
        <Title text=page_title(Some("Atrakcje")) />
        <PageBanner image=BANNER_IMAGE title="Atrakcje w okolicy">
            <CategoryChips options=chips() selected=selected on_select=on_select />
            <div class="attractions">{cards}</div>
        </PageBanner>
    }
}
