//! Fallback for unknown paths.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::page_title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text=page_title(Some("Nie znaleziono")) />
        <section class="not-found">
            <h1>"404"</h1>
            <p>"Nie znaleziono strony."</p>
            <a href="/">"Wróć na stronę główną"</a>
        </section>
    }
}
