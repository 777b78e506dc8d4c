//! Header image with a tinted overlay and the card that overlaps it.

use leptos::prelude::*;

/// Banner plus a raised content card titled `title`.
#[component]
pub fn PageBanner(image: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__banner">
                <img src=image alt="Las" />
                <div class="page__banner-tint"></div>
            </div>
            <div class="page__body">
                <div class="page__card">
                    <h1 class="page__title">{title}</h1>
                    {children()}
                </div>
            </div>
        </div>
    }
}
