//! Photo gallery grouped by category, with a modal viewer per category.

use carousel::modal::ModalAction;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::category_chips::CategoryChips;
use crate::components::image_modal::ImageModal;
use crate::components::page_banner::PageBanner;
use crate::content::gallery::category_names;
use crate::content::{BANNER_IMAGE, page_title};
use crate::state::gallery::GalleryState;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let gallery = RwSignal::new(GalleryState::default());

    let selected = Signal::derive(move || gallery.with(|g| g.selected));
    let viewer = Signal::derive(move || gallery.with(|g| g.modal.clone()));
    let on_select = Callback::new(move |name: &'static str| gallery.update(|g| g.select(name)));
    let on_action = Callback::new(move |action: ModalAction| {
        gallery.update(|g| {
            g.apply(action);
        });
    });

    let tiles = move || {
        let Some(category) = gallery.with(GalleryState::category) else {
            return Vec::new();
        };
        category
            .images
            .iter()
            .enumerate()
            .map(|(index, image)| {
                view! {
                    <button
                        class="gallery__tile"
                        on:click=move |_| gallery.update(|g| g.open(index))
                    >
                        <img src=image.src alt=image.alt loading="lazy" />
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Title text=page_title(Some("Galeria")) />
        <PageBanner image=BANNER_IMAGE title="Galeria">
            <CategoryChips options=category_names() selected=selected on_select=on_select />
            <div class="gallery__grid">{tiles}</div>
        </PageBanner>
        <ImageModal viewer=viewer on_action=on_action />
    }
}
