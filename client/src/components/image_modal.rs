//! Full-screen image viewer over a `ModalViewer`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The owning page holds the viewer in a signal and applies the
//! `ModalAction`s this component forwards. The component renders whatever
//! the viewer says and keeps one window `keydown` listener attached exactly
//! while the viewer reports its keyboard binding.

use carousel::modal::{ModalAction, ModalTarget, ModalViewer};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[cfg(feature = "csr")]
use carousel::modal::ModalKey;

/// Modal image viewer. Renders nothing while closed.
#[component]
pub fn ImageModal(#[prop(into)] viewer: Signal<ModalViewer>, on_action: Callback<ModalAction>) -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        let listener = StoredValue::new_local(None);
        Effect::new(move || {
            let bound = viewer.with(ModalViewer::keyboard_bound);
            let attached = listener.with_value(Option::is_some);
            if bound && !attached {
                let handle = window_event_listener(leptos::ev::keydown, move |ev| {
                    if let Some(key) = ModalKey::from_key_name(&ev.key()) {
                        ev.prevent_default();
                        on_action.run(ModalAction::Key(key));
                    }
                });
                listener.set_value(Some(handle));
                log::debug!("modal keyboard attached");
            } else if !bound && attached {
                if let Some(handle) = listener.try_update_value(Option::take).flatten() {
                    handle.remove();
                    log::debug!("modal keyboard detached");
                }
            }
        });
        on_cleanup(move || {
            if let Some(handle) = listener.try_update_value(Option::take).flatten() {
                handle.remove();
            }
        });
    }

    let forward = move |action: ModalAction| {
        move |ev: MouseEvent| {
            ev.stop_propagation();
            on_action.run(action);
        }
    };

    let image = move || {
        viewer
            .with(|m| m.current_image().map(str::to_owned))
            .unwrap_or_default()
    };

    view! {
        <Show when=move || viewer.with(ModalViewer::is_open)>
            <div
                class="image-modal"
                role="dialog"
                aria-modal="true"
                on:click=forward(ModalAction::Click(ModalTarget::Backdrop))
            >
                <div class="image-modal__content" on:click=forward(ModalAction::Click(ModalTarget::Content))>
                    <img class="image-modal__image" src=image alt="Powiększone zdjęcie" />
                    <button
                        class="image-modal__close"
                        aria-label="Zamknij"
                        on:click=forward(ModalAction::Click(ModalTarget::CloseButton))
                    >
                        "✕"
                    </button>
                </div>
                <Show when=move || viewer.with(ModalViewer::shows_chevrons)>
                    <button
                        class="image-modal__chevron image-modal__chevron--prev"
                        aria-label="Poprzednie zdjęcie"
                        on:click=forward(ModalAction::Previous)
                    >
                        "‹"
                    </button>
                    <button
                        class="image-modal__chevron image-modal__chevron--next"
                        aria-label="Następne zdjęcie"
                        on:click=forward(ModalAction::Next)
                    >
                        "›"
                    </button>
                </Show>
            </div>
        </Show>
    }
}
