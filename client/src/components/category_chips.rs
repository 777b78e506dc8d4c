//! Pill-shaped category filter used by the gallery and attractions pages.

use leptos::prelude::*;

fn chip_class(selected: bool) -> &'static str {
    if selected { "chip chip--selected" } else { "chip" }
}

/// A row of chips; exactly one is selected.
#[component]
pub fn CategoryChips(
    options: Vec<&'static str>,
    #[prop(into)] selected: Signal<&'static str>,
    on_select: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div class="chips">
            {options
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            class=move || chip_class(selected.get() == option)
                            on:click=move |_| on_select.run(option)
                        >
                            {option}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
