//! Landing page: hero, about section, photo showcase, booking call-to-action.

use carousel::modal::ModalAction;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::image_modal::ImageModal;
use crate::components::image_slider::ImageSlider;
use crate::content::{PHONE_DISPLAY, PHONE_HREF, home_sequence, page_title};
use crate::state::showcase::Showcase;

#[component]
pub fn HomePage() -> impl IntoView {
    let sequence = home_sequence();
    let showcase = RwSignal::new(Showcase::new(sequence.clone()));

    let images = Signal::stored(sequence);
    let slide = Memo::new(move |_| showcase.with(Showcase::slide));
    let viewer = Signal::derive(move || showcase.with(|s| s.modal().clone()));

    let on_index_change = Callback::new(move |index: usize| {
        showcase.update(|s| {
            s.propose(index);
        });
    });
    let on_previous = Callback::new(move |()| showcase.update(Showcase::step_previous));
    let on_next = Callback::new(move |()| showcase.update(Showcase::step_next));
    let on_image_click = Callback::new(move |index: usize| showcase.update(|s| s.open(index)));
    let on_action = Callback::new(move |action: ModalAction| showcase.update(|s| s.apply(action)));

    view! {
        <Title text=page_title(None) />

        <section class="hero">
            <picture>
                <source media="(max-width: 768px)" srcset="/img/odpoczniesztu-bg2.jpg" />
                <img class="hero__image" src="/img/odpoczniesztu-bg.jpg" alt="Domek" />
            </picture>
            <div class="hero__overlay">
                <div class="hero__text">
                    <h1>"Twoja prywatna strefa komfortu"</h1>
                    <p>"Przytulny domek z dala od miejskiego zgiełku"</p>
                </div>
            </div>
        </section>

        <section id="o-nas" class="about">
            <h2 class="about__kicker">"O nas"</h2>
            <h3 class="about__heading">"Twoje miejsce w sercu natury"</h3>
            <div class="about__grid">
                <div class="about__text">
                    <p>
                        "Przytulny domek w malowniczej miejscowości Brzozowa, położonej na Pogórzu "
                        "Ciężkowicko-Rożnowskim, to idealne miejsce dla osób szukających spokoju i "
                        "bliskości natury. Z dala od miejskiego zgiełku, oferuje komfortowy wypoczynek "
                        "dla maksymalnie 8 osób."
                    </p>
                    <p>
                        "To idealne miejsce zarówno dla rodzin, jak i grup przyjaciół. Oferujemy także "
                        "udogodnienia dla dzieci, takie jak łóżeczko turystyczne czy fotelik do karmienia."
                    </p>
                    <p class="about__strong">"Zarezerwuj już dziś i ciesz się spokojem w sercu natury!"</p>
                </div>
                <div class="about__slider">
                    <ImageSlider
                        images=images
                        index=slide
                        on_index_change=on_index_change
                        on_previous=on_previous
                        on_next=on_next
                        on_image_click=on_image_click
                    />
                </div>
            </div>
        </section>

        <section class="cta">
            <h2>"Masz pytania bądź chcesz zarezerwować?"</h2>
            <a class="cta__button" href=PHONE_HREF>
                "☎ " {PHONE_DISPLAY}
            </a>
        </section>

        <ImageModal viewer=viewer on_action=on_action />
    }
}
