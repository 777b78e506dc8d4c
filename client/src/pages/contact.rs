//! Contact details and an embedded map.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::page_banner::PageBanner;
use crate::content::{CONTACT_ADDRESS, CONTACT_BANNER_IMAGE, CONTACT_MAP_EMBED, EMAIL, PHONE_DISPLAY, PHONE_HREF, page_title};

#[component]
pub fn ContactPage() -> impl IntoView {
    let [street, town] = CONTACT_ADDRESS;
    view! {
        <Title text=page_title(Some("Kontakt")) />
        <PageBanner image=CONTACT_BANNER_IMAGE title="Kontakt">
            <div class="contact">
                <div class="contact__details">
                    <div class="contact__item">
                        <h3>"Telefon"</h3>
                        <a href=PHONE_HREF>{PHONE_DISPLAY}</a>
                    </div>
                    <div class="contact__item">
                        <h3>"Email"</h3>
                        <a href=format!("mailto:{EMAIL}")>{EMAIL}</a>
                    </div>
                    <div class="contact__item">
                        <h3>"Adres"</h3>
                        <p>{street}</p>
                        <p>{town}</p>
                    </div>
                </div>
                <div class="contact__map">
                    <iframe
                        src=CONTACT_MAP_EMBED
                        width="100%"
                        height="100%"
                        style="border: 0"
                        allowfullscreen=true
                        {::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                        referrerpolicy="no-referrer-when-downgrade"
                    ></iframe>
                </div>
            </div>
        </PageBanner>
    }
}
