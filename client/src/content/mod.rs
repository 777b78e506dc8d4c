//! Static site content: contact details, gallery categories, attractions.
//!
//! DESIGN
//! ======
//! Everything here is compile-time data. Pages turn slices of it into
//! `ImageSequence`s at render time; the catalogs themselves never change.


pub mod attractions;
pub mod gallery;

use carousel::sequence::ImageSequence;

pub const SITE_NAME: &str = "Odpoczniesz tu";

pub const PHONE_DISPLAY: &str = "+48 880 465 592";
pub const PHONE_HREF: &str = "tel:+48880465592";
pub const EMAIL: &str = "odpoczniesztu@gmail.com";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/profile.php?id=61566660407549";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/odpoczniesztu/";

/// Footer location panel (home page only).
pub const FOOTER_STREET: &str = "Brzozowa 270";
pub const FOOTER_TOWN: &str = "33-182 Brzozowa, Polska";
pub const FOOTER_MAP_URL: &str = "https://maps.app.goo.gl/NDb1JbzdycAUYieX7";

/// Postal address shown on the contact page.
pub const CONTACT_ADDRESS: [&str; 2] = ["Brzozowa 270", "34-000 Gromnik"];
pub const CONTACT_MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d5300.849493788112!2d20.902383000000004!3d49.841576!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x473d93a8b7b3c7af%3A0xc1392532ca033bfd!2sOdpocznieszTu!5e1!3m2!1spl!2spl!4v1740386180597!5m2!1spl!2spl";

pub const BANNER_IMAGE: &str = "/img/background.jpg";
pub const CONTACT_BANNER_IMAGE: &str = "https://images.unsplash.com/photo-1441974231531-c6227db76b6e";

/// Photos cycled by the home page slider.
pub const HOME_SLIDES: &[&str] = &[
    "/img/outside10.jpg",
    "/img/outside11.jpg",
    "/img/living1.jpg",
    "/img/taras.jpg",
    "/img/jacuzzi.jpg",
    "/img/outside12.jpg",
];

/// Document title for a page; the home page uses the bare site name.
pub fn page_title(section: Option<&str>) -> String {
    match section {
        Some(section) => format!("{section} | {SITE_NAME}"),
        None => SITE_NAME.to_owned(),
    }
}

pub fn home_sequence() -> ImageSequence {
    ImageSequence::new(HOME_SLIDES.iter().copied())
}

/// Filter-chip labels: the catch-all first, then each distinct category in
/// order of first appearance.
pub fn categories_with_all<'a>(all: &'a str, categories: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out = vec![all];
    for category in categories {
        if !out.contains(&category) {
            out.push(category);
        }
    }
    out
}

/// Items whose category equals `selected`, or every item when `selected` is the catch-all.
pub fn filter_by_category<'a, T>(
    items: &'a [T],
    all: &str,
    selected: &str,
    category_of: impl Fn(&T) -> &str,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| selected == all || category_of(item) == selected)
        .collect()
}
