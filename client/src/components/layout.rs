//! Site shell: contact bar, navigation, footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every route. Owns the navigation bar state (scroll styling and the
//! mobile menu) and a single window scroll listener that lives as long as
//! the shell.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::{
    EMAIL, FACEBOOK_URL, FOOTER_MAP_URL, FOOTER_STREET, FOOTER_TOWN, INSTAGRAM_URL, PHONE_DISPLAY, SITE_NAME,
};
use crate::state::nav::{NAV_LINKS, NavState, is_active, shows_location_panel};
use crate::util::clock::current_year;

fn nav_class(scrolled: bool) -> &'static str {
    if scrolled { "navbar navbar--scrolled" } else { "navbar" }
}

fn link_class(base: &'static str, active: bool) -> String {
    if active { format!("{base} {base}--active") } else { base.to_owned() }
}

#[component]
fn SocialLinks() -> impl IntoView {
    view! {
        <div class="social">
            <a href=FACEBOOK_URL target="_blank" rel="noopener noreferrer" aria-label="Facebook">"f"</a>
            <a href=INSTAGRAM_URL target="_blank" rel="noopener noreferrer" aria-label="Instagram">"ig"</a>
        </div>
    }
}

/// Page chrome around the routed content.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let nav = RwSignal::new(NavState::default());

    #[cfg(feature = "csr")]
    {
        nav.maybe_update(|n| n.on_scroll(crate::util::viewport::scroll_y()));
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = crate::util::viewport::scroll_y();
            nav.maybe_update(|n| n.on_scroll(y));
        });
        let handle = StoredValue::new_local(Some(handle));
        on_cleanup(move || {
            if let Some(handle) = handle.try_update_value(Option::take).flatten() {
                handle.remove();
            }
        });
    }

    let year = current_year();

    let desktop_links = NAV_LINKS
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.path
                    class=move || link_class("navbar__link", pathname.with(|p| is_active(p, link.path)))
                >
                    {link.label}
                </a>
            }
        })
        .collect_view();

    let mobile_links = move || {
        NAV_LINKS
            .iter()
            .map(|link| {
                view! {
                    <a
                        href=link.path
                        class=move || link_class("navbar__mobile-link", pathname.with(|p| is_active(p, link.path)))
                        on:click=move |_| nav.update(NavState::close_menu)
                    >
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <div class="site">
            <div class="topbar">
                <div class="topbar__inner">
                    <div class="topbar__contact">
                        <span>"Zarezerwuj już teraz!"</span>
                        <span>"☎ " {PHONE_DISPLAY}</span>
                        <span>"✉ " {EMAIL}</span>
                    </div>
                    <SocialLinks />
                </div>
            </div>

            <nav class=move || nav_class(nav.with(|n| n.scrolled))>
                <div class="navbar__inner">
                    <a href="/" class="navbar__logo">
                        <img src="/img/odpoczniesztu-logo.png" alt=SITE_NAME />
                    </a>
                    <div class="navbar__links">{desktop_links}</div>
                    <button
                        class="navbar__toggle"
                        aria-label="Menu"
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        {move || if nav.with(|n| n.menu_open) { "✕" } else { "☰" }}
                    </button>
                </div>
                <Show when=move || nav.with(|n| n.menu_open)>
                    <div class="navbar__mobile">{mobile_links}</div>
                </Show>
            </nav>

            <main class="site__main">{children()}</main>

            <footer class="footer">
                <Show when=move || pathname.with(|p| shows_location_panel(p))>
                    <div class="footer__panel">
                        <div class="footer__logo">
                            <img src="/img/odpoczniesztu-logo2.png" alt=SITE_NAME />
                        </div>
                        <div class="footer__column">
                            <h3>"Lokalizacja"</h3>
                            <p class="footer__street">{FOOTER_STREET}</p>
                            <p>{FOOTER_TOWN}</p>
                            <a href=FOOTER_MAP_URL target="_blank" rel="noopener noreferrer">
                                "Zobacz na mapie"
                            </a>
                        </div>
                        <div class="footer__column">
                            <h3>"Kontakt"</h3>
                            <p>"Tel: " {PHONE_DISPLAY}</p>
                            <p>"E-mail: " {EMAIL}</p>
                        </div>
                    </div>
                </Show>
                <div class="footer__strip">
                    <p>
                        {format!("{year} | {SITE_NAME}")}
                        <span class="footer__street">", " {FOOTER_STREET}</span>
                    </p>
                    <SocialLinks />
                </div>
            </footer>
        </div>
    }
}
