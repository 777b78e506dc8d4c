//! Nearby attractions shown on the attractions page.

#[cfg(test)]
#[path = "attractions_test.rs"]
mod attractions_test;

/// Catch-all chip label.
pub const ALL: &str = "wszystkie";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attraction {
    pub title: &'static str,
    pub description: &'static str,
    pub distance: &'static str,
    pub image: &'static str,
    pub map_link: &'static str,
    pub category: &'static str,
}

pub const ATTRACTIONS: &[Attraction] = &[
    Attraction {
        title: "Ciężkowicko-Rożnowski Park Krajobrazowy",
        description: "Park krajobrazowy oferujący malownicze szlaki turystyczne i unikalne formacje skalne.",
        distance: "5 km",
        image: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e",
        map_link: "https://maps.app.goo.gl/",
        category: "przyroda",
    },
    Attraction {
        title: "Tarnów",
        description: "Park krajobrazowy oferujący malownicze szlaki turystyczne i unikalne formacje skalne.",
        distance: "5 km",
        image: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e",
        map_link: "https://maps.app.goo.gl/",
        category: "Miasta",
    },
    Attraction {
        title: "Skamieniałe Miasto",
        description: "Rezerwat przyrody nieożywionej z charakterystycznymi formacjami skalnymi.",
        distance: "10 km",
        image: "https://images.unsplash.com/photo-1501555088652-021faa106b9b",
        map_link: "https://maps.app.goo.gl/",
        category: "przyroda",
    },
];

/// Chip labels for the attractions page.
pub fn chips() -> Vec<&'static str> {
    super::categories_with_all(ALL, ATTRACTIONS.iter().map(|a| a.category))
}

/// Attractions visible under the selected chip.
pub fn visible(selected: &str) -> Vec<&'static Attraction> {
    super::filter_by_category(ATTRACTIONS, ALL, selected, |a| a.category)
}
