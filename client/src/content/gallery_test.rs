use super::*;

#[test]
fn default_category_exists_and_comes_first() {
    assert_eq!(GALLERY[0].name, DEFAULT_CATEGORY);
    assert!(gallery_category(DEFAULT_CATEGORY).is_some());
}

#[test]
fn category_names_follow_declaration_order() {
    assert_eq!(
        category_names(),
        vec!["na zewnątrz", "salon", "pokoje", "taras", "sauna", "jacuzzi"]
    );
}

#[test]
fn unknown_category_is_none() {
    assert_eq!(gallery_category("piwnica"), None);
}

#[test]
fn every_category_has_photos() {
    assert!(GALLERY.iter().all(|category| !category.images.is_empty()));
}

#[test]
fn sequence_preserves_photo_order() {
    let salon = gallery_category("salon").map(GalleryCategory::sequence);
    let salon = salon.unwrap_or_default();
    assert_eq!(salon.len(), 5);
    assert_eq!(salon.get(0), Some("/img/living1.jpg"));
    assert_eq!(salon.get(4), Some("/img/living5.jpg"));
}

#[test]
fn single_photo_categories_are_not_navigable() {
    for name in ["taras", "sauna", "jacuzzi"] {
        let seq = gallery_category(name).map(GalleryCategory::sequence).unwrap_or_default();
        assert_eq!(seq.len(), 1, "{name}");
        assert!(!seq.is_navigable(), "{name}");
    }
}

#[test]
fn each_call_yields_a_distinct_sequence_identity() {
    let category = GALLERY[0];
    assert_ne!(category.sequence(), category.sequence());
}
