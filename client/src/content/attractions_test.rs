use super::*;

#[test]
fn chips_start_with_catch_all_then_first_appearance_order() {
    assert_eq!(chips(), vec!["wszystkie", "przyroda", "Miasta"]);
}

#[test]
fn catch_all_shows_every_attraction() {
    assert_eq!(visible(ALL).len(), ATTRACTIONS.len());
}

#[test]
fn nature_filter_keeps_two() {
    let titles: Vec<&str> = visible("przyroda").iter().map(|a| a.title).collect();
    assert_eq!(titles, vec!["Ciężkowicko-Rożnowski Park Krajobrazowy", "Skamieniałe Miasto"]);
}

#[test]
fn category_match_is_case_sensitive() {
    assert_eq!(visible("Miasta").len(), 1);
    assert!(visible("miasta").is_empty());
}
