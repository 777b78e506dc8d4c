use super::*;
use carousel::modal::{ModalKey, ModalTarget};

fn showcase(n: usize) -> Showcase {
    Showcase::new(ImageSequence::new((0..n).map(|i| format!("/s{i}.jpg"))))
}

#[test]
fn starts_on_first_slide_with_modal_closed() {
    let s = showcase(3);
    assert_eq!(s.slide(), 0);
    assert!(!s.modal().is_open());
    assert_eq!(s.modal().sequence(), s.sequence());
}

#[test]
fn proposals_move_the_slide() {
    let mut s = showcase(3);
    assert!(s.propose(2));
    assert_eq!(s.slide(), 2);
}

#[test]
fn out_of_range_proposal_is_dropped() {
    let mut s = showcase(3);
    assert!(!s.propose(3));
    assert_eq!(s.slide(), 0);
}

#[test]
fn steps_wrap() {
    let mut s = showcase(3);
    s.step_previous();
    assert_eq!(s.slide(), 2);
    s.step_next();
    assert_eq!(s.slide(), 0);
}

#[test]
fn proposals_are_dropped_while_modal_open() {
    let mut s = showcase(4);
    s.propose(1);
    s.open(1);
    assert!(s.modal().keyboard_bound());
    assert!(!s.propose(2));
    assert_eq!(s.slide(), 1);
}

#[test]
fn slide_follows_modal_navigation() {
    let mut s = showcase(4);
    s.open(0);
    s.apply(ModalAction::Next);
    s.apply(ModalAction::Key(ModalKey::ArrowRight));
    assert_eq!(s.slide(), 2);
    s.apply(ModalAction::Click(ModalTarget::Backdrop));
    assert!(!s.modal().is_open());
    assert_eq!(s.slide(), 2);
    assert!(s.propose(3));
}
