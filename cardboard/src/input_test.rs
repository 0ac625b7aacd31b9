use super::*;

// =============================================================
// Region
// =============================================================

#[test]
fn region_default_is_handle() {
    assert_eq!(Region::default(), Region::Handle);
}

#[test]
fn region_variants_are_distinct() {
    assert_ne!(Region::Handle, Region::Delete);
}

// =============================================================
// Direction
// =============================================================

#[test]
fn direction_from_arrow_keys() {
    assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
    assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
    assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
    assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
}

#[test]
fn direction_rejects_other_keys() {
    assert_eq!(Direction::from_key("Enter"), None);
    assert_eq!(Direction::from_key("arrowup"), None);
    assert_eq!(Direction::from_key(""), None);
}

#[test]
fn backward_directions() {
    assert!(Direction::Up.is_backward());
    assert!(Direction::Left.is_backward());
    assert!(!Direction::Down.is_backward());
    assert!(!Direction::Right.is_backward());
}

// =============================================================
// DragSession
// =============================================================

#[test]
fn new_session_hovers_over_itself() {
    let s = DragSession::new(CardId::from("tasks"));
    assert_eq!(s.active_id, CardId::from("tasks"));
    assert_eq!(s.over_id, Some(CardId::from("tasks")));
    assert_eq!(s.pending_target(), None);
}

#[test]
fn pending_target_when_over_other_card() {
    let s = DragSession { active_id: CardId::from("a"), over_id: Some(CardId::from("b")) };
    assert_eq!(s.pending_target(), Some(&CardId::from("b")));
}

#[test]
fn pending_target_absent_without_over() {
    let s = DragSession { active_id: CardId::from("a"), over_id: None };
    assert_eq!(s.pending_target(), None);
}
