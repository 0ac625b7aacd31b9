use super::*;

fn order(ids: &[&str]) -> CardOrder {
    CardOrder::new(ids.iter().copied())
}

fn ids(order: &CardOrder) -> Vec<&str> {
    order.iter().map(CardId::as_str).collect()
}

fn id(s: &str) -> CardId {
    CardId::from(s)
}

// =============================================================
// CardId
// =============================================================

#[test]
fn card_id_equality_is_by_value() {
    assert_eq!(CardId::new("tasks"), CardId::from("tasks"));
    assert_ne!(CardId::from("tasks"), CardId::from("events"));
}

#[test]
fn card_id_displays_raw_token() {
    assert_eq!(CardId::from("schedule").to_string(), "schedule");
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_keeps_first_occurrence_of_duplicates() {
    let o = order(&["a", "b", "a", "c", "b"]);
    assert_eq!(ids(&o), vec!["a", "b", "c"]);
}

#[test]
fn empty_order() {
    let o = CardOrder::default();
    assert!(o.is_empty());
    assert_eq!(o.len(), 0);
    assert_eq!(o.index_of(&id("a")), None);
}

#[test]
fn deserialize_drops_duplicates() {
    let o: CardOrder = serde_json::from_str(r#"["tasks","grades","tasks"]"#).unwrap();
    assert_eq!(ids(&o), vec!["tasks", "grades"]);
}

#[test]
fn collect_from_iterator() {
    let o: CardOrder = ["x", "y", "x"].into_iter().collect();
    assert_eq!(ids(&o), vec!["x", "y"]);
}

// =============================================================
// moved
// =============================================================

#[test]
fn moved_forward_lands_on_target_slot() {
    let o = order(&["A", "B", "C", "D"]).moved(&id("A"), &id("C"));
    assert_eq!(ids(&o), vec!["B", "C", "A", "D"]);
}

#[test]
fn moved_backward_lands_on_target_slot() {
    let o = order(&["A", "B", "C", "D"]).moved(&id("D"), &id("B"));
    assert_eq!(ids(&o), vec!["A", "D", "B", "C"]);
}

#[test]
fn moved_to_adjacent_swaps() {
    let o = order(&["A", "B", "C"]).moved(&id("B"), &id("C"));
    assert_eq!(ids(&o), vec!["A", "C", "B"]);
}

#[test]
fn moved_onto_self_is_unchanged() {
    let before = order(&["A", "B", "C"]);
    assert_eq!(before.moved(&id("B"), &id("B")), before);
}

#[test]
fn moved_with_unknown_ids_is_unchanged() {
    let before = order(&["A", "B", "C"]);
    assert_eq!(before.moved(&id("Z"), &id("B")), before);
    assert_eq!(before.moved(&id("A"), &id("Z")), before);
}

// =============================================================
// without
// =============================================================

#[test]
fn without_removes_only_that_card() {
    let o = order(&["A", "B", "C"]).without(&id("B"));
    assert_eq!(ids(&o), vec!["A", "C"]);
}

#[test]
fn without_absent_id_is_noop() {
    let before = order(&["A", "B"]);
    assert_eq!(before.without(&id("Q")), before);
}
