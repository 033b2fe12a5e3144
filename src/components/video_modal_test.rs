use super::*;

#[test]
fn escape_closes_open_modal() {
    assert!(closes_on_key("Escape", true));
}

#[test]
fn escape_is_ignored_while_closed() {
    assert!(!closes_on_key("Escape", false));
}

#[test]
fn other_keys_leave_modal_open() {
    for key in ["Enter", " ", "Esc", "escape", "Tab"] {
        assert!(!closes_on_key(key, true), "{key:?}");
    }
}
