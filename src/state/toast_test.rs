use super::*;

fn toast(id: &str, message: &str) -> Toast {
    Toast {
        id: id.to_owned(),
        message: message.to_owned(),
        kind: ToastKind::Info,
        duration_ms: 4000,
    }
}

// =============================================================
// Queue behavior
// =============================================================

#[test]
fn push_appends_in_order() {
    let mut state = ToastState::default();
    state.push(toast("1", "first"));
    state.push(toast("2", "second"));

    let ids: Vec<_> = state.toasts.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    state.push(toast("1", "first"));
    state.push(toast("2", "second"));

    state.dismiss("1");

    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, "2");
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(toast("1", "first"));

    state.dismiss("missing");

    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn clear_empties_the_queue() {
    let mut state = ToastState::default();
    state.push(toast("1", "first"));
    state.push(toast("2", "second"));

    state.clear();

    assert!(state.toasts.is_empty());
}
