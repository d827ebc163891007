use super::*;

#[test]
fn push_assigns_increasing_ids_in_order() {
    let mut queue = ToastQueue::default();
    let first = queue.push(ToastKind::Error, "too long");
    let second = queue.push(ToastKind::Success, "posted");

    assert!(second > first);
    let messages: Vec<&str> = queue.items().iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["too long", "posted"]);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut queue = ToastQueue::default();
    let first = queue.push(ToastKind::Error, "a");
    let second = queue.push(ToastKind::Error, "b");

    assert!(queue.dismiss(first));
    assert_eq!(queue.items().len(), 1);
    assert_eq!(queue.items()[0].id, second);
}

#[test]
fn dismiss_is_idempotent() {
    let mut queue = ToastQueue::default();
    let id = queue.push(ToastKind::Error, "a");

    assert!(queue.dismiss(id));
    assert!(!queue.dismiss(id));
    assert!(queue.items().is_empty());
}

#[test]
fn overflow_drops_oldest_first() {
    let mut queue = ToastQueue::default();
    for i in 0..5 {
        queue.push(ToastKind::Error, format!("m{i}"));
    }

    let messages: Vec<&str> = queue.items().iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages.len(), MAX_VISIBLE_TOASTS);
    assert_eq!(messages, ["m2", "m3", "m4"]);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut queue = ToastQueue::default();
    let first = queue.push(ToastKind::Error, "a");
    queue.dismiss(first);
    let second = queue.push(ToastKind::Error, "b");
    assert_ne!(first, second);
}

#[test]
fn errors_stay_up_longer_than_successes() {
    assert!(ToastKind::Error.duration() > ToastKind::Success.duration());
    assert_eq!(ToastKind::Error.class(), "toast toast--error");
}
