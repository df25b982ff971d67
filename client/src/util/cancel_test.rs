use super::*;
use leptos::reactive::owner::Owner;

#[test]
fn fresh_token_is_live() {
    assert!(!CancelToken::new().is_cancelled());
}

#[test]
fn cancel_is_visible_through_clones() {
    let token = CancelToken::new();
    let observer = token.clone();
    token.cancel();
    assert!(observer.is_cancelled());
}

#[test]
fn owner_cleanup_cancels_token() {
    let owner = Owner::new();
    let token = owner.with(cancel_on_cleanup);
    assert!(!token.is_cancelled());
    owner.cleanup();
    assert!(token.is_cancelled());
}

#[test]
fn child_follows_parent_but_not_the_reverse() {
    let parent = CancelToken::new();
    let child = parent.child();
    child.cancel();
    assert!(!parent.is_cancelled());

    let other = parent.child();
    parent.cancel();
    assert!(other.is_cancelled());
}

#[test]
fn restart_cancels_only_the_previous_run() {
    let view = CancelToken::new();
    let first = view.restart(None);
    let second = view.restart(Some(first.clone()));
    assert!(first.is_cancelled());
    assert!(!second.is_cancelled());
    assert!(!view.is_cancelled());

    view.cancel();
    assert!(second.is_cancelled());
}
