use super::*;
use crate::state::session::User;

fn session(role: Role) -> Session {
    Session { token: "t".to_owned(), user: User { email: "u@x.edu".to_owned(), role } }
}

const ALL_ROLES: [Role; 2] = [Role::Admin, Role::Faculty];

#[test]
fn no_session_redirects_to_login() {
    for allowed in [None, Some(&[][..]), Some(&[Role::Admin][..]), Some(&ALL_ROLES[..])] {
        let decision = decide(None, allowed);
        assert_eq!(decision, GuardDecision::Deny(AccessDenied::Unauthenticated));
    }
    assert_eq!(AccessDenied::Unauthenticated.redirect_path(), "/login");
}

#[test]
fn absent_allow_list_admits_any_role() {
    for role in ALL_ROLES {
        assert_eq!(decide(Some(&session(role)), None), GuardDecision::Render);
    }
}

#[test]
fn role_outside_allow_list_is_unauthorized() {
    let decision = decide(Some(&session(Role::Faculty)), Some(&[Role::Admin]));
    assert_eq!(decision, GuardDecision::Deny(AccessDenied::Unauthorized));
    assert_eq!(AccessDenied::Unauthorized.redirect_path(), "/unauthorized");
}

#[test]
fn role_inside_allow_list_renders() {
    assert_eq!(decide(Some(&session(Role::Admin)), Some(&[Role::Admin])), GuardDecision::Render);
    assert_eq!(decide(Some(&session(Role::Faculty)), Some(&ALL_ROLES)), GuardDecision::Render);
}

#[test]
fn empty_allow_list_admits_any_role() {
    for role in ALL_ROLES {
        assert_eq!(decide(Some(&session(role)), Some(&[])), GuardDecision::Render);
    }
}

#[test]
fn decision_matches_membership_for_every_combination() {
    let allow_lists: [Option<&[Role]>; 5] =
        [None, Some(&[]), Some(&[Role::Admin]), Some(&[Role::Faculty]), Some(&ALL_ROLES)];
    for allowed in allow_lists {
        for role in ALL_ROLES {
            let renders = allowed.is_none_or(|roles| roles.is_empty() || roles.contains(&role));
            let expected = if renders { GuardDecision::Render } else { GuardDecision::Deny(AccessDenied::Unauthorized) };
            assert_eq!(decide(Some(&session(role)), allowed), expected, "{role} under {allowed:?}");
        }
    }
}

#[test]
fn home_path_routes_by_role() {
    assert_eq!(home_path(Role::Admin), "/admin");
    assert_eq!(home_path(Role::Faculty), "/faculty");
}
