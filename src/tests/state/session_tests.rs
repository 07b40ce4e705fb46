use super::*;
use crate::model::User;

fn login(token: &str) -> AuthAction {
    AuthAction::Login {
        token: token.to_string(),
        user: User::new(1, "a@b.com"),
    }
}

#[test]
fn login_sets_session_and_requests_persist() {
    let (next, effects) = reduce_session(&Session::default(), login("tok1"));
    assert!(next.is_authenticated);
    assert_eq!(next.token.as_deref(), Some("tok1"));
    assert_eq!(
        effects,
        vec![Effect::PersistSession {
            token: "tok1".to_string(),
            user: User::new(1, "a@b.com"),
        }]
    );
}

#[test]
fn login_clears_previous_error() {
    let start = Session {
        error: Some("Invalid email or password".to_string()),
        ..Session::default()
    };
    let (next, _) = reduce_session(&start, login("tok1"));
    assert_eq!(next.error, None);
}

#[test]
fn logout_twice_is_a_noop() {
    let (signed_in, _) = reduce_session(&Session::default(), login("tok1"));
    let (once, _) = reduce_session(&signed_in, AuthAction::Logout);
    let (twice, _) = reduce_session(&once, AuthAction::Logout);
    assert_eq!(once, Session::default());
    assert_eq!(once, twice);
}

#[test]
fn set_error_leaves_credentials_alone() {
    let (signed_in, _) = reduce_session(&Session::default(), login("tok1"));
    let (next, effects) =
        reduce_session(&signed_in, AuthAction::SetError(Some("boom".to_string())));
    assert_eq!(next.token, signed_in.token);
    assert_eq!(next.user, signed_in.user);
    assert_eq!(next.error.as_deref(), Some("boom"));
    assert!(effects.is_empty());

    let (cleared, _) = reduce_session(&next, AuthAction::SetError(None));
    assert_eq!(cleared, signed_in);
}

#[test]
fn invariant_holds_across_action_sequences() {
    let script = [
        AuthAction::SetError(Some("e".to_string())),
        login("a"),
        AuthAction::SetError(Some("e".to_string())),
        AuthAction::Logout,
        AuthAction::Logout,
        login("b"),
        login("c"),
        AuthAction::SetError(None),
        AuthAction::Logout,
        AuthAction::SetError(Some("e".to_string())),
    ];
    let mut session = Session::default();
    for action in script {
        session = reduce_session(&session, action).0;
        assert!(session.is_consistent(), "{session:?}");
    }
}
