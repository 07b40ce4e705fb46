use crate::model::Session;

use super::{AuthAction, Effect};

pub fn reduce_session(session: &Session, action: AuthAction) -> (Session, Vec<Effect>) {
    match action {
        AuthAction::Login { token, user } => {
            let effects = vec![Effect::PersistSession {
                token: token.clone(),
                user: user.clone(),
            }];
            (Session::authenticated(token, user), effects)
        }
        AuthAction::Logout => (Session::default(), vec![Effect::ClearSession]),
        AuthAction::SetError(error) => (
            Session {
                error,
                ..session.clone()
            },
            Vec::new(),
        ),
    }
}

#[cfg(test)]
#[path = "../tests/state/session_tests.rs"]
mod tests;
