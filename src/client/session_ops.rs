use crate::remote::{AuthResponse, server_message};
use crate::state::AuthAction;

use super::*;

impl<S: DurableStorage> Client<S> {
    pub fn login(&mut self, email: &str, password: &str) -> Outcome {
        self.dispatch(AuthAction::SetError(None));
        if let Err(errors) = validate_login(email, password) {
            return Outcome::Invalid(errors);
        }
        let res = self.remote.login(email, password);
        self.finish_auth(res, LOGIN_FAILED)
    }

    pub fn signup(&mut self, email: &str, password: &str, confirm: &str) -> Outcome {
        self.dispatch(AuthAction::SetError(None));
        if let Err(errors) = validate_signup(email, password, confirm) {
            return Outcome::Invalid(errors);
        }
        let res = self.remote.signup(email, password);
        self.finish_auth(res, SIGNUP_FAILED)
    }

    /// Idempotent.
    pub fn logout(&mut self) -> Outcome {
        self.dispatch(AuthAction::Logout);
        Outcome::Navigate(Route::Home)
    }

    /// Redirect for a route given the current session.
    pub fn guard(&self, route: Route) -> Route {
        let authenticated = self.state().session.is_authenticated;
        match route {
            Route::Home if authenticated => Route::Dashboard,
            r if r.is_protected() && !authenticated => Route::Home,
            r => r,
        }
    }

    fn finish_auth(&mut self, res: Result<AuthResponse>, fallback: &str) -> Outcome {
        match res {
            Ok(AuthResponse { token, user }) => {
                tracing::info!(user_id = user.id, "logged in");
                self.dispatch(AuthAction::Login { token, user });
                Outcome::Navigate(Route::Dashboard)
            }
            Err(err) => {
                tracing::debug!(error = format!("{:#}", err), "authentication failed");
                let msg = server_message(&err).unwrap_or(fallback).to_string();
                self.dispatch(AuthAction::SetError(Some(msg)));
                Outcome::Stay
            }
        }
    }
}
