use super::EditTarget;

/// Screen a front end should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Login/signup; the unauthenticated entry point.
    Home,
    Dashboard,
    Editor(EditTarget),
}

impl Route {
    pub fn is_protected(self) -> bool {
        !matches!(self, Route::Home)
    }
}

/// Result of an intent, after its state transitions have been dispatched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Stay on the current screen; any error is in the store.
    Stay,
    Navigate(Route),
    /// Rejected before any network call.
    Invalid(super::FieldErrors),
}

impl Outcome {
    pub fn route(&self) -> Option<Route> {
        match self {
            Outcome::Navigate(r) => Some(*r),
            _ => None,
        }
    }
}
