use crate::model::{Document, SortField, User};

/// One intended state transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Auth(AuthAction),
    Files(FilesAction),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    Login { token: String, user: User },
    Logout,
    SetError(Option<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilesAction {
    /// Hands out the next fetch sequence number.
    BeginFetch,
    SetList { seq: u64, items: Vec<Document> },
    FetchFailed { seq: u64, message: String },
    /// Toggle rule: same field flips the order, another field starts ascending.
    SetSort(SortField),
    SetCurrent(Option<Document>),
    SetError(Option<String>),
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Auth(AuthAction::Login { .. }) => "auth/login",
            Action::Auth(AuthAction::Logout) => "auth/logout",
            Action::Auth(AuthAction::SetError(_)) => "auth/setError",
            Action::Files(FilesAction::BeginFetch) => "files/beginFetch",
            Action::Files(FilesAction::SetList { .. }) => "files/setList",
            Action::Files(FilesAction::FetchFailed { .. }) => "files/fetchFailed",
            Action::Files(FilesAction::SetSort(_)) => "files/setSorting",
            Action::Files(FilesAction::SetCurrent(_)) => "files/setCurrentFile",
            Action::Files(FilesAction::SetError(_)) => "files/setError",
        }
    }
}

impl From<AuthAction> for Action {
    fn from(a: AuthAction) -> Self {
        Action::Auth(a)
    }
}

impl From<FilesAction> for Action {
    fn from(a: FilesAction) -> Self {
        Action::Files(a)
    }
}

/// Side effect requested by a transition, applied by the store after the
/// new state is in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    PersistSession { token: String, user: User },
    ClearSession,
}

impl Effect {
    pub fn label(&self) -> &'static str {
        match self {
            Effect::PersistSession { .. } => "persist-session",
            Effect::ClearSession => "clear-session",
        }
    }
}
