use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl User {
    pub fn new(id: i64, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            is_active: true,
        }
    }
}

/// Authenticated-identity state of the client.
///
/// `token`, `user` and `is_authenticated` move together: either all three say
/// "signed in" or none of them do. Only the session reducer writes them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub error: Option<String>,
}

impl Session {
    pub fn authenticated(token: String, user: User) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
            is_authenticated: true,
            error: None,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.is_authenticated == self.token.is_some() && self.user.is_some() == self.token.is_some()
    }
}
