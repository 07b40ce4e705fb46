//! DTOs for remote API requests/responses.

use crate::model::User;

#[derive(Debug, serde::Serialize)]
pub(super) struct CredentialsRequest<'a> {
    pub(super) email: &'a str,
    pub(super) password: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct ErrorBody {
    #[serde(default)]
    pub(super) msg: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct ListFilesQuery {
    pub(super) sort_field: &'static str,
    pub(super) sort_order: &'static str,
}
