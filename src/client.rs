//! Intent-level operations: each one dispatches actions on the store and,
//! where remote data is involved, performs the HTTP call and dispatches its
//! outcome.

use anyhow::Result;

use crate::model::ClientConfig;
use crate::remote::RemoteClient;
use crate::state::{Action, AppState, AuthAction, Store};
use crate::storage::DurableStorage;

mod collection_ops;
mod editor;
mod route;
mod session_ops;
mod validate;

pub use self::editor::{EditTarget, EditorSession, OpenOutcome};
pub use self::route::{Outcome, Route};
pub use self::validate::{
    FieldErrors, validate_document_name, validate_login, validate_signup,
};

pub const LOAD_FILES_FAILED: &str = "Failed to load files. Please try again.";
pub const DELETE_FILE_FAILED: &str = "Failed to delete file. Please try again.";
pub const LOAD_FILE_FAILED: &str = "Failed to load file. Please try again.";
pub const SAVE_FILE_FAILED: &str = "Failed to save file. Please try again.";
pub const LOGIN_FAILED: &str = "An error occurred while trying to log in. Please try again.";
pub const SIGNUP_FAILED: &str = "An error occurred while trying to sign up. Please try again.";

pub struct Client<S: DurableStorage> {
    store: Store<S>,
    remote: RemoteClient,
}

impl<S: DurableStorage> Client<S> {
    /// Hydrates the session from `storage` and prepares the HTTP client.
    pub fn new(config: &ClientConfig, storage: S) -> Result<Self> {
        let remote = RemoteClient::new(config)?;
        Ok(Self {
            store: Store::hydrate(storage),
            remote,
        })
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn store(&self) -> &Store<S> {
        &self.store
    }

    pub fn dispatch(&mut self, action: impl Into<Action>) {
        self.store.dispatch(action.into());
    }

    /// Remote client carrying the current session token.
    fn authorized(&mut self) -> &RemoteClient {
        let token = self.store.state().session.token.clone();
        self.remote.set_token(token);
        &self.remote
    }

    // Dead token: drop the session before anything else surfaces, then send
    // the user to the unauthenticated entry point.
    fn expire_session(&mut self, err: &anyhow::Error) -> Route {
        tracing::info!(error = %err, "session expired; logging out");
        self.dispatch(AuthAction::Logout);
        Route::Home
    }
}
