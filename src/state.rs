//! Process-wide client state and its single mutation path.
//!
//! `reduce` is a pure function from `(&AppState, Action)` to the next state plus
//! the storage effects the transition asks for. `Store::dispatch` is the only
//! caller: it swaps in the new state and then applies the effects.

use crate::model::{CollectionView, Session};
use crate::storage::{self, DurableStorage};

mod actions;
mod collection;
mod session;

pub use self::actions::{Action, AuthAction, Effect, FilesAction};
pub use self::collection::reduce_collection;
pub use self::session::reduce_session;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub session: Session,
    pub collection: CollectionView,
}

#[derive(Debug)]
pub struct Transition {
    pub state: AppState,
    pub effects: Vec<Effect>,
}

pub fn reduce(state: &AppState, action: Action) -> Transition {
    match action {
        Action::Auth(a) => {
            let (session, effects) = reduce_session(&state.session, a);
            Transition {
                state: AppState {
                    session,
                    collection: state.collection.clone(),
                },
                effects,
            }
        }
        Action::Files(a) => Transition {
            state: AppState {
                session: state.session.clone(),
                collection: reduce_collection(&state.collection, a),
            },
            effects: Vec::new(),
        },
    }
}

pub struct Store<S: DurableStorage> {
    state: AppState,
    storage: S,
}

impl<S: DurableStorage> Store<S> {
    /// Builds the store and reads durable storage once.
    ///
    /// Unreadable storage starts the process signed out.
    pub fn hydrate(mut storage: S) -> Self {
        let session = match storage::hydrate_session(&mut storage) {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = format!("{:#}", err), "session hydration failed");
                Session::default()
            }
        };
        tracing::debug!(authenticated = session.is_authenticated, "hydrated session");
        Self {
            state: AppState {
                session,
                collection: CollectionView::default(),
            },
            storage,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn snapshot(&self) -> AppState {
        self.state.clone()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action.label(), "dispatch");
        let Transition { state, effects } = reduce(&self.state, action);
        self.state = state;
        for effect in effects {
            self.apply(effect);
        }
    }

    /// Reserves the sequence number for a new list fetch.
    pub fn begin_fetch(&mut self) -> u64 {
        self.dispatch(Action::Files(FilesAction::BeginFetch));
        self.state.collection.fetch_seq
    }

    // Storage writes are fire-and-forget: a failure is logged and the
    // in-memory transition stands.
    fn apply(&mut self, effect: Effect) {
        let res = match &effect {
            Effect::PersistSession { token, user } => {
                storage::persist_session(&mut self.storage, token, user)
            }
            Effect::ClearSession => storage::clear_session(&mut self.storage),
        };
        if let Err(err) = res {
            tracing::warn!(
                effect = effect.label(),
                error = format!("{:#}", err),
                "storage write failed"
            );
        }
    }
}

#[cfg(test)]
#[path = "tests/state/store_tests.rs"]
mod tests;
