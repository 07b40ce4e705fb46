use super::*;
use crate::model::User;
use crate::storage::{MemoryStorage, TOKEN_SLOT, USER_SLOT};

fn login(token: &str) -> Action {
    Action::Auth(AuthAction::Login {
        token: token.to_string(),
        user: User::new(1, "a@b.com"),
    })
}

#[test]
fn login_then_logout_mirrors_storage() {
    let mut store = Store::hydrate(MemoryStorage::new());
    assert!(!store.state().session.is_authenticated);

    store.dispatch(login("tok1"));
    assert!(store.state().session.is_authenticated);
    assert_eq!(
        store.storage().get_item(TOKEN_SLOT).unwrap().as_deref(),
        Some("tok1")
    );
    assert!(store.storage().get_item(USER_SLOT).unwrap().is_some());

    store.dispatch(Action::Auth(AuthAction::Logout));
    assert!(!store.state().session.is_authenticated);
    assert_eq!(store.storage().get_item(TOKEN_SLOT).unwrap(), None);
    assert_eq!(store.storage().get_item(USER_SLOT).unwrap(), None);
}

#[test]
fn hydrate_trusts_stored_token() {
    let mut storage = MemoryStorage::new();
    crate::storage::persist_session(&mut storage, "tok9", &User::new(9, "z@z.z")).unwrap();

    let store = Store::hydrate(storage);
    assert!(store.state().session.is_authenticated);
    assert_eq!(store.state().session.token.as_deref(), Some("tok9"));
}

#[test]
fn snapshot_is_detached_from_later_transitions() {
    let mut store = Store::hydrate(MemoryStorage::new());
    let before = store.snapshot();
    store.dispatch(login("tok1"));
    assert!(!before.session.is_authenticated);
    assert_ne!(before, store.snapshot());
}

#[test]
fn begin_fetch_hands_out_increasing_sequence() {
    let mut store = Store::hydrate(MemoryStorage::new());
    let a = store.begin_fetch();
    let b = store.begin_fetch();
    assert!(b > a);
}

#[test]
fn files_actions_leave_session_untouched() {
    let mut store = Store::hydrate(MemoryStorage::new());
    store.dispatch(login("tok1"));
    let session = store.state().session.clone();
    store.dispatch(Action::Files(FilesAction::SetError(Some("x".to_string()))));
    assert_eq!(store.state().session, session);
}

struct FailingStorage;

impl DurableStorage for FailingStorage {
    fn get_item(&self, _key: &str) -> anyhow::Result<Option<String>> {
        anyhow::bail!("storage unavailable")
    }
    fn set_item(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
        anyhow::bail!("storage unavailable")
    }
    fn remove_item(&mut self, _key: &str) -> anyhow::Result<()> {
        anyhow::bail!("storage unavailable")
    }
}

#[test]
fn storage_failures_do_not_block_transitions() {
    let mut store = Store::hydrate(FailingStorage);
    assert!(!store.state().session.is_authenticated);

    store.dispatch(login("tok1"));
    assert!(store.state().session.is_authenticated);
    store.dispatch(Action::Auth(AuthAction::Logout));
    assert!(!store.state().session.is_authenticated);
}
