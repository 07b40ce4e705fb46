//! Durable local storage: the on-disk mirror of the session plus client config.
//!
//! Storage is never the source of truth after startup. The session reducer
//! declares write-through effects on login/logout, and `hydrate_session` is
//! read exactly once when a `Store` is built.

use anyhow::{Context, Result};

use crate::model::{Session, User};

mod local;
mod memory;

pub use self::local::LocalStore;
pub use self::memory::MemoryStorage;

pub const TOKEN_SLOT: &str = "token";
pub const USER_SLOT: &str = "user";

/// Named string slots that survive a restart.
pub trait DurableStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

pub fn persist_session(storage: &mut dyn DurableStorage, token: &str, user: &User) -> Result<()> {
    let user_json = serde_json::to_string(user).context("serialize user")?;
    storage
        .set_item(TOKEN_SLOT, token)
        .context("write token slot")?;
    storage
        .set_item(USER_SLOT, &user_json)
        .context("write user slot")?;
    Ok(())
}

pub fn clear_session(storage: &mut dyn DurableStorage) -> Result<()> {
    storage
        .remove_item(TOKEN_SLOT)
        .context("remove token slot")?;
    storage.remove_item(USER_SLOT).context("remove user slot")?;
    Ok(())
}

/// Builds the startup session from storage.
///
/// A token is trusted optimistically. A token without a readable user is not a
/// session at all; both slots are dropped so the pair stays consistent.
pub fn hydrate_session(storage: &mut dyn DurableStorage) -> Result<Session> {
    let Some(token) = storage.get_item(TOKEN_SLOT).context("read token slot")? else {
        return Ok(Session::default());
    };
    if token.trim().is_empty() {
        clear_session(storage)?;
        return Ok(Session::default());
    }

    let user = storage
        .get_item(USER_SLOT)
        .context("read user slot")?
        .and_then(|raw| match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(error = %err, "stored user is unreadable; discarding session");
                None
            }
        });

    match user {
        Some(user) => Ok(Session::authenticated(token, user)),
        None => {
            clear_session(storage)?;
            Ok(Session::default())
        }
    }
}

fn validate_slot_key(key: &str) -> Result<()> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !ok {
        anyhow::bail!("invalid storage slot name `{}`", key);
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/storage_tests.rs"]
mod tests;
