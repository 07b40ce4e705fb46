use crate::model::{DocumentId, SortField};
use crate::remote::is_unauthorized;
use crate::state::FilesAction;

use super::*;

impl<S: DurableStorage> Client<S> {
    /// Refetches the list for the current sort parameters.
    ///
    /// A 401 runs the session-expiry path and leaves the view untouched; any
    /// other failure keeps the previous items and sets the view error.
    pub fn refresh(&mut self) -> Outcome {
        if self.state().session.token.is_none() {
            tracing::debug!("refresh without a session token");
            return Outcome::Navigate(Route::Home);
        }
        let seq = self.begin_fetch();
        let (field, order) = {
            let view = &self.state().collection;
            (view.sort_field, view.sort_order)
        };
        let res = self.authorized().list_files(field, order);
        self.complete_fetch(seq, res)
    }

    /// Reserves a sequence number for a list fetch whose outcome is later
    /// handed to `complete_fetch`.
    pub fn begin_fetch(&mut self) -> u64 {
        self.store.begin_fetch()
    }

    /// Applies the outcome of fetch `seq`; results of superseded fetches are
    /// discarded by the reducer.
    pub fn complete_fetch(
        &mut self,
        seq: u64,
        res: Result<Vec<crate::model::Document>>,
    ) -> Outcome {
        match res {
            Ok(items) => {
                tracing::debug!(seq, count = items.len(), "files loaded");
                self.dispatch(FilesAction::SetList { seq, items });
                Outcome::Stay
            }
            Err(err) if is_unauthorized(&err) => Outcome::Navigate(self.expire_session(&err)),
            Err(err) => {
                tracing::warn!(seq, error = format!("{:#}", err), "load files failed");
                self.dispatch(FilesAction::FetchFailed {
                    seq,
                    message: LOAD_FILES_FAILED.to_string(),
                });
                Outcome::Stay
            }
        }
    }

    /// Toggles sorting; the caller decides when to `refresh`.
    pub fn set_sort(&mut self, field: SortField) {
        self.dispatch(FilesAction::SetSort(field));
    }

    /// Deletes one document; callers must have confirmed first.
    pub fn remove(&mut self, id: DocumentId) -> Outcome {
        let res = self.authorized().delete_file(id);
        match res {
            Ok(()) => {
                tracing::info!(id, "file deleted");
                self.refresh()
            }
            Err(err) if is_unauthorized(&err) => Outcome::Navigate(self.expire_session(&err)),
            Err(err) => {
                tracing::warn!(id, error = format!("{:#}", err), "delete file failed");
                self.dispatch(FilesAction::SetError(Some(DELETE_FILE_FAILED.to_string())));
                Outcome::Stay
            }
        }
    }

    pub fn clear_error(&mut self) {
        self.dispatch(FilesAction::SetError(None));
    }
}
