use crate::content::{self, BLANK_COLS, BLANK_ROWS, GridBuffer};
use crate::model::{Document, DocumentId, DocumentPayload};
use crate::remote::is_unauthorized;
use crate::state::FilesAction;

use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    New,
    Existing(DocumentId),
}

/// Fields and grid being edited. Owned by the caller so a failed save never
/// loses work.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorSession {
    pub target: EditTarget,
    pub name: String,
    pub description: String,
    pub grid: GridBuffer,
    /// The stored content could not be decoded and the grid started empty.
    pub content_fallback: bool,
}

impl EditorSession {
    pub fn new_document() -> Self {
        Self {
            target: EditTarget::New,
            name: String::new(),
            description: String::new(),
            grid: GridBuffer::blank(BLANK_ROWS, BLANK_COLS),
            content_fallback: false,
        }
    }

    pub fn from_document(doc: &Document) -> Self {
        let decoded = content::decode(&doc.content);
        if let content::Decoded::Fallback { reason } = &decoded {
            tracing::warn!(id = doc.id, reason = %reason, "stored content unreadable; opening empty grid");
        }
        let content_fallback = decoded.is_fallback();
        Self {
            target: EditTarget::Existing(doc.id),
            name: doc.name.clone(),
            description: doc.description().to_string(),
            grid: decoded.into_buffer(),
            content_fallback,
        }
    }

    pub fn payload(&self) -> DocumentPayload {
        DocumentPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            content: content::encode(&self.grid),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum OpenOutcome {
    Opened(EditorSession),
    Navigate(Route),
}

impl<S: DurableStorage> Client<S> {
    pub fn open(&mut self, target: EditTarget) -> OpenOutcome {
        let id = match target {
            EditTarget::New => return OpenOutcome::Opened(EditorSession::new_document()),
            EditTarget::Existing(id) => id,
        };
        let res = self.authorized().get_file(id);
        match res {
            Ok(doc) => {
                let session = EditorSession::from_document(&doc);
                self.dispatch(FilesAction::SetCurrent(Some(doc)));
                OpenOutcome::Opened(session)
            }
            Err(err) if is_unauthorized(&err) => OpenOutcome::Navigate(self.expire_session(&err)),
            Err(err) => {
                tracing::warn!(id, error = format!("{:#}", err), "load file failed");
                self.dispatch(FilesAction::SetError(Some(LOAD_FILE_FAILED.to_string())));
                OpenOutcome::Navigate(Route::Dashboard)
            }
        }
    }

    /// Persists the session; on success the caller returns to the dashboard.
    pub fn save(&mut self, session: &EditorSession) -> Outcome {
        if let Err(msg) = validate_document_name(&session.name) {
            self.dispatch(FilesAction::SetError(Some(msg)));
            return Outcome::Stay;
        }
        let payload = session.payload();
        let res = match session.target {
            EditTarget::New => self.authorized().create_file(&payload),
            EditTarget::Existing(id) => self.authorized().update_file(id, &payload),
        };
        match res {
            Ok(doc) => {
                tracing::info!(id = doc.id, "file saved");
                Outcome::Navigate(Route::Dashboard)
            }
            Err(err) if is_unauthorized(&err) => Outcome::Navigate(self.expire_session(&err)),
            Err(err) => {
                tracing::warn!(error = format!("{:#}", err), "save file failed");
                self.dispatch(FilesAction::SetError(Some(SAVE_FILE_FAILED.to_string())));
                Outcome::Stay
            }
        }
    }
}
