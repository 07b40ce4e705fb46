use crate::model::{CollectionView, SortOrder};

use super::FilesAction;

pub fn reduce_collection(view: &CollectionView, action: FilesAction) -> CollectionView {
    match action {
        FilesAction::BeginFetch => CollectionView {
            fetch_seq: view.fetch_seq + 1,
            ..view.clone()
        },
        FilesAction::SetList { seq, items } => {
            if is_stale(view, seq) {
                return view.clone();
            }
            CollectionView {
                items,
                error: None,
                applied_seq: seq,
                ..view.clone()
            }
        }
        FilesAction::FetchFailed { seq, message } => {
            if is_stale(view, seq) {
                return view.clone();
            }
            CollectionView {
                error: Some(message),
                applied_seq: seq,
                ..view.clone()
            }
        }
        FilesAction::SetSort(field) => {
            let sort_order = if field == view.sort_field {
                view.sort_order.flip()
            } else {
                SortOrder::Asc
            };
            CollectionView {
                sort_field: field,
                sort_order,
                ..view.clone()
            }
        }
        FilesAction::SetCurrent(current) => CollectionView {
            current,
            error: None,
            ..view.clone()
        },
        FilesAction::SetError(error) => CollectionView {
            error,
            ..view.clone()
        },
    }
}

// A result for a fetch older than one already applied lost the race.
fn is_stale(view: &CollectionView, seq: u64) -> bool {
    seq < view.applied_seq
}

#[cfg(test)]
#[path = "../tests/state/collection_tests.rs"]
mod tests;
