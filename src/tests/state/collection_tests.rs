use super::*;
use crate::model::{Document, SortField};

fn doc(id: i64, name: &str) -> Document {
    Document {
        id,
        name: name.to_string(),
        description: None,
        content: "[]".to_string(),
        created_date: "2024-01-01T00:00:00".to_string(),
        modified_date: None,
        user_id: Some(1),
    }
}

#[test]
fn sort_toggle_flips_same_field_and_resets_new_field() {
    let view = CollectionView::default();
    assert_eq!((view.sort_field, view.sort_order), (SortField::Name, SortOrder::Asc));

    let view = reduce_collection(&view, FilesAction::SetSort(SortField::Name));
    assert_eq!((view.sort_field, view.sort_order), (SortField::Name, SortOrder::Desc));

    let view = reduce_collection(&view, FilesAction::SetSort(SortField::Date));
    assert_eq!((view.sort_field, view.sort_order), (SortField::Date, SortOrder::Asc));

    let view = reduce_collection(&view, FilesAction::SetSort(SortField::Date));
    let view = reduce_collection(&view, FilesAction::SetSort(SortField::Date));
    assert_eq!((view.sort_field, view.sort_order), (SortField::Date, SortOrder::Asc));
}

#[test]
fn set_sort_does_not_touch_items() {
    let mut view = CollectionView::default();
    view.items = vec![doc(1, "b"), doc(2, "a")];
    let next = reduce_collection(&view, FilesAction::SetSort(SortField::Name));
    assert_eq!(next.items, view.items);
}

#[test]
fn set_list_replaces_items_and_clears_error() {
    let mut view = CollectionView::default();
    view.items = vec![doc(1, "old")];
    view.error = Some("x".to_string());
    let view = reduce_collection(&view, FilesAction::BeginFetch);
    let view = reduce_collection(
        &view,
        FilesAction::SetList {
            seq: view.fetch_seq,
            items: vec![doc(2, "b"), doc(3, "a")],
        },
    );
    // Server order is kept as-is.
    assert_eq!(view.items, vec![doc(2, "b"), doc(3, "a")]);
    assert_eq!(view.error, None);
}

#[test]
fn fetch_failure_keeps_stale_items() {
    let mut view = CollectionView::default();
    view.items = vec![doc(1, "kept")];
    let view = reduce_collection(&view, FilesAction::BeginFetch);
    let view = reduce_collection(
        &view,
        FilesAction::FetchFailed {
            seq: view.fetch_seq,
            message: "Failed".to_string(),
        },
    );
    assert_eq!(view.items, vec![doc(1, "kept")]);
    assert_eq!(view.error.as_deref(), Some("Failed"));
}

#[test]
fn superseded_fetch_results_are_discarded() {
    let view = CollectionView::default();
    let view = reduce_collection(&view, FilesAction::BeginFetch);
    let first = view.fetch_seq;
    let view = reduce_collection(&view, FilesAction::BeginFetch);
    let second = view.fetch_seq;

    let view = reduce_collection(
        &view,
        FilesAction::SetList {
            seq: second,
            items: vec![doc(2, "new")],
        },
    );
    let view = reduce_collection(
        &view,
        FilesAction::SetList {
            seq: first,
            items: vec![doc(1, "old")],
        },
    );
    assert_eq!(view.items, vec![doc(2, "new")]);

    let view = reduce_collection(
        &view,
        FilesAction::FetchFailed {
            seq: first,
            message: "late".to_string(),
        },
    );
    assert_eq!(view.error, None);
}

#[test]
fn set_current_clears_error() {
    let mut view = CollectionView::default();
    view.error = Some("x".to_string());
    let view = reduce_collection(&view, FilesAction::SetCurrent(Some(doc(4, "d"))));
    assert_eq!(view.current.map(|d| d.id), Some(4));
    assert_eq!(view.error, None);
}

#[test]
fn clear_error() {
    let mut view = CollectionView::default();
    view.error = Some("x".to_string());
    let view = reduce_collection(&view, FilesAction::SetError(None));
    assert_eq!(view.error, None);
}
