use super::*;
use crate::content::Cell;

fn rows(v: &[&[&str]]) -> Vec<Vec<String>> {
    v.iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect()
}

#[test]
fn encode_maps_empty_cells_to_empty_string() {
    let grid = GridBuffer::from_rows(vec![vec![Cell::from("1"), Cell::Empty, Cell::from("x")]]);
    let encoded = encode(&grid);
    assert_eq!(encoded, r#"[["1","","x"]]"#);
    assert_eq!(decode(&encoded), Decoded::Grid(rows(&[&["1", "", "x"]])));
}

#[test]
fn roundtrip_stringifies_numbers_and_booleans() {
    let grid = GridBuffer::from_rows(vec![
        vec![Cell::from(42i64), Cell::from(true), Cell::from("a")],
        vec![Cell::Number(serde_json::Number::from_f64(1.5).unwrap())],
        vec![],
    ]);
    let back = decode(&encode(&grid)).into_rows();
    assert_eq!(back, rows(&[&["42", "true", "a"], &["1.5"], &[]]));
    assert_eq!(back, grid.to_text_rows());
}

#[test]
fn encode_never_emits_null() {
    let grid = GridBuffer::from_rows(vec![vec![Cell::Empty; 3]; 2]);
    assert!(!encode(&grid).contains("null"));
}

#[test]
fn decode_invalid_json_falls_back_to_empty() {
    let decoded = decode("[[1,2");
    assert!(decoded.is_fallback());
    assert!(decoded.into_rows().is_empty());

    assert!(decode("").is_fallback());
}

#[test]
fn decode_non_sequence_coerces_to_empty() {
    for raw in ["{}", "null", "3", r#""plain text""#] {
        let decoded = decode(raw);
        assert!(decoded.is_fallback(), "{raw}");
        assert!(decoded.into_buffer().is_empty());
    }
}

#[test]
fn decode_normalizes_raw_server_cells() {
    let decoded = decode(r#"[[null, 1, false, "s"], [[1, 2]], 7]"#);
    assert_eq!(
        decoded,
        Decoded::Grid(rows(&[&["", "1", "false", "s"], &["[1,2]"], &["7"]]))
    );
}

#[test]
fn decode_unwraps_string_encoded_grid_once() {
    let inner = r#"[["a","b"]]"#;
    let doubled = serde_json::to_string(inner).unwrap();
    assert_eq!(decode(&doubled), Decoded::Grid(rows(&[&["a", "b"]])));
}

#[test]
fn decode_empty_array_is_a_real_grid() {
    assert_eq!(decode("[]"), Decoded::Grid(Vec::new()));
}

#[test]
fn blank_grid_has_requested_shape() {
    let grid = GridBuffer::blank(crate::content::BLANK_ROWS, crate::content::BLANK_COLS);
    assert_eq!(grid.row_count(), 5);
    assert_eq!(grid.col_count(), 5);
    assert_eq!(decode(&encode(&grid)).into_rows(), vec![vec![String::new(); 5]; 5]);
}

#[test]
fn set_grows_ragged_buffer() {
    let mut grid = GridBuffer::new();
    grid.set(1, 2, Cell::from("z")).unwrap();
    assert_eq!(grid.to_text_rows(), rows(&[&[], &["", "", "z"]]));
    assert_eq!(grid.get(1, 2), Some(&Cell::from("z")));
    assert_eq!(grid.get(0, 0), None);
}

#[test]
fn set_rejects_positions_past_limit() {
    let mut grid = GridBuffer::from_rows(vec![vec![Cell::from("a")]]);
    assert!(grid.set(usize::MAX, 0, Cell::from("x")).is_err());
    assert!(grid.set(0, usize::MAX, Cell::from("x")).is_err());
    assert!(grid.set(crate::content::MAX_ROWS, 0, Cell::from("x")).is_err());
    assert_eq!(grid.to_text_rows(), rows(&[&["a"]]));
}
