//! Cross-type behavior of rows and tables

use rstest::rstest;

use super::cell::TableCell;
use super::entity::HtmlEntity;
use super::input::row_input;
use super::row::TableRow;
use super::table::Table;
use crate::utils::error::TableError;

fn row_with_hidden(hidden: &[bool]) -> TableRow {
    TableRow::with_cells(
        hidden
            .iter()
            .enumerate()
            .map(|(i, &h)| TableCell::with_key_value(format!("c{}", i), i.to_string()).with_hidden(h)),
    )
    .unwrap()
}

#[rstest]
#[case(&[])]
#[case(&[false])]
#[case(&[true])]
#[case(&[false, true, false])]
#[case(&[true, true, false, true])]
fn test_visible_keys_are_subset_minus_hidden(#[case] hidden: &[bool]) {
    let row = row_with_hidden(hidden);
    let all = row.cell_keys(false);
    let visible = row.cell_keys(true);

    let expected: Vec<&str> = all
        .iter()
        .copied()
        .filter(|key| !row.cell(key).unwrap().is_hidden())
        .collect();
    assert_eq!(visible, expected);
    assert!(visible.iter().all(|k| all.contains(k)));
    assert_eq!(row.cell_count(true), hidden.iter().filter(|h| !**h).count());
}

#[rstest]
#[case("a")]
#[case("c1")]
#[case("")]
fn test_duplicate_add_fails_and_preserves_row(#[case] key: &str) {
    let mut row = TableRow::new();
    row.add_cell(TableCell::with_key_value(key, "first")).unwrap();
    row.add_cell(TableCell::new("other")).unwrap();

    let err = row.add_cell(TableCell::with_key_value(key, "second")).unwrap_err();
    assert_eq!(err, TableError::duplicate_key(key));
    assert_eq!(row.cell_count(false), 2);
    assert_eq!(row.cell(key).unwrap().value(), Some("first"));
    assert_eq!(row.cell_at(0).unwrap().key(), key);
}

#[rstest]
#[case(vec![("name", "Ada"), ("age", "36")])]
#[case(vec![("x", "")])]
#[case(vec![("a", "1"), ("b", "2"), ("c", "3"), ("d", "<b>4</b>")])]
fn test_record_round_trip(#[case] entries: Vec<(&str, &str)>) {
    let row = TableRow::from_record(row_input(entries.clone()));
    let record = row.to_record();
    let values: Vec<_> = entries.iter().map(|(_, v)| Some(*v)).collect();
    assert_eq!(record.values(), values);
    for (key, value) in entries {
        assert_eq!(record.cells_by_key[key].value.as_deref(), Some(value));
    }
}

#[test]
fn test_hide_then_remove_headerless() {
    let mut table = Table::new();
    table
        .set_header_from_record(row_input([("id", Some("ID")), ("tmp", None)]))
        .add_rows_from_records([
            row_input([("id", "1"), ("tmp", "t"), ("junk", "j")]),
            row_input([("junk", "j")]),
        ]);

    table.hide_headerless_columns();
    assert_eq!(table.row(0).unwrap().cell_count(false), 3);
    assert_eq!(table.row(0).unwrap().cell_keys(true), ["id"]);

    table.remove_headerless_columns();
    assert_eq!(table.row(0).unwrap().cell_keys(false), ["id", "tmp"]);
    assert!(table.row(1).unwrap().is_empty());
}

#[test]
fn test_entity_helpers_chain_with_own_setters() {
    let mut cell = TableCell::new("k");
    cell.add_classes(["a", "b"])
        .set_attribute("title", "T")
        .remove_class("a")
        .set_value("v");
    assert_eq!(cell.attributes().serialize(), r#"class="b" title="T""#);
    assert_eq!(cell.value(), Some("v"));
}
