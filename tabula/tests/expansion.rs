use tabula::column::{CellContent, Column};
use tabula::expansion::{ExpansionState, SubrowKind, TableAction};
use tabula::model::{Record, TableRecord};
use tabula::render::{LayoutNode, RowKind, Table, TreeBackend};

type RowColumn = Column<Record, LayoutNode>;

fn mount(ids: &[&str]) -> Table<Record, LayoutNode> {
    Table::builder(vec![
        RowColumn::expandable(|row, _| CellContent::text(format!("content {}", row.id())))
            .default_expanded(|row| row.id().ends_with('2')),
        RowColumn::accessor("id"),
        RowColumn::delete_with(|row, _| CellContent::text(format!("delete {}", row.id()))),
    ])
    .data(ids.iter().map(|id| Record::new(*id)).collect())
    .mount()
    .unwrap()
}

fn subrow_texts(table: &Table<Record, LayoutNode>) -> Vec<String> {
    table
        .render(&mut TreeBackend::new())
        .subrows()
        .iter()
        .flat_map(|row| row.texts())
        .collect()
}

#[test]
fn test_initial_state_from_default_expanded() {
    let table = mount(&["r1", "r2", "r3", "r12"]);
    assert_eq!(table.expansion("r1"), ExpansionState::Closed);
    assert_eq!(table.expansion("r2"), ExpansionState::OpenContent);
    assert_eq!(table.expansion("r12"), ExpansionState::OpenContent);
    assert_eq!(subrow_texts(&table), ["content r2", "content r12"]);
}

#[test]
fn test_double_content_toggle_round_trips_every_row() {
    let ids = ["r1", "r2", "r3"];
    let mut table = mount(&ids);

    for id in ids {
        let before = table.expansion(id);
        table.toggle(id, SubrowKind::Content).unwrap();
        table.toggle(id, SubrowKind::Content).unwrap();
        assert_eq!(table.expansion(id), before, "row {id}");
    }
}

#[test]
fn test_opening_delete_replaces_content() {
    let mut table = mount(&["r2"]);
    assert_eq!(table.expansion("r2"), ExpansionState::OpenContent);

    table.toggle("r2", SubrowKind::Delete).unwrap();
    let state = table.expansion("r2");
    assert!(state.is_open(SubrowKind::Delete));
    assert!(!state.is_open(SubrowKind::Content));

    let tree = table.render(&mut TreeBackend::new());
    let kinds: Vec<RowKind> = tree
        .body_rows()
        .iter()
        .filter_map(|row| row.row_kind())
        .collect();
    assert_eq!(kinds, [RowKind::Body, RowKind::Subrow]);
    assert_eq!(tree.subrows()[0].texts(), ["delete r2"]);

    table.toggle("r2", SubrowKind::Content).unwrap();
    assert_eq!(subrow_texts(&table), ["content r2"]);
}

#[test]
fn test_toggling_one_row_leaves_others_alone() {
    let mut table = mount(&["r1", "r2", "r3"]);
    table.toggle("r3", SubrowKind::Delete).unwrap();

    assert_eq!(table.expansion("r1"), ExpansionState::Closed);
    assert_eq!(table.expansion("r2"), ExpansionState::OpenContent);
    assert_eq!(table.expansion("r3"), ExpansionState::OpenDelete);
    assert_eq!(subrow_texts(&table), ["content r2", "delete r3"]);
}

#[test]
fn test_close_from_subrow() {
    let mut table = mount(&["r1", "r2"]);
    table.toggle("r1", SubrowKind::Delete).unwrap();

    for id in ["r1", "r2"] {
        table.dispatch(&TableAction::close(id)).unwrap();
        assert_eq!(table.expansion(id), ExpansionState::Closed);
    }
    assert!(subrow_texts(&table).is_empty());

    assert_eq!(table.close("r1"), Ok(ExpansionState::Closed));
}

#[test]
fn test_toggle_actions_from_rendered_controls() {
    let mut table = mount(&["r1"]);
    let tree = table.render(&mut TreeBackend::new());
    let (action, is_open) = tree.toggles()[0];
    assert!(!is_open);

    let action = action.clone();
    table.dispatch(&action).unwrap();
    let tree = table.render(&mut TreeBackend::new());
    assert!(tree.toggles()[0].1);
}

#[test]
fn test_removed_rows_lose_state() {
    let mut table = mount(&["r1", "r3"]);
    table.toggle("r1", SubrowKind::Content).unwrap();
    table.toggle("r3", SubrowKind::Delete).unwrap();

    table
        .set_data(vec![Record::new("r3"), Record::new("r2")])
        .unwrap();
    assert_eq!(table.expansion("r3"), ExpansionState::OpenDelete);
    assert_eq!(table.expansion("r2"), ExpansionState::OpenContent);
    assert!(table.toggle("r1", SubrowKind::Content).is_err());

    table
        .set_data(vec![Record::new("r1"), Record::new("r3")])
        .unwrap();
    assert_eq!(table.expansion("r1"), ExpansionState::Closed);
}

#[test]
fn test_duplicate_ids_rejected_on_update() {
    let mut table = mount(&["r1"]);
    let err = table
        .set_data(vec![Record::new("x"), Record::new("x")])
        .unwrap_err();
    assert_eq!(err.to_string(), "Duplicate row id 'x' in data set");
    assert_eq!(table.rows().len(), 1);
}
