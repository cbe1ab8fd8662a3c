mod common;

use cellsort_core::label::Label;
use cellsort_core::selection::{ClickOutcome, Selection};

use common::{damaged, healthy};

#[test]
fn test_select_then_deselect_is_identity() {
    let mut selection = Selection::new();
    let first = selection.apply_click(0, &healthy());
    let second = selection.apply_click(0, &healthy());

    assert_eq!(first, ClickOutcome::Selected { cell: 0, label: healthy() });
    assert_eq!(second, ClickOutcome::Deselected { cell: 0, label: healthy() });
    assert!(selection.is_empty());
}

#[test]
fn test_relabel_replaces_label() {
    let mut selection = Selection::new();
    selection.apply_click(5, &healthy());
    let outcome = selection.apply_click(5, &damaged());

    assert_eq!(
        outcome,
        ClickOutcome::Relabeled { cell: 5, from: healthy(), to: damaged() }
    );
    assert_eq!(selection.len(), 1);
    assert_eq!(selection.get(5), Some(&damaged()));
}

#[test]
fn test_relabel_law_holds_for_existing_entries() {
    // Starting with 7 -> damaged, clicking with healthy then damaged ends at damaged.
    let mut selection: Selection = [(7, damaged()), (2, healthy())].into_iter().collect();
    selection.apply_click(7, &healthy());
    selection.apply_click(7, &damaged());
    assert_eq!(selection.get(7), Some(&damaged()));
    assert_eq!(selection.get(2), Some(&healthy()));
}

#[test]
fn test_other_cells_untouched() {
    let mut selection = Selection::new();
    selection.apply_click(1, &healthy());
    selection.apply_click(2, &damaged());
    selection.apply_click(1, &healthy());

    assert_eq!(selection.get(1), None);
    assert_eq!(selection.get(2), Some(&damaged()));
}

#[test]
fn test_iteration_is_ordered_by_cell() {
    let mut selection = Selection::new();
    for cell in [9, 3, 27, 0] {
        selection.apply_click(cell, &healthy());
    }
    let cells: Vec<usize> = selection.iter().map(|(c, _)| c).collect();
    assert_eq!(cells, vec![0, 3, 9, 27]);
}

#[test]
fn test_clear_and_count_of() {
    let mut selection = Selection::new();
    selection.apply_click(0, &healthy());
    selection.apply_click(1, &healthy());
    selection.apply_click(2, &damaged());
    assert_eq!(selection.count_of(&healthy()), 2);
    assert_eq!(selection.count_of(&Label::new("other")), 0);

    selection.clear();
    assert!(selection.is_empty());
}

#[test]
fn test_outcome_messages() {
    let selected = ClickOutcome::Selected { cell: 3, label: healthy() };
    let deselected = ClickOutcome::Deselected { cell: 3, label: healthy() };
    let relabeled = ClickOutcome::Relabeled { cell: 3, from: healthy(), to: damaged() };
    assert_eq!(selected.to_string(), "Selected cell 3 as healthy");
    assert_eq!(deselected.to_string(), "Deselected cell 3");
    assert_eq!(relabeled.to_string(), "Updated label for cell 3 to damaged");
}
