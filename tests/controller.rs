use roster::app::{PageSize, RecordTable};
use roster::domain::{DraftField, Record, RecordId, Role};
use roster::RosterError;

fn members(n: usize) -> Vec<Record> {
    (1..=n)
        .map(|i| {
            Record::new(
                i.to_string(),
                format!("Member {i}"),
                format!("member{i}@mailinator.com"),
                if i % 5 == 0 { Role::Admin } else { Role::Member },
            )
        })
        .collect()
}

fn id(s: &str) -> RecordId {
    RecordId::from(s)
}

fn loaded(n: usize) -> RecordTable {
    let mut table = RecordTable::new(PageSize::Ten);
    table.initialize(members(n));
    table
}

#[test]
fn search_matches_any_field_case_insensitively() {
    let mut table = RecordTable::default();
    table.initialize(vec![
        Record::new("1", "Ann", "a@x.com", Role::Member),
        Record::new("2", "Bo", "b@x.com", Role::Admin),
    ]);

    table.search("ann");
    let ids: Vec<&str> = table.visible_records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["1"]);

    table.search("ADMIN");
    let ids: Vec<&str> = table.visible_records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["2"]);

    table.search("X.COM");
    assert_eq!(table.visible_records().len(), 2);

    table.search("");
    assert_eq!(table.visible_records().len(), 2);
}

#[test]
fn filtered_view_is_exactly_the_matching_records_in_order() {
    let mut table = loaded(60);
    for term in ["1", "member 2", "ADMIN", "@mailinator", "zzz", "5@"] {
        table.search(term);
        let expected: Vec<&Record> = table
            .all_records()
            .iter()
            .filter(|r| {
                let t = term.to_lowercase();
                [r.id.as_str(), r.name.as_str(), r.email.as_str(), r.role.as_str()]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&t))
            })
            .collect();
        let actual: Vec<&Record> = table.visible_records().iter().collect();
        assert_eq!(actual, expected, "term {term:?}");
    }
}

#[test]
fn page_bounds_hold_after_every_operation() {
    let mut table = loaded(47);
    let check = |table: &RecordTable| {
        let len = table.visible_records().len();
        let size = table.page_size().get();
        assert_eq!(table.total_pages(), len.div_ceil(size).max(1));
        assert!((1..=table.total_pages()).contains(&table.current_page()));
    };

    check(&table);
    table.go_to_page(99);
    check(&table);
    assert_eq!(table.current_page(), 5);
    table.go_to_page(0);
    check(&table);
    assert_eq!(table.current_page(), 1);

    table.last_page();
    table.toggle_select_all_on_page();
    table.delete_selected();
    check(&table);
    assert_eq!(table.current_page(), 4);

    table.set_page_size(PageSize::Twenty);
    check(&table);
    table.search("nobody");
    check(&table);
    assert_eq!(table.current_page(), 1);
    assert!(table.page_records().is_empty());
}

#[test]
fn page_size_change_clamps_current_page() {
    let mut table = loaded(25);
    table.go_to_page(3);
    assert_eq!(table.total_pages(), 3);

    table.set_page_size(PageSize::Twenty);
    assert_eq!(table.total_pages(), 2);
    assert_eq!(table.current_page(), 2);
}

#[test]
fn deleting_last_row_of_last_page_moves_back_a_page() {
    let mut table = loaded(21);
    table.last_page();
    assert_eq!(table.page_records().len(), 1);

    table.delete_record(&id("21")).unwrap();
    assert_eq!(table.current_page(), 2);
    assert_eq!(table.total_pages(), 2);
}

#[test]
fn deleting_a_selected_record_unselects_it() {
    let mut table = loaded(10);
    table.toggle_select(&id("4"));
    table.toggle_select(&id("5"));

    table.delete_record(&id("4")).unwrap();
    assert!(!table.is_selected(&id("4")));
    assert!(table.is_selected(&id("5")));
}

#[test]
fn delete_selected_always_empties_the_selection() {
    let mut table = loaded(30);
    table.toggle_select_all_on_page();
    table.next_page();
    table.toggle_select(&id("12"));

    assert_eq!(table.delete_selected(), 11);
    assert!(table.selection().is_empty());
    assert_eq!(table.all_records().len(), 19);
    assert!(table.record(&id("12")).is_none());
}

#[test]
fn delete_selected_drops_edit_on_deleted_target() {
    let mut table = loaded(10);
    table.begin_edit(&id("2")).unwrap();
    table.toggle_select(&id("2"));
    table.delete_selected();
    assert!(table.edit().is_none());
}

#[test]
fn delete_clears_edit_targeting_the_deleted_record() {
    let mut table = loaded(10);
    table.begin_edit(&id("7")).unwrap();
    table.delete_record(&id("7")).unwrap();
    assert!(table.edit().is_none());
    assert!(matches!(table.commit_edit(), Err(RosterError::NoActiveEdit)));
}

#[test]
fn draft_updates_never_touch_the_collection() {
    let mut table = loaded(10);
    let before = table.all_records().to_vec();

    table.begin_edit(&id("3")).unwrap();
    table.update_draft_field(DraftField::Name, "Renamed").unwrap();
    table.update_draft_field(DraftField::Email, "renamed@x.com").unwrap();
    table.update_draft_field(DraftField::Role, "admin").unwrap();

    assert_eq!(table.all_records(), before.as_slice());
    assert_eq!(table.edit().map(|e| e.draft.name.as_str()), Some("Renamed"));
}

#[test]
fn commit_writes_only_the_target() {
    let mut table = RecordTable::default();
    table.initialize(vec![
        Record::new("4", "Y", "y@x.com", Role::Member),
        Record::new("5", "X", "x@x.com", Role::Member),
    ]);

    table.begin_edit(&id("5")).unwrap();
    table.update_draft_field(DraftField::Role, "admin").unwrap();
    table.commit_edit().unwrap();

    assert_eq!(
        table.all_records(),
        &[
            Record::new("4", "Y", "y@x.com", Role::Member),
            Record::new("5", "X", "x@x.com", Role::Admin),
        ]
    );
    assert!(table.edit().is_none());
}

#[test]
fn cancel_is_idempotent() {
    let mut table = loaded(3);
    table.begin_edit(&id("1")).unwrap();

    assert!(table.cancel_edit());
    let revision = table.revision();
    assert!(!table.cancel_edit());
    assert_eq!(table.revision(), revision);
    assert!(table.edit().is_none());
}

#[test]
fn begin_edit_replaces_unsaved_draft() {
    let mut table = loaded(3);
    table.begin_edit(&id("1")).unwrap();
    table.update_draft_field(DraftField::Name, "lost").unwrap();
    table.begin_edit(&id("2")).unwrap();

    let edit = table.edit().unwrap();
    assert_eq!(edit.target, id("2"));
    assert_eq!(edit.draft.name, "Member 2");
    assert_eq!(table.record(&id("1")).unwrap().name, "Member 1");
}

#[test]
fn failed_operations_change_nothing() {
    let mut table = loaded(12);
    table.toggle_select(&id("1"));
    let revision = table.revision();

    assert!(matches!(table.begin_edit(&id("404")), Err(RosterError::NotFound(_))));
    assert!(matches!(table.delete_record(&id("404")), Err(RosterError::NotFound(_))));
    assert!(matches!(
        table.update_draft_field(DraftField::Name, "x"),
        Err(RosterError::NoActiveEdit)
    ));
    assert!(matches!(table.commit_edit(), Err(RosterError::NoActiveEdit)));

    table.begin_edit(&id("2")).unwrap();
    let revision_with_edit = table.revision();
    assert!(matches!(
        table.update_draft_field(DraftField::Role, "owner"),
        Err(RosterError::InvalidRole(_))
    ));
    assert_eq!(table.edit().unwrap().draft.role, Role::Member);

    assert_eq!(revision_with_edit, revision + 1);
    assert_eq!(table.revision(), revision_with_edit);
    assert_eq!(table.all_records().len(), 12);
    assert!(table.is_selected(&id("1")));
}

#[test]
fn select_all_on_page_is_an_involution() {
    let mut table = loaded(25);
    table.toggle_select(&id("2"));
    table.next_page();
    table.toggle_select(&id("13"));

    table.toggle_select_all_on_page();
    assert!(table.page_fully_selected());
    assert!(table.is_selected(&id("2")));

    table.toggle_select_all_on_page();
    let page_ids: Vec<RecordId> = table.page_records().iter().map(|r| r.id.clone()).collect();
    assert!(page_ids.iter().all(|id| !table.is_selected(id)));
    assert_eq!(table.selection().iter().collect::<Vec<_>>(), vec![&id("2")]);

    table.toggle_select_all_on_page();
    table.toggle_select_all_on_page();
    assert!(page_ids.iter().all(|id| !table.is_selected(id)));
}

#[test]
fn select_all_on_empty_page_is_a_no_op() {
    let mut table = loaded(5);
    table.search("nobody");
    assert!(!table.toggle_select_all_on_page());
    assert!(!table.page_fully_selected());
}

#[test]
fn search_clears_selection_but_keeps_edit() {
    let mut table = loaded(20);
    table.toggle_select(&id("1"));
    table.begin_edit(&id("1")).unwrap();

    table.search("member 2");
    assert!(table.selection().is_empty());
    assert_eq!(table.edit().map(|e| e.target.clone()), Some(id("1")));

    table.commit_edit().unwrap();
    assert!(table.visible_records().iter().all(|r| r.id != id("1")));
}

#[test]
fn snapshot_summarizes_the_window() {
    let mut table = loaded(46);
    table.go_to_page(2);
    let snapshot = table.snapshot();

    assert_eq!(snapshot.summary(), "Showing 11 to 20 of 46 entries");
    assert_eq!(snapshot.page.len(), 10);
    assert_eq!(snapshot.page_numbers().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert!(snapshot.has_previous_page());
    assert!(snapshot.has_next_page());

    table.search("nobody");
    assert_eq!(table.snapshot().summary(), "No Users");
}
