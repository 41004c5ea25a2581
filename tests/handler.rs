use roster::app::{handle_event, Action, AppState, Event, InputMode, LoadStatus, PageSize};
use roster::domain::{DraftField, Record, RecordId, Role};

fn members(n: usize) -> Vec<Record> {
    (1..=n)
        .map(|i| {
            Record::new(
                i.to_string(),
                format!("Member {i}"),
                format!("member{i}@mailinator.com"),
                Role::Member,
            )
        })
        .collect()
}

fn loaded(records: Vec<Record>) -> AppState {
    let mut state = AppState::default();
    handle_event(&mut state, &Event::RecordsLoaded { records }).unwrap();
    state
}

fn send(state: &mut AppState, events: &[Event]) {
    for event in events {
        handle_event(state, event).unwrap();
    }
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        handle_event(state, &Event::Char(c)).unwrap();
    }
}

#[test]
fn records_loaded_marks_ready() {
    let state = loaded(members(3));
    assert!(matches!(state.load_status, LoadStatus::Ready { count: 3, .. }));
    assert_eq!(state.table.page_records().len(), 3);
    assert_eq!(state.cursor, 0);
}

#[test]
fn search_is_applied_only_on_submit() {
    let mut state = loaded(vec![
        Record::new("1", "Ann", "a@x.com", Role::Member),
        Record::new("2", "Bo", "b@x.com", Role::Admin),
    ]);

    send(&mut state, &[Event::SearchMode]);
    type_text(&mut state, "bo");
    assert_eq!(state.search_input, "bo");
    assert_eq!(state.table.visible_records().len(), 2);

    send(&mut state, &[Event::SubmitSearch]);
    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.table.filter_term(), "bo");
    assert_eq!(state.table.visible_records().len(), 1);

    send(&mut state, &[Event::Escape]);
    assert_eq!(state.table.filter_term(), "");
    assert_eq!(state.table.visible_records().len(), 2);
}

#[test]
fn escape_from_search_box_restores_applied_term() {
    let mut state = loaded(members(5));
    send(&mut state, &[Event::SearchMode]);
    type_text(&mut state, "3");
    send(&mut state, &[Event::SubmitSearch, Event::SearchMode]);
    type_text(&mut state, "xyz");
    send(&mut state, &[Event::Backspace, Event::Escape]);

    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.search_input, "3");
    assert_eq!(state.table.filter_term(), "3");
}

#[test]
fn submit_outside_search_mode_does_nothing() {
    let mut state = loaded(members(5));
    state.search_input = "zzz".to_string();
    let (render, actions) = handle_event(&mut state, &Event::SubmitSearch).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(state.table.filter_term(), "");
}

#[test]
fn inline_edit_through_keys() {
    let mut state = loaded(vec![
        Record::new("1", "Ann", "a@x.com", Role::Member),
        Record::new("2", "Bo", "b@x.com", Role::Member),
    ]);

    send(&mut state, &[Event::BeginEdit]);
    assert_eq!(state.input_mode, InputMode::Editing(DraftField::Name));

    send(&mut state, &[Event::Backspace, Event::Backspace, Event::Backspace]);
    type_text(&mut state, "Anna");
    send(&mut state, &[Event::NextField]);
    type_text(&mut state, ".org");
    send(&mut state, &[Event::NextField]);
    assert_eq!(state.input_mode, InputMode::Editing(DraftField::Role));
    type_text(&mut state, "a");

    assert_eq!(state.table.record(&RecordId::from("1")).unwrap().name, "Ann");

    send(&mut state, &[Event::CommitEdit]);
    assert_eq!(
        state.table.record(&RecordId::from("1")),
        Some(&Record::new("1", "Anna", "a@x.com.org", Role::Admin))
    );
    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.status.as_deref(), Some("Saved record 1"));
}

#[test]
fn role_field_cycles_on_other_keys() {
    let mut state = loaded(members(1));
    send(&mut state, &[Event::BeginEdit, Event::NextField, Event::NextField]);

    type_text(&mut state, " ");
    assert_eq!(state.table.edit().unwrap().draft.role, Role::Admin);
    type_text(&mut state, " ");
    assert_eq!(state.table.edit().unwrap().draft.role, Role::Member);
    type_text(&mut state, "M");
    assert_eq!(state.table.edit().unwrap().draft.role, Role::Member);
}

#[test]
fn escape_cancels_edit_without_saving() {
    let mut state = loaded(members(2));
    send(&mut state, &[Event::BeginEdit]);
    type_text(&mut state, "!!!");
    send(&mut state, &[Event::Escape]);

    assert_eq!(state.input_mode, InputMode::Normal);
    assert!(state.table.edit().is_none());
    assert_eq!(state.table.record(&RecordId::from("1")).unwrap().name, "Member 1");
}

#[test]
fn commit_without_edit_reports_on_status_line() {
    let mut state = loaded(members(2));
    let (render, actions) = handle_event(&mut state, &Event::CommitEdit).unwrap();
    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(state.status.as_deref(), Some("no edit in progress"));

    // The status clears on the next event.
    handle_event(&mut state, &Event::CursorDown).unwrap();
    assert!(state.status.is_none());
}

#[test]
fn select_and_bulk_delete() {
    let mut state = loaded(members(12));
    send(&mut state, &[Event::ToggleRow, Event::CursorDown, Event::ToggleRow]);
    assert_eq!(state.table.selection().len(), 2);

    send(&mut state, &[Event::DeleteSelected]);
    assert_eq!(state.table.all_records().len(), 10);
    assert!(state.table.selection().is_empty());
    assert_eq!(state.status.as_deref(), Some("Deleted 2 selected records"));
}

#[test]
fn delete_row_keeps_cursor_on_page() {
    let mut state = loaded(members(3));
    send(&mut state, &[Event::CursorUp]);
    assert_eq!(state.cursor, 2);

    send(&mut state, &[Event::DeleteRow]);
    assert_eq!(state.cursor, 1);
    assert_eq!(state.status.as_deref(), Some("Deleted Member 3"));
}

#[test]
fn paging_resets_cursor() {
    let mut state = loaded(members(25));
    send(&mut state, &[Event::CursorDown, Event::CursorDown, Event::NextPage]);
    assert_eq!(state.table.current_page(), 2);
    assert_eq!(state.cursor, 0);

    send(&mut state, &[Event::PageDigit(4)]);
    assert_eq!(state.table.current_page(), 3);

    send(&mut state, &[Event::CyclePageSize]);
    assert_eq!(state.table.page_size(), PageSize::Fifteen);
    assert_eq!(state.table.current_page(), 2);
    assert_eq!(state.status.as_deref(), Some("Showing 15 entries per page"));
}

#[test]
fn whole_page_toggle_drives_header_checkbox() {
    let mut state = loaded(members(4));
    send(&mut state, &[Event::TogglePage]);
    assert!(state.compute_viewmodel(30, 100).all_checked);

    send(&mut state, &[Event::TogglePage]);
    assert!(!state.compute_viewmodel(30, 100).all_checked);
}

#[test]
fn reload_retries_after_failed_load() {
    let mut state = AppState::default();
    send(
        &mut state,
        &[Event::LoadFailed {
            error: "timed out".to_string(),
        }],
    );

    let (_, actions) = handle_event(&mut state, &Event::Reload).unwrap();
    assert_eq!(actions, vec![Action::Fetch]);
    assert_eq!(state.load_status, LoadStatus::Loading);
}

#[test]
fn reload_keeps_local_changes_once_loaded() {
    let mut state = loaded(members(5));
    state.table.delete_record(&RecordId::from("1")).unwrap();

    let (render, actions) = handle_event(&mut state, &Event::Reload).unwrap();
    assert!(render);
    assert!(actions.is_empty());
    assert!(matches!(state.load_status, LoadStatus::Ready { .. }));
    assert_eq!(state.table.all_records().len(), 4);
    assert!(state.status.is_some());
}

#[test]
fn reload_while_loading_does_not_queue_another_fetch() {
    let mut state = AppState::default();
    let (_, actions) = handle_event(&mut state, &Event::Reload).unwrap();
    assert!(actions.is_empty());
    assert_eq!(state.load_status, LoadStatus::Loading);
}

#[test]
fn escape_without_filter_keeps_selection() {
    let mut state = loaded(members(25));
    send(&mut state, &[Event::ToggleRow, Event::NextPage, Event::ToggleRow]);
    assert_eq!(state.table.selection().len(), 2);

    let (render, _) = handle_event(&mut state, &Event::Escape).unwrap();
    assert!(!render);
    assert_eq!(state.table.selection().len(), 2);
    assert_eq!(state.table.current_page(), 2);
}

#[test]
fn digits_build_multi_digit_page_numbers() {
    let mut state = loaded(members(120));
    send(&mut state, &[Event::PageDigit(1), Event::PageDigit(2)]);
    assert_eq!(state.table.current_page(), 12);

    // 13 is out of range, so the second digit starts a new number.
    send(&mut state, &[Event::CursorDown, Event::PageDigit(1), Event::PageDigit(3)]);
    assert_eq!(state.table.current_page(), 3);
    assert_eq!(state.cursor, 0);

    // Any other event ends the number.
    send(&mut state, &[Event::PageDigit(1), Event::CursorDown, Event::PageDigit(1)]);
    assert_eq!(state.table.current_page(), 1);

    send(&mut state, &[Event::CursorDown, Event::PageDigit(1), Event::PageDigit(0)]);
    assert_eq!(state.table.current_page(), 10);
}

#[test]
fn a_lone_zero_is_ignored() {
    let mut state = loaded(members(30));
    send(&mut state, &[Event::NextPage]);
    let (render, _) = handle_event(&mut state, &Event::PageDigit(0)).unwrap();
    assert!(!render);
    assert_eq!(state.table.current_page(), 2);
}

#[test]
fn load_failure_shows_empty_state() {
    let mut state = AppState::default();
    handle_event(
        &mut state,
        &Event::LoadFailed {
            error: "connection refused".to_string(),
        },
    )
    .unwrap();

    let viewmodel = state.compute_viewmodel(30, 100);
    assert!(viewmodel.rows.is_empty());
    let empty = viewmodel.empty_state.unwrap();
    assert_eq!(empty.message, "Could not load records");
    assert!(empty.subtitle.contains("connection refused"));
    assert_eq!(viewmodel.pager.summary, "No Users");
}

#[test]
fn printable_keys_do_nothing_in_normal_mode() {
    let mut state = loaded(members(3));
    let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
    assert!(!render);
    assert!(state.table.edit().is_none());
}

#[test]
fn quit_returns_quit_action() {
    let mut state = AppState::default();
    let (render, actions) = handle_event(&mut state, &Event::Quit).unwrap();
    assert!(!render);
    assert_eq!(actions, vec![Action::Quit]);
}
