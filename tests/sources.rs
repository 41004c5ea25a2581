use roster::source::{from_location, JsonFileSource, RecordSource};
use roster::worker::{Loader, LoaderResponse};
use roster::{handle_event, initialize, Config, Event, Overrides, PageSize, Role, RosterError};
use std::fs;
use std::time::Duration;

const MEMBERS: &str = r#"[
  { "id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member" },
  { "id": "2", "name": "Aishwarya Naik", "email": "aishwarya@mailinator.com", "role": "admin" },
  { "id": "3", "name": "Arvind Kumar", "email": "arvind@mailinator.com", "role": "member" }
]"#;

#[test]
fn json_file_source_reads_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("members.json");
    fs::write(&path, MEMBERS).unwrap();

    let records = JsonFileSource::new(&path).fetch().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].name, "Aishwarya Naik");
    assert_eq!(records[1].role, Role::Admin);
}

#[test]
fn missing_file_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let source = JsonFileSource::new(dir.path().join("absent.json"));
    assert!(matches!(source.fetch(), Err(RosterError::SourceUnavailable(_))));
}

#[test]
fn malformed_payloads_are_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("members.json");

    for body in [
        "not json",
        r#"[{ "id": "1", "name": "A", "email": "a@x.com", "role": "owner" }]"#,
        r#"[{ "id": "1", "name": "A" }]"#,
    ] {
        fs::write(&path, body).unwrap();
        assert!(
            matches!(JsonFileSource::new(&path).fetch(), Err(RosterError::SourceUnavailable(_))),
            "body {body:?}"
        );
    }
}

#[test]
fn file_locations_pick_the_file_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("members.json");
    fs::write(&path, MEMBERS).unwrap();

    let location = path.to_string_lossy();
    let source = from_location(&location, Duration::from_secs(1)).unwrap();
    assert_eq!(source.describe(), location);
    assert_eq!(source.fetch().unwrap().len(), 3);
}

#[test]
fn loader_delivers_records_to_the_shell() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("members.json");
    fs::write(&path, MEMBERS).unwrap();

    let loader = Loader::spawn(from_location(&path.to_string_lossy(), Duration::from_secs(1)).unwrap()).unwrap();
    loader.request_fetch().unwrap();
    let response = loader.recv().unwrap();
    assert!(matches!(&response, LoaderResponse::Loaded { records } if records.len() == 3));

    let mut state = initialize(&Config::default());
    handle_event(&mut state, &response.into_event()).unwrap();
    assert_eq!(state.table.all_records().len(), 3);

    fs::remove_file(&path).unwrap();
    loader.request_fetch().unwrap();
    let event = loader.recv().unwrap().into_event();
    assert!(matches!(event, Event::LoadFailed { .. }));
    loader.shutdown();
}

#[test]
fn missing_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_file_values_are_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "source = \"~/members.json\"\npage_size = 15\ntheme = \"paper\"\nfetch_timeout_secs = 3\n",
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.source, "~/members.json");
    assert_eq!(config.page_size, PageSize::Fifteen);
    assert_eq!(config.theme.as_deref(), Some("paper"));
    assert_eq!(config.fetch_timeout(), Duration::from_secs(3));
    assert_eq!(config.log_level, "info");
}

#[test]
fn bad_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    for body in ["page_size = 12", "colour = \"blue\"", "page_size = "] {
        fs::write(&path, body).unwrap();
        assert!(matches!(Config::load(&path), Err(RosterError::Config(_))), "body {body:?}");
    }
}

#[test]
fn overrides_win_over_file_values() {
    let config = Config {
        theme_file: Some("/tmp/custom.toml".to_string()),
        ..Config::default()
    }
    .with_overrides(Overrides {
        page_size: Some(PageSize::Twenty),
        theme: Some("paper".to_string()),
        ..Overrides::default()
    });

    assert_eq!(config.page_size, PageSize::Twenty);
    assert_eq!(config.theme.as_deref(), Some("paper"));
    assert!(config.theme_file.is_none());
    assert_eq!(config.theme().unwrap().name, "paper");
}

#[test]
fn theme_errors_fall_back_in_initialize() {
    let config = Config {
        theme: Some("neon".to_string()),
        ..Config::default()
    };
    assert!(matches!(config.theme(), Err(RosterError::Theme(_))));

    let state = initialize(&config);
    assert_eq!(state.theme.name, "slate");
}
