//! Terminal shell and entry point.
//!
//! This module provides the thin integration layer between the roster library
//! and the terminal. It parses the command line, resolves configuration, starts
//! the loader thread, and runs the key/render loop on top of `crossterm`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │      Main Thread        │
//! │  ┌──────────────────┐   │
//! │  │  Shell (AppState)│   │  ← Key handling, rendering
//! │  └──────────────────┘   │
//! │          │ mpsc         │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  Loader thread   │   │  ← Blocking file/HTTP fetch
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Keybindings
//!
//! In normal mode:
//! - `j`/`Down`, `k`/`Up`: Move cursor
//! - `n`/`Right`, `p`/`Left`: Next/previous page
//! - `g`/`Home`, `G`/`End`: First/last page
//! - digits: Go to page (type `1`, `2` for page 12)
//! - `/`: Search
//! - `space`: Toggle row, `a`: toggle page
//! - `e`/`Enter`: Edit row
//! - `d`/`Delete`: Delete row, `D`: delete selected
//! - `s`: Cycle page size
//! - `r`: Retry after a failed load
//! - `Esc`: Clear search
//! - `q`: Quit
//!
//! In search mode, `Enter` applies the typed term and `Esc` abandons it.
//! While editing, `Tab` moves between fields, `Enter` saves, `Esc` cancels.
//! `Ctrl+c` quits from any mode.

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use roster::app::AppState;
use roster::domain::DraftField;
use roster::worker::Loader;
use roster::{handle_event, Action, Config, Event, InputMode, Overrides, PageSize};

/// How long to wait for a key before checking the loader again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Search, page, select, edit and delete member records in the terminal",
    long_about = "Roster loads a member list from a JSON file or URL and lets you search, page, select, edit and delete records. Changes stay in memory.\n\nExamples:\n  roster\n  roster --source ~/data/members.json --page-size 20\n  roster --theme paper --log-level debug"
)]
struct Args {
    #[arg(short = 'c', long, value_name = "FILE", help = "Config file (default: ~/.config/roster/config.toml).")]
    config: Option<PathBuf>,

    #[arg(short = 's', long, value_name = "PATH|URL", help = "JSON file or http(s) URL to load records from.")]
    source: Option<String>,

    #[arg(short = 'n', long, value_name = "10|15|20", value_parser = parse_page_size, help = "Rows per page.")]
    page_size: Option<PageSize>,

    #[arg(long, value_name = "NAME", help = "Built-in theme (slate, paper).")]
    theme: Option<String>,

    #[arg(long, value_name = "FILE", help = "Custom TOML theme file.")]
    theme_file: Option<String>,

    #[arg(long, value_name = "LEVEL", help = "Log level or filter directives (RUST_LOG wins).")]
    log_level: Option<String>,

    #[arg(long = "timeout", value_name = "SECS", help = "HTTP fetch timeout in seconds.")]
    fetch_timeout_secs: Option<u64>,

    #[arg(long, help = "Print the resolved configuration as TOML and exit.")]
    print_config: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            source: self.source.clone(),
            page_size: self.page_size,
            theme: self.theme.clone(),
            theme_file: self.theme_file.clone(),
            log_level: self.log_level.clone(),
            fetch_timeout_secs: self.fetch_timeout_secs,
        }
    }
}

fn parse_page_size(value: &str) -> Result<PageSize, String> {
    let n: usize = value.parse().map_err(|e| format!("{e}"))?;
    PageSize::try_from(n).map_err(|e| e.to_string())
}

fn main() -> roster::Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(roster::infrastructure::default_config_path);
    let file_config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let config = file_config.with_overrides(args.overrides());

    if args.print_config {
        let toml = toml::to_string_pretty(&config)
            .map_err(|e| roster::RosterError::Config(e.to_string()))?;
        print!("{toml}");
        return Ok(());
    }

    roster::observability::init_tracing(&config);
    let span = tracing::info_span!("roster");
    let _guard = span.enter();
    tracing::info!(config = ?config_path, source = %config.source, "starting");

    let source = roster::source::from_location(&config.source, config.fetch_timeout())?;
    let loader = Loader::spawn(source)?;

    let mut app = roster::initialize(&config);
    app.source_label = loader.source_label().to_string();

    let mut shell = Shell { app, loader };
    let result = shell.run();

    tracing::info!(ok = result.is_ok(), "exiting");
    result
}

/// Shell state: the library state plus the loader handle.
struct Shell {
    app: AppState,
    loader: Loader,
}

impl Shell {
    fn run(&mut self) -> roster::Result<()> {
        let _terminal = TerminalGuard::enter()?;

        self.execute_action(Action::Fetch);
        let mut dirty = true;

        loop {
            while let Some(response) = self.loader.try_recv() {
                match self.dispatch(&response.into_event()) {
                    Dispatch::Quit => return Ok(()),
                    Dispatch::Render => dirty = true,
                    Dispatch::Idle => {}
                }
            }

            if dirty {
                self.draw()?;
                dirty = false;
            }

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            match event::read()? {
                TermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    let Some(our_event) = map_key_event(self.app.input_mode, key) else {
                        continue;
                    };
                    match self.dispatch(&our_event) {
                        Dispatch::Quit => return Ok(()),
                        Dispatch::Render => dirty = true,
                        Dispatch::Idle => {}
                    }
                }
                TermEvent::Resize(..) => dirty = true,
                _ => {}
            }
        }
    }

    /// Runs one event through the handler and executes its actions.
    fn dispatch(&mut self, event: &Event) -> Dispatch {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                let mut outcome = if should_render { Dispatch::Render } else { Dispatch::Idle };
                for action in actions {
                    if action == Action::Quit {
                        return Dispatch::Quit;
                    }
                    if self.execute_action(action) {
                        outcome = Dispatch::Render;
                    }
                }
                outcome
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                self.app.status = Some(e.to_string());
                Dispatch::Render
            }
        }
    }

    /// Executes a side effect. Returns whether it changed what is on screen.
    fn execute_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => false,
            Action::Fetch => match self.loader.request_fetch() {
                Ok(()) => false,
                Err(e) => {
                    let failed = Event::LoadFailed { error: e.to_string() };
                    matches!(self.dispatch(&failed), Dispatch::Render)
                }
            },
        }
    }

    fn draw(&self) -> roster::Result<()> {
        let (cols, rows) = terminal::size()?;
        let mut stdout = io::stdout();
        queue!(stdout, Clear(ClearType::All))?;
        roster::ui::render(&self.app, usize::from(rows), usize::from(cols));
        stdout.flush()?;
        Ok(())
    }
}

enum Dispatch {
    Quit,
    Render,
    Idle,
}

/// Raw mode plus alternate screen for as long as the guard lives.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Maps terminal keys to shell events for the current input mode.
fn map_key_event(mode: InputMode, key: KeyEvent) -> Option<Event> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Event::Quit);
    }

    match mode {
        InputMode::Normal => map_normal_key(key.code),
        InputMode::Search => Some(match key.code {
            KeyCode::Enter => Event::SubmitSearch,
            KeyCode::Esc => Event::Escape,
            KeyCode::Backspace => Event::Backspace,
            KeyCode::Char(c) => Event::Char(c),
            _ => return None,
        }),
        InputMode::Editing(field) => Some(match key.code {
            KeyCode::Enter => Event::CommitEdit,
            KeyCode::Esc => Event::CancelEdit,
            KeyCode::Tab => Event::NextField,
            KeyCode::Backspace => Event::Backspace,
            KeyCode::Left | KeyCode::Right if field == DraftField::Role => Event::Char(' '),
            KeyCode::Char(c) => Event::Char(c),
            _ => return None,
        }),
    }
}

fn map_normal_key(code: KeyCode) -> Option<Event> {
    Some(match code {
        KeyCode::Down | KeyCode::Char('j') => Event::CursorDown,
        KeyCode::Up | KeyCode::Char('k') => Event::CursorUp,
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('n') => Event::NextPage,
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('p') => Event::PreviousPage,
        KeyCode::Home | KeyCode::Char('g') => Event::FirstPage,
        KeyCode::End | KeyCode::Char('G') => Event::LastPage,
        KeyCode::Char(c @ '0'..='9') => Event::PageDigit(c as u8 - b'0'),
        KeyCode::Char('/') => Event::SearchMode,
        KeyCode::Char(' ') => Event::ToggleRow,
        KeyCode::Char('a') => Event::TogglePage,
        KeyCode::Enter | KeyCode::Char('e') => Event::BeginEdit,
        KeyCode::Delete | KeyCode::Char('d') => Event::DeleteRow,
        KeyCode::Char('D') => Event::DeleteSelected,
        KeyCode::Char('s') => Event::CyclePageSize,
        KeyCode::Char('r') => Event::Reload,
        KeyCode::Char('q') => Event::Quit,
        KeyCode::Esc => Event::Escape,
        _ => return None,
    })
}
