//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use parsync::buffer::Workspace;
use parsync::host::{FormatError, FormatMode, Position};
use parsync::{Model, Runtime, Settings, Watchlist};

/// Stand-in structural formatter: appends the closers a text is missing.
///
/// Idempotent on its own output, fails on surplus closers.
pub fn close_parens(
    _mode: FormatMode,
    text: &str,
    _cursor: Option<Position>,
) -> Result<String, FormatError> {
    let open = text.matches('(').count();
    let close = text.matches(')').count();
    if close > open {
        return Err(FormatError(format!("{} unmatched closers", close - open)));
    }
    let body = text.trim_end_matches('\n');
    let newlines = &text[body.len()..];
    Ok(format!("{}{}{}", body, ")".repeat(open - close), newlines))
}

/// Everything a recording formatter saw, shared with the test body
#[derive(Debug, Default)]
pub struct Calls {
    pub count: Cell<usize>,
    pub modes: RefCell<Vec<FormatMode>>,
    pub inputs: RefCell<Vec<String>>,
}

pub type RecordingFormatter =
    Box<dyn Fn(FormatMode, &str, Option<Position>) -> Result<String, FormatError>>;

/// `close_parens` that records every invocation
pub fn recording() -> (RecordingFormatter, Rc<Calls>) {
    let calls = Rc::new(Calls::default());
    let seen = Rc::clone(&calls);
    let formatter: RecordingFormatter =
        Box::new(move |mode: FormatMode, text: &str, cursor: Option<Position>| {
            seen.count.set(seen.count.get() + 1);
            seen.modes.borrow_mut().push(mode);
            seen.inputs.borrow_mut().push(text.to_string());
            close_parens(mode, text, cursor)
        });
    (formatter, calls)
}

pub fn settings(normalize_on_open: bool) -> Settings {
    Settings {
        normalize_on_open,
        ..Settings::default()
    }
}

/// Runtime over an in-memory workspace with the default watchlist
pub fn runtime(normalize_on_open: bool) -> (Runtime<Workspace, RecordingFormatter>, Rc<Calls>) {
    runtime_with(settings(normalize_on_open))
}

pub fn runtime_with(settings: Settings) -> (Runtime<Workspace, RecordingFormatter>, Rc<Calls>) {
    let (formatter, calls) = recording();
    let model = Model::new(settings, Watchlist::default(), None);
    (Runtime::new(model, Workspace::new(), formatter), calls)
}

/// Runtime whose watchlist lives at `path`
pub fn runtime_with_watchlist(
    path: PathBuf,
) -> (Runtime<Workspace, RecordingFormatter>, Rc<Calls>) {
    let (formatter, calls) = recording();
    let watchlist = Watchlist::load_or_create(&path);
    let model = Model::new(settings(false), watchlist, Some(path));
    (Runtime::new(model, Workspace::new(), formatter), calls)
}

/// A point in time after every pending debounce timer
pub fn later() -> Instant {
    Instant::now() + Duration::from_secs(3600)
}
