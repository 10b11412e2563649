use std::cell::RefCell;

use wasm_bindgen::JsValue;
use web_sys::AbortController;

use crate::messages::Message;
use crate::models::{CurrentUser, StudentResult, UserRole};
use crate::session::Session;
use crate::update::update;

/// Which of the three render states the view is in. Derived, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewPhase {
    Loading,
    Empty,
    Populated,
}

// Global application state for the active view.
pub struct AppState {
    /// Cached session exposed by the guard; `None` only before the guard has
    /// run (a failed guard never constructs a view at all).
    pub session: Option<Session>,

    /// Results collection, verbatim backend order. Stays empty on fetch
    /// failure - the Empty state doubles as the silent error state.
    pub results: Vec<StudentResult>,

    /// At-most-one pointer into `results`, drives the detail modal.
    pub selected_result: Option<usize>,

    /// True until the guard+fetch sequence settles, success or failure.
    pub is_loading: bool,

    /// Abort handle for the in-flight results request, owned by the view so
    /// teardown can discard the completion deterministically.
    pub fetch_controller: Option<AbortController>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: None,
            results: Vec::new(),
            selected_result: None,
            is_loading: true,
            fetch_controller: None,
        }
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_admin(&self) -> bool {
        self.current_user()
            .map(|u| u.role == UserRole::Admin)
            .unwrap_or(false)
    }

    pub fn view_phase(&self) -> ViewPhase {
        if self.is_loading {
            ViewPhase::Loading
        } else if self.results.is_empty() {
            ViewPhase::Empty
        } else {
            ViewPhase::Populated
        }
    }

    /// The record currently shown in the detail modal, if any.
    pub fn selected(&self) -> Option<&StudentResult> {
        self.selected_result.and_then(|i| self.results.get(i))
    }

    /// Abort and forget the in-flight fetch, if one exists.
    pub fn abort_in_flight_fetch(&mut self) {
        if let Some(controller) = self.fetch_controller.take() {
            controller.abort();
        }
    }

    /// Re-render the active view from current state. Called after every
    /// dispatch; rendering is idempotent so this is safe to over-call.
    pub fn refresh_ui_after_state_change() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document on window"))?;
        crate::views::render_active_view(&document)
    }
}

thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

// Global helper for dispatching messages with proper UI refresh handling.
// The mutable borrow is dropped before commands run so executors (and the
// async completions they spawn) can re-enter the state freely.
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|state| {
        let mut state = state.borrow_mut();
        update(&mut state, msg)
    });

    for command in commands {
        crate::command_executors::execute_command(command);
    }

    if let Err(e) = AppState::refresh_ui_after_state_change() {
        log::warn!("failed to refresh UI after state change: {:?}", e);
    }
}
