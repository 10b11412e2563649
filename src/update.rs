// src/update.rs
//
// Pure reducer: mutates AppState and returns the side effects to perform.
// No DOM access here - that is what keeps the guard/fetch/logout ordering
// testable off-browser.
//
use crate::messages::{Command, Message};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    match msg {
        Message::SessionLoaded(session) => {
            let is_admin = session.user.role == crate::models::UserRole::Admin;
            let student_id = session.user.username.clone();
            let token = session.token.clone();
            state.session = Some(session);

            if is_admin {
                // The admin landing page shows placeholder figures only, so
                // the guard pass completes the loading sequence.
                state.is_loading = false;
                Vec::new()
            } else {
                // Exactly one fetch per successful guard pass; Loading stays
                // visible until it settles.
                state.is_loading = true;
                vec![Command::FetchResults { student_id, token }]
            }
        }

        Message::ResultsLoaded(results) => {
            state.results = results;
            state.is_loading = false;
            state.fetch_controller = None;
            Vec::new()
        }

        Message::ResultsFetchFailed => {
            // Collection stays empty; the user sees the generic empty state.
            state.is_loading = false;
            state.fetch_controller = None;
            Vec::new()
        }

        Message::SelectResult(index) => {
            if index < state.results.len() {
                state.selected_result = Some(index);
            }
            Vec::new()
        }

        Message::CloseResultModal => {
            state.selected_result = None;
            Vec::new()
        }

        Message::Logout => {
            state.abort_in_flight_fetch();
            state.session = None;
            state.results.clear();
            state.selected_result = None;
            state.is_loading = true;
            vec![Command::ClearSession, Command::NavigateToLogin]
        }
    }
}
