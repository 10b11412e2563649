use web_sys::AbortController;

use crate::messages::{Command, Message};
use crate::network::api_client::ApiClient;
use crate::session::{self, BrowserSessionStore};
use crate::state::{dispatch_global_message, APP_STATE};

pub fn execute_command(cmd: Command) {
    match cmd {
        Command::FetchResults { student_id, token } => {
            // The controller lives in AppState so teardown can abort the
            // request instead of leaving a dangling completion.
            let controller = AbortController::new().ok();
            let signal = controller.as_ref().map(|c| c.signal());
            APP_STATE.with(|state| {
                state.borrow_mut().fetch_controller = controller;
            });

            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::get_student_results(&student_id, &token, signal.as_ref()).await {
                    Ok(results) => {
                        log::info!("loaded {} result records", results.len());
                        dispatch_global_message(Message::ResultsLoaded(results));
                    }
                    Err(e) => {
                        // Log-only by design: the view falls through to the
                        // generic empty state.
                        log::warn!("failed to fetch results: {}", e);
                        dispatch_global_message(Message::ResultsFetchFailed);
                    }
                }
            });
        }

        Command::ClearSession => match BrowserSessionStore::new() {
            Ok(store) => session::clear_session(&store),
            Err(e) => log::warn!("could not open session store to clear it: {:?}", e),
        },

        Command::NavigateToLogin => {
            if let Err(e) = session::navigate_to_login() {
                log::warn!("navigation to login failed: {:?}", e);
            }
        }
    }
}
