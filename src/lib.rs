use wasm_bindgen::prelude::*;

mod models;
mod state;
mod session;
mod network;
mod dom_utils;
mod components;
mod pages;
mod messages;  // Message and Command enums
mod update;    // pure reducer
mod command_executors;
mod views;
mod constants; // storage keys, defaults, school info
mod utils;

#[cfg(test)]
mod tests;

use crate::messages::Message;
use crate::session::BrowserSessionStore;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    // Initialize logging
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("School portal frontend starting");

    // Session guard: the view only proceeds with a complete, parseable
    // session. Anything else is a redirect to the login surface and we are
    // done for this activation.
    let store = BrowserSessionStore::new()?;
    let session = match session::load_session(&store) {
        Some(session) => session,
        None => {
            session::navigate_to_login()?;
            return Ok(());
        }
    };

    // Hand the session to the reducer. For student identities this queues
    // the one results fetch; the first UI refresh renders the Loading state
    // until that fetch settles.
    state::dispatch_global_message(Message::SessionLoaded(session));

    Ok(())
}
