// src/messages.rs
//
// The events that can occur in the portal views, plus the side effects the
// reducer may request in response.
//
use crate::models::StudentResult;
use crate::session::Session;

#[derive(Debug, Clone)]
pub enum Message {
    /// Guard passed; the cached session is now the view's identity.
    SessionLoaded(Session),

    /// The one results fetch settled successfully.
    ResultsLoaded(Vec<StudentResult>),

    /// The results fetch failed (network, HTTP or payload shape). The error
    /// itself is logged at the call site; the view only needs to leave the
    /// Loading state.
    ResultsFetchFailed,

    /// Row detail affordance clicked; index into the results collection.
    SelectResult(usize),
    CloseResultModal,

    Logout,
}

/// Side effects requested by the reducer and performed by
/// `command_executors`. Keeping them as data makes the guard/fetch/logout
/// ordering assertable in unit tests.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchResults { student_id: String, token: String },
    ClearSession,
    NavigateToLogin,
}
