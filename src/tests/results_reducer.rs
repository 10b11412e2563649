//! Reducer-level coverage of the guard → fetch → render sequence, selection
//! handling and logout.

use crate::messages::{Command, Message};
use crate::models::{CurrentUser, GradeCategory, StudentResult, UserRole};
use crate::network::api_client::{parse_results, FetchError};
use crate::session::Session;
use crate::state::{AppState, ViewPhase};
use crate::update::update;
use crate::utils::format_average;

fn student_session() -> Session {
    Session {
        token: "tok-123".to_string(),
        user: CurrentUser {
            id: 42,
            username: "STU001".to_string(),
            email: "ada@example.edu".to_string(),
            role: UserRole::Student,
            full_name: "Ada Lovelace".to_string(),
        },
    }
}

fn admin_session() -> Session {
    Session {
        token: "tok-admin".to_string(),
        user: CurrentUser {
            id: 1,
            username: "admin".to_string(),
            email: "admin@example.edu".to_string(),
            role: UserRole::Admin,
            full_name: "Head Teacher".to_string(),
        },
    }
}

fn sample_result(id: u32, term: &str, grade: &str) -> StudentResult {
    StudentResult {
        id,
        student_id: "STU001".to_string(),
        student_name: "Ada Lovelace".to_string(),
        class_name: "Primary 5".to_string(),
        session: "2023/2024".to_string(),
        term: term.to_string(),
        subjects: "[]".to_string(),
        total_score: 450.0,
        average_score: 90.0,
        grade: grade.to_string(),
        position: None,
        remarks: None,
    }
}

#[test]
fn student_guard_pass_queues_exactly_one_fetch() {
    let mut state = AppState::new();
    let commands = update(&mut state, Message::SessionLoaded(student_session()));

    assert_eq!(
        commands,
        vec![Command::FetchResults {
            student_id: "STU001".to_string(),
            token: "tok-123".to_string(),
        }]
    );
    assert!(state.is_loading);
    assert_eq!(state.view_phase(), ViewPhase::Loading);
}

#[test]
fn admin_guard_pass_completes_loading_without_fetch() {
    let mut state = AppState::new();
    let commands = update(&mut state, Message::SessionLoaded(admin_session()));

    assert!(commands.is_empty());
    assert!(!state.is_loading);
}

#[test]
fn loading_holds_until_the_fetch_settles() {
    let mut state = AppState::new();
    update(&mut state, Message::SessionLoaded(student_session()));
    assert_eq!(state.view_phase(), ViewPhase::Loading);

    update(
        &mut state,
        Message::ResultsLoaded(vec![sample_result(1, "First Term", "A")]),
    );
    assert_eq!(state.view_phase(), ViewPhase::Populated);
}

#[test]
fn zero_records_render_the_empty_state() {
    let mut state = AppState::new();
    update(&mut state, Message::SessionLoaded(student_session()));
    update(&mut state, Message::ResultsLoaded(Vec::new()));

    assert_eq!(state.view_phase(), ViewPhase::Empty);
}

#[test]
fn n_records_render_n_rows() {
    let mut state = AppState::new();
    update(&mut state, Message::SessionLoaded(student_session()));
    update(
        &mut state,
        Message::ResultsLoaded(vec![
            sample_result(1, "First Term", "A"),
            sample_result(2, "Second Term", "B"),
            sample_result(3, "Third Term", "C"),
        ]),
    );

    assert_eq!(state.results.len(), 3);
    assert_eq!(state.view_phase(), ViewPhase::Populated);
}

#[test]
fn fetch_failure_is_indistinguishable_from_an_empty_dataset() {
    let mut state = AppState::new();
    update(&mut state, Message::SessionLoaded(student_session()));
    update(&mut state, Message::ResultsFetchFailed);

    assert!(state.results.is_empty());
    assert_eq!(state.view_phase(), ViewPhase::Empty);
}

#[test]
fn selecting_a_row_shows_that_record() {
    let mut state = AppState::new();
    update(&mut state, Message::SessionLoaded(student_session()));
    update(
        &mut state,
        Message::ResultsLoaded(vec![
            sample_result(1, "First Term", "A"),
            sample_result(2, "Second Term", "B"),
        ]),
    );

    update(&mut state, Message::SelectResult(1));
    assert_eq!(state.selected().map(|r| r.id), Some(2));
}

#[test]
fn at_most_one_selection_is_active() {
    let mut state = AppState::new();
    update(&mut state, Message::SessionLoaded(student_session()));
    update(
        &mut state,
        Message::ResultsLoaded(vec![
            sample_result(1, "First Term", "A"),
            sample_result(2, "Second Term", "B"),
        ]),
    );

    update(&mut state, Message::SelectResult(0));
    update(&mut state, Message::SelectResult(1));
    assert_eq!(state.selected_result, Some(1));
}

#[test]
fn out_of_range_selection_is_ignored() {
    let mut state = AppState::new();
    update(&mut state, Message::SessionLoaded(student_session()));
    update(
        &mut state,
        Message::ResultsLoaded(vec![sample_result(1, "First Term", "A")]),
    );

    update(&mut state, Message::SelectResult(5));
    assert_eq!(state.selected_result, None);
}

#[test]
fn closing_the_modal_clears_the_selection() {
    let mut state = AppState::new();
    update(&mut state, Message::SessionLoaded(student_session()));
    update(
        &mut state,
        Message::ResultsLoaded(vec![sample_result(1, "First Term", "A")]),
    );
    update(&mut state, Message::SelectResult(0));
    assert!(state.selected().is_some());

    update(&mut state, Message::CloseResultModal);
    assert_eq!(state.selected_result, None);
}

#[test]
fn logout_requests_session_clear_then_redirect() {
    let mut state = AppState::new();
    update(&mut state, Message::SessionLoaded(student_session()));
    update(
        &mut state,
        Message::ResultsLoaded(vec![sample_result(1, "First Term", "A")]),
    );

    let commands = update(&mut state, Message::Logout);
    assert_eq!(commands, vec![Command::ClearSession, Command::NavigateToLogin]);
    assert!(state.session.is_none());
    assert!(state.results.is_empty());
    assert_eq!(state.selected_result, None);
}

// The worked example: one First-Term record for Ada Lovelace.
#[test]
fn ada_lovelace_first_term_scenario() {
    let mut state = AppState::new();
    update(&mut state, Message::SessionLoaded(student_session()));
    update(
        &mut state,
        Message::ResultsLoaded(vec![sample_result(1, "First Term", "A")]),
    );

    let record = &state.results[0];
    assert_eq!(record.title(), "2023/2024 - First Term");
    assert_eq!(format_average(record.average_score), "90.00");
    assert_eq!(
        GradeCategory::from_grade(&record.grade),
        GradeCategory::Positive
    );

    update(&mut state, Message::SelectResult(0));
    let shown = state.selected().expect("modal should show the record");
    assert_eq!(format_average(shown.average_score), "90.00");
}

// Shape mismatches surface as typed errors at the parse boundary instead of
// rendering faults later.
#[test]
fn malformed_payload_is_a_typed_error() {
    let err = parse_results(r#"{"detail": "not a list"}"#).unwrap_err();
    assert!(matches!(err, FetchError::MalformedPayload(_)));

    let err = parse_results(r#"[{"id": "not-a-number"}]"#).unwrap_err();
    assert!(matches!(err, FetchError::MalformedPayload(_)));

    let ok = parse_results("[]").unwrap();
    assert!(ok.is_empty());
}
