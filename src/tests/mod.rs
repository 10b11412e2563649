mod grade_badge;
mod results_reducer;
mod session_guard;
