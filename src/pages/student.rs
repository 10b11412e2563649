// src/pages/student.rs
//
// Student results dashboard: identity card, academic results and the static
// school-information card.
//
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::{header, results_table};
use crate::dom_utils;
use crate::state::APP_STATE;

pub fn mount_student_dashboard(document: &Document, container: &Element) -> Result<(), JsValue> {
    dom_utils::clear_children(container);

    let user = match APP_STATE.with(|state| state.borrow().current_user().cloned()) {
        Some(user) => user,
        // The guard never mounts this page without a session; nothing to do.
        None => return Ok(()),
    };

    header::mount_header(
        document,
        container,
        "Student Portal",
        &format!("Welcome, {}", user.full_name),
    )?;

    // Attach main before building into it: the results table is populated
    // through document-level id lookups.
    let main = document.create_element("main")?;
    main.set_class_name("page-main");
    container.append_child(&main)?;

    // Student info card
    let info_card = document.create_element("div")?;
    info_card.set_class_name("card");
    let info_heading = document.create_element("h2")?;
    info_heading.set_text_content(Some("Student Information"));
    info_card.append_child(&info_heading)?;

    let grid = document.create_element("div")?;
    grid.set_class_name("info-grid");
    append_info_field(document, &grid, "Student ID", &user.username)?;
    append_info_field(document, &grid, "Full Name", &user.full_name)?;
    append_info_field(document, &grid, "Email", &user.email)?;
    info_card.append_child(&grid)?;
    main.append_child(&info_card)?;

    results_table::render_results_section(document, &main)?;

    super::append_school_info_card(document, &main)?;

    Ok(())
}

fn append_info_field(
    document: &Document,
    grid: &Element,
    label_text: &str,
    value_text: &str,
) -> Result<(), JsValue> {
    let field = document.create_element("div")?;

    let label = document.create_element("p")?;
    label.set_class_name("label");
    label.set_text_content(Some(label_text));
    field.append_child(&label)?;

    let value = document.create_element("p")?;
    value.set_class_name("value");
    value.set_text_content(Some(value_text));
    field.append_child(&value)?;

    grid.append_child(&field)?;
    Ok(())
}
