// src/pages/admin.rs
//
// Admin landing page: placeholder stat cards, quick-action stubs and the
// school-information card. No data fetch - the figures are static until the
// management endpoints land.
//
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::components::header;
use crate::dom_utils;
use crate::state::APP_STATE;

pub fn mount_admin_dashboard(document: &Document, container: &Element) -> Result<(), JsValue> {
    dom_utils::clear_children(container);

    let user = match APP_STATE.with(|state| state.borrow().current_user().cloned()) {
        Some(user) => user,
        None => return Ok(()),
    };

    header::mount_header(
        document,
        container,
        "Admin Portal",
        &format!("Welcome back, {}", user.full_name),
    )?;

    let main = document.create_element("main")?;
    main.set_class_name("page-main");
    container.append_child(&main)?;

    // Stats cards
    let stat_grid = document.create_element("div")?;
    stat_grid.set_class_name("stat-grid");
    append_stat_card(document, &stat_grid, "S", "#4f46e5", "Total Students", "1,250")?;
    append_stat_card(document, &stat_grid, "T", "#16a34a", "Total Teachers", "45")?;
    append_stat_card(document, &stat_grid, "C", "#ca8a04", "Total Classes", "12")?;
    main.append_child(&stat_grid)?;

    // Quick actions
    let actions_heading = document.create_element("h2")?;
    actions_heading.set_text_content(Some("Quick Actions"));
    main.append_child(&actions_heading)?;

    let actions = document.create_element("div")?;
    actions.set_class_name("quick-actions");
    append_quick_action(document, &actions, "Add Student", "Register new student")?;
    append_quick_action(document, &actions, "Upload Results", "Upload exam results")?;
    append_quick_action(document, &actions, "Manage Users", "User management")?;
    append_quick_action(document, &actions, "Broadcasts", "Send messages")?;
    main.append_child(&actions)?;

    super::append_school_info_card(document, &main)?;

    Ok(())
}

fn append_stat_card(
    document: &Document,
    grid: &Element,
    letter: &str,
    color: &str,
    label_text: &str,
    value_text: &str,
) -> Result<(), JsValue> {
    let card = document.create_element("div")?;
    card.set_class_name("stat-card");

    let icon = document.create_element("div")?;
    icon.set_class_name("stat-icon");
    icon.set_attribute("style", &format!("background:{}", color))?;
    icon.set_text_content(Some(letter));
    card.append_child(&icon)?;

    let text_col = document.create_element("div")?;
    let label = document.create_element("p")?;
    label.set_class_name("stat-label");
    label.set_text_content(Some(label_text));
    text_col.append_child(&label)?;
    let value = document.create_element("p")?;
    value.set_class_name("stat-value");
    value.set_text_content(Some(value_text));
    text_col.append_child(&value)?;
    card.append_child(&text_col)?;

    grid.append_child(&card)?;
    Ok(())
}

fn append_quick_action(
    document: &Document,
    parent: &Element,
    title: &str,
    subtitle: &str,
) -> Result<(), JsValue> {
    let button: HtmlElement = document.create_element("button")?.dyn_into()?;
    button.set_class_name("quick-action");

    let heading = document.create_element("h3")?;
    heading.set_text_content(Some(title));
    button.append_child(&heading)?;

    let sub = document.create_element("p")?;
    sub.set_text_content(Some(subtitle));
    button.append_child(&sub)?;

    // Stubs until the management screens exist.
    {
        let action = title.to_string();
        let cb = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            log::info!("quick action not yet wired: {}", action);
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    parent.append_child(&button)?;
    Ok(())
}
