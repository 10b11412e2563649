//! Result detail modal, driven entirely by `AppState::selected_result`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::components::modal;
use crate::messages::Message;
use crate::models::{GradeCategory, StudentResult};
use crate::state::{dispatch_global_message, APP_STATE};
use crate::utils::{format_average, format_total};

const MODAL_ID: &str = "result-detail-modal";

/// Bring the modal in line with the current selection: populate and show it
/// when a record is selected, hide it otherwise.
pub fn sync_result_modal(document: &Document) -> Result<(), JsValue> {
    let selected = APP_STATE.with(|state| state.borrow().selected().cloned());

    let (backdrop, content) = modal::ensure_modal(document, MODAL_ID)?;

    match selected {
        Some(result) => {
            render_detail(document, &content, &result)?;
            modal::show(&backdrop);
        }
        None => {
            modal::hide(&backdrop);
        }
    }
    Ok(())
}

/// Hide the modal without creating it - used when the view is torn down.
pub fn hide_result_modal(document: &Document) {
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        modal::hide(&el);
    }
}

fn render_detail(
    document: &Document,
    content: &Element,
    result: &StudentResult,
) -> Result<(), JsValue> {
    content.set_inner_html("");

    let heading = document.create_element("h3")?;
    heading.set_text_content(Some(&format!(
        "Result Details - {} {}",
        result.session, result.term
    )));
    content.append_child(&heading)?;

    append_detail_row(document, content, "Class:", &result.class_name)?;
    append_detail_row(document, content, "Total Score:", &format_total(result.total_score))?;
    append_detail_row(document, content, "Average:", &format_average(result.average_score))?;

    // Grade renders as a badge rather than plain text.
    let grade_row = document.create_element("div")?;
    grade_row.set_class_name("detail-row");
    let grade_label = document.create_element("span")?;
    grade_label.set_class_name("label");
    grade_label.set_text_content(Some("Grade:"));
    grade_row.append_child(&grade_label)?;
    let badge = document.create_element("span")?;
    let category = GradeCategory::from_grade(&result.grade);
    badge.set_class_name(&format!("grade-badge {}", category.css_class()));
    badge.set_text_content(Some(&result.grade));
    grade_row.append_child(&badge)?;
    content.append_child(&grade_row)?;

    if let Some(position) = &result.position {
        append_detail_row(document, content, "Position:", position)?;
    }

    if let Some(remarks) = &result.remarks {
        let remarks_block = document.create_element("div")?;
        remarks_block.set_class_name("detail-remarks");
        let label = document.create_element("span")?;
        label.set_class_name("label");
        label.set_text_content(Some("Remarks:"));
        remarks_block.append_child(&label)?;
        let text = document.create_element("p")?;
        text.set_text_content(Some(remarks));
        remarks_block.append_child(&text)?;
        content.append_child(&remarks_block)?;
    }

    let actions = document.create_element("div")?;
    actions.set_class_name("modal-actions");
    let close_btn: HtmlElement = document.create_element("button")?.dyn_into()?;
    close_btn.set_class_name("close-btn");
    close_btn.set_text_content(Some("Close"));
    {
        let cb = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            dispatch_global_message(Message::CloseResultModal);
        }) as Box<dyn FnMut(_)>);
        close_btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    actions.append_child(&close_btn)?;
    content.append_child(&actions)?;

    Ok(())
}

fn append_detail_row(
    document: &Document,
    content: &Element,
    label_text: &str,
    value_text: &str,
) -> Result<(), JsValue> {
    let row = document.create_element("div")?;
    row.set_class_name("detail-row");

    let label = document.create_element("span")?;
    label.set_class_name("label");
    label.set_text_content(Some(label_text));
    row.append_child(&label)?;

    let value = document.create_element("span")?;
    value.set_class_name("value");
    value.set_text_content(Some(value_text));
    row.append_child(&value)?;

    content.append_child(&row)?;
    Ok(())
}
