use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::messages::Message;
use crate::models::{GradeCategory, StudentResult};
use crate::state::{dispatch_global_message, APP_STATE};
use crate::utils::{format_average, format_total};

// Build the results section: card heading plus table, then fill the body
// from current state.
pub fn render_results_section(document: &Document, parent: &Element) -> Result<(), JsValue> {
    let section = document.create_element("div")?;
    section.set_class_name("card");

    let heading = document.create_element("h2")?;
    heading.set_text_content(Some("Academic Results"));
    section.append_child(&heading)?;

    let table = create_results_table(document)?;
    section.append_child(&table)?;
    parent.append_child(&section)?;

    populate_results_table(document)
}

// Create the results table structure.
fn create_results_table(document: &Document) -> Result<Element, JsValue> {
    let table = document.create_element("table")?;
    table.set_id("results-table");
    table.set_class_name("results-table");

    let thead = document.create_element("thead")?;
    let header_row = document.create_element("tr")?;

    let columns = ["Term", "Class", "Total Score", "Average", "Position", "Grade", ""];
    for column in columns {
        let th = document.create_element("th")?;
        th.set_text_content(Some(column));
        header_row.append_child(&th)?;
    }

    thead.append_child(&header_row)?;
    table.append_child(&thead)?;

    let tbody = document.create_element("tbody")?;
    tbody.set_id("results-table-body");
    table.append_child(&tbody)?;

    Ok(table)
}

// Fill the table body with one row per record, or the empty-state row.
fn populate_results_table(document: &Document) -> Result<(), JsValue> {
    let tbody = document
        .get_element_by_id("results-table-body")
        .ok_or_else(|| JsValue::from_str("Could not find results-table-body"))?;
    tbody.set_inner_html("");

    let results = APP_STATE.with(|state| state.borrow().results.clone());

    if results.is_empty() {
        let empty_row = document.create_element("tr")?;
        let empty_cell = document.create_element("td")?;
        empty_cell.set_attribute("colspan", "7")?;
        empty_cell.set_class_name("empty-cell");
        empty_cell.set_text_content(Some("No results available yet."));
        empty_row.append_child(&empty_cell)?;
        tbody.append_child(&empty_row)?;
        return Ok(());
    }

    for (index, result) in results.iter().enumerate() {
        let row = create_result_row(document, index, result)?;
        tbody.append_child(&row)?;
    }

    Ok(())
}

// One table row per term record.
fn create_result_row(
    document: &Document,
    index: usize,
    result: &StudentResult,
) -> Result<Element, JsValue> {
    let row = document.create_element("tr")?;
    row.set_attribute("data-result-id", &result.id.to_string())?;

    let title_cell = document.create_element("td")?;
    title_cell.set_text_content(Some(&result.title()));
    row.append_child(&title_cell)?;

    let class_cell = document.create_element("td")?;
    class_cell.set_text_content(Some(&result.class_name));
    row.append_child(&class_cell)?;

    let total_cell = document.create_element("td")?;
    total_cell.set_text_content(Some(&format_total(result.total_score)));
    row.append_child(&total_cell)?;

    let average_cell = document.create_element("td")?;
    average_cell.set_text_content(Some(&format_average(result.average_score)));
    row.append_child(&average_cell)?;

    let position_cell = document.create_element("td")?;
    position_cell.set_text_content(Some(result.position.as_deref().unwrap_or("-")));
    row.append_child(&position_cell)?;

    let grade_cell = document.create_element("td")?;
    let badge = document.create_element("span")?;
    let category = GradeCategory::from_grade(&result.grade);
    badge.set_class_name(&format!("grade-badge {}", category.css_class()));
    badge.set_text_content(Some(&format!("Grade {}", result.grade)));
    grade_cell.append_child(&badge)?;
    row.append_child(&grade_cell)?;

    // Detail affordance: sets SelectedResult, which drives the modal.
    let actions_cell = document.create_element("td")?;
    let detail_btn: HtmlElement = document.create_element("button")?.dyn_into()?;
    detail_btn.set_class_name("detail-btn");
    detail_btn.set_text_content(Some("View Details"));
    {
        let cb = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            dispatch_global_message(Message::SelectResult(index));
        }) as Box<dyn FnMut(_)>);
        detail_btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    actions_cell.append_child(&detail_btn)?;
    row.append_child(&actions_cell)?;

    Ok(row)
}
