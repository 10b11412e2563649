pub mod admin;
pub mod student;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{
    SCHOOL_ADDRESS, SCHOOL_EMAIL, SCHOOL_ESTABLISHED, SCHOOL_NAME, SCHOOL_PHONE,
};

// Static school-information card shown at the bottom of both dashboards.
pub(crate) fn append_school_info_card(
    document: &Document,
    parent: &Element,
) -> Result<(), JsValue> {
    let card = document.create_element("div")?;
    card.set_class_name("card");

    let heading = document.create_element("h2")?;
    heading.set_text_content(Some("School Information"));
    card.append_child(&heading)?;

    let grid = document.create_element("div")?;
    grid.set_class_name("info-grid");

    let school_col = document.create_element("div")?;
    append_line(document, &school_col, "h3", SCHOOL_NAME)?;
    append_line(document, &school_col, "p", SCHOOL_ADDRESS)?;
    append_line(document, &school_col, "p", SCHOOL_ESTABLISHED)?;
    grid.append_child(&school_col)?;

    let contact_col = document.create_element("div")?;
    append_line(document, &contact_col, "h3", "Contact Information")?;
    append_line(document, &contact_col, "p", SCHOOL_PHONE)?;
    append_line(document, &contact_col, "p", SCHOOL_EMAIL)?;
    grid.append_child(&contact_col)?;

    card.append_child(&grid)?;
    parent.append_child(&card)?;
    Ok(())
}

fn append_line(
    document: &Document,
    parent: &Element,
    tag: &str,
    text: &str,
) -> Result<(), JsValue> {
    let el = document.create_element(tag)?;
    el.set_text_content(Some(text));
    parent.append_child(&el)?;
    Ok(())
}
