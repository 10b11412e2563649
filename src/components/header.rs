//! Page header: portal title, welcome line and the logout control.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::messages::Message;
use crate::state::dispatch_global_message;

/// Build the header for the current page and append it to `parent`.
/// `welcome` already contains the greeting with the user's name.
pub fn mount_header(
    document: &Document,
    parent: &Element,
    title: &str,
    welcome: &str,
) -> Result<(), JsValue> {
    let header = document.create_element("header")?;
    header.set_class_name("portal-header");

    let heading_wrap = document.create_element("div")?;

    let heading = document.create_element("h1")?;
    heading.set_text_content(Some(title));
    heading_wrap.append_child(&heading)?;

    let welcome_line = document.create_element("p")?;
    welcome_line.set_class_name("welcome");
    welcome_line.set_text_content(Some(welcome));
    heading_wrap.append_child(&welcome_line)?;

    header.append_child(&heading_wrap)?;

    // Logout: unconditionally clears the cached session and navigates away.
    let logout_btn: HtmlElement = document.create_element("button")?.dyn_into()?;
    logout_btn.set_class_name("logout-btn");
    logout_btn.set_text_content(Some("Logout"));
    {
        let cb = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            dispatch_global_message(Message::Logout);
        }) as Box<dyn FnMut(_)>);
        logout_btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    header.append_child(&logout_btn)?;

    parent.append_child(&header)?;
    Ok(())
}
