// src/views.rs
//
// Top-level render dispatch: pick the loading screen or the role-appropriate
// dashboard from current state. Rendering is stateless and idempotent - each
// pass rebuilds the page container from the state snapshot.
//
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils;
use crate::state::{ViewPhase, APP_STATE};

pub fn render_active_view(document: &Document) -> Result<(), JsValue> {
    ensure_styles(document);
    let container = ensure_app_container(document)?;

    let (has_session, is_admin, phase) = APP_STATE.with(|state| {
        let state = state.borrow();
        (state.session.is_some(), state.is_admin(), state.view_phase())
    });

    // Mid-logout there is nothing left to show; navigation is already
    // underway.
    if !has_session {
        dom_utils::clear_children(&container);
        crate::components::result_modal::hide_result_modal(document);
        return Ok(());
    }

    if phase == ViewPhase::Loading {
        render_loading(document, &container, is_admin)?;
        return Ok(());
    }

    if is_admin {
        crate::pages::admin::mount_admin_dashboard(document, &container)?;
    } else {
        crate::pages::student::mount_student_dashboard(document, &container)?;
    }

    // Modal visibility tracks SelectedResult on every pass.
    crate::components::result_modal::sync_result_modal(document)
}

/// Full-page spinner shown until the guard+fetch sequence settles.
fn render_loading(document: &Document, container: &Element, is_admin: bool) -> Result<(), JsValue> {
    dom_utils::clear_children(container);

    let screen = document.create_element("div")?;
    screen.set_class_name("loading-screen");

    let spinner = document.create_element("div")?;
    spinner.set_class_name("spinner");
    screen.append_child(&spinner)?;

    let label = document.create_element("p")?;
    label.set_text_content(Some(if is_admin {
        "Loading..."
    } else {
        "Loading your results..."
    }));
    screen.append_child(&label)?;

    container.append_child(&screen)?;
    Ok(())
}

fn ensure_app_container(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id("app-container") {
        return Ok(el);
    }
    let el = document.create_element("div")?;
    el.set_id("app-container");
    document
        .body()
        .ok_or_else(|| JsValue::from_str("<body> element missing"))?
        .append_child(&el)?;
    Ok(el)
}

fn ensure_styles(document: &Document) {
    if document.get_element_by_id("portal-styles").is_some() {
        return;
    }

    let css = "
body{margin:0;font-family:Arial,Helvetica,sans-serif;background:#eef2ff;color:#111827}
.portal-header{background:#fff;box-shadow:0 1px 2px rgba(0,0,0,.08);padding:20px 32px;display:flex;justify-content:space-between;align-items:center}
.portal-header h1{margin:0;font-size:26px}
.portal-header .welcome{margin:4px 0 0;color:#4b5563}
.logout-btn{background:#dc2626;color:#fff;border:none;border-radius:6px;padding:8px 16px;font-size:14px;cursor:pointer}
.logout-btn:hover{background:#b91c1c}
.page-main{max-width:1100px;margin:0 auto;padding:24px 16px}
.card{background:#fff;border-radius:8px;box-shadow:0 1px 3px rgba(0,0,0,.1);padding:24px;margin-bottom:24px}
.card h2{margin:0 0 16px;font-size:18px}
.info-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(200px,1fr));gap:16px}
.info-grid .label{margin:0;font-size:13px;color:#6b7280}
.info-grid .value{margin:2px 0 0;font-weight:600}
.stat-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(220px,1fr));gap:20px;margin-bottom:24px}
.stat-card{background:#fff;border-radius:8px;box-shadow:0 1px 3px rgba(0,0,0,.1);padding:20px;display:flex;align-items:center;gap:14px}
.stat-card .stat-icon{width:36px;height:36px;border-radius:6px;color:#fff;font-weight:700;display:flex;align-items:center;justify-content:center}
.stat-card .stat-label{margin:0;font-size:13px;color:#6b7280}
.stat-card .stat-value{margin:2px 0 0;font-size:19px;font-weight:600}
.quick-actions{display:grid;grid-template-columns:repeat(auto-fit,minmax(180px,1fr));gap:16px;margin-bottom:24px}
.quick-action{background:#fff;border:none;border-radius:8px;box-shadow:0 1px 3px rgba(0,0,0,.1);padding:20px;text-align:center;cursor:pointer}
.quick-action h3{margin:0 0 4px;font-size:15px}
.quick-action p{margin:0;font-size:13px;color:#6b7280}
.results-table{width:100%;border-collapse:collapse}
.results-table th{text-align:left;padding:10px 12px;font-size:13px;color:#6b7280;border-bottom:1px solid #e5e7eb}
.results-table td{padding:12px;border-bottom:1px solid #f3f4f6;font-size:14px}
.results-table tr:hover td{background:#f9fafb}
.empty-cell{text-align:center;padding:30px;color:#888}
.grade-badge{display:inline-block;padding:4px 12px;border-radius:9999px;font-size:13px;font-weight:600}
.grade-positive{color:#16a34a;background:#dcfce7}
.grade-informational{color:#2563eb;background:#dbeafe}
.grade-caution{color:#ca8a04;background:#fef9c3}
.grade-warning{color:#ea580c;background:#ffedd5}
.grade-severe{color:#dc2626;background:#fee2e2}
.grade-neutral{color:#4b5563;background:#f3f4f6}
.detail-btn{background:#4f46e5;color:#fff;border:none;border-radius:6px;padding:6px 14px;font-size:13px;cursor:pointer}
.detail-btn:hover{background:#4338ca}
.modal{position:fixed;inset:0;background:rgba(75,85,99,.5);z-index:50;overflow-y:auto}
.modal.hidden{display:none}
.modal.visible{display:block}
.modal-content{position:relative;top:80px;margin:0 auto;padding:24px;width:380px;background:#fff;border-radius:8px;box-shadow:0 10px 25px rgba(0,0,0,.2)}
.modal-content h3{margin:0 0 16px;font-size:17px}
.detail-row{display:flex;justify-content:space-between;margin-bottom:10px;font-size:14px}
.detail-row .label{color:#6b7280}
.detail-row .value{font-weight:600}
.detail-remarks{margin-top:12px;font-size:14px}
.detail-remarks .label{color:#6b7280}
.detail-remarks p{margin:4px 0 0;font-weight:600}
.modal-actions{margin-top:20px;display:flex;justify-content:flex-end}
.close-btn{background:#d1d5db;color:#1f2937;border:none;border-radius:6px;padding:8px 16px;font-size:14px;cursor:pointer}
.close-btn:hover{background:#9ca3af}
.loading-screen{min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center;color:#4b5563}
.spinner{width:64px;height:64px;border:4px solid #e5e7eb;border-bottom-color:#4f46e5;border-radius:50%;animation:spin 1s linear infinite}
@keyframes spin{to{transform:rotate(360deg)}}
.hidden{display:none}
";

    if let Ok(style) = document.create_element("style") {
        style.set_id("portal-styles");
        style.set_text_content(Some(css));
        if let Ok(Some(head)) = document.query_selector("head") {
            let _ = head.append_child(&style);
        } else if let Some(body) = document.body() {
            let _ = body.append_child(&style);
        }
    }
}
