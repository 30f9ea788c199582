//! Non-blocking toast notifications.
//!
//! Toasts are plain DOM nodes injected under `<body>` and removed after a
//! few seconds; they never block the flow that raised them and there is no
//! history: one notification per outcome, then gone.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn background(&self) -> &'static str {
        match self {
            ToastKind::Success => "rgba(22, 101, 52, 0.92)",
            ToastKind::Error => "rgba(153, 27, 27, 0.92)",
        }
    }
}

/// Shows a success toast with a title and a short description.
pub fn success(title: &str, description: &str) {
    show(ToastKind::Success, title, description);
}

/// Shows an error toast. `description` usually carries the failure's own
/// message text.
pub fn error(title: &str, description: &str) {
    show(ToastKind::Error, title, description);
}

/// Creates the toast node, styles it and schedules its removal.
///
/// Missing `window`/`document` (tests, detached contexts) make this a no-op
/// rather than a panic.
pub fn show(kind: ToastKind, title: &str, description: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                let html_toast: HtmlElement = toast.unchecked_into();
                html_toast.set_inner_html(&format!(
                    "<strong>{}</strong><br/><span style=\"opacity:0.85;font-size:13px;\">{}</span>",
                    title, description
                ));

                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", kind.background()).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("max-width", "360px").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(4000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
