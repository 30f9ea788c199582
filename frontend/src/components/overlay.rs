//! Sliding bottom-sheet overlay used by the share/QR dialogs.
//!
//! Visibility is driven by toggling an `open` class on the sheet node; the
//! toggle runs through a deferred DOM call so the CSS transition fires on
//! first open as well.

use uuid::Uuid;
use web_sys::js_sys;
use yew::{html, Component, Context, Html, NodeRef, Properties};

pub struct Overlay {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct OverlayProps {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for Overlay {
    type Message = ();
    type Properties = OverlayProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("overlay-{}", Uuid::new_v4().simple()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="overlay-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_overlay(overlay_ref: &NodeRef) {
    toggle_class(overlay_ref, true);
}

pub fn close_overlay(overlay_ref: &NodeRef) {
    toggle_class(overlay_ref, false);
}

fn toggle_class(overlay_ref: &NodeRef, add: bool) {
    if let Some(sheet) = overlay_ref.cast::<web_sys::HtmlElement>() {
        let op = if add { "add" } else { "remove" };
        let func = js_sys::Function::new_no_args(&format!(
            "document.querySelector('#{}').classList.{}('open')",
            sheet.id(),
            op
        ));
        if let Some(window) = web_sys::window() {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50)
                .ok();
        }
    }
}
