//! QR code display for a public card URL.
//!
//! The image itself comes from a third-party generation endpoint,
//! parameterized by pixel size and the URL-encoded target.

use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct QrCodeProps {
    /// Target URL the code points at.
    pub url: String,
    #[prop_or(200)]
    pub size: u32,
}

pub struct QrCode;

/// Endpoint URL for a QR code image of `size` pixels pointing at `target`.
pub fn qr_image_url(target: &str, size: u32) -> String {
    format!(
        "https://api.qrserver.com/v1/create-qr-code/?size={s}x{s}&data={data}",
        s = size,
        data = encode_component(target)
    )
}

/// Percent-encodes a URL component, keeping the characters
/// `encodeURIComponent` keeps.
fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' => out.push(byte as char),
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

impl Component for QrCode {
    type Message = ();
    type Properties = QrCodeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        QrCode
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let image_url = qr_image_url(&props.url, props.size);
        let download_url = image_url.clone();

        let on_download = Callback::from(move |_: MouseEvent| {
            download_image(&download_url);
        });

        html! {
            <div style="text-align:center;">
                <div style="display:inline-block; padding:16px; background:#fff; border-radius:8px; border:1px solid #e5e7eb;">
                    <img src={image_url} alt="QR Code" style="display:block;" />
                </div>
                <div style="margin-top:12px;">
                    <button onclick={on_download}>
                        <i class="material-icons" style="font-size:16px; vertical-align:middle;">{"download"}</i>
                        {" Baixar QR Code"}
                    </button>
                </div>
            </div>
        }
    }
}

/// Triggers a browser download of the QR image via a transient anchor.
fn download_image(url: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let (Ok(anchor), Some(body)) = (document.create_element("a"), document.body()) {
            let anchor: web_sys::HtmlAnchorElement = anchor.unchecked_into();
            anchor.set_href(url);
            anchor.set_download("qrcode.png");
            if body.append_child(&anchor).is_ok() {
                anchor.click();
                body.remove_child(&anchor).ok();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_carries_size_and_encoded_target() {
        let url = qr_image_url("https://vcp.app/c/joao-silva?x=1", 240);
        assert!(url.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=240x240&data="));
        assert!(url.contains("https%3A%2F%2Fvcp.app%2Fc%2Fjoao-silva%3Fx%3D1"));
    }
}
