//! Public card viewer behind `/c/{slug}`.
//!
//! Loads the published card for the slug without requiring a session, fires
//! the server-side view increment (best-effort) and renders the card with
//! contact actions, share/copy, vCard download and a QR sheet.

use common::model::card::Card;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use yew::platform::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::card_preview::{CardPreview, PreviewFields};
use crate::components::overlay::{close_overlay, open_overlay, Overlay};
use crate::components::qr_code::QrCode;
use crate::data::cards;
use crate::toast;
use crate::utils::vcard::{vcard_file_name, vcard_for};

pub enum Msg {
    Loaded(Box<Option<Card>>),
    LoadFailed,
    DownloadVcard,
    CopyLink,
    OpenQr,
    CloseQr,
}

#[derive(Properties, PartialEq, Clone)]
pub struct CardViewerProps {
    pub slug: String,
}

pub struct CardViewer {
    card: Option<Card>,
    loading: bool,
    failed: bool,
    qr_ref: NodeRef,
}

impl Component for CardViewer {
    type Message = Msg;
    type Properties = CardViewerProps;

    fn create(ctx: &Context<Self>) -> Self {
        let slug = ctx.props().slug.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            match cards::fetch_published_by_slug(&slug).await {
                Ok(card) => link.send_message(Msg::Loaded(Box::new(card))),
                Err(_) => link.send_message(Msg::LoadFailed),
            }
        });

        Self {
            card: None,
            loading: true,
            failed: false,
            qr_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(card) => {
                self.loading = false;
                self.card = *card;
                if let Some(card) = &self.card {
                    // Best-effort; the page renders whether or not the
                    // counter bump lands.
                    let id = card.id.clone();
                    spawn_local(async move {
                        cards::record_view(&id).await;
                    });
                }
                true
            }
            Msg::LoadFailed => {
                self.loading = false;
                self.failed = true;
                true
            }
            Msg::DownloadVcard => {
                if let Some(card) = &self.card {
                    download_vcard(card);
                }
                false
            }
            Msg::CopyLink => {
                if let Some(card) = &self.card {
                    let text = format!(
                        "Confira meu cartão de visita digital: {} - {}",
                        card.name,
                        card.position.as_deref().unwrap_or("")
                    );
                    let url = current_url();
                    spawn_local(async move {
                        if let Some(window) = web_sys::window() {
                            let promise = window
                                .navigator()
                                .clipboard()
                                .write_text(&format!("{} {}", text, url));
                            if JsFuture::from(promise).await.is_ok() {
                                toast::success(
                                    "Link copiado!",
                                    "O link do cartão está na área de transferência.",
                                );
                            }
                        }
                    });
                }
                false
            }
            Msg::OpenQr => {
                open_overlay(&self.qr_ref);
                true
            }
            Msg::CloseQr => {
                close_overlay(&self.qr_ref);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let body = if self.loading {
            html! { <p style="text-align:center;">{"Carregando cartão..."}</p> }
        } else if self.failed {
            html! { <p style="text-align:center;">{"Não foi possível carregar o cartão."}</p> }
        } else {
            match &self.card {
                None => html! {
                    <div style="text-align:center; padding:48px;">
                        <h1>{"Cartão não encontrado"}</h1>
                        <p>{"Este cartão não existe ou não está publicado."}</p>
                    </div>
                },
                Some(card) => self.card_view(card, link),
            }
        };

        html! {
            <main class="card-viewer" style="min-height:100vh; padding:32px 16px;">
                <div style="max-width:480px; margin:0 auto;">
                    { body }
                    <p style="text-align:center; margin-top:32px; color:#9ca3af; font-size:13px;">
                        {"Criado com "}<strong>{"VirtualCardPro"}</strong>
                    </p>
                </div>
            </main>
        }
    }
}

impl CardViewer {
    fn card_view(&self, card: &Card, link: &Scope<Self>) -> Html {
        html! {
            <>
                <CardPreview fields={PreviewFields::from(card)} />

                {
                    if let Some(description) = card.description.as_deref().filter(|d| !d.is_empty()) {
                        html! { <p style="text-align:center; margin:16px 0; font-style:italic;">{ description }</p> }
                    } else {
                        html! {}
                    }
                }

                <div style="display:flex; justify-content:center; gap:12px; margin:24px 0;">
                    { action_link(card.phone.as_deref(), |p| format!("tel:{}", p), "phone", "Ligar") }
                    { action_link(card.social_links.get("whatsapp").map(String::as_str),
                        |w| format!("https://wa.me/{}", w), "chat", "WhatsApp") }
                    { action_link(card.email.as_deref(), |e| format!("mailto:{}", e), "mail", "Email") }
                    { action_link(card.website.as_deref(), |w| w.to_string(), "language", "Site") }
                </div>

                { social_row(card) }

                <div style="display:flex; flex-direction:column; gap:12px; margin-top:24px;">
                    <button class="primary" onclick={link.callback(|_| Msg::DownloadVcard)}>
                        <i class="material-icons" style="font-size:16px; vertical-align:middle;">{"download"}</i>
                        {" Salvar Contato"}
                    </button>
                    <div style="display:flex; gap:12px;">
                        <button style="flex:1;" onclick={link.callback(|_| Msg::CopyLink)}>
                            {"Compartilhar"}
                        </button>
                        <button style="flex:1;" onclick={link.callback(|_| Msg::OpenQr)}>
                            {"QR Code"}
                        </button>
                    </div>
                </div>

                <Overlay node_ref={self.qr_ref.clone()}>
                    <div style="padding:24px; text-align:center;">
                        <QrCode url={current_url()} size={220} />
                        <button style="margin-top:16px;" onclick={link.callback(|_| Msg::CloseQr)}>
                            {"Fechar"}
                        </button>
                    </div>
                </Overlay>
            </>
        }
    }
}

/// Icon link for a contact action; suppressed entirely when the value is
/// absent.
fn action_link(
    value: Option<&str>,
    href: impl Fn(&str) -> String,
    icon: &'static str,
    title: &'static str,
) -> Html {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => html! {
            <a class="action-chip" href={href(v)} target="_blank" title={title}>
                <i class="material-icons">{ icon }</i>
            </a>
        },
        None => html! {},
    }
}

fn social_row(card: &Card) -> Html {
    let links = [
        ("linkedin", "https://linkedin.com/in/"),
        ("instagram", "https://instagram.com/"),
        ("facebook", "https://facebook.com/"),
    ]
    .into_iter()
    .filter_map(|(network, base)| {
        card.social_links
            .get(network)
            .filter(|handle| !handle.is_empty())
            .map(|handle| {
                let handle = handle.trim_start_matches('@');
                html! {
                    <a class="social-chip" href={format!("{}{}", base, handle)} target="_blank">
                        { network }
                    </a>
                }
            })
    })
    .collect::<Vec<_>>();

    if links.is_empty() {
        html! {}
    } else {
        html! {
            <div style="display:flex; justify-content:center; gap:12px;">
                { for links }
            </div>
        }
    }
}

fn current_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

/// Builds the vCard blob and triggers a download through a transient
/// object URL.
fn download_vcard(card: &Card) {
    let payload = vcard_for(card);
    let parts = js_sys::Array::of1(&JsValue::from_str(&payload));
    let bag = web_sys::BlobPropertyBag::new();
    bag.set_type("text/vcard");

    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &bag) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let (Ok(anchor), Some(body)) = (document.create_element("a"), document.body()) {
            let anchor: web_sys::HtmlAnchorElement = anchor.unchecked_into();
            anchor.set_href(&url);
            anchor.set_download(&vcard_file_name(card));
            if body.append_child(&anchor).is_ok() {
                anchor.click();
                body.remove_child(&anchor).ok();
            }
        }
    }
    web_sys::Url::revoke_object_url(&url).ok();
}
