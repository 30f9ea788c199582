//! Owner's card list: fetch on sign-in, publish toggle, guarded delete and
//! a share sheet with the public link and QR code.

use common::model::card::Card;
use common::requests::CardPatch;
use wasm_bindgen_futures::JsFuture;
use yew::platform::spawn_local;
use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{Route, Session};
use crate::components::card_preview::{CardPreview, PreviewFields};
use crate::components::navbar::Navbar;
use crate::components::overlay::{close_overlay, open_overlay, Overlay};
use crate::components::qr_code::QrCode;
use crate::data::cards::{self, CardsState};
use crate::data::gateway::GatewayError;
use crate::toast;

pub enum Msg {
    SessionChanged(Session),
    Fetched {
        generation: u64,
        result: Result<Vec<Card>, GatewayError>,
    },
    TogglePublish {
        id: String,
        publish: bool,
    },
    Updated {
        id: String,
        result: Result<Box<Card>, GatewayError>,
    },
    RequestDelete(String),
    Deleted {
        id: String,
        result: Result<(), GatewayError>,
    },
    OpenShare(Box<Card>),
    CloseShare,
    CopyLink(String),
}

pub struct CardsPage {
    state: CardsState,
    session: Session,
    _session_handle: Option<ContextHandle<Session>>,
    share_ref: NodeRef,
    sharing: Option<Card>,
}

impl Component for CardsPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (session, handle) = match ctx
            .link()
            .context::<Session>(ctx.link().callback(Msg::SessionChanged))
        {
            Some((session, handle)) => (session, Some(handle)),
            None => (
                Session {
                    user: None,
                    loaded: false,
                },
                None,
            ),
        };

        let mut page = Self {
            state: CardsState::new(),
            session,
            _session_handle: handle,
            share_ref: NodeRef::default(),
            sharing: None,
        };
        page.start_fetch(ctx);
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionChanged(session) => {
                let signed_in = session.user.is_some() && self.session.user.is_none();
                self.session = session;
                if signed_in {
                    self.start_fetch(ctx);
                }
                true
            }
            Msg::Fetched { generation, result } => self.state.apply_fetched(generation, result),
            Msg::TogglePublish { id, publish } => {
                if !self.state.begin_mutation(&id) {
                    return false;
                }
                let patch = CardPatch {
                    is_published: Some(publish),
                    ..CardPatch::default()
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = cards::update(&id, &patch).await;
                    link.send_message(Msg::Updated {
                        id: id.clone(),
                        result: result.map(Box::new),
                    });
                });
                true
            }
            Msg::Updated { id, result } => {
                self.state.end_mutation(&id);
                if let Ok(card) = result {
                    self.state.updated(*card);
                }
                true
            }
            Msg::RequestDelete(id) => {
                if !confirm("Excluir este cartão? Essa ação não pode ser desfeita.") {
                    return false;
                }
                if !self.state.begin_mutation(&id) {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = cards::delete(&id).await;
                    link.send_message(Msg::Deleted { id, result });
                });
                true
            }
            Msg::Deleted { id, result } => {
                self.state.end_mutation(&id);
                if result.is_ok() {
                    self.state.removed(&id);
                }
                true
            }
            Msg::OpenShare(card) => {
                self.sharing = Some(*card);
                open_overlay(&self.share_ref);
                true
            }
            Msg::CloseShare => {
                self.sharing = None;
                close_overlay(&self.share_ref);
                true
            }
            Msg::CopyLink(url) => {
                spawn_local(async move {
                    if let Some(window) = web_sys::window() {
                        let promise = window.navigator().clipboard().write_text(&url);
                        if JsFuture::from(promise).await.is_ok() {
                            toast::success(
                                "Link copiado!",
                                "O endereço do cartão está na área de transferência.",
                            );
                        }
                    }
                });
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let body = if !self.session.loaded || self.state.loading() {
            html! { <p>{"Carregando cartões..."}</p> }
        } else if self.session.user.is_none() {
            html! { <p>{"Entre na sua conta para gerenciar seus cartões."}</p> }
        } else if self.state.cards().is_empty() {
            html! {
                <div style="text-align:center; padding:48px;">
                    <p>{"Você ainda não tem cartões."}</p>
                    <Link<Route> to={Route::NewCard}>{"Criar meu primeiro cartão"}</Link<Route>>
                </div>
            }
        } else {
            html! {
                <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(320px, 1fr)); gap:24px;">
                    { for self.state.cards().iter().map(|card| self.card_tile(card, link)) }
                </div>
            }
        };

        html! {
            <>
                <Navbar />
                <main style="padding:32px;">
                    <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:24px;">
                        <h1>{"Meus Cartões"}</h1>
                        <Link<Route> to={Route::NewCard} classes="button primary">{"Novo Cartão"}</Link<Route>>
                    </div>
                    { body }
                    { self.share_sheet(link) }
                </main>
            </>
        }
    }
}

impl CardsPage {
    fn start_fetch(&mut self, ctx: &Context<Self>) {
        let Some(user) = self.session.user.clone() else {
            return;
        };
        let generation = self.state.begin_fetch();
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = cards::fetch_all(&user).await;
            link.send_message(Msg::Fetched { generation, result });
        });
    }

    fn card_tile(&self, card: &Card, link: &Scope<Self>) -> Html {
        let id = card.id.clone();
        let publish = !card.is_published;
        let busy = self.state.is_mutating(&card.id);
        let share_card = Box::new(card.clone());
        let delete_id = card.id.clone();

        html! {
            <div class="card-tile" key={card.id.clone()}>
                <CardPreview fields={PreviewFields::from(card)} />
                <div style="margin-top:12px;">
                    <div style="display:flex; justify-content:space-between; align-items:center;">
                        <strong>{ &card.title }</strong>
                        <span class={classes!("status-badge", card.is_published.then_some("published"))}>
                            { if card.is_published { "Publicado" } else { "Rascunho" } }
                        </span>
                    </div>
                    <p style="margin:4px 0; color:#6b7280; font-size:13px;">
                        {"/c/"}{ &card.slug }{" · "}{ card.views }{" visualizações"}
                    </p>
                    <div style="display:flex; gap:8px; margin-top:8px;">
                        <Link<Route> to={Route::EditCard { id: card.id.clone() }} classes="button">
                            {"Editar"}
                        </Link<Route>>
                        <button
                            disabled={busy}
                            onclick={link.callback(move |_| Msg::TogglePublish { id: id.clone(), publish })}
                        >
                            { if card.is_published { "Despublicar" } else { "Publicar" } }
                        </button>
                        <button onclick={link.callback(move |_| Msg::OpenShare(share_card.clone()))}>
                            {"Compartilhar"}
                        </button>
                        <button
                            class="danger"
                            disabled={busy}
                            onclick={link.callback(move |_| Msg::RequestDelete(delete_id.clone()))}
                        >
                            {"Excluir"}
                        </button>
                    </div>
                </div>
            </div>
        }
    }

    fn share_sheet(&self, link: &Scope<Self>) -> Html {
        let content = match &self.sharing {
            Some(card) => {
                let url = public_card_url(&card.slug);
                let copy_url = url.clone();
                html! {
                    <div style="padding:24px; text-align:center;">
                        <h2>{"Compartilhar cartão"}</h2>
                        <QrCode url={url.clone()} size={220} />
                        <p style="margin:16px 0; font-family:monospace; font-size:13px;">{ url }</p>
                        <div style="display:flex; gap:8px; justify-content:center;">
                            <button onclick={link.callback(move |_| Msg::CopyLink(copy_url.clone()))}>
                                {"Copiar link"}
                            </button>
                            <button onclick={link.callback(|_| Msg::CloseShare)}>{"Fechar"}</button>
                        </div>
                    </div>
                }
            }
            None => html! {},
        };

        html! {
            <Overlay node_ref={self.share_ref.clone()}>
                { content }
            </Overlay>
        }
    }
}

/// Absolute public URL for a card slug, based on the current origin.
fn public_card_url(slug: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}/c/{}", origin, slug)
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
