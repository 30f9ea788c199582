//! Dashboard: aggregate numbers over the owner's cards and contacts.
//!
//! Holds its own card and contact collections, independent of the instances
//! the dedicated pages keep; there is no shared cache between pages.

use common::model::card::Card;
use common::model::contact::Contact;
use num_format::{Locale, ToFormattedString};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{Route, Session};
use crate::components::navbar::Navbar;
use crate::data::cards::{self, CardsState};
use crate::data::contacts::{self, ContactsState};
use crate::data::gateway::GatewayError;

pub enum Msg {
    SessionChanged(Session),
    CardsFetched {
        generation: u64,
        result: Result<Vec<Card>, GatewayError>,
    },
    ContactsFetched {
        generation: u64,
        result: Result<Vec<Contact>, GatewayError>,
    },
}

pub struct Dashboard {
    cards: CardsState,
    contacts: ContactsState,
    session: Session,
    _session_handle: Option<ContextHandle<Session>>,
}

impl Component for Dashboard {
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
            cards: CardsState::new(),
            contacts: ContactsState::new(),
            session,
            _session_handle: handle,
        };
        page.start_fetches(ctx);
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionChanged(session) => {
                let signed_in = session.user.is_some() && self.session.user.is_none();
                self.session = session;
                if signed_in {
                    self.start_fetches(ctx);
                }
                true
            }
            Msg::CardsFetched { generation, result } => {
                self.cards.apply_fetched(generation, result)
            }
            Msg::ContactsFetched { generation, result } => {
                self.contacts.apply_fetched(generation, result)
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let total_views: u64 = self.cards.cards().iter().map(|c| c.views).sum();
        let published = self
            .cards
            .cards()
            .iter()
            .filter(|c| c.is_published)
            .count();

        html! {
            <>
                <Navbar />
                <main style="padding:32px;">
                    <h1>{"Painel"}</h1>
                    <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(180px, 1fr)); gap:16px; margin:24px 0;">
                        { stat_tile("Cartões", self.cards.cards().len().to_string()) }
                        { stat_tile("Publicados", published.to_string()) }
                        { stat_tile("Visualizações", total_views.to_formatted_string(&Locale::pt)) }
                        { stat_tile("Contatos", self.contacts.contacts().len().to_string()) }
                    </div>

                    <section>
                        <div style="display:flex; justify-content:space-between; align-items:center;">
                            <h2>{"Cartões recentes"}</h2>
                            <Link<Route> to={Route::Cards}>{"Ver todos"}</Link<Route>>
                        </div>
                        {
                            if self.cards.loading() {
                                html! { <p>{"Carregando..."}</p> }
                            } else if self.cards.cards().is_empty() {
                                html! {
                                    <p>
                                        {"Nenhum cartão ainda. "}
                                        <Link<Route> to={Route::NewCard}>{"Crie o primeiro"}</Link<Route>>
                                    </p>
                                }
                            } else {
                                html! {
                                    <ul>
                                        {
                                            for self.cards.cards().iter().take(3).map(|card| html! {
                                                <li key={card.id.clone()}>
                                                    <Link<Route> to={Route::EditCard { id: card.id.clone() }}>
                                                        { &card.title }
                                                    </Link<Route>>
                                                    {" — "}{ card.views }{" visualizações"}
                                                </li>
                                            })
                                        }
                                    </ul>
                                }
                            }
                        }
                    </section>
                </main>
            </>
        }
    }
}

impl Dashboard {
    fn start_fetches(&mut self, ctx: &Context<Self>) {
        let Some(user) = self.session.user.clone() else {
            return;
        };

        let generation = self.cards.begin_fetch();
        let link = ctx.link().clone();
        let cards_user = user.clone();
        spawn_local(async move {
            let result = cards::fetch_all(&cards_user).await;
            link.send_message(Msg::CardsFetched { generation, result });
        });

        let generation = self.contacts.begin_fetch();
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = contacts::fetch_all(&user).await;
            link.send_message(Msg::ContactsFetched { generation, result });
        });
    }
}

fn stat_tile(label: &str, value: String) -> Html {
    html! {
        <div class="stat-tile">
            <p style="margin:0; color:#6b7280; font-size:13px;">{ label }</p>
            <p style="margin:0; font-size:28px; font-weight:bold;">{ value }</p>
        </div>
    }
}
