//! Contact list with per-source counters and a manual add form.

use common::model::contact::{Contact, ContactSource};
use common::requests::NewContact;
use yew::platform::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use crate::app::Session;
use crate::components::navbar::Navbar;
use crate::data::contacts::{self, ContactsState};
use crate::data::gateway::GatewayError;

pub enum Msg {
    SessionChanged(Session),
    Fetched {
        generation: u64,
        result: Result<Vec<Contact>, GatewayError>,
    },
    ToggleForm,
    SetName(String),
    SetEmail(String),
    SetPhone(String),
    SetCompany(String),
    SetPosition(String),
    SetNotes(String),
    Submit,
    Created(Result<Box<Contact>, GatewayError>),
}

#[derive(Default)]
struct ContactDraft {
    name: String,
    email: String,
    phone: String,
    company: String,
    position: String,
    notes: String,
}

impl ContactDraft {
    fn payload(&self) -> NewContact {
        NewContact {
            user_id: String::new(),
            name: self.name.clone(),
            email: opt(&self.email),
            phone: opt(&self.phone),
            company: opt(&self.company),
            position: opt(&self.position),
            notes: opt(&self.notes),
            source: ContactSource::Manual,
        }
    }
}

fn opt(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub struct ContactsPage {
    state: ContactsState,
    session: Session,
    _session_handle: Option<ContextHandle<Session>>,
    draft: ContactDraft,
    form_open: bool,
    submitting: bool,
}

impl Component for ContactsPage {
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
            state: ContactsState::new(),
            session,
            _session_handle: handle,
            draft: ContactDraft::default(),
            form_open: false,
            submitting: false,
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
            Msg::ToggleForm => {
                self.form_open = !self.form_open;
                true
            }
            Msg::SetName(v) => {
                self.draft.name = v;
                true
            }
            Msg::SetEmail(v) => {
                self.draft.email = v;
                true
            }
            Msg::SetPhone(v) => {
                self.draft.phone = v;
                true
            }
            Msg::SetCompany(v) => {
                self.draft.company = v;
                true
            }
            Msg::SetPosition(v) => {
                self.draft.position = v;
                true
            }
            Msg::SetNotes(v) => {
                self.draft.notes = v;
                true
            }
            Msg::Submit => {
                if self.submitting || self.draft.name.trim().is_empty() {
                    return false;
                }
                let Some(user) = self.session.user.clone() else {
                    return false;
                };
                self.submitting = true;
                let payload = self.draft.payload();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = contacts::create(&user, payload).await;
                    link.send_message(Msg::Created(result.map(Box::new)));
                });
                true
            }
            Msg::Created(result) => {
                self.submitting = false;
                if let Ok(contact) = result {
                    self.state.inserted(*contact);
                    self.draft = ContactDraft::default();
                    self.form_open = false;
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let from_cards = self
            .state
            .contacts()
            .iter()
            .filter(|c| c.source == ContactSource::CardSave)
            .count();
        let manual = self.state.contacts().len() - from_cards;

        let body = if !self.session.loaded || self.state.loading() {
            html! { <p>{"Carregando contatos..."}</p> }
        } else if self.session.user.is_none() {
            html! { <p>{"Entre na sua conta para ver seus contatos."}</p> }
        } else if self.state.contacts().is_empty() {
            html! { <p>{"Nenhum contato ainda. Compartilhe seu cartão para captar contatos."}</p> }
        } else {
            html! {
                <ul class="contact-list">
                    { for self.state.contacts().iter().map(contact_row) }
                </ul>
            }
        };

        html! {
            <>
                <Navbar />
                <main style="padding:32px;">
                    <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:24px;">
                        <h1>{"Contatos"}</h1>
                        <button class="primary" onclick={link.callback(|_| Msg::ToggleForm)}>
                            { if self.form_open { "Cancelar" } else { "Adicionar Contato" } }
                        </button>
                    </div>

                    <div style="display:flex; gap:24px; margin-bottom:24px;">
                        { stat_tile("Total", self.state.contacts().len()) }
                        { stat_tile("Salvaram Cartão", from_cards) }
                        { stat_tile("Manuais", manual) }
                    </div>

                    { if self.form_open { self.add_form(link) } else { html!{} } }
                    { body }
                </main>
            </>
        }
    }
}

impl ContactsPage {
    fn start_fetch(&mut self, ctx: &Context<Self>) {
        let Some(user) = self.session.user.clone() else {
            return;
        };
        let generation = self.state.begin_fetch();
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = contacts::fetch_all(&user).await;
            link.send_message(Msg::Fetched { generation, result });
        });
    }

    fn add_form(&self, link: &Scope<Self>) -> Html {
        html! {
            <section class="form-card" style="margin-bottom:24px;">
                <h2>{"Novo contato"}</h2>
                { field("Nome", &self.draft.name, link.callback(Msg::SetName)) }
                { field("Email", &self.draft.email, link.callback(Msg::SetEmail)) }
                { field("Telefone", &self.draft.phone, link.callback(Msg::SetPhone)) }
                { field("Empresa", &self.draft.company, link.callback(Msg::SetCompany)) }
                { field("Cargo", &self.draft.position, link.callback(Msg::SetPosition)) }
                { field("Notas", &self.draft.notes, link.callback(Msg::SetNotes)) }
                <button
                    class="primary"
                    disabled={self.submitting || self.draft.name.trim().is_empty()}
                    onclick={link.callback(|_| Msg::Submit)}
                >
                    { if self.submitting { "Salvando..." } else { "Salvar contato" } }
                </button>
            </section>
        }
    }
}

fn field(label: &str, value: &str, on_change: Callback<String>) -> Html {
    html! {
        <div>
            <label>{ label }</label>
            <input
                type="text"
                value={value.to_string()}
                oninput={Callback::from(move |e: InputEvent| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    on_change.emit(input.value());
                })}
            />
        </div>
    }
}

fn stat_tile(label: &str, value: usize) -> Html {
    html! {
        <div class="stat-tile">
            <p style="margin:0; color:#6b7280; font-size:13px;">{ label }</p>
            <p style="margin:0; font-size:24px; font-weight:bold;">{ value }</p>
        </div>
    }
}

fn contact_row(contact: &Contact) -> Html {
    let badge = match contact.source {
        ContactSource::CardSave => ("Salvou Cartão", "badge-card-save"),
        ContactSource::Manual => ("Manual", "badge-manual"),
    };

    html! {
        <li class="contact-row" key={contact.id.clone()}>
            <div>
                <strong>{ &contact.name }</strong>
                {
                    for [
                        contact.position.as_deref(),
                        contact.company.as_deref(),
                        contact.email.as_deref(),
                        contact.phone.as_deref(),
                    ]
                    .into_iter()
                    .flatten()
                    .filter(|v| !v.is_empty())
                    .map(|v| html! { <span style="margin-left:8px; color:#6b7280; font-size:13px;">{ v }</span> })
                }
            </div>
            <span class={classes!("source-badge", badge.1)}>{ badge.0 }</span>
        </li>
    }
}
