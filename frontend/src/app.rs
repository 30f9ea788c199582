//! Application shell: routing plus the session context.
//!
//! The signed-in account is loaded once from the identity provider and
//! provided to every page through a context; pages treat an absent user as
//! "owner-scoped operations are disabled", never as an error. A
//! `beforeunload` guard warns when the window-level dirty flag is set by an
//! unsaved form.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::model::profile::AuthUser;

use crate::data::gateway;
use crate::pages::card_form::CardForm;
use crate::pages::card_viewer::CardViewer;
use crate::pages::cards::CardsPage;
use crate::pages::contacts::ContactsPage;
use crate::pages::dashboard::Dashboard;
use crate::pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/cards")]
    Cards,
    #[at("/cards/new")]
    NewCard,
    #[at("/cards/edit/:id")]
    EditCard { id: String },
    #[at("/contacts")]
    Contacts,
    #[at("/c/:slug")]
    Viewer { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Session info shared with every page.
#[derive(Clone, PartialEq)]
pub struct Session {
    /// `None` while loading and when signed out.
    pub user: Option<AuthUser>,
    /// Whether the initial identity lookup already settled.
    pub loaded: bool,
}

pub enum Msg {
    SessionLoaded(Option<AuthUser>),
}

pub struct App {
    session: Session,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            let user = gateway::current_user().await.unwrap_or_default();
            link.send_message(Msg::SessionLoaded(user));
        });

        install_unload_guard();

        Self {
            session: Session {
                user: None,
                loaded: false,
            },
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionLoaded(user) => {
                self.session = Session { user, loaded: true };
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<Session> context={self.session.clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<Session>>
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::Cards => html! { <CardsPage /> },
        Route::NewCard => html! { <CardForm /> },
        Route::EditCard { id } => html! { <CardForm card_id={Some(id)} /> },
        Route::Contacts => html! { <ContactsPage /> },
        Route::Viewer { slug } => html! { <CardViewer slug={slug} /> },
        Route::NotFound => html! {
            <main style="padding:48px; text-align:center;">
                <h1>{"404"}</h1>
                <p>{"Página não encontrada."}</p>
            </main>
        },
    }
}

/// Warns before the tab closes while the `app_dirty` window flag is truthy.
/// Forms set that flag while they hold unsaved edits.
fn install_unload_guard() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let guard = Closure::<dyn FnMut(web_sys::BeforeUnloadEvent)>::new(
        move |event: web_sys::BeforeUnloadEvent| {
            let dirty = web_sys::window()
                .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("app_dirty")).ok())
                .map(|v| v.is_truthy())
                .unwrap_or(false);
            if dirty {
                event.prevent_default();
                event.set_return_value("Há alterações não salvas.");
            }
        },
    );
    window
        .add_event_listener_with_callback("beforeunload", guard.as_ref().unchecked_ref())
        .ok();
    guard.forget();
}
