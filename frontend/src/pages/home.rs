use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::navbar::Navbar;

pub struct Home;

impl Component for Home {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Home
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <Navbar />
                <main style="padding:64px 32px; text-align:center;">
                    <h1>{"Seu cartão de visita virtual"}</h1>
                    <p style="max-width:480px; margin:16px auto; color:#4b5563;">
                        {"Crie, publique e compartilhe cartões de visita digitais com QR code, \
                          acompanhe visualizações e capture contatos."}
                    </p>
                    <div style="display:flex; gap:12px; justify-content:center; margin-top:24px;">
                        <Link<Route> to={Route::NewCard} classes="button primary">{"Criar meu cartão"}</Link<Route>>
                        <Link<Route> to={Route::Dashboard} classes="button">{"Ir para o painel"}</Link<Route>>
                    </div>
                </main>
            </>
        }
    }
}
