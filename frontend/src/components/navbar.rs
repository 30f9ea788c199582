use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

pub struct Navbar;

impl Component for Navbar {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Navbar
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <nav class="navbar">
                <Link<Route> to={Route::Home} classes="navbar-brand">{"VirtualCardPro"}</Link<Route>>
                <div class="navbar-links">
                    <Link<Route> to={Route::Dashboard}>{"Painel"}</Link<Route>>
                    <Link<Route> to={Route::Cards}>{"Cartões"}</Link<Route>>
                    <Link<Route> to={Route::Contacts}>{"Contatos"}</Link<Route>>
                </div>
            </nav>
        }
    }
}
