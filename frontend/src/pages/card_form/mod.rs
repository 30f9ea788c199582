//! Card form page: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering and messages.
//!
//! On first render, edit mode loads the card behind the `card_id` prop and
//! falls back to the card list with an error toast when the load fails.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CardFormProps;
pub use state::CardFormState;

use crate::data::gateway;

pub struct CardForm {
    state: CardFormState,
}

impl Component for CardForm {
    type Message = Msg;
    type Properties = CardFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            state: CardFormState::new(ctx.props().card_id.clone()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(&mut self.state, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(&self.state, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.state.loaded {
            self.state.loaded = true;

            if let Some(card_id) = ctx.props().card_id.clone() {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match gateway::select_one_by::<common::model::card::Card>(
                        "business_cards",
                        "id",
                        &card_id,
                    )
                    .await
                    {
                        Ok(Some(card)) => link.send_message(Msg::CardLoaded(Box::new(card))),
                        Ok(None) => link.send_message(Msg::LoadFailed(
                            "cartão não encontrado".to_string(),
                        )),
                        Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
                    }
                });
            }
        }
    }
}
