//! Update logic for the card form.
//!
//! Field messages mutate the state (title edits re-derive the slug); the
//! save message assembles the payload and hands it to the cards data module
//! inside `spawn_local`, reporting back through `SaveFinished`. A failed
//! save keeps the user on the form; only a successful one navigates back to
//! the card list. The window `app_dirty` flag tracks unsaved edits for the
//! unload guard.

use wasm_bindgen::JsValue;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::app::{Route, Session};
use crate::data::cards;
use crate::toast;

use super::messages::Msg;
use super::state::CardFormState;
use super::CardForm;

pub fn update(component: &mut CardFormState, ctx: &Context<CardForm>, msg: Msg) -> bool {
    match msg {
        Msg::SetTitle(title) => {
            component.set_title(title);
            sync_dirty_flag(component);
            true
        }
        Msg::SetSlug(slug) => {
            component.set_slug(slug);
            sync_dirty_flag(component);
            true
        }
        Msg::SetName(value) => {
            component.name = value;
            sync_dirty_flag(component);
            true
        }
        Msg::SetPosition(value) => {
            component.position = value;
            sync_dirty_flag(component);
            true
        }
        Msg::SetCompany(value) => {
            component.company = value;
            sync_dirty_flag(component);
            true
        }
        Msg::SetEmail(value) => {
            component.email = value;
            sync_dirty_flag(component);
            true
        }
        Msg::SetPhone(value) => {
            component.phone = value;
            sync_dirty_flag(component);
            true
        }
        Msg::SetWebsite(value) => {
            component.website = value;
            sync_dirty_flag(component);
            true
        }
        Msg::SetDescription(value) => {
            component.description = value;
            sync_dirty_flag(component);
            true
        }
        Msg::SetSocial { network, value } => {
            component.social_links.insert(network.to_string(), value);
            sync_dirty_flag(component);
            true
        }
        Msg::TemplateSelected(preset) => {
            // Selection copies the preset's style onto the card; the preset
            // itself is never persisted.
            component.style = preset.style.clone();
            component.template_id = Some(preset.id);
            sync_dirty_flag(component);
            true
        }
        Msg::AvatarChanged(url) => {
            component.avatar_url = url;
            sync_dirty_flag(component);
            true
        }
        Msg::CoverChanged(url) => {
            component.cover_image_url = url;
            sync_dirty_flag(component);
            true
        }
        Msg::Save { publish } => {
            if component.saving {
                return false;
            }
            let Some(user) = current_user(ctx) else {
                // Owner-scoped operation without a session: do nothing.
                return false;
            };
            if component.name.trim().is_empty() {
                toast::error("Campos obrigatórios", "Informe ao menos o nome do cartão.");
                return true;
            }

            component.saving = true;
            let link = ctx.link().clone();
            match component.card_id.clone() {
                Some(id) => {
                    let patch = component.update_payload(publish);
                    spawn_local(async move {
                        let result = cards::update(&id, &patch).await;
                        link.send_message(Msg::SaveFinished(result.map(Box::new)));
                    });
                }
                None => {
                    let payload = component.insert_payload(publish);
                    spawn_local(async move {
                        let result = cards::create(&user, payload).await;
                        link.send_message(Msg::SaveFinished(result.map(Box::new)));
                    });
                }
            }
            true
        }
        Msg::SaveFinished(result) => {
            component.saving = false;
            match result {
                Ok(card) => {
                    component.card_id = Some(card.id.clone());
                    component.saved_digest = Some(component.digest());
                    sync_dirty_flag(component);
                    if let Some(navigator) = ctx.link().navigator() {
                        navigator.push(&Route::Cards);
                    }
                }
                Err(_) => {
                    // Already toasted by the data layer; stay on the form so
                    // nothing typed is lost.
                }
            }
            true
        }
        Msg::CardLoaded(card) => {
            component.load_card(&card);
            sync_dirty_flag(component);
            true
        }
        Msg::LoadFailed(message) => {
            component.loading = false;
            toast::error("Erro ao carregar cartão", &message);
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&Route::Cards);
            }
            true
        }
    }
}

fn current_user(ctx: &Context<CardForm>) -> Option<common::model::profile::AuthUser> {
    ctx.link()
        .context::<Session>(Callback::noop())
        .and_then(|(session, _)| session.user)
}

/// Mirrors the form's dirtiness into the window-level `app_dirty` flag read
/// by the unload guard.
fn sync_dirty_flag(component: &CardFormState) {
    if let Some(window) = web_sys::window() {
        js_sys::Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(component.is_dirty()),
        )
        .ok();
    }
}
