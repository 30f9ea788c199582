//! View rendering for the card form.
//!
//! Left column: the field sections (basic, personal, contact, social).
//! Right column: live preview, template selector and image uploads. The
//! preview re-renders from the live field bag on every keystroke.

use common::model::profile::Plan;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{Route, Session};
use crate::components::card_preview::{CardPreview, PreviewFields};
use crate::components::card_templates::CardTemplates;
use crate::components::image_upload::ImageUpload;
use crate::components::navbar::Navbar;
use crate::utils::slug::is_valid_slug;

use super::messages::Msg;
use super::state::CardFormState;
use super::CardForm;

pub fn view(component: &CardFormState, ctx: &Context<CardForm>) -> Html {
    let link = ctx.link();
    let plan = ctx
        .link()
        .context::<Session>(Callback::noop())
        .and_then(|(session, _)| session.user.map(|u| u.plan))
        .unwrap_or(Plan::Free);

    if component.loading {
        return html! {
            <>
                <Navbar />
                <main style="padding:48px; text-align:center;">{"Carregando cartão..."}</main>
            </>
        };
    }

    let heading = if component.card_id.is_some() {
        "Editar Cartão"
    } else {
        "Novo Cartão"
    };

    html! {
        <>
            <Navbar />
            <main class="card-form" style="padding:32px;">
                <div style="display:flex; align-items:center; justify-content:space-between; margin-bottom:32px;">
                    <div>
                        <Link<Route> to={Route::Cards}>{"← Voltar"}</Link<Route>>
                        <h1 style="margin:8px 0 0;">{ heading }</h1>
                        <p style="margin:4px 0 0; color:#4b5563;">{"Crie seu cartão de visita virtual"}</p>
                    </div>
                    <div style="display:flex; gap:8px;">
                        <button
                            disabled={component.saving}
                            onclick={link.callback(|_| Msg::Save { publish: false })}
                        >
                            { if component.saving { "Salvando..." } else { "Salvar Rascunho" } }
                        </button>
                        <button
                            class="primary"
                            disabled={component.saving}
                            onclick={link.callback(|_| Msg::Save { publish: true })}
                        >
                            {"Publicar Cartão"}
                        </button>
                    </div>
                </div>

                <div style="display:grid; grid-template-columns:1fr 1fr; gap:32px;">
                    <div style="display:flex; flex-direction:column; gap:24px;">
                        { basic_section(component, link) }
                        { personal_section(component, link) }
                        { contact_section(component, link) }
                        { social_section(component, link) }
                    </div>
                    <div style="display:flex; flex-direction:column; gap:24px;">
                        { preview_section(component) }
                        <section class="form-card">
                            <CardTemplates
                                selected={component.template_id.clone()}
                                plan={plan}
                                on_select={link.callback(Msg::TemplateSelected)}
                            />
                        </section>
                        { images_section(component, link) }
                    </div>
                </div>
            </main>
        </>
    }
}

fn basic_section(component: &CardFormState, link: &Scope<CardForm>) -> Html {
    let slug_hint = if is_valid_slug(&component.slug) {
        html! {}
    } else {
        html! {
            <p style="margin:4px 0 0; font-size:12px; color:#b45309;">
                {"Use apenas letras minúsculas, números e hífens."}
            </p>
        }
    };

    html! {
        <section class="form-card">
            <h2>{"Informações Básicas"}</h2>
            { text_input("Título do Cartão", &component.title,
                "Ex: Cartão Pessoal, Cartão Empresa...",
                link.callback(Msg::SetTitle)) }
            <div>
                <label>{"URL do Cartão"}</label>
                <div style="display:flex; align-items:center;">
                    <span class="input-prefix">{"/c/"}</span>
                    <input
                        type="text"
                        value={component.slug.clone()}
                        placeholder="seu-nome"
                        oninput={input_value(link.callback(Msg::SetSlug))}
                    />
                </div>
                { slug_hint }
            </div>
        </section>
    }
}

fn personal_section(component: &CardFormState, link: &Scope<CardForm>) -> Html {
    html! {
        <section class="form-card">
            <h2>{"Informações Pessoais"}</h2>
            { text_input("Nome Completo", &component.name, "Seu nome",
                link.callback(Msg::SetName)) }
            { text_input("Cargo/Posição", &component.position, "Ex: Desenvolvedor, CEO...",
                link.callback(Msg::SetPosition)) }
            { text_input("Empresa", &component.company, "Nome da empresa",
                link.callback(Msg::SetCompany)) }
            <div>
                <label>{"Descrição"}</label>
                <textarea
                    value={component.description.clone()}
                    placeholder="Uma frase sobre você ou seu negócio"
                    rows={3}
                    oninput={link.callback(|e: InputEvent| {
                        let area: HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::SetDescription(area.value())
                    })}
                />
            </div>
        </section>
    }
}

fn contact_section(component: &CardFormState, link: &Scope<CardForm>) -> Html {
    html! {
        <section class="form-card">
            <h2>{"Informações de Contato"}</h2>
            { text_input("Telefone", &component.phone, "(11) 99999-9999",
                link.callback(Msg::SetPhone)) }
            { text_input("Email", &component.email, "seu@email.com",
                link.callback(Msg::SetEmail)) }
            { text_input("Website", &component.website, "https://seusite.com",
                link.callback(Msg::SetWebsite)) }
        </section>
    }
}

fn social_section(component: &CardFormState, link: &Scope<CardForm>) -> Html {
    html! {
        <section class="form-card">
            <h2>{"Redes Sociais"}</h2>
            { social_input(component, link, "linkedin", "LinkedIn", "https://linkedin.com/in/seuperfil") }
            { social_input(component, link, "instagram", "Instagram", "@seuusuario") }
            { social_input(component, link, "facebook", "Facebook", "facebook.com/seuusuario") }
            { social_input(component, link, "whatsapp", "WhatsApp", "5511999999999") }
        </section>
    }
}

fn social_input(
    component: &CardFormState,
    link: &Scope<CardForm>,
    network: &'static str,
    label: &str,
    placeholder: &str,
) -> Html {
    let value = component
        .social_links
        .get(network)
        .cloned()
        .unwrap_or_default();
    html! {
        <div>
            <label>{ label }</label>
            <input
                type="text"
                value={value}
                placeholder={placeholder.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetSocial { network, value: input.value() }
                })}
            />
        </div>
    }
}

fn preview_section(component: &CardFormState) -> Html {
    let fields = PreviewFields {
        name: component.name.clone(),
        position: Some(component.position.clone()),
        company: Some(component.company.clone()),
        email: Some(component.email.clone()),
        phone: Some(component.phone.clone()),
        website: Some(component.website.clone()),
        avatar_url: Some(component.avatar_url.clone()),
        style: component.style.clone(),
    };
    html! {
        <section class="form-card">
            <h2>{"Visualização do Cartão"}</h2>
            <CardPreview fields={fields} />
        </section>
    }
}

fn images_section(component: &CardFormState, link: &Scope<CardForm>) -> Html {
    html! {
        <section class="form-card">
            <h2>{"Imagens"}</h2>
            <div>
                <label>{"Foto Pessoal"}</label>
                <ImageUpload
                    current={Some(component.avatar_url.clone())}
                    folder={Some("avatars".to_string())}
                    label="Clique para fazer upload da sua foto"
                    on_change={link.callback(Msg::AvatarChanged)}
                />
            </div>
            <div>
                <label>{"Imagem de Capa"}</label>
                <ImageUpload
                    current={Some(component.cover_image_url.clone())}
                    folder={Some("covers".to_string())}
                    label="Clique para fazer upload da capa"
                    on_change={link.callback(Msg::CoverChanged)}
                />
            </div>
        </section>
    }
}

fn text_input(label: &str, value: &str, placeholder: &str, on_change: Callback<String>) -> Html {
    html! {
        <div>
            <label>{ label }</label>
            <input
                type="text"
                value={value.to_string()}
                placeholder={placeholder.to_string()}
                oninput={input_value(on_change)}
            />
        </div>
    }
}

/// Adapts an input event into its current string value.
fn input_value(on_change: Callback<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit(input.value());
    })
}
