//! Visual card preview.
//!
//! A pure mapping from a style descriptor plus a field bag to markup: the
//! same inputs always render the same output, nothing here performs I/O.
//! The layout discriminator picks one of three strategies; optional fields
//! that are absent suppress their elements entirely, while name and
//! position fall back to literal placeholder strings.

use common::model::card::{Card, CardLayout, CardStyle};
use yew::prelude::*;

const NAME_PLACEHOLDER: &str = "Seu Nome";
const POSITION_PLACEHOLDER: &str = "Sua Posição";

/// Field bag consumed by the preview. Built from live form state on the
/// editor side or from a stored [`Card`] on the viewer side.
#[derive(Clone, Default, PartialEq)]
pub struct PreviewFields {
    pub name: String,
    pub position: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub avatar_url: Option<String>,
    pub style: CardStyle,
}

impl From<&Card> for PreviewFields {
    fn from(card: &Card) -> Self {
        PreviewFields {
            name: card.name.clone(),
            position: card.position.clone(),
            company: card.company.clone(),
            email: card.email.clone(),
            phone: card.phone.clone(),
            website: card.website.clone(),
            avatar_url: card.avatar_url.clone(),
            style: card.template_style.clone(),
        }
    }
}

impl PreviewFields {
    fn name_or_placeholder(&self) -> &str {
        if self.name.trim().is_empty() {
            NAME_PLACEHOLDER
        } else {
            &self.name
        }
    }

    fn position_or_placeholder(&self) -> &str {
        match self.position.as_deref() {
            Some(p) if !p.trim().is_empty() => p,
            _ => POSITION_PLACEHOLDER,
        }
    }

    /// First character of the name for the avatar fallback disc, `?` when
    /// the name is empty.
    fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[derive(Properties, PartialEq)]
pub struct CardPreviewProps {
    pub fields: PreviewFields,
}

pub struct CardPreview;

impl Component for CardPreview {
    type Message = ();
    type Properties = CardPreviewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardPreview
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let fields = &ctx.props().fields;
        let surface_style = format!(
            "background: {}; color: {}; aspect-ratio: 16/9; border-radius: 12px; overflow: hidden;",
            fields.style.background(),
            fields.style.text_color()
        );

        html! {
            <div class="card-preview" style={surface_style}>
                {
                    match fields.style.layout {
                        CardLayout::BusinessCard => business_card_layout(fields),
                        CardLayout::LeftAligned => left_aligned_layout(fields),
                        CardLayout::Centered => centered_layout(fields),
                    }
                }
            </div>
        }
    }
}

/// Split layout: photo column on the left, text column on the right.
fn business_card_layout(fields: &PreviewFields) -> Html {
    html! {
        <div style="height:100%; display:flex;">
            <div style="width:33%; background:rgba(255,255,255,0.2); display:flex; align-items:center; justify-content:center;">
                { avatar(fields, 64) }
            </div>
            <div style="flex:1; padding:16px; display:flex; flex-direction:column; justify-content:center;">
                <h3 style="margin:0 0 4px; font-size:18px;">{ fields.name_or_placeholder() }</h3>
                <p style="margin:0 0 4px; opacity:0.9; font-size:14px;">{ fields.position_or_placeholder() }</p>
                {
                    if let Some(company) = fields.company.as_deref().filter(|c| !c.is_empty()) {
                        html! { <p style="margin:0; opacity:0.75; font-size:14px;">{ company }</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

/// Text block with inline contact icons and a trailing photo. Always sits on
/// a white surface regardless of the descriptor's background.
fn left_aligned_layout(fields: &PreviewFields) -> Html {
    html! {
        <div style="height:100%; display:flex; align-items:center; padding:24px; background:#ffffff; color:#333333;">
            <div style="flex:1;">
                <h3 style="margin:0 0 8px; font-size:20px;">{ fields.name_or_placeholder() }</h3>
                <p style="margin:0 0 4px; color:#4b5563;">{ fields.position_or_placeholder() }</p>
                {
                    if let Some(company) = fields.company.as_deref().filter(|c| !c.is_empty()) {
                        html! { <p style="margin:0; color:#6b7280; font-size:14px;">{ company }</p> }
                    } else {
                        html! {}
                    }
                }
                <div style="display:flex; gap:16px; margin-top:16px; font-size:14px;">
                    { inline_icon(fields.phone.as_deref(), "phone") }
                    { inline_icon(fields.email.as_deref(), "mail") }
                    { inline_icon(fields.website.as_deref(), "language") }
                </div>
            </div>
            {
                match fields.avatar_url.as_deref().filter(|u| !u.is_empty()) {
                    Some(url) => html! {
                        <img src={url.to_string()} alt={fields.name.clone()}
                            style="width:80px; height:80px; border-radius:8px; border:1px solid #e5e7eb; object-fit:cover;" />
                    },
                    None => html! {
                        <div style="width:80px; height:80px; border-radius:8px; background:#f3f4f6; border:1px solid #e5e7eb; display:flex; align-items:center; justify-content:center;">
                            <span style="font-weight:bold; font-size:20px; color:#6b7280;">{ fields.initial() }</span>
                        </div>
                    },
                }
            }
        </div>
    }
}

/// Default layout: stacked photo, name, role, company and a row of contact
/// action chips.
fn centered_layout(fields: &PreviewFields) -> Html {
    html! {
        <div style="height:100%; display:flex; flex-direction:column; align-items:center; justify-content:center; text-align:center; padding:24px;">
            { avatar(fields, 80) }
            <h3 style="margin:16px 0 8px; font-size:20px;">{ fields.name_or_placeholder() }</h3>
            <p style="margin:0 0 4px; opacity:0.9;">{ fields.position_or_placeholder() }</p>
            {
                if let Some(company) = fields.company.as_deref().filter(|c| !c.is_empty()) {
                    html! { <p style="margin:0; opacity:0.75; font-size:14px;">{ company }</p> }
                } else {
                    html! {}
                }
            }
            <div style="display:flex; gap:16px; margin-top:24px;">
                { action_chip(fields.phone.as_deref(), "phone") }
                { action_chip(fields.email.as_deref(), "mail") }
                { action_chip(fields.website.as_deref(), "language") }
            </div>
        </div>
    }
}

/// Photo when present, initials disc otherwise; never an empty image.
fn avatar(fields: &PreviewFields, size: u32) -> Html {
    match fields.avatar_url.as_deref().filter(|u| !u.is_empty()) {
        Some(url) => html! {
            <img src={url.to_string()} alt={fields.name.clone()}
                style={format!("width:{s}px; height:{s}px; border-radius:50%; border:2px solid #ffffff; object-fit:cover;", s = size)} />
        },
        None => html! {
            <div style={format!(
                "width:{s}px; height:{s}px; border-radius:50%; background:rgba(255,255,255,0.3); display:flex; align-items:center; justify-content:center;",
                s = size
            )}>
                <span style="font-weight:bold; font-size:20px;">{ fields.initial() }</span>
            </div>
        },
    }
}

fn inline_icon(value: Option<&str>, icon: &'static str) -> Html {
    match value.filter(|v| !v.is_empty()) {
        Some(_) => html! { <i class="material-icons" style="font-size:16px;">{ icon }</i> },
        None => html! {},
    }
}

fn action_chip(value: Option<&str>, icon: &'static str) -> Html {
    match value.filter(|v| !v.is_empty()) {
        Some(_) => html! {
            <div style="padding:8px; background:rgba(255,255,255,0.2); border-radius:50%;">
                <i class="material-icons" style="font-size:16px;">{ icon }</i>
            </div>
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_falls_back_to_question_mark() {
        let mut fields = PreviewFields::default();
        assert_eq!(fields.initial(), "?");
        fields.name = "joão".to_string();
        assert_eq!(fields.initial(), "j");
        fields.name = "   ".to_string();
        assert_eq!(fields.initial(), "?");
    }

    #[test]
    fn placeholders_apply_only_when_fields_are_blank() {
        let mut fields = PreviewFields::default();
        assert_eq!(fields.name_or_placeholder(), NAME_PLACEHOLDER);
        assert_eq!(fields.position_or_placeholder(), POSITION_PLACEHOLDER);
        fields.name = "Ana".to_string();
        fields.position = Some("CEO".to_string());
        assert_eq!(fields.name_or_placeholder(), "Ana");
        assert_eq!(fields.position_or_placeholder(), "CEO");
        fields.position = Some("  ".to_string());
        assert_eq!(fields.position_or_placeholder(), POSITION_PLACEHOLDER);
    }

    #[test]
    fn preview_fields_mirror_card_fields() {
        let card: Card = serde_json::from_str(
            r#"{"id":"c1","name":"Ana","company":"ACME","template_style":{"layout":"business-card"}}"#,
        )
        .unwrap();
        let fields = PreviewFields::from(&card);
        assert_eq!(fields.name, "Ana");
        assert_eq!(fields.company.as_deref(), Some("ACME"));
        assert_eq!(fields.style.layout, CardLayout::BusinessCard);
    }
}
