//! Card model: the published/draft profile page a user builds and shares.
//!
//! Rows come from the `business_cards` collection of the hosted gateway.
//! Everything the gateway may omit carries a serde default so a sparse row
//! still deserializes; the style descriptor is a free-form JSON column on the
//! wire but is modeled here as a closed set of known layouts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Background applied when a style descriptor carries none.
pub const DEFAULT_BACKGROUND: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";

/// Text color applied when a style descriptor carries none.
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";

/// A virtual business card owned by exactly one user account.
///
/// `slug` is the URL-safe segment the public viewer route is keyed by; it is
/// derived from `title` on the form side and stored as-is. `views` is only
/// ever incremented server-side (`increment_card_views`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    /// Social network name (`linkedin`, `instagram`, ...) to profile handle.
    #[serde(default)]
    pub social_links: BTreeMap<String, String>,
    #[serde(default)]
    pub template_style: CardStyle,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub views: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code_url: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Visual preset copied onto a card when a template is selected.
///
/// The wire format is the free-form JSON bag the original data kept
/// (`background`, `textColor`, `layout`); unknown extra keys are ignored and
/// absent keys resolve through the accessor defaults, so a malformed or empty
/// descriptor degrades instead of erroring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, rename = "textColor", skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default)]
    pub layout: CardLayout,
}

impl CardStyle {
    /// CSS background, falling back to the fixed default gradient.
    pub fn background(&self) -> &str {
        self.background.as_deref().unwrap_or(DEFAULT_BACKGROUND)
    }

    /// CSS text color, falling back to white.
    pub fn text_color(&self) -> &str {
        self.text_color.as_deref().unwrap_or(DEFAULT_TEXT_COLOR)
    }
}

/// Layout discriminator of a card style.
///
/// A closed variant set: any tag not listed here (the original data contains
/// e.g. `creative`) deserializes to [`CardLayout::Centered`] so a stored
/// descriptor can never select a blank rendering strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardLayout {
    /// Stacked photo, name, role, company and a row of contact actions.
    #[default]
    Centered,
    /// Text block with inline contact icons and a trailing photo.
    LeftAligned,
    /// Split photo column plus text column.
    BusinessCard,
}

impl CardLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardLayout::Centered => "centered",
            CardLayout::LeftAligned => "left-aligned",
            CardLayout::BusinessCard => "business-card",
        }
    }
}

impl From<String> for CardLayout {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "left-aligned" => CardLayout::LeftAligned,
            "business-card" => CardLayout::BusinessCard,
            _ => CardLayout::Centered,
        }
    }
}

impl From<CardLayout> for String {
    fn from(layout: CardLayout) -> Self {
        layout.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_layout_tag_falls_back_to_centered() {
        let style: CardStyle =
            serde_json::from_str(r##"{"background":"#fff","layout":"creative"}"##).unwrap();
        assert_eq!(style.layout, CardLayout::Centered);
    }

    #[test]
    fn known_layout_tags_round_trip() {
        for (tag, layout) in [
            ("centered", CardLayout::Centered),
            ("left-aligned", CardLayout::LeftAligned),
            ("business-card", CardLayout::BusinessCard),
        ] {
            let json = format!(r#"{{"layout":"{}"}}"#, tag);
            let style: CardStyle = serde_json::from_str(&json).unwrap();
            assert_eq!(style.layout, layout);
            let back = serde_json::to_value(&style).unwrap();
            assert_eq!(back["layout"], tag);
        }
    }

    #[test]
    fn empty_style_resolves_defaults() {
        let style: CardStyle = serde_json::from_str("{}").unwrap();
        assert_eq!(style.background(), DEFAULT_BACKGROUND);
        assert_eq!(style.text_color(), DEFAULT_TEXT_COLOR);
        assert_eq!(style.layout, CardLayout::Centered);
    }

    #[test]
    fn sparse_row_deserializes_with_defaults() {
        let card: Card =
            serde_json::from_str(r#"{"id":"c1","name":"Ana"}"#).unwrap();
        assert_eq!(card.views, 0);
        assert!(!card.is_published);
        assert!(card.social_links.is_empty());
        assert!(card.position.is_none());
        assert_eq!(card.template_style, CardStyle::default());
    }

    #[test]
    fn text_color_uses_wire_name() {
        let style: CardStyle =
            serde_json::from_str(r##"{"textColor":"#333333"}"##).unwrap();
        assert_eq!(style.text_color(), "#333333");
    }
}
