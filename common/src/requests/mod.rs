//! Request payloads sent to the hosted data gateway.
//!
//! Insert payloads carry the owning `user_id` alongside the field bag; patch
//! payloads are all-optional and skip absent fields entirely so a PATCH only
//! touches what the caller set.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::card::CardStyle;
use crate::model::contact::ContactSource;

/// Insert payload for the `business_cards` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewCard {
    pub user_id: String,
    pub title: String,
    pub slug: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    pub social_links: BTreeMap<String, String>,
    pub template_style: CardStyle,
    pub is_published: bool,
}

/// Partial update for one card. `None` fields are left untouched by the
/// gateway; clearing a value is expressed as `Some(String::new())`, matching
/// how the forms reset image fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CardPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_style: Option<CardStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

/// Insert payload for the `contacts` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewContact {
    pub user_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub source: ContactSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_skips_untouched_fields() {
        let patch = CardPatch {
            is_published: Some(true),
            ..CardPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["is_published"], true);
    }

    #[test]
    fn new_card_serializes_owner_and_style() {
        let card = NewCard {
            user_id: "u1".to_string(),
            title: "Cartão Pessoal".to_string(),
            slug: "cartao-pessoal".to_string(),
            name: "Ana".to_string(),
            ..NewCard::default()
        };
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["user_id"], "u1");
        assert_eq!(json["template_style"]["layout"], "centered");
        assert!(json.get("position").is_none());
    }
}
