//! Form state for creating and editing a card.
//!
//! The slug stays synchronized with the title: every title edit re-derives
//! it, while the slug field itself remains independently editable. The two
//! triggers are last-writer-wins: a manual slug edit survives only until
//! the next title keystroke.

use std::collections::BTreeMap;

use common::model::card::{Card, CardStyle};
use common::requests::{CardPatch, NewCard};

use crate::utils::slug::slugify;

/// Social networks offered by the form, in display order.
pub const SOCIAL_NETWORKS: [&str; 4] = ["linkedin", "instagram", "facebook", "whatsapp"];

pub struct CardFormState {
    /// Set when editing an existing card.
    pub card_id: Option<String>,
    pub title: String,
    pub slug: String,
    pub name: String,
    pub position: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub description: String,
    pub social_links: BTreeMap<String, String>,
    pub avatar_url: String,
    pub cover_image_url: String,
    pub style: CardStyle,
    /// Preset id the current style was copied from, for selector highlight.
    pub template_id: Option<String>,
    pub saving: bool,
    pub loading: bool,
    /// Guard to run the first-render load only once.
    pub loaded: bool,
    /// Digest of the form at last successful save (or load), for dirty
    /// tracking.
    pub saved_digest: Option<String>,
}

impl CardFormState {
    pub fn new(card_id: Option<String>) -> Self {
        let loading = card_id.is_some();
        Self {
            card_id,
            title: String::new(),
            slug: String::new(),
            name: String::new(),
            position: String::new(),
            company: String::new(),
            email: String::new(),
            phone: String::new(),
            website: String::new(),
            description: String::new(),
            social_links: BTreeMap::new(),
            avatar_url: String::new(),
            cover_image_url: String::new(),
            style: CardStyle::default(),
            template_id: None,
            saving: false,
            loading,
            loaded: false,
            saved_digest: None,
        }
    }

    /// Re-derives the slug from the new title. Overwrites whatever the slug
    /// field held, including manual edits.
    pub fn set_title(&mut self, title: String) {
        self.slug = slugify(&title);
        self.title = title;
    }

    /// Manual slug override; not re-derived, survives until the next title
    /// edit.
    pub fn set_slug(&mut self, slug: String) {
        self.slug = slug;
    }

    /// Copies a loaded card into the form and records its digest as the
    /// clean baseline.
    pub fn load_card(&mut self, card: &Card) {
        self.card_id = Some(card.id.clone());
        self.title = card.title.clone();
        self.slug = card.slug.clone();
        self.name = card.name.clone();
        self.position = card.position.clone().unwrap_or_default();
        self.company = card.company.clone().unwrap_or_default();
        self.email = card.email.clone().unwrap_or_default();
        self.phone = card.phone.clone().unwrap_or_default();
        self.website = card.website.clone().unwrap_or_default();
        self.description = card.description.clone().unwrap_or_default();
        self.social_links = card.social_links.clone();
        self.avatar_url = card.avatar_url.clone().unwrap_or_default();
        self.cover_image_url = card.cover_image_url.clone().unwrap_or_default();
        self.style = card.template_style.clone();
        self.loading = false;
        self.saved_digest = Some(self.digest());
    }

    /// Insert payload for a new card. `user_id` is filled by the data layer.
    pub fn insert_payload(&self, publish: bool) -> NewCard {
        NewCard {
            user_id: String::new(),
            title: self.title.clone(),
            slug: self.slug.clone(),
            name: self.name.clone(),
            position: opt(&self.position),
            company: opt(&self.company),
            email: opt(&self.email),
            phone: opt(&self.phone),
            website: opt(&self.website),
            description: opt(&self.description),
            avatar_url: opt(&self.avatar_url),
            cover_image_url: opt(&self.cover_image_url),
            social_links: filled_links(&self.social_links),
            template_style: self.style.clone(),
            is_published: publish,
        }
    }

    /// Full-field patch for an existing card. Image fields are sent even
    /// when empty so a removed image actually clears on the server.
    pub fn update_payload(&self, publish: bool) -> CardPatch {
        CardPatch {
            title: Some(self.title.clone()),
            slug: Some(self.slug.clone()),
            name: Some(self.name.clone()),
            position: Some(self.position.clone()),
            company: Some(self.company.clone()),
            email: Some(self.email.clone()),
            phone: Some(self.phone.clone()),
            website: Some(self.website.clone()),
            description: Some(self.description.clone()),
            avatar_url: Some(self.avatar_url.clone()),
            cover_image_url: Some(self.cover_image_url.clone()),
            social_links: Some(filled_links(&self.social_links)),
            template_style: Some(self.style.clone()),
            is_published: Some(publish),
        }
    }

    /// Digest of every field that participates in a save.
    pub fn digest(&self) -> String {
        let joined = [
            self.title.as_str(),
            self.slug.as_str(),
            self.name.as_str(),
            self.position.as_str(),
            self.company.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.website.as_str(),
            self.description.as_str(),
            self.avatar_url.as_str(),
            self.cover_image_url.as_str(),
            self.style.background(),
            self.style.text_color(),
            self.style.layout.as_str(),
        ]
        .join("\u{1f}");
        let links = self
            .social_links
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("\u{1f}");
        format!("{:x}", md5::compute(format!("{}\u{1e}{}", joined, links)))
    }

    /// Whether the form differs from the last saved (or loaded) snapshot.
    pub fn is_dirty(&self) -> bool {
        match &self.saved_digest {
            Some(saved) => saved != &self.digest(),
            None => !self.title.is_empty() || !self.name.is_empty(),
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

/// Keeps only networks with a non-empty handle.
fn filled_links(links: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    links
        .iter()
        .filter(|(_, v)| !v.trim().is_empty())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::card::CardLayout;

    #[test]
    fn title_edit_rederives_slug() {
        let mut state = CardFormState::new(None);
        state.set_title("João da Silva — Vendas!".to_string());
        assert_eq!(state.slug, "joao-da-silva-vendas");
        state.set_title("Cartão Pessoal".to_string());
        assert_eq!(state.slug, "cartao-pessoal");
    }

    #[test]
    fn manual_slug_survives_until_next_title_edit() {
        let mut state = CardFormState::new(None);
        state.set_title("Cartão Pessoal".to_string());
        state.set_slug("meu-link".to_string());
        assert_eq!(state.slug, "meu-link");
        // last-writer-wins: the next title keystroke clobbers the override
        state.set_title("Cartão Pessoal 2".to_string());
        assert_eq!(state.slug, "cartao-pessoal-2");
    }

    #[test]
    fn insert_payload_drops_blank_optionals_and_links() {
        let mut state = CardFormState::new(None);
        state.set_title("Cartão".to_string());
        state.name = "Ana".to_string();
        state.phone = "  ".to_string();
        state
            .social_links
            .insert("linkedin".to_string(), "ana-silva".to_string());
        state.social_links.insert("facebook".to_string(), String::new());

        let payload = state.insert_payload(true);
        assert!(payload.is_published);
        assert_eq!(payload.slug, "cartao");
        assert!(payload.phone.is_none());
        assert_eq!(payload.social_links.len(), 1);
        assert_eq!(payload.social_links["linkedin"], "ana-silva");
    }

    #[test]
    fn update_payload_sends_cleared_image_fields() {
        let mut state = CardFormState::new(Some("c1".to_string()));
        state.name = "Ana".to_string();
        state.avatar_url = String::new();
        let patch = state.update_payload(false);
        assert_eq!(patch.avatar_url.as_deref(), Some(""));
        assert_eq!(patch.is_published, Some(false));
    }

    #[test]
    fn loading_a_card_resets_dirtiness() {
        let card: Card = serde_json::from_str(
            r#"{"id":"c1","title":"T","slug":"t","name":"Ana",
                "template_style":{"layout":"left-aligned"}}"#,
        )
        .unwrap();
        let mut state = CardFormState::new(Some("c1".to_string()));
        state.load_card(&card);
        assert!(!state.is_dirty());
        assert_eq!(state.style.layout, CardLayout::LeftAligned);
        state.set_title("Outro título".to_string());
        assert!(state.is_dirty());
    }

    #[test]
    fn fresh_form_becomes_dirty_on_first_meaningful_edit() {
        let mut state = CardFormState::new(None);
        assert!(!state.is_dirty());
        state.set_title("Cartão".to_string());
        assert!(state.is_dirty());
    }
}
