//! Contact collection synchronization.
//!
//! Same shape as the cards module, reduced to the operations the contact
//! surface actually has: a scoped fetch and a manual insert. Contacts also
//! arrive out-of-band when a viewer saves a card; those rows simply show up
//! on the next fetch.

use common::model::contact::Contact;
use common::model::profile::AuthUser;
use common::requests::NewContact;
use gloo_console::warn;

use crate::data::gateway::{self, GatewayError};
use crate::toast;

const TABLE: &str = "contacts";

/// Local view state for one owner's contact list.
#[derive(Debug, Default)]
pub struct ContactsState {
    contacts: Vec<Contact>,
    loading: bool,
    generation: u64,
}

impl ContactsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Applies a completed fetch; stale generations are dropped, failures
    /// keep the previous collection.
    pub fn apply_fetched(
        &mut self,
        generation: u64,
        result: Result<Vec<Contact>, GatewayError>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        if let Ok(contacts) = result {
            self.contacts = contacts;
        }
        true
    }

    /// Prepends a freshly added contact.
    pub fn inserted(&mut self, contact: Contact) {
        self.contacts.insert(0, contact);
    }
}

/// Fetches every contact owned by `user`, newest first. Failures toast and
/// re-raise; the caller's collection stays as it was.
pub async fn fetch_all(user: &AuthUser) -> Result<Vec<Contact>, GatewayError> {
    gateway::select_owned::<Contact>(TABLE, &user.id)
        .await
        .map_err(|err| {
            warn!("falha ao carregar contatos:", err.to_string());
            toast::error("Erro ao carregar contatos", &err.to_string());
            err
        })
}

/// Inserts a contact for `user` and returns the canonical stored row.
pub async fn create(user: &AuthUser, mut contact: NewContact) -> Result<Contact, GatewayError> {
    contact.user_id = user.id.clone();
    match gateway::insert::<Contact, _>(TABLE, &contact).await {
        Ok(created) => {
            toast::success("Contato adicionado!", "O contato foi salvo com sucesso.");
            Ok(created)
        }
        Err(err) => {
            toast::error("Erro ao adicionar contato", &err.to_string());
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: &str, name: &str) -> Contact {
        serde_json::from_str(&format!(r#"{{"id":"{}","name":"{}"}}"#, id, name)).unwrap()
    }

    #[test]
    fn fetch_and_insert_keep_newest_first() {
        let mut state = ContactsState::new();
        let generation = state.begin_fetch();
        state.apply_fetched(generation, Ok(vec![contact("a", "Ana")]));
        state.inserted(contact("b", "Bia"));
        let ids: Vec<_> = state.contacts().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn stale_generation_is_ignored() {
        let mut state = ContactsState::new();
        let first = state.begin_fetch();
        let _second = state.begin_fetch();
        assert!(!state.apply_fetched(first, Ok(vec![contact("x", "X")])));
        assert!(state.contacts().is_empty());
        assert!(state.loading());
    }

    #[test]
    fn failed_fetch_keeps_previous_collection() {
        let mut state = ContactsState::new();
        let generation = state.begin_fetch();
        state.apply_fetched(generation, Ok(vec![contact("a", "Ana")]));
        let generation = state.begin_fetch();
        state.apply_fetched(
            generation,
            Err(GatewayError::Transport("sem rede".to_string())),
        );
        assert_eq!(state.contacts().len(), 1);
    }
}
