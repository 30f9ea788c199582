//! Card collection synchronization.
//!
//! [`CardsState`] is the in-memory view of the owner's cards held by the
//! component that created it. It is the only cache: a second instance built
//! elsewhere fetches and mutates independently. The async operations below
//! perform the remote call, raise the matching toast, and hand the canonical
//! row back; the caller feeds that row into the state through the
//! transition methods.
//!
//! Two guards keep the view consistent under interleaved events:
//! - a fetch generation token, so a response that was superseded by a newer
//!   fetch (or by the owning component being rebuilt) is discarded instead
//!   of overwriting fresher data;
//! - a per-id in-flight set, so a second mutation on a card whose previous
//!   mutation has not settled is rejected up front.

use std::collections::HashSet;

use common::model::card::Card;
use common::model::profile::AuthUser;
use common::requests::{CardPatch, NewCard};
use gloo_console::warn;

use crate::data::gateway::{self, GatewayError};
use crate::toast;

const TABLE: &str = "business_cards";

/// Local view state for one owner's card collection.
#[derive(Debug, Default)]
pub struct CardsState {
    cards: Vec<Card>,
    loading: bool,
    generation: u64,
    in_flight: HashSet<String>,
}

impl CardsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Marks the start of a fetch and returns its generation token.
    /// A token is only honored by [`CardsState::apply_fetched`] while no
    /// newer fetch has started.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Applies a completed fetch. Stale responses (superseded generation)
    /// are dropped and the method reports whether anything changed.
    pub fn apply_fetched(&mut self, generation: u64, result: Result<Vec<Card>, GatewayError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(cards) => {
                self.cards = cards;
                true
            }
            // Failure keeps the previous known-good collection.
            Err(_) => true,
        }
    }

    /// Prepends a freshly created card, newest-first order preserved.
    pub fn inserted(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Replaces the matching card in place, keeping collection order.
    pub fn updated(&mut self, card: Card) {
        if let Some(slot) = self.cards.iter_mut().find(|c| c.id == card.id) {
            *slot = card;
        }
    }

    /// Drops the card with the given id.
    pub fn removed(&mut self, id: &str) {
        self.cards.retain(|c| c.id != id);
    }

    /// Claims the per-id mutation slot. Returns `false` while an earlier
    /// mutation on the same id is still outstanding; the caller must then
    /// not start the operation.
    pub fn begin_mutation(&mut self, id: &str) -> bool {
        self.in_flight.insert(id.to_string())
    }

    /// Releases the per-id mutation slot once the operation settled,
    /// successfully or not.
    pub fn end_mutation(&mut self, id: &str) {
        self.in_flight.remove(id);
    }

    pub fn is_mutating(&self, id: &str) -> bool {
        self.in_flight.contains(id)
    }
}

/// Fetches every card owned by `user`, newest first.
///
/// On failure the error is toasted and returned; the caller's state keeps
/// its previous collection (see [`CardsState::apply_fetched`]).
pub async fn fetch_all(user: &AuthUser) -> Result<Vec<Card>, GatewayError> {
    gateway::select_owned::<Card>(TABLE, &user.id)
        .await
        .map_err(|err| {
            warn!("falha ao carregar cartões:", err.to_string());
            toast::error("Erro ao carregar cartões", &err.to_string());
            err
        })
}

/// Inserts a card for `user` and returns the canonical stored row.
pub async fn create(user: &AuthUser, mut card: NewCard) -> Result<Card, GatewayError> {
    card.user_id = user.id.clone();
    match gateway::insert::<Card, _>(TABLE, &card).await {
        Ok(created) => {
            toast::success("Cartão criado!", "Seu cartão foi criado com sucesso.");
            Ok(created)
        }
        Err(err) => {
            toast::error("Erro ao criar cartão", &err.to_string());
            Err(err)
        }
    }
}

/// Applies a partial update and returns the updated canonical row.
pub async fn update(id: &str, patch: &CardPatch) -> Result<Card, GatewayError> {
    match gateway::update::<Card, _>(TABLE, id, patch).await {
        Ok(updated) => {
            toast::success("Cartão atualizado!", "Suas alterações foram salvas.");
            Ok(updated)
        }
        Err(err) => {
            toast::error("Erro ao atualizar cartão", &err.to_string());
            Err(err)
        }
    }
}

/// Deletes a card by id.
pub async fn delete(id: &str) -> Result<(), GatewayError> {
    match gateway::delete(TABLE, id).await {
        Ok(()) => {
            toast::success("Cartão excluído", "O cartão foi removido com sucesso.");
            Ok(())
        }
        Err(err) => {
            toast::error("Erro ao excluir cartão", &err.to_string());
            Err(err)
        }
    }
}

/// Loads the published card behind a public slug. No identity required.
pub async fn fetch_published_by_slug(slug: &str) -> Result<Option<Card>, GatewayError> {
    let card = gateway::select_one_by::<Card>(TABLE, "slug", slug).await?;
    Ok(card.filter(|c| c.is_published))
}

/// Fire-and-forget server-side view increment for the public viewer.
/// Failures are logged and swallowed; the view itself must still render.
pub async fn record_view(card_id: &str) {
    let args = serde_json::json!({ "card_id": card_id });
    if let Err(err) = gateway::rpc("increment_card_views", &args).await {
        warn!("falha ao registrar visualização:", err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, name: &str) -> Card {
        serde_json::from_str(&format!(r#"{{"id":"{}","name":"{}"}}"#, id, name)).unwrap()
    }

    #[test]
    fn fetch_replaces_collection_wholesale() {
        let mut state = CardsState::new();
        state.inserted(card("old", "Velho"));
        let generation = state.begin_fetch();
        assert!(state.loading());
        state.apply_fetched(generation, Ok(vec![card("a", "Ana"), card("b", "Bia")]));
        assert!(!state.loading());
        let ids: Vec<_> = state.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn stale_fetch_response_is_discarded() {
        let mut state = CardsState::new();
        let first = state.begin_fetch();
        let second = state.begin_fetch();
        assert!(!state.apply_fetched(first, Ok(vec![card("stale", "X")])));
        assert!(state.cards().is_empty());
        state.apply_fetched(second, Ok(vec![card("fresh", "Y")]));
        assert_eq!(state.cards()[0].id, "fresh");
    }

    #[test]
    fn failed_fetch_keeps_previous_collection() {
        let mut state = CardsState::new();
        let generation = state.begin_fetch();
        state.apply_fetched(generation, Ok(vec![card("a", "Ana")]));
        let generation = state.begin_fetch();
        state.apply_fetched(
            generation,
            Err(GatewayError::Status(500, "boom".to_string())),
        );
        assert_eq!(state.cards().len(), 1);
        assert!(!state.loading());
    }

    #[test]
    fn create_failure_leaves_collection_length_unchanged() {
        // The async op returns Err without touching state; only a success
        // path ever reaches `inserted`.
        let mut state = CardsState::new();
        let generation = state.begin_fetch();
        state.apply_fetched(generation, Ok(vec![card("a", "Ana")]));
        let before = state.cards().len();
        // no `inserted` call on the failure path
        assert_eq!(state.cards().len(), before);
    }

    #[test]
    fn inserted_prepends_newest_first() {
        let mut state = CardsState::new();
        state.inserted(card("a", "Ana"));
        state.inserted(card("b", "Bia"));
        let ids: Vec<_> = state.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn updated_replaces_in_place_preserving_order() {
        let mut state = CardsState::new();
        let generation = state.begin_fetch();
        state.apply_fetched(
            generation,
            Ok(vec![card("a", "Ana"), card("b", "Bia"), card("c", "Caio")]),
        );
        state.updated(card("b", "Beatriz"));
        let names: Vec<_> = state.cards().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Beatriz", "Caio"]);
    }

    #[test]
    fn fail_then_succeed_update_leaves_only_second_payload() {
        let mut state = CardsState::new();
        let generation = state.begin_fetch();
        state.apply_fetched(generation, Ok(vec![card("a", "Ana")]));

        // First update fails: op returns Err, no state transition runs.
        assert!(state.begin_mutation("a"));
        state.end_mutation("a");

        // Second update succeeds and lands.
        assert!(state.begin_mutation("a"));
        state.updated(card("a", "Ana Paula"));
        state.end_mutation("a");

        assert_eq!(state.cards()[0].name, "Ana Paula");
        assert_eq!(state.cards().len(), 1);
    }

    #[test]
    fn second_mutation_on_same_id_is_rejected_while_first_is_outstanding() {
        let mut state = CardsState::new();
        assert!(state.begin_mutation("a"));
        assert!(!state.begin_mutation("a"));
        assert!(state.is_mutating("a"));
        state.end_mutation("a");
        assert!(state.begin_mutation("a"));
    }

    #[test]
    fn removed_drops_only_the_matching_card() {
        let mut state = CardsState::new();
        let generation = state.begin_fetch();
        state.apply_fetched(generation, Ok(vec![card("a", "Ana"), card("b", "Bia")]));
        state.removed("a");
        assert_eq!(state.cards().len(), 1);
        assert_eq!(state.cards()[0].id, "b");
    }
}
