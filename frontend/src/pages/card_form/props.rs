use yew::prelude::*;

/// Properties for the card form page.
///
/// With `card_id` set the form loads that card on first render and saves
/// through partial updates; without it the form starts blank and saving
/// inserts a new card.
#[derive(Properties, PartialEq, Clone)]
pub struct CardFormProps {
    #[prop_or_default]
    pub card_id: Option<String>,
}
