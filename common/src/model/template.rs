//! Built-in template presets offered by the template selector.
//!
//! Presets are consumed read-only: selecting one copies its style object
//! into the card's `template_style` field and nothing more is persisted.

use serde::{Deserialize, Serialize};

use crate::model::card::{CardLayout, CardStyle};
use crate::model::profile::Plan;

/// A named visual preset. `premium` presets are selectable only under a
/// premium plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplatePreset {
    pub id: String,
    pub name: String,
    pub premium: bool,
    pub style: CardStyle,
}

impl TemplatePreset {
    /// Whether the given plan may select this preset.
    pub fn can_select(&self, plan: Plan) -> bool {
        !self.premium || plan == Plan::Premium
    }

    /// The fixed preset catalog.
    ///
    /// The fourth preset historically carried a `creative` layout tag with no
    /// rendering strategy of its own; it resolves to the centered layout, the
    /// same fallback an unknown tag takes on deserialization.
    pub fn builtin() -> Vec<TemplatePreset> {
        vec![
            TemplatePreset {
                id: "modern".to_string(),
                name: "Moderno".to_string(),
                premium: false,
                style: CardStyle {
                    background: Some(
                        "linear-gradient(135deg, #667eea 0%, #764ba2 100%)".to_string(),
                    ),
                    text_color: Some("#ffffff".to_string()),
                    layout: CardLayout::Centered,
                },
            },
            TemplatePreset {
                id: "minimal".to_string(),
                name: "Minimalista".to_string(),
                premium: false,
                style: CardStyle {
                    background: Some("#ffffff".to_string()),
                    text_color: Some("#333333".to_string()),
                    layout: CardLayout::LeftAligned,
                },
            },
            TemplatePreset {
                id: "professional".to_string(),
                name: "Profissional".to_string(),
                premium: true,
                style: CardStyle {
                    background: Some(
                        "linear-gradient(45deg, #1e3c72 0%, #2a5298 100%)".to_string(),
                    ),
                    text_color: Some("#ffffff".to_string()),
                    layout: CardLayout::BusinessCard,
                },
            },
            TemplatePreset {
                id: "creative".to_string(),
                name: "Criativo".to_string(),
                premium: true,
                style: CardStyle {
                    background: Some(
                        "linear-gradient(135deg, #ff6b6b 0%, #ffa500 100%)".to_string(),
                    ),
                    text_color: Some("#ffffff".to_string()),
                    layout: CardLayout::Centered,
                },
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premium_presets_are_locked_for_free_plan() {
        let presets = TemplatePreset::builtin();
        let professional = presets.iter().find(|p| p.id == "professional").unwrap();
        assert!(!professional.can_select(Plan::Free));
        assert!(professional.can_select(Plan::Premium));
    }

    #[test]
    fn free_presets_are_open_to_everyone() {
        for preset in TemplatePreset::builtin().iter().filter(|p| !p.premium) {
            assert!(preset.can_select(Plan::Free));
            assert!(preset.can_select(Plan::Premium));
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let presets = TemplatePreset::builtin();
        let mut ids: Vec<_> = presets.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), presets.len());
    }
}
