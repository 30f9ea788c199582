use serde::{Deserialize, Serialize};

/// A person captured into the owner's contact list, either typed in by hand
/// or recorded when a viewer saved the owner's card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub source: ContactSource,
    #[serde(default)]
    pub created_at: String,
}

/// How a contact entered the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactSource {
    /// A viewer pressed "save contact" on a public card.
    CardSave,
    /// Typed in through the contacts form.
    #[default]
    Manual,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_uses_snake_case_tags() {
        let c: Contact =
            serde_json::from_str(r#"{"id":"x","name":"Rui","source":"card_save"}"#).unwrap();
        assert_eq!(c.source, ContactSource::CardSave);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["source"], "card_save");
    }

    #[test]
    fn missing_source_defaults_to_manual() {
        let c: Contact = serde_json::from_str(r#"{"id":"x","name":"Rui"}"#).unwrap();
        assert_eq!(c.source, ContactSource::Manual);
    }
}
