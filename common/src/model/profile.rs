use serde::{Deserialize, Serialize};

/// Subscription tier read from the identity provider. Gates premium
/// template presets; nothing else in the app looks at it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Premium,
}

/// The authenticated account as the gateway reports it. Absence of a value
/// of this type disables every owner-scoped operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub plan: Plan,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_defaults_to_free() {
        let user: AuthUser = serde_json::from_str(r#"{"id":"u1"}"#).unwrap();
        assert_eq!(user.plan, Plan::Free);
    }

    #[test]
    fn plan_tags_are_lowercase() {
        let user: AuthUser =
            serde_json::from_str(r#"{"id":"u1","plan":"premium"}"#).unwrap();
        assert_eq!(user.plan, Plan::Premium);
    }
}
