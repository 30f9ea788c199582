//! vCard 3.0 payload generation for the "save contact" download.

use common::model::card::Card;

/// Builds the `BEGIN:VCARD…END:VCARD` text for a card. Optional fields are
/// omitted entirely when absent.
pub fn vcard_for(card: &Card) -> String {
    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", card.name),
    ];
    if let Some(position) = non_empty(card.position.as_deref()) {
        lines.push(format!("TITLE:{}", position));
    }
    if let Some(company) = non_empty(card.company.as_deref()) {
        lines.push(format!("ORG:{}", company));
    }
    if let Some(phone) = non_empty(card.phone.as_deref()) {
        lines.push(format!("TEL:{}", phone));
    }
    if let Some(email) = non_empty(card.email.as_deref()) {
        lines.push(format!("EMAIL:{}", email));
    }
    if let Some(website) = non_empty(card.website.as_deref()) {
        lines.push(format!("URL:{}", website));
    }
    lines.push("END:VCARD".to_string());
    lines.join("\n")
}

/// File name for the downloaded vCard, spaces replaced for portability.
pub fn vcard_file_name(card: &Card) -> String {
    format!("{}.vcf", card.name.replace(' ', "_"))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        serde_json::from_str(
            r#"{
                "id": "c1",
                "name": "João Silva",
                "position": "Desenvolvedor",
                "company": "TechSolutions",
                "phone": "+55 11 99999-9999",
                "email": "joao@techsolutions.com",
                "website": "https://techsolutions.com"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn full_card_renders_every_line() {
        let vcard = vcard_for(&card());
        assert!(vcard.starts_with("BEGIN:VCARD\nVERSION:3.0"));
        assert!(vcard.ends_with("END:VCARD"));
        assert!(vcard.contains("FN:João Silva"));
        assert!(vcard.contains("TITLE:Desenvolvedor"));
        assert!(vcard.contains("ORG:TechSolutions"));
        assert!(vcard.contains("TEL:+55 11 99999-9999"));
        assert!(vcard.contains("EMAIL:joao@techsolutions.com"));
        assert!(vcard.contains("URL:https://techsolutions.com"));
    }

    #[test]
    fn absent_fields_are_omitted() {
        let mut card = card();
        card.company = None;
        card.website = Some("   ".to_string());
        let vcard = vcard_for(&card);
        assert!(!vcard.contains("ORG:"));
        assert!(!vcard.contains("URL:"));
        assert!(vcard.contains("TEL:"));
    }

    #[test]
    fn file_name_replaces_spaces() {
        assert_eq!(vcard_file_name(&card()), "João_Silva.vcf");
    }
}
