//! Slug derivation for card URLs.
//!
//! A slug is derived from the human-entered title by lowercasing, NFD
//! decomposition, dropping combining marks, collapsing every run of
//! non-`[a-z0-9]` characters into one hyphen and trimming hyphens at both
//! ends. The function is deterministic and idempotent; colliding slugs are
//! not deduplicated here.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Derives the URL-safe slug for a title.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true; // true at start so no leading hyphen

    for c in title.nfd() {
        if is_combining_mark(c) {
            continue;
        }
        for lower in c.to_lowercase() {
            match lower {
                'a'..='z' | '0'..='9' => {
                    slug.push(lower);
                    last_was_hyphen = false;
                }
                _ => {
                    if !last_was_hyphen {
                        slug.push('-');
                        last_was_hyphen = true;
                    }
                }
            }
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Whether a manually edited slug is already in canonical form.
pub fn is_valid_slug(candidate: &str) -> bool {
    let re = regex::Regex::new(r"^[a-z0-9-]*$").unwrap();
    re.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics_and_collapses_punctuation() {
        assert_eq!(slugify("João da Silva — Vendas!"), "joao-da-silva-vendas");
    }

    #[test]
    fn derivation_is_idempotent() {
        for title in [
            "Cartão Pessoal",
            "João da Silva — Vendas!",
            "  --weird   input--  ",
            "Déjà Vu Consultoria",
        ] {
            let once = slugify(title);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn output_is_lowercase_alphanumeric_with_single_hyphens() {
        let slug = slugify("Ação & Reação: Nº 1 (São Paulo)");
        assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        assert!(!slug.contains("--"));
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn empty_and_symbol_only_titles_give_empty_slug() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!! ???"), "");
    }

    #[test]
    fn validates_manual_slug_edits() {
        assert!(is_valid_slug("meu-cartao-2"));
        assert!(is_valid_slug(""));
        assert!(!is_valid_slug("Meu Cartão"));
        assert!(!is_valid_slug("meu_cartao"));
    }
}
