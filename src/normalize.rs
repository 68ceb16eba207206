// src/normalize.rs
//! Maps free-text ingredient phrases onto the canonical vocabulary.
//!
//! Matching is per word: each word is reduced to its letters, singularized,
//! and kept only if it names a vocabulary entry. Multi-word vocabulary
//! entries never match.

use crate::catalog::Vocabulary;

/// Returns the canonical ingredients mentioned in `phrase`, in first
/// occurrence order, without duplicates.
#[must_use]
pub fn canonicalize(phrase: &str, vocabulary: &Vocabulary) -> Vec<String> {
    let mut found = Vec::new();
    collect_into(phrase, vocabulary, &mut found);
    found
}

/// Canonicalizes every phrase of a recipe, deduplicating across phrases.
#[must_use]
pub fn canonicalize_all<S: AsRef<str>>(phrases: &[S], vocabulary: &Vocabulary) -> Vec<String> {
    let mut found = Vec::new();
    for phrase in phrases {
        collect_into(phrase.as_ref(), vocabulary, &mut found);
    }
    found
}

fn collect_into(phrase: &str, vocabulary: &Vocabulary, found: &mut Vec<String>) {
    for word in phrase.split_whitespace() {
        let letters = letters_only(word);
        if letters.is_empty() {
            continue;
        }
        let singular = singularize(&letters);
        if vocabulary.contains(&singular) && !found.iter().any(|f| f.as_str() == singular) {
            found.push(singular.into_owned());
        }
    }
}

fn letters_only(word: &str) -> String {
    word.chars().filter(|c| c.is_alphabetic()).collect()
}

/// Rule-based singular form. Rules are tried in order:
/// `ies -> y`, `ves -> f`, `es -> ""`, then a trailing `s` is dropped unless
/// the word ends in `ss`, `us` or `is`.
#[must_use]
pub fn singularize(word: &str) -> std::borrow::Cow<'_, str> {
    use std::borrow::Cow;

    if let Some(stem) = word.strip_suffix("ies") {
        return Cow::Owned(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("ves") {
        return Cow::Owned(format!("{stem}f"));
    }
    if let Some(stem) = word.strip_suffix("es") {
        return Cow::Borrowed(stem);
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return Cow::Borrowed(word);
    }
    Cow::Borrowed(word.strip_suffix('s').unwrap_or(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(words: &[&str]) -> Vocabulary {
        Vocabulary::from_names(words.iter().copied())
    }

    #[test]
    fn test_singularize_rule_table() {
        assert_eq!(singularize("berries"), "berry");
        assert_eq!(singularize("leaves"), "leaf");
        assert_eq!(singularize("dishes"), "dish");
        assert_eq!(singularize("cars"), "car");
        assert_eq!(singularize("potatoes"), "potato");
        assert_eq!(singularize("tomatoes"), "tomato");
    }

    #[test]
    fn test_singularize_es_rule_is_literal() {
        // The two-character drop applies even where English would keep the "e".
        assert_eq!(singularize("cheeses"), "chees");
        assert_eq!(singularize("olives"), "olif");
        assert_eq!(singularize("apples"), "appl");
    }

    #[test]
    fn test_singularize_keeps_protected_endings() {
        assert_eq!(singularize("hummus"), "hummus");
        assert_eq!(singularize("swiss"), "swiss");
        assert_eq!(singularize("anis"), "anis");
        assert_eq!(singularize("egg"), "egg");
    }

    #[test]
    fn test_canonicalize_docstring_example() {
        let v = vocab(&["potato", "egg", "salt"]);
        let phrases = [
            "2 large egg whites",
            "1 pound new potatoes (about 1 inch in diameter)",
            "2 teaspoons kosher salt",
        ];
        assert_eq!(canonicalize_all(&phrases, &v), vec!["egg", "potato", "salt"]);
    }

    #[test]
    fn test_canonicalize_strips_punctuation_and_dedups() {
        let v = vocab(&["onion", "garlic"]);
        let found = canonicalize("onions, garlic (minced), more onion!", &v);
        assert_eq!(found, vec!["onion", "garlic"]);
    }

    #[test]
    fn test_canonicalize_ignores_multi_word_entries() {
        let v = vocab(&["olive oil", "oil"]);
        assert_eq!(canonicalize("3 tbsp olive oil", &v), vec!["oil"]);
    }

    #[test]
    fn test_canonicalize_empty_phrase() {
        let v = vocab(&["salt"]);
        assert!(canonicalize("   ", &v).is_empty());
        assert!(canonicalize("1/2 cup", &v).is_empty());
    }
}
