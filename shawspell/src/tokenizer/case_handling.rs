//! Case folding helpers for cased scripts.
//!
//! Shavian has no letter case; these only come into play for Latin spans,
//! where "Hello" must match a word list storing "hello" and suggestions for
//! "HELO" should come back as "HELLO".

use smol_str::SmolStr;

#[inline(always)]
pub fn lower_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_lowercase().collect::<String>())
        .collect::<SmolStr>()
}

#[inline(always)]
pub fn upper_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_uppercase().collect::<String>())
        .collect::<SmolStr>()
}

#[inline(always)]
pub fn upper_first(s: &str) -> SmolStr {
    let mut c = s.chars();
    match c.next() {
        None => SmolStr::new(""),
        Some(f) => SmolStr::from(f.to_uppercase().collect::<String>() + c.as_str()),
    }
}

#[inline(always)]
pub fn lower_first(s: &str) -> SmolStr {
    let mut c = s.chars();
    match c.next() {
        None => SmolStr::new(""),
        Some(f) => SmolStr::from(f.to_lowercase().collect::<String>() + c.as_str()),
    }
}

pub fn is_all_caps(word: &str) -> bool {
    word.chars().any(|c| c.is_uppercase()) && !word.chars().any(|c| c.is_lowercase())
}

pub fn is_first_caps(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(f) if f.is_uppercase() => !chars.any(|c| c.is_uppercase()),
        _ => false,
    }
}

/// Case variants to try for membership when the word itself is not listed.
pub fn membership_variants(word: &str) -> Vec<SmolStr> {
    let mut variants: Vec<SmolStr> = Vec::with_capacity(2);

    for variant in [lower_first(word), lower_case(word)] {
        if variant.as_str() != word && !variants.contains(&variant) {
            variants.push(variant);
        }
    }

    variants
}

/// Restores the input word's capitalization pattern onto a suggestion.
pub fn apply_case(word: &str, suggestion: &str) -> SmolStr {
    if is_all_caps(word) {
        upper_case(suggestion)
    } else if is_first_caps(word) {
        upper_first(suggestion)
    } else {
        SmolStr::new(suggestion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_for_cased_word() {
        assert_eq!(membership_variants("Hello"), vec![SmolStr::new("hello")]);
        assert_eq!(
            membership_variants("HELLO"),
            vec![SmolStr::new("hELLO"), SmolStr::new("hello")]
        );
        assert!(membership_variants("hello").is_empty());
        // caseless script yields nothing to retry
        assert!(membership_variants("𐑣𐑩𐑤𐑴").is_empty());
    }

    #[test]
    fn case_restoration() {
        assert_eq!(apply_case("Helo", "hello"), SmolStr::new("Hello"));
        assert_eq!(apply_case("HELO", "hello"), SmolStr::new("HELLO"));
        assert_eq!(apply_case("helo", "hello"), SmolStr::new("hello"));
        assert_eq!(apply_case("𐑣𐑩𐑤", "𐑣𐑩𐑤𐑴"), SmolStr::new("𐑣𐑩𐑤𐑴"));
    }
}
