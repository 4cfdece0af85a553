//! Field name sanitization.
//!
//! Turns raw candidate names (typed at a prompt or passed by the caller)
//! into valid, unique field identifiers:
//!
//! 1. trim surrounding whitespace
//! 2. replace anything that is not a letter, digit, or `_` with `_`
//! 3. prefix `_` when the name starts with a digit
//! 4. empty or reserved names become `field_<index>`
//! 5. duplicates of an earlier name get `_<index>` appended
//!
//! Steps 1-4 are per-name ([`Sanitizer::sanitize`]); step 5 needs the whole
//! sequence ([`Sanitizer::sanitize_all`]).

use std::collections::HashSet;

use crate::keywords::ReservedWords;

/// Prefix used for positional placeholder names.
pub const PLACEHOLDER_PREFIX: &str = "field";

/// Applies the naming policy against a reserved-word table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sanitizer {
    reserved: ReservedWords,
}

impl Sanitizer {
    pub fn new(reserved: ReservedWords) -> Self {
        Self { reserved }
    }

    pub fn reserved(&self) -> ReservedWords {
        self.reserved
    }

    /// Sanitize a single name at a zero-based position.
    ///
    /// Does not check for duplicates; use [`Sanitizer::sanitize_all`] for
    /// a whole name sequence.
    pub fn sanitize(&self, raw: &str, index: usize) -> String {
        let trimmed = raw.trim();

        let mut name: String = trimmed
            .chars()
            .map(|c| if is_ident_char(c) { c } else { '_' })
            .collect();

        if name != trimmed {
            tracing::debug!(index, raw, name = %name, "Replaced invalid characters");
        }

        if name.chars().next().is_some_and(char::is_numeric) {
            name.insert(0, '_');
            tracing::debug!(index, name = %name, "Prefixed leading digit");
        }

        if name.is_empty() || self.reserved.contains(&name) {
            let placeholder = placeholder(index);
            tracing::debug!(
                index,
                rejected = %name,
                placeholder = %placeholder,
                "Empty or reserved name replaced"
            );
            name = placeholder;
        }

        name
    }

    /// Sanitize every name and make the results unique.
    pub fn sanitize_all<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::with_capacity(names.len());
        let mut out = Vec::with_capacity(names.len());

        for (index, raw) in names.iter().enumerate() {
            let base = self.sanitize(raw.as_ref(), index);
            let name = if seen.contains(&base) {
                let unique = disambiguate(&base, index, &seen);
                tracing::debug!(index, duplicate = %base, name = %unique, "Disambiguated duplicate name");
                unique
            } else {
                base
            };
            seen.insert(name.clone());
            out.push(name);
        }

        out
    }

    /// Whether `name` is a usable field name under this sanitizer's table.
    pub fn is_identifier(&self, name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            None => false,
            Some(first) if first.is_numeric() || !is_ident_char(first) => false,
            Some(_) => chars.all(is_ident_char) && !self.reserved.contains(name),
        }
    }
}

/// The positional placeholder for an unusable name, e.g. `field_3`.
pub fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}_{index}")
}

fn is_ident_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

fn disambiguate(base: &str, index: usize, seen: &HashSet<String>) -> String {
    let candidate = format!("{base}_{index}");
    if !seen.contains(&candidate) {
        return candidate;
    }
    let mut n = 1usize;
    loop {
        let next = format!("{candidate}_{n}");
        if !seen.contains(&next) {
            return next;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn python() -> Sanitizer {
        Sanitizer::new(ReservedWords::Python)
    }

    #[test]
    fn spaces_become_underscores() {
        assert_eq!(python().sanitize("sports team", 2), "sports_team");
    }

    #[test]
    fn surrounding_whitespace_is_stripped() {
        assert_eq!(python().sanitize("  season \t", 1), "season");
    }

    #[test]
    fn punctuation_becomes_underscores() {
        assert_eq!(python().sanitize("e-mail address!", 0), "e_mail_address_");
        assert_eq!(python().sanitize("a.b/c", 0), "a_b_c");
    }

    #[test]
    fn leading_digit_gets_prefixed() {
        assert_eq!(python().sanitize("1st", 0), "_1st");
        assert_eq!(python().sanitize("42", 0), "_42");
    }

    #[test]
    fn unicode_letters_are_kept() {
        assert_eq!(python().sanitize("café", 0), "café");
        assert_eq!(python().sanitize("名前", 0), "名前");
    }

    #[test]
    fn empty_name_becomes_placeholder() {
        assert_eq!(python().sanitize("", 4), "field_4");
        assert_eq!(python().sanitize("   ", 0), "field_0");
    }

    #[test]
    fn reserved_name_becomes_placeholder() {
        assert_eq!(python().sanitize("class", 1), "field_1");
        assert_eq!(python().sanitize(" None ", 0), "field_0");
        // Not a Python keyword
        assert_eq!(python().sanitize("fn", 0), "fn");
        assert_eq!(Sanitizer::new(ReservedWords::Rust).sanitize("fn", 0), "field_0");
    }

    #[test]
    fn only_punctuation_is_not_empty() {
        // "!!" becomes "__", which is a legal identifier
        assert_eq!(python().sanitize("!!", 0), "__");
    }

    #[test]
    fn duplicates_get_index_suffix() {
        let names = python().sanitize_all(&["name", "name", "name"]);
        assert_eq!(names, vec!["name", "name_1", "name_2"]);
    }

    #[test]
    fn duplicates_after_sanitization_are_disambiguated() {
        let names = python().sanitize_all(&["first name", "first-name", "first_name"]);
        assert_eq!(names, vec!["first_name", "first_name_1", "first_name_2"]);
    }

    #[test]
    fn suffix_collision_keeps_counting() {
        let names = python().sanitize_all(&["a", "a_1", "a"]);
        assert_eq!(names, vec!["a", "a_1", "a_2"]);

        let names = python().sanitize_all(&["a_1", "a", "a"]);
        assert_eq!(names, vec!["a_1", "a", "a_2"]);

        let names = python().sanitize_all(&["a", "a_1", "a_1"]);
        assert_eq!(names, vec!["a", "a_1", "a_1_2"]);
    }

    #[test]
    fn placeholder_collision_is_disambiguated() {
        let names = python().sanitize_all(&["field_1", "class"]);
        assert_eq!(names, vec!["field_1", "field_1_1"]);
    }

    #[test]
    fn sanitize_all_is_idempotent_on_examples() {
        let raw = ["food", "season", "sports team", "1st", "", "class", "food"];
        let once = python().sanitize_all(&raw);
        let twice = python().sanitize_all(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn is_identifier_rules() {
        let s = python();
        assert!(s.is_identifier("food"));
        assert!(s.is_identifier("_1st"));
        assert!(s.is_identifier("_"));
        assert!(!s.is_identifier(""));
        assert!(!s.is_identifier("1st"));
        assert!(!s.is_identifier("sports team"));
        assert!(!s.is_identifier("class"));
        assert!(!Sanitizer::new(ReservedWords::Rust).is_identifier("_"));
    }

    #[test]
    fn every_output_is_an_identifier() {
        let s = python();
        for raw in ["", " ", "1", "a b", "for", "ß", "--", "9lives", "x"] {
            let name = s.sanitize(raw, 7);
            assert!(s.is_identifier(&name), "{raw:?} -> {name:?}");
        }
    }
}
