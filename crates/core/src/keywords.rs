//! Reserved-word tables consulted by the sanitizer.
//!
//! Tables are static so the sanitizer never depends on runtime introspection
//! of any language. Pick one with [`ReservedWords`].

use serde::{Deserialize, Serialize};

/// Python 3 hard keywords.
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Rust strict and reserved keywords (2024 edition), plus the lone underscore.
pub const RUST_KEYWORDS: &[&str] = &[
    "_", "Self", "abstract", "as", "async", "await", "become", "box", "break", "const",
    "continue", "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for",
    "gen", "if", "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut",
    "override", "priv", "pub", "ref", "return", "self", "static", "struct", "super", "trait",
    "true", "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while",
    "yield",
];

/// Which reserved-word table field names are checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservedWords {
    #[default]
    Python,
    Rust,
}

impl ReservedWords {
    /// The static table backing this selection.
    pub fn table(self) -> &'static [&'static str] {
        match self {
            Self::Python => PYTHON_KEYWORDS,
            Self::Rust => RUST_KEYWORDS,
        }
    }

    /// Keywords are case-sensitive: `None` is reserved, `none` is not.
    pub fn contains(self, word: &str) -> bool {
        self.table().contains(&word)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Rust => "rust",
        }
    }
}

impl std::str::FromStr for ReservedWords {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "python" => Ok(Self::Python),
            "rust" => Ok(Self::Rust),
            other => Err(format!(
                "unknown reserved word table '{other}' (expected 'python' or 'rust')"
            )),
        }
    }
}

impl std::fmt::Display for ReservedWords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_table_is_case_sensitive() {
        assert!(ReservedWords::Python.contains("None"));
        assert!(ReservedWords::Python.contains("class"));
        assert!(!ReservedWords::Python.contains("none"));
        assert!(!ReservedWords::Python.contains("fn"));
    }

    #[test]
    fn rust_table_covers_reserved_words() {
        assert!(ReservedWords::Rust.contains("fn"));
        assert!(ReservedWords::Rust.contains("typeof"));
        assert!(ReservedWords::Rust.contains("_"));
        assert!(!ReservedWords::Rust.contains("class"));
    }

    #[test]
    fn parses_from_config_strings() {
        assert_eq!("Python".parse::<ReservedWords>(), Ok(ReservedWords::Python));
        assert_eq!(" rust ".parse::<ReservedWords>(), Ok(ReservedWords::Rust));
        assert!("cobol".parse::<ReservedWords>().is_err());
    }

    #[test]
    fn default_is_python() {
        assert_eq!(ReservedWords::default(), ReservedWords::Python);
        assert_eq!(ReservedWords::default().to_string(), "python");
    }
}
