//! Values typed on the command line.
//!
//! Arguments arrive as strings; integers, floats, and booleans are
//! recognised so a record prints `age=45` rather than `age="45"`. A number
//! is only recognised when it formats back to exactly the typed text, so
//! `007`, `+5`, `1.0`, and `1e3` stay text and keep their spelling.

use std::fmt;

use serde::Serialize;

#[derive(Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CliValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl CliValue {
    pub fn parse(raw: &str) -> Self {
        if let Ok(i) = raw.parse::<i64>()
            && i.to_string() == raw
        {
            return Self::Int(i);
        }
        if let Ok(f) = raw.parse::<f64>()
            && f.is_finite()
            && f.to_string() == raw
        {
            return Self::Float(f);
        }
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => Self::Text(raw.to_string()),
        }
    }
}

/// The plain form, used in name prompts.
impl fmt::Display for CliValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Literal form: text is quoted, everything else is bare.
impl fmt::Debug for CliValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}"),
            other => fmt::Display::fmt(other, f),
        }
    }
}
