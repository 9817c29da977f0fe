pub mod letters;
pub mod tokenizer;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use letters::{capitalize_first_letter, lowercase_first_letter};
pub use tokenizer::tokenize;

/// Target naming convention.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    #[value(alias = "kebab-case")]
    Kebab,
    #[value(alias = "snake_case")]
    Snake,
    #[value(aliases = ["dot", "dot.case"])]
    Dots,
    #[default]
    #[value(alias = "camelcase")]
    Camel,
}

impl Convention {
    pub const ALL: [Convention; 4] = [
        Convention::Kebab,
        Convention::Snake,
        Convention::Dots,
        Convention::Camel,
    ];

    /// Glyph placed between words, `None` for camelCase.
    pub fn separator(self) -> Option<char> {
        match self {
            Convention::Kebab => Some('-'),
            Convention::Snake => Some('_'),
            Convention::Dots => Some('.'),
            Convention::Camel => None,
        }
    }
}

impl FromStr for Convention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kebab" | "kebab-case" => Ok(Convention::Kebab),
            "snake" | "snake_case" => Ok(Convention::Snake),
            "dots" | "dot" | "dot.case" => Ok(Convention::Dots),
            "camel" | "camelcase" => Ok(Convention::Camel),
            _ => Err(format!("Unknown convention: {}", s)),
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convention::Kebab => write!(f, "kebab"),
            Convention::Snake => write!(f, "snake"),
            Convention::Dots => write!(f, "dots"),
            Convention::Camel => write!(f, "camel"),
        }
    }
}

/// Join tokens under `convention`.
///
/// Separated conventions lower-case every token. camelCase lower-cases the
/// first letter of the first token and capitalizes every later token, except
/// that a token following a digit is written as the tokenizer produced it.
pub fn render<S: AsRef<str>>(tokens: &[S], convention: Convention) -> String {
    match convention.separator() {
        Some(separator) => render_separated(tokens, separator),
        None => render_camel(tokens),
    }
}

fn render_separated<S: AsRef<str>>(tokens: &[S], separator: char) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(&token.as_ref().to_ascii_lowercase());
    }
    out
}

fn render_camel<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        if i == 0 {
            out.push_str(&lowercase_first_letter(token));
        } else if out.ends_with(|c: char| c.is_ascii_digit()) {
            out.push_str(token);
        } else {
            out.push_str(&capitalize_first_letter(token));
        }
    }
    out
}

/// Convert `s` to `convention`.
pub fn to_case(s: &str, convention: Convention) -> String {
    render(&tokenize(s), convention)
}

pub fn to_camel_case(s: &str) -> String {
    to_case(s, Convention::Camel)
}

pub fn to_kebab_case(s: &str) -> String {
    to_case(s, Convention::Kebab)
}

pub fn to_snake_case(s: &str) -> String {
    to_case(s, Convention::Snake)
}

pub fn to_dot_case(s: &str) -> String {
    to_case(s, Convention::Dots)
}
