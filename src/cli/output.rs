use crate::case::Convention;
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tokenization {
    pub input: String,
    pub tokens: Vec<String>,
}

#[derive(Debug, Serialize)]
struct JsonConversions<'a> {
    convention: Convention,
    conversions: &'a [Conversion],
}

#[derive(Debug, Serialize)]
struct JsonText<'a> {
    text: &'a str,
}

/// One converted identifier per line, or a JSON document.
pub fn format_conversions(
    conversions: &[Conversion],
    convention: Convention,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(conversions
            .iter()
            .map(|c| format!("{}\n", c.output))
            .collect()),
        OutputFormat::Json => {
            let output = JsonConversions {
                convention,
                conversions,
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
        }
    }
}

pub fn format_tokenizations(
    tokenizations: &[Tokenization],
    format: OutputFormat,
    colored_output: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(tokenizations
            .iter()
            .map(|t| format_tokenization_line(t, colored_output))
            .collect()),
        OutputFormat::Json => Ok(format!(
            "{}\n",
            serde_json::to_string_pretty(tokenizations)?
        )),
    }
}

fn format_tokenization_line(tokenization: &Tokenization, colored_output: bool) -> String {
    if colored_output {
        let tokens = tokenization
            .tokens
            .iter()
            .map(|t| t.green().to_string())
            .collect::<Vec<_>>()
            .join(&", ".dimmed().to_string());
        format!(
            "{} {} [{}]\n",
            tokenization.input.bold(),
            "→".dimmed(),
            tokens
        )
    } else {
        format!(
            "{} → [{}]\n",
            tokenization.input,
            tokenization.tokens.join(", ")
        )
    }
}

/// Reformatted text is written as-is in text mode.
pub fn format_text(text: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text.to_string()),
        OutputFormat::Json => Ok(format!(
            "{}\n",
            serde_json::to_string_pretty(&JsonText { text })?
        )),
    }
}

pub fn print_error(message: &str, colored: bool) {
    if colored {
        eprintln!("{} {}", "error:".red().bold(), message);
    } else {
        eprintln!("error: {}", message);
    }
}
