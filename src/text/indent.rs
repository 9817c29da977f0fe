use serde::{Deserialize, Serialize};

/// Unit of indentation prepended to each non-empty line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentKind {
    /// `n` tab characters.
    Tabs(usize),
    /// `width` spaces, repeated `times` times.
    Spaces { width: usize, times: usize },
}

impl Default for IndentKind {
    fn default() -> Self {
        IndentKind::Spaces { width: 2, times: 1 }
    }
}

impl IndentKind {
    pub fn indentation(&self) -> String {
        match *self {
            IndentKind::Tabs(n) => "\t".repeat(n),
            IndentKind::Spaces { width, times } => " ".repeat(width * times),
        }
    }
}

/// Prefix every non-empty line of `text` with `kind`'s indentation.
///
/// Empty lines are left untouched, or dropped entirely when
/// `omit_empty_lines` is set.
pub fn indent(text: &str, kind: IndentKind, omit_empty_lines: bool) -> String {
    let lines: Vec<&str> = if omit_empty_lines {
        text.split('\n').filter(|line| !line.is_empty()).collect()
    } else {
        text.split('\n').collect()
    };
    indent_lines(&lines, kind)
}

/// Prefix each non-empty entry of `lines` and join them with `\n`.
pub fn indent_lines<S: AsRef<str>>(lines: &[S], kind: IndentKind) -> String {
    let indentation = kind.indentation();
    lines
        .iter()
        .map(|line| {
            let line = line.as_ref();
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", indentation, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
