pub mod case;
pub mod cli;
pub mod config;
pub mod error;
pub mod text;

pub use case::{
    render, to_camel_case, to_case, to_dot_case, to_kebab_case, to_snake_case, tokenize,
    Convention,
};
pub use config::Config;
pub use error::{DecodeError, EncodeError};
pub use text::{
    decode_utf8, encode_utf8, indent, indent_lines, trim_trailing_spaces_per_line, IndentKind,
};
