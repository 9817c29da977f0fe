pub mod encoding;
pub mod indent;
pub mod trim;

pub use encoding::{decode_utf8, encode_utf8};
pub use indent::{indent, indent_lines, IndentKind};
pub use trim::trim_trailing_spaces_per_line;
