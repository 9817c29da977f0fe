use unicode_segmentation::UnicodeSegmentation;

/// Upper-case the first grapheme of `s`, leaving the rest untouched.
pub fn capitalize_first_letter(s: &str) -> String {
    let mut graphemes = s.graphemes(true);
    match graphemes.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), graphemes.as_str()),
        None => String::new(),
    }
}

/// Lower-case the first grapheme of `s`, leaving the rest untouched.
pub fn lowercase_first_letter(s: &str) -> String {
    let mut graphemes = s.graphemes(true);
    match graphemes.next() {
        Some(first) => format!("{}{}", first.to_lowercase(), graphemes.as_str()),
        None => String::new(),
    }
}
